//! Staff order administration.
//!
//! Access control for these routes belongs to the fronting layer.

pub(crate) mod orders;
