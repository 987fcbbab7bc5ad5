//! Fixtures shared by service tests.

mod helpers;

pub(crate) use helpers::*;
