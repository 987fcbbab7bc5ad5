//! Storefront
//!
//! Domain logic for a small online store: the shopping cart, checkout validation
//! and the staff-facing order line-item editor. Everything here is pure; storage
//! and transport live in the application crates.

pub mod cart;
pub mod checkout;
pub mod currency;
pub mod editor;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod uuids;
