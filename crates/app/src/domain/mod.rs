//! Storefront Domain Concerns

pub mod carts;
pub mod checkout;
pub mod editor;
pub mod orders;
pub mod products;
