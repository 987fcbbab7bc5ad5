//! Carts service errors.

use storefront::cart::CartError;
use thiserror::Error;

use crate::domain::products::ProductsServiceError;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error(transparent)]
    Cart(#[from] CartError),

    #[error("product lookup failed")]
    Products(#[from] ProductsServiceError),
}
