//! Checkout service errors.

use storefront::checkout::CheckoutError;
use thiserror::Error;

use crate::domain::orders::OrdersServiceError;

#[derive(Debug, Error)]
pub enum CheckoutServiceError {
    #[error(transparent)]
    Invalid(#[from] CheckoutError),

    #[error("failed to place order")]
    Orders(#[from] OrdersServiceError),
}
