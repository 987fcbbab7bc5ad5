//! Cart Errors

use salvo::http::StatusError;
use storefront::cart::CartError;
use tracing::error;

use storefront_app::domain::carts::CartsServiceError;

use crate::extensions::capitalised_brief;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::Cart(CartError::InvalidQuantity(quantity)) => {
            StatusError::bad_request().brief(format!("Quantity must be at least 1, got {quantity}"))
        }
        CartsServiceError::Cart(CartError::Pricing(source)) if source.is_limit() => {
            StatusError::bad_request().brief(capitalised_brief(&source))
        }
        CartsServiceError::Cart(CartError::Pricing(source)) => {
            error!("failed to price cart: {source}");

            StatusError::internal_server_error()
        }
        CartsServiceError::Products(source) => {
            error!("failed to look up product: {source}");

            StatusError::internal_server_error()
        }
    }
}

/// Map errors from the pure cart operations.
pub(crate) fn cart_error_into_status_error(error: CartError) -> StatusError {
    into_status_error(CartsServiceError::Cart(error))
}
