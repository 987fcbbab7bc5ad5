//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::AlreadyExists
        | ProductsServiceError::InvalidReference
        | ProductsServiceError::MissingRequiredData
        | ProductsServiceError::InvalidData => {
            error!("unexpected product error: {error}");

            StatusError::internal_server_error()
        }
        ProductsServiceError::Sql(source) => {
            error!("failed to load products: {source}");

            StatusError::internal_server_error()
        }
    }
}
