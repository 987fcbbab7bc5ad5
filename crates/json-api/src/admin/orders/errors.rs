//! Admin Order Errors

use salvo::http::StatusError;
use storefront::editor::EditorError;
use tracing::error;

use storefront_app::domain::editor::EditorServiceError;

use crate::{extensions::capitalised_brief, orders::errors::into_status_error as order_status_error};

pub(crate) fn into_status_error(error: EditorServiceError) -> StatusError {
    match error {
        EditorServiceError::Editor(EditorError::Pricing(source)) if source.is_limit() => {
            StatusError::bad_request().brief(capitalised_brief(&source))
        }
        EditorServiceError::Editor(EditorError::Pricing(source)) => {
            error!("failed to total order items: {source}");

            StatusError::internal_server_error()
        }
        EditorServiceError::Editor(
            invalid @ (EditorError::RowNotFound(_)
            | EditorError::InvalidQuantity(_)
            | EditorError::DuplicateProduct(_)),
        ) => StatusError::bad_request().brief(invalid.to_string()),
        EditorServiceError::MissingProduct(_) | EditorServiceError::UnknownProduct(_) => {
            StatusError::bad_request().brief(error.to_string())
        }
        EditorServiceError::Products(source) => {
            error!("failed to look up prices: {source}");

            StatusError::internal_server_error()
        }
        EditorServiceError::Orders(source) => order_status_error(source),
    }
}
