//! Editor service errors.

use storefront::{editor::EditorError, products::ProductUuid};
use thiserror::Error;

use crate::domain::{orders::OrdersServiceError, products::ProductsServiceError};

#[derive(Debug, Error)]
pub enum EditorServiceError {
    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error("row {0} has no product selected")]
    MissingProduct(usize),

    #[error("product {0} does not exist")]
    UnknownProduct(ProductUuid),

    #[error("price lookup failed")]
    Products(#[from] ProductsServiceError),

    #[error("failed to save order items")]
    Orders(#[from] OrdersServiceError),
}
