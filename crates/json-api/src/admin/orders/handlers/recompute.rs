//! Recompute Line Items Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    admin::orders::{
        errors::into_status_error,
        models::{LineItemsRequest, RecomputedItemsResponse},
    },
    extensions::*,
    state::State,
};

/// Recompute Line Items Handler
///
/// Prices the rows of an order form from the current catalog and totals
/// them. Nothing is stored.
#[endpoint(
    tags("admin"),
    summary = "Recompute Order Line Items",
    responses(
        (status_code = StatusCode::OK, description = "Priced rows"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid quantity or duplicate product"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<LineItemsRequest>,
    depot: &mut Depot,
) -> Result<Json<RecomputedItemsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let recomputed = state
        .app
        .editor
        .recompute(json.into_inner().into_rows())
        .await
        .map_err(into_status_error)?;

    Ok(Json(recomputed.into()))
}
