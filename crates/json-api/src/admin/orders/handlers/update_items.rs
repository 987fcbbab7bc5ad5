//! Save Line Items Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    admin::orders::{errors::into_status_error, models::LineItemsRequest},
    extensions::*,
    orders::models::OrderResponse,
    state::State,
};

/// Save Line Items Handler
///
/// Replaces the order's items with the submitted rows. Prices and the grand
/// total are taken from the current catalog.
#[endpoint(
    tags("admin"),
    summary = "Save Order Line Items",
    responses(
        (status_code = StatusCode::OK, description = "Updated order"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid rows"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "admin.orders.items.update",
    skip(order, json, depot),
    fields(order_uuid = %*order, row_count = json.rows.len()),
    err
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<LineItemsRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = state
        .app
        .editor
        .save_items(order.into_inner().into(), json.into_inner().into_rows())
        .await
        .map_err(into_status_error)?;

    tracing::info!(order_uuid = %order.uuid, grand_total = %order.grand_total, "saved order items");

    Ok(Json(order.into()))
}
