//! Update Order Status Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::orders::models::{OrderStatus, PaymentStatus, StatusUpdate};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::OrderResponse},
    state::State,
};

/// Update Order Status Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateOrderStatusRequest {
    /// `new`, `processing`, `shipped`, `delivered` or `canceled`
    pub status: String,

    /// `pending`, `paid` or `failed`
    pub payment_status: String,
}

impl TryFrom<UpdateOrderStatusRequest> for StatusUpdate {
    type Error = StatusError;

    fn try_from(request: UpdateOrderStatusRequest) -> Result<Self, Self::Error> {
        Ok(StatusUpdate {
            status: request
                .status
                .parse::<OrderStatus>()
                .or_400("Invalid status")?,
            payment_status: request
                .payment_status
                .parse::<PaymentStatus>()
                .or_400("Invalid payment status")?,
        })
    }
}

/// Update Order Status Handler
#[endpoint(
    tags("admin"),
    summary = "Update Order Status",
    responses(
        (status_code = StatusCode::OK, description = "Updated order"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "admin.orders.status.update",
    skip(order, json, depot),
    fields(order_uuid = %*order),
    err
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<UpdateOrderStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let update = StatusUpdate::try_from(json.into_inner())?;

    let order = state
        .app
        .orders
        .update_status(order.into_inner().into(), update)
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}
