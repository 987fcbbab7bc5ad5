//! Order Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::OrderSummaryResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    /// The customer's orders, newest first
    pub orders: Vec<OrderSummaryResponse>,
}

/// Order Index Handler
///
/// Returns the signed-in customer's orders.
#[endpoint(
    tags("orders"),
    summary = "List My Orders",
    responses(
        (status_code = StatusCode::OK, description = "Customer orders"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Customer not identified"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_or_401()?;

    let orders = state
        .app
        .orders
        .list_orders(customer.uuid)
        .await
        .map_err(into_status_error)?;

    Ok(Json(OrdersResponse {
        orders: orders.into_iter().map(Into::into).collect(),
    }))
}
