//! Place Order Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};
use serde::{Deserialize, Serialize};
use storefront::checkout::CheckoutForm;

use crate::{
    checkout::errors::into_status_error, extensions::*, observability::record_order_placed,
    orders::models::OrderResponse, state::State,
};

/// Where the storefront sends the customer after a successful checkout.
pub(crate) const SUCCESS_LOCATION: &str = "/success";

/// Place Order Request
///
/// Omitted fields are treated as blank and reported as missing.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct PlaceOrderRequest {
    /// Recipient first name
    pub first_name: String,

    /// Recipient last name
    pub last_name: String,

    /// Contact phone number
    pub phone: String,

    /// Street and house number
    pub street_address: String,

    /// City
    pub city: String,

    /// State or province
    pub state: String,

    /// Postal code
    pub zip_code: String,

    /// `stripe` or `cod`
    pub payment_method: String,
}

impl From<PlaceOrderRequest> for CheckoutForm {
    fn from(request: PlaceOrderRequest) -> Self {
        CheckoutForm {
            first_name: request.first_name,
            last_name: request.last_name,
            phone: request.phone,
            street_address: request.street_address,
            city: request.city,
            state: request.state,
            zip_code: request.zip_code,
            payment_method: request.payment_method,
        }
    }
}

/// Place Order Handler
///
/// Turns the cart into an order and empties the cart. On failure the cart is
/// left as it was.
#[endpoint(
    tags("checkout"),
    summary = "Place Order",
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing fields, unknown payment method or empty cart"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Customer not identified"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "checkout.create",
    skip(req, json, depot, res),
    fields(customer_uuid = tracing::field::Empty, order_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    json: JsonBody<PlaceOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_or_401()?.clone();

    let span = tracing::Span::current();

    span.record("customer_uuid", tracing::field::display(customer.uuid));

    let cart = state.cart_cookie.load(req);

    let order = state
        .app
        .checkout
        .place_order(customer, cart, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    span.record("order_uuid", tracing::field::display(order.uuid));

    state.cart_cookie.clear(res);
    record_order_placed();

    tracing::info!(order_uuid = %order.uuid, "placed order");

    res.add_header(LOCATION, SUCCESS_LOCATION, true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}
