//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};
use serde::{Deserialize, Serialize};
use storefront::products::ProductUuid;
use uuid::Uuid;

use crate::{
    cart::{CartResponse, errors::into_status_error, save_and_render},
    extensions::*,
    state::State,
};

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddCartItemRequest {
    /// Product to add
    pub product_uuid: Uuid,

    /// Units to set. Omit to add a single unit.
    #[serde(default)]
    pub quantity: Option<u32>,
}

/// Add Cart Item Handler
///
/// Without a quantity one unit is added. With a quantity an existing line has
/// its quantity replaced. Unknown products leave the cart unchanged.
#[endpoint(
    tags("cart"),
    summary = "Add Item to Cart",
    responses(
        (status_code = StatusCode::OK, description = "Updated cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.items.create",
    skip(req, json, depot, res),
    fields(product_uuid = tracing::field::Empty, quantity = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();
    let product = ProductUuid::from(request.product_uuid);

    let span = tracing::Span::current();

    span.record("product_uuid", tracing::field::display(request.product_uuid));

    let cart = state.cart_cookie.load(req);

    let cart = match request.quantity {
        Some(quantity) => {
            span.record("quantity", quantity);

            state
                .app
                .carts
                .add_item_with_quantity(cart, product, quantity)
                .await
        }
        None => state.app.carts.add_item(cart, product).await,
    }
    .map_err(into_status_error)?;

    save_and_render(state, res, &cart, "add")
}
