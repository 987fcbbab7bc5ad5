//! Decrement Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use storefront::products::ProductUuid;
use uuid::Uuid;

use crate::{
    cart::{CartResponse, errors::cart_error_into_status_error, save_and_render},
    extensions::*,
    state::State,
};

/// Decrement Cart Item Handler
///
/// Quantities never drop below one; use the remove endpoint to drop a line.
#[endpoint(
    tags("cart"),
    summary = "Decrement Item Quantity",
    responses(
        (status_code = StatusCode::OK, description = "Updated cart"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.items.decrement",
    skip(product, req, depot, res),
    fields(product_uuid = %*product),
    err
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let mut cart = state.cart_cookie.load(req);

    cart.decrement_quantity(ProductUuid::from(product.into_inner()))
        .map_err(cart_error_into_status_error)?;

    save_and_render(state, res, &cart, "decrement")
}
