//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use storefront::products::ProductUuid;
use uuid::Uuid;

use crate::{
    cart::{CartResponse, save_and_render},
    extensions::*,
    state::State,
};

/// Remove Cart Item Handler
///
/// Removes the product's line. Products not in the cart leave it unchanged.
#[endpoint(
    tags("cart"),
    summary = "Remove Item from Cart",
    responses(
        (status_code = StatusCode::OK, description = "Updated cart"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.items.delete",
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

    cart.remove_item(ProductUuid::from(product.into_inner()));

    save_and_render(state, res, &cart, "remove")
}
