//! Cart

mod cookie;
pub(crate) mod errors;
pub(crate) mod handlers;
pub(crate) mod items;
pub(crate) mod models;

use salvo::prelude::{Json, Response, StatusError};
use storefront::cart::Cart;

use crate::{extensions::*, observability::record_cart_mutation, state::State};

pub(crate) use cookie::CartCookie;
pub(crate) use handlers::*;
pub(crate) use models::CartResponse;

#[cfg(test)]
pub(crate) use cookie::{decode_cart, encode_cart};

/// Write a changed cart back to its cookie and render it.
pub(crate) fn save_and_render(
    state: &State,
    res: &mut Response,
    cart: &Cart,
    operation: &str,
) -> Result<Json<CartResponse>, StatusError> {
    state
        .cart_cookie
        .store(res, cart)
        .or_500("failed to encode cart cookie")?;

    record_cart_mutation(operation);

    CartResponse::from_cart(cart, state.currency)
        .map(Json)
        .or_500("failed to total cart")
}
