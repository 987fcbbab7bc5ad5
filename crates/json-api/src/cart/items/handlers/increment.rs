//! Increment Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use storefront::products::ProductUuid;
use uuid::Uuid;

use crate::{
    cart::{CartResponse, errors::cart_error_into_status_error, save_and_render},
    extensions::*,
    state::State,
};

/// Increment Cart Item Handler
#[endpoint(
    tags("cart"),
    summary = "Increment Item Quantity",
    responses(
        (status_code = StatusCode::OK, description = "Updated cart"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "cart.items.increment",
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

    cart.increment_quantity(ProductUuid::from(product.into_inner()))
        .map_err(cart_error_into_status_error)?;

    save_and_render(state, res, &cart, "increment")
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{TestApp, cart_with, catalog_product, with_cart};

    use super::*;

    #[tokio::test]
    async fn test_increment_adds_one_unit() -> TestResult {
        let keyboard = catalog_product("Keyboard", 10);
        let cart = cart_with(&[(&keyboard, 2)])?;

        let mut res = with_cart(
            TestClient::post(format!(
                "http://example.com/cart/items/{}/increment",
                keyboard.uuid
            )),
            &cart,
        )
        .send(&TestApp::new().service(
            Router::with_path("cart/items/{product}/increment").post(handler),
        ))
        .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.item_count, 3);
        assert_eq!(body.grand_total, "30");

        Ok(())
    }
}
