//! Get Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{cart::CartResponse, extensions::*, state::State};

/// Get Cart Handler
///
/// Returns the lines held in the cart cookie. A missing or unreadable cookie
/// is an empty cart.
#[endpoint(
    tags("cart"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart contents"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let cart = state.cart_cookie.load(req);

    CartResponse::from_cart(&cart, state.currency)
        .map(Json)
        .or_500("failed to total cart")
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{TestApp, cart_with, catalog_product, with_cart};

    use super::*;

    fn make_service() -> Service {
        TestApp::new().service(Router::with_path("cart").get(handler))
    }

    #[tokio::test]
    async fn test_get_cart_totals_lines() -> TestResult {
        let keyboard = catalog_product("Keyboard", 10);
        let mouse = catalog_product("Mouse", 5);
        let cart = cart_with(&[(&keyboard, 2), (&mouse, 1)])?;

        let mut res = with_cart(TestClient::get("http://example.com/cart"), &cart)
            .send(&make_service())
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.line_count, 2);
        assert_eq!(body.item_count, 3);
        assert_eq!(body.grand_total, "25");
        assert_eq!(
            body.items.first().map(|line| line.product_uuid),
            Some(keyboard.uuid.into_uuid())
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_cookie_is_empty_cart() -> TestResult {
        let mut res = TestClient::get("http://example.com/cart")
            .send(&make_service())
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.items.is_empty(), "expected no lines");
        assert_eq!(body.grand_total, "0");

        Ok(())
    }

    #[tokio::test]
    async fn test_corrupt_cookie_is_empty_cart() -> TestResult {
        let mut res = TestClient::get("http://example.com/cart")
            .add_header("cookie", "cart_items=not-a-cart!!", true)
            .send(&make_service())
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.line_count, 0);

        Ok(())
    }
}
