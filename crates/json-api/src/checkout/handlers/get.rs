//! Checkout Summary Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};

use crate::{cart::CartResponse, extensions::*, state::State};

/// Checkout Summary Handler
///
/// Returns the cart about to be ordered. An empty cart redirects to the
/// product listing.
#[endpoint(
    tags("checkout"),
    summary = "Checkout Summary",
    responses(
        (status_code = StatusCode::OK, description = "Cart to be ordered", body = CartResponse),
        (status_code = StatusCode::SEE_OTHER, description = "Cart is empty"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Customer not identified"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    depot.customer_or_401()?;

    let cart = state.cart_cookie.load(req);

    if cart.is_empty() {
        res.add_header(LOCATION, "/products", true)
            .or_500("failed to set location header")?
            .status_code(StatusCode::SEE_OTHER);

        return Ok(());
    }

    let summary = CartResponse::from_cart(&cart, state.currency).or_500("failed to total cart")?;

    res.render(Json(summary));

    Ok(())
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{TestApp, as_customer, cart_with, catalog_product, with_cart};

    use super::*;

    fn make_service() -> Service {
        TestApp::new().customer_service(Router::with_path("checkout").get(handler))
    }

    #[tokio::test]
    async fn test_empty_cart_redirects_to_products() -> TestResult {
        let res = as_customer(TestClient::get("http://example.com/checkout"))
            .send(&make_service())
            .await;

        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::SEE_OTHER));
        assert_eq!(location, Some("/products"));

        Ok(())
    }

    #[tokio::test]
    async fn test_summary_lists_cart() -> TestResult {
        let cart = cart_with(&[(&catalog_product("Keyboard", 10), 2)])?;

        let mut res = with_cart(as_customer(TestClient::get("http://example.com/checkout")), &cart)
            .send(&make_service())
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.grand_total, "20");

        Ok(())
    }

    #[tokio::test]
    async fn test_anonymous_checkout_returns_401() -> TestResult {
        let res = TestClient::get("http://example.com/checkout")
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
