//! Clear Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{extensions::*, observability::record_cart_mutation, state::State};

/// Clear Cart Handler
///
/// Empties the cart by expiring its cookie.
#[endpoint(
    tags("cart"),
    summary = "Clear Cart",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Cart cleared"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(name = "cart.clear", skip(depot, res), err)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state.cart_cookie.clear(res);
    record_cart_mutation("clear");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::{http::cookie::time::Duration, test::TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{TestApp, cart_with, catalog_product, with_cart};

    use super::*;

    #[tokio::test]
    async fn test_clear_expires_cookie() -> TestResult {
        let cart = cart_with(&[(&catalog_product("Keyboard", 10), 1)])?;

        let res = with_cart(TestClient::delete("http://example.com/cart"), &cart)
            .send(&TestApp::new().service(Router::with_path("cart").delete(handler)))
            .await;

        let cookie = res.cookie("cart_items");

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));
        assert_eq!(cookie.map(|cookie| cookie.value()), Some(""));
        assert_eq!(
            cookie.and_then(|cookie| cookie.max_age()),
            Some(Duration::ZERO)
        );

        Ok(())
    }
}
