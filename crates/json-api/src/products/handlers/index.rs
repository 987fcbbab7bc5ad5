//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, products::models::ProductResponse, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The list of products
    pub products: Vec<ProductResponse>,
}

/// Product Index Handler
///
/// Returns the active products in the catalog.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .or_500("failed to fetch products")?;

    Ok(Json(ProductsResponse {
        products: products
            .into_iter()
            .map(|product| ProductResponse::new(product, state.currency))
            .collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::products::ProductsServiceError;

    use crate::test_helpers::{TestApp, catalog_product, make_product};

    use super::*;

    fn make_service(app: TestApp) -> Service {
        app.service(Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_200() -> TestResult {
        let keyboard = catalog_product("Keyboard", 150_000);
        let mouse = catalog_product("Mouse", 75_000);
        let products = vec![make_product(&keyboard), make_product(&mouse)];

        let mut app = TestApp::new();

        app.products
            .expect_list_products()
            .once()
            .return_once(move || Ok(products));

        let mut res = TestClient::get("http://example.com/products")
            .send(&make_service(app))
            .await;

        let body: ProductsResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.products.len(), 2);
        assert_eq!(
            body.products.first().map(|product| product.price.as_str()),
            Some("150000")
        );
        assert_eq!(
            body.products.first().map(|product| product.images.clone()),
            Some(vec!["keyboard.png".to_string()])
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_service_error_returns_500() -> TestResult {
        let mut app = TestApp::new();

        app.products
            .expect_list_products()
            .once()
            .return_once(|| Err(ProductsServiceError::InvalidData));

        let res = TestClient::get("http://example.com/products")
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
