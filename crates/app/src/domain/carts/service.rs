//! Carts service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use storefront::{
    cart::Cart,
    products::{CatalogProduct, ProductUuid},
};
use tracing::debug;

use crate::domain::{carts::errors::CartsServiceError, products::ProductsService};

/// Cart operations that need the product catalog.
///
/// Only adding a product that is not yet in the cart touches the catalog; all
/// other cart operations are pure and live on [`Cart`].
pub struct CatalogCartsService {
    products: Arc<dyn ProductsService>,
}

impl CatalogCartsService {
    #[must_use]
    pub fn new(products: Arc<dyn ProductsService>) -> Self {
        Self { products }
    }

    async fn resolve(
        &self,
        cart: &Cart,
        product: ProductUuid,
    ) -> Result<Option<CatalogProduct>, CartsServiceError> {
        if cart.contains(product) {
            return Ok(None);
        }

        let found = self.products.find_catalog_product(product).await?;

        if found.is_none() {
            debug!(%product, "ignoring unknown product");
        }

        Ok(found)
    }
}

impl fmt::Debug for CatalogCartsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogCartsService").finish_non_exhaustive()
    }
}

#[async_trait]
impl CartsService for CatalogCartsService {
    async fn add_item(&self, mut cart: Cart, product: ProductUuid) -> Result<Cart, CartsServiceError> {
        let found = self.resolve(&cart, product).await?;

        cart.add_item(product, || found)?;

        Ok(cart)
    }

    async fn add_item_with_quantity(
        &self,
        mut cart: Cart,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<Cart, CartsServiceError> {
        let found = self.resolve(&cart, product).await?;

        cart.add_item_with_quantity(product, quantity, || found)?;

        Ok(cart)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Add one unit of a product, looking it up when the cart has no line for it yet.
    async fn add_item(&self, cart: Cart, product: ProductUuid) -> Result<Cart, CartsServiceError>;

    /// Add a product with an explicit quantity, replacing the quantity of an existing line.
    async fn add_item_with_quantity(
        &self,
        cart: Cart,
        product: ProductUuid,
        quantity: u32,
    ) -> Result<Cart, CartsServiceError>;
}
