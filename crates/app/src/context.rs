//! App Context

use std::sync::Arc;

use storefront::currency::StoreCurrency;
use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        carts::{CartsService, CatalogCartsService},
        checkout::{CheckoutService, StoreCheckoutService},
        editor::{CatalogEditorService, EditorService},
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
    pub checkout: Arc<dyn CheckoutService>,
    pub editor: Arc<dyn EditorService>,
}

impl AppContext {
    /// Build application context on a pool of at most `max_connections`.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        max_connections: u32,
        currency: StoreCurrency,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url, max_connections)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_db(Db::new(pool), currency))
    }

    /// Wire every service on top of one database handle.
    #[must_use]
    pub fn from_db(db: Db, currency: StoreCurrency) -> Self {
        let products: Arc<dyn ProductsService> = Arc::new(PgProductsService::new(db.clone()));
        let orders: Arc<dyn OrdersService> = Arc::new(PgOrdersService::new(db));

        Self {
            carts: Arc::new(CatalogCartsService::new(Arc::clone(&products))),
            checkout: Arc::new(StoreCheckoutService::new(Arc::clone(&orders), currency)),
            editor: Arc::new(CatalogEditorService::new(
                Arc::clone(&products),
                Arc::clone(&orders),
                currency,
            )),
            products,
            orders,
        }
    }
}
