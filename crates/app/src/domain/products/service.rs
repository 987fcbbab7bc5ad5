//! Products service.

use async_trait::async_trait;
use mockall::automock;
use storefront::products::{CatalogProduct, PriceTable};

use crate::{
    database::Db,
    domain::products::{
        errors::ProductsServiceError,
        models::{NewProduct, Product, ProductUuid},
        repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn find_catalog_product(
        &self,
        product: ProductUuid,
    ) -> Result<Option<CatalogProduct>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let found = self.repository.find_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(found.as_ref().map(Product::to_catalog))
    }

    async fn find_prices(
        &self,
        products: Vec<ProductUuid>,
    ) -> Result<PriceTable, ProductsServiceError> {
        if products.is_empty() {
            return Ok(PriceTable::default());
        }

        let mut tx = self.db.begin().await?;

        let prices = self.repository.find_prices(&mut tx, &products).await?;

        tx.commit().await?;

        Ok(prices)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_product(&mut tx, &product).await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all active products.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single active product.
    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError>;

    /// Look up the cart snapshot of an active product. Inactive and unknown
    /// products are both `None`, so the cart ignores them.
    async fn find_catalog_product(
        &self,
        product: ProductUuid,
    ) -> Result<Option<CatalogProduct>, ProductsServiceError>;

    /// Current prices for the given products. Unknown products are absent from the table.
    async fn find_prices(
        &self,
        products: Vec<ProductUuid>,
    ) -> Result<PriceTable, ProductsServiceError>;

    /// Creates a new product.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;
}
