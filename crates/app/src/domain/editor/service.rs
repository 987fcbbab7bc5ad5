//! Editor service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;
use storefront::{
    currency::StoreCurrency,
    editor::{LineItemEditor, LineItemRow},
    orders::{OrderItemDraft, OrderItemUuid},
    products::{PriceLookup, PriceTable, ProductUuid},
};

use crate::domain::{
    editor::errors::EditorServiceError,
    orders::{
        OrdersService,
        models::{Order, OrderUuid},
    },
    products::ProductsService,
};

/// Rows priced from the current catalog, with their grand total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecomputedItems {
    pub rows: Vec<LineItemRow>,
    pub grand_total: Decimal,
    pub formatted_grand_total: String,
}

/// Prices editor rows against the catalog and saves them onto orders.
pub struct CatalogEditorService {
    products: Arc<dyn ProductsService>,
    orders: Arc<dyn OrdersService>,
    currency: StoreCurrency,
}

impl CatalogEditorService {
    #[must_use]
    pub fn new(
        products: Arc<dyn ProductsService>,
        orders: Arc<dyn OrdersService>,
        currency: StoreCurrency,
    ) -> Self {
        Self {
            products,
            orders,
            currency,
        }
    }

    async fn prices_for(&self, rows: &[LineItemRow]) -> Result<PriceTable, EditorServiceError> {
        let products: Vec<ProductUuid> = rows.iter().filter_map(|row| row.product).collect();

        Ok(self.products.find_prices(products).await?)
    }
}

impl fmt::Debug for CatalogEditorService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogEditorService")
            .field("currency", &self.currency)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl EditorService for CatalogEditorService {
    async fn recompute(
        &self,
        rows: Vec<LineItemRow>,
    ) -> Result<RecomputedItems, EditorServiceError> {
        let prices = self.prices_for(&rows).await?;
        let editor = LineItemEditor::with_rows(rows, &prices)?;

        Ok(RecomputedItems {
            grand_total: editor.grand_total(),
            formatted_grand_total: editor.formatted_grand_total(self.currency),
            rows: editor.into_rows(),
        })
    }

    async fn save_items(
        &self,
        order: OrderUuid,
        rows: Vec<LineItemRow>,
    ) -> Result<Order, EditorServiceError> {
        let prices = self.prices_for(&rows).await?;

        for (index, row) in rows.iter().enumerate() {
            let product = row
                .product
                .ok_or(EditorServiceError::MissingProduct(index))?;

            if prices.unit_price(product).is_none() {
                return Err(EditorServiceError::UnknownProduct(product));
            }
        }

        let editor = LineItemEditor::with_rows(rows, &prices)?;
        let grand_total = editor.grand_total();

        let items = editor
            .into_rows()
            .into_iter()
            .filter_map(|row| {
                row.product.map(|product| OrderItemDraft {
                    uuid: OrderItemUuid::new(),
                    product,
                    quantity: row.quantity,
                    unit_amount: row.unit_amount,
                    total_amount: row.total_amount,
                })
            })
            .collect();

        Ok(self.orders.replace_items(order, items, grand_total).await?)
    }
}

#[automock]
#[async_trait]
pub trait EditorService: Send + Sync {
    /// Re-price rows from the catalog and total them. Nothing is stored.
    async fn recompute(&self, rows: Vec<LineItemRow>)
    -> Result<RecomputedItems, EditorServiceError>;

    /// Re-price rows and store them as the order's items, replacing the old ones.
    async fn save_items(
        &self,
        order: OrderUuid,
        rows: Vec<LineItemRow>,
    ) -> Result<Order, EditorServiceError>;
}
