//! Admin Order Line-Item Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use storefront::editor::LineItemRow;
use uuid::Uuid;

use storefront_app::domain::editor::RecomputedItems;

/// One edited row as submitted by the order form.
///
/// Amounts are always derived from the catalog, so only the product and
/// quantity are accepted.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LineItemRowRequest {
    /// Selected product, if any
    #[serde(default)]
    pub product_uuid: Option<Uuid>,

    /// Units, at least one
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

const fn default_quantity() -> u32 {
    1
}

impl From<LineItemRowRequest> for LineItemRow {
    fn from(request: LineItemRowRequest) -> Self {
        LineItemRow {
            product: request.product_uuid.map(Into::into),
            quantity: request.quantity,
            ..LineItemRow::default()
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LineItemsRequest {
    /// Rows in display order
    pub rows: Vec<LineItemRowRequest>,
}

impl LineItemsRequest {
    pub(crate) fn into_rows(self) -> Vec<LineItemRow> {
        self.rows.into_iter().map(Into::into).collect()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LineItemRowResponse {
    pub product_uuid: Option<Uuid>,
    pub quantity: u32,

    /// Current catalog price, zero when no known product is selected
    pub unit_amount: String,

    pub total_amount: String,
}

impl From<LineItemRow> for LineItemRowResponse {
    fn from(row: LineItemRow) -> Self {
        LineItemRowResponse {
            product_uuid: row.product.map(Into::into),
            quantity: row.quantity,
            unit_amount: row.unit_amount.to_string(),
            total_amount: row.total_amount.to_string(),
        }
    }
}

/// Re-priced rows with their grand total.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RecomputedItemsResponse {
    pub rows: Vec<LineItemRowResponse>,
    pub grand_total: String,
    pub formatted_grand_total: String,
}

impl From<RecomputedItems> for RecomputedItemsResponse {
    fn from(items: RecomputedItems) -> Self {
        RecomputedItemsResponse {
            rows: items.rows.into_iter().map(Into::into).collect(),
            grand_total: items.grand_total.to_string(),
            formatted_grand_total: items.formatted_grand_total,
        }
    }
}
