//! Order Line-Item Editor
//!
//! Rows of an order being edited by staff. Each row holds a product, a
//! quantity, and the derived unit and line amounts. The editor keeps the
//! derived values and the grand total in step as rows change.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    currency::StoreCurrency,
    pricing::{PricingError, grand_total, line_total},
    products::{PriceLookup, ProductUuid},
};

/// Errors raised while editing line items.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    /// No row exists at the given index.
    #[error("row {0} not found")]
    RowNotFound(usize),

    /// Quantities must be at least one.
    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(u32),

    /// A product may only appear in one row.
    #[error("product {0} is already selected in another row")]
    DuplicateProduct(ProductUuid),

    /// Amount arithmetic failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// One editable order row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemRow {
    /// Selected product, if any
    pub product: Option<ProductUuid>,

    /// Units
    pub quantity: u32,

    /// Price per unit, derived from the selected product
    pub unit_amount: Decimal,

    /// `quantity × unit_amount`
    pub total_amount: Decimal,
}

impl Default for LineItemRow {
    fn default() -> Self {
        Self {
            product: None,
            quantity: 1,
            unit_amount: Decimal::ZERO,
            total_amount: Decimal::ZERO,
        }
    }
}

/// Refresh a row's unit amount from the catalog and recompute its total.
///
/// An empty or unknown product prices at zero.
///
/// # Errors
///
/// - [`EditorError::InvalidQuantity`]: the row quantity is zero.
/// - [`EditorError::Pricing`]: the total could not be computed, or the
///   quantity or total is above its storage limit.
pub fn recompute_row<L>(row: &LineItemRow, lookup: &L) -> Result<LineItemRow, EditorError>
where
    L: PriceLookup + ?Sized,
{
    let unit_amount = row
        .product
        .and_then(|product| lookup.unit_price(product))
        .unwrap_or(Decimal::ZERO);

    priced(row.product, row.quantity, unit_amount)
}

/// Select a product on a row: take its current price and recompute the total.
///
/// # Errors
///
/// See [`recompute_row`].
pub fn select_product<L>(
    row: &LineItemRow,
    product: Option<ProductUuid>,
    lookup: &L,
) -> Result<LineItemRow, EditorError>
where
    L: PriceLookup + ?Sized,
{
    recompute_row(
        &LineItemRow {
            product,
            ..row.clone()
        },
        lookup,
    )
}

/// Change a row's quantity, keeping its unit amount.
///
/// # Errors
///
/// - [`EditorError::InvalidQuantity`]: `quantity` is zero.
/// - [`EditorError::Pricing`]: the total could not be computed, or the
///   quantity or total is above its storage limit.
pub fn change_quantity(row: &LineItemRow, quantity: u32) -> Result<LineItemRow, EditorError> {
    priced(row.product, quantity, row.unit_amount)
}

/// Sum of all row totals.
///
/// # Errors
///
/// Returns a [`PricingError`] if the sum overflows or is above the storage limit.
pub fn recompute_grand_total(rows: &[LineItemRow]) -> Result<Decimal, PricingError> {
    grand_total(rows.iter().map(|row| row.total_amount))
}

fn priced(
    product: Option<ProductUuid>,
    quantity: u32,
    unit_amount: Decimal,
) -> Result<LineItemRow, EditorError> {
    if quantity == 0 {
        return Err(EditorError::InvalidQuantity(quantity));
    }

    Ok(LineItemRow {
        product,
        quantity,
        unit_amount,
        total_amount: line_total(quantity, unit_amount)?,
    })
}

/// Stateful wrapper keeping rows and their grand total consistent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineItemEditor {
    rows: Vec<LineItemRow>,
    grand_total: Decimal,
}

impl LineItemEditor {
    /// Create an editor with no rows.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load rows, re-pricing each from the catalog.
    ///
    /// # Errors
    ///
    /// - [`EditorError::DuplicateProduct`]: two rows select the same product.
    /// - Any error from [`recompute_row`].
    pub fn with_rows<L>(rows: Vec<LineItemRow>, lookup: &L) -> Result<Self, EditorError>
    where
        L: PriceLookup + ?Sized,
    {
        let mut editor = Self::new();

        for row in rows {
            if let Some(product) = row.product {
                editor.ensure_unselected(product, None)?;
            }

            editor.rows.push(recompute_row(&row, lookup)?);
        }

        editor.refresh_grand_total()?;

        Ok(editor)
    }

    /// Append an empty row with quantity 1 and return its index.
    pub fn push_row(&mut self) -> usize {
        self.rows.push(LineItemRow::default());

        self.rows.len() - 1
    }

    /// Remove the row at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::RowNotFound`] for an out-of-range index.
    pub fn remove_row(&mut self, index: usize) -> Result<LineItemRow, EditorError> {
        if index >= self.rows.len() {
            return Err(EditorError::RowNotFound(index));
        }

        let removed = self.rows.remove(index);

        self.refresh_grand_total()?;

        Ok(removed)
    }

    /// Select a product on the row at `index`.
    ///
    /// # Errors
    ///
    /// - [`EditorError::RowNotFound`]: out-of-range index.
    /// - [`EditorError::DuplicateProduct`]: another row already selects `product`.
    /// - Any error from [`select_product`].
    pub fn select_product<L>(
        &mut self,
        index: usize,
        product: Option<ProductUuid>,
        lookup: &L,
    ) -> Result<&LineItemRow, EditorError>
    where
        L: PriceLookup + ?Sized,
    {
        if let Some(product) = product {
            self.ensure_unselected(product, Some(index))?;
        }

        let row = self.row(index)?;
        let updated = select_product(row, product, lookup)?;

        self.replace(index, updated)
    }

    /// Change the quantity of the row at `index`.
    ///
    /// # Errors
    ///
    /// - [`EditorError::RowNotFound`]: out-of-range index.
    /// - Any error from [`change_quantity`].
    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> Result<&LineItemRow, EditorError> {
        let updated = change_quantity(self.row(index)?, quantity)?;

        self.replace(index, updated)
    }

    /// The row at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::RowNotFound`] for an out-of-range index.
    pub fn row(&self, index: usize) -> Result<&LineItemRow, EditorError> {
        self.rows.get(index).ok_or(EditorError::RowNotFound(index))
    }

    /// All rows.
    pub fn rows(&self) -> &[LineItemRow] {
        &self.rows
    }

    /// Consume the editor, returning its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<LineItemRow> {
        self.rows
    }

    /// Sum of all row totals.
    pub fn grand_total(&self) -> Decimal {
        self.grand_total
    }

    /// Grand total formatted for display.
    pub fn formatted_grand_total(&self, currency: StoreCurrency) -> String {
        currency.format(self.grand_total)
    }

    fn replace(&mut self, index: usize, updated: LineItemRow) -> Result<&LineItemRow, EditorError> {
        let previous = self
            .rows
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, updated))
            .ok_or(EditorError::RowNotFound(index))?;

        if let Err(error) = self.refresh_grand_total() {
            if let Some(slot) = self.rows.get_mut(index) {
                *slot = previous;
            }

            return Err(error);
        }

        self.row(index)
    }

    fn ensure_unselected(
        &self,
        product: ProductUuid,
        except: Option<usize>,
    ) -> Result<(), EditorError> {
        let taken = self
            .rows
            .iter()
            .enumerate()
            .any(|(i, row)| Some(i) != except && row.product == Some(product));

        if taken {
            return Err(EditorError::DuplicateProduct(product));
        }

        Ok(())
    }

    fn refresh_grand_total(&mut self) -> Result<(), EditorError> {
        self.grand_total = recompute_grand_total(&self.rows)?;

        Ok(())
    }
}
