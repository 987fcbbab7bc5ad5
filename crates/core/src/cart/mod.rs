//! Cart
//!
//! A cart is an ordered list of [`CartLine`]s keyed by product. It is a plain
//! value: callers load it from wherever it is stored (a cookie in the JSON
//! API), apply operations, and write it back.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    pricing::{PricingError, grand_total},
    products::{CatalogProduct, ProductUuid},
};

mod line;

pub use line::CartLine;

/// Errors raised by cart operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// Quantities must be at least one.
    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(u32),

    /// Amount arithmetic failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Shopping cart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from previously stored lines.
    ///
    /// Totals are recomputed, lines that violate the line invariants or push
    /// the grand total over [`MAX_AMOUNT`](crate::pricing::MAX_AMOUNT) are dropped, and only the first
    /// line for each product is kept.
    #[must_use]
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = Self::new();

        for line in lines {
            if cart.contains(line.product_id()) {
                continue;
            }

            let Ok(line) = line.normalized() else {
                continue;
            };

            cart.lines.push(line);

            if cart.grand_total().is_err() {
                cart.lines.pop();
            }
        }

        cart
    }

    /// Add one unit of a product.
    ///
    /// If the product already has a line its quantity is incremented and the
    /// stored unit amount is kept. Otherwise `resolve` is called to look the
    /// product up and a line with quantity 1 is appended; an unknown product
    /// is ignored. Returns the resulting number of lines.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Pricing`] when the product price is invalid or the
    /// new quantity or a total crosses a storage limit. The cart is unchanged.
    pub fn add_item<F>(&mut self, product: ProductUuid, resolve: F) -> Result<usize, CartError>
    where
        F: FnOnce() -> Option<CatalogProduct>,
    {
        self.apply(|cart| {
            if let Some(line) = cart.line_mut(product) {
                let quantity = line.quantity().saturating_add(1);

                line.set_quantity(quantity)
            } else if let Some(found) = resolve() {
                cart.push_line(product, &found, 1)
            } else {
                Ok(())
            }
        })?;

        Ok(self.len())
    }

    /// Add a product with an explicit quantity.
    ///
    /// An existing line has its quantity replaced (not incremented). Otherwise
    /// `resolve` is called and a line with `quantity` units is appended; an
    /// unknown product is ignored. Returns the resulting number of lines.
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidQuantity`]: `quantity` is zero.
    /// - [`CartError::Pricing`]: the price is invalid, `quantity` is above
    ///   [`MAX_QUANTITY`](crate::pricing::MAX_QUANTITY), or a total is above [`MAX_AMOUNT`](crate::pricing::MAX_AMOUNT).
    pub fn add_item_with_quantity<F>(
        &mut self,
        product: ProductUuid,
        quantity: u32,
        resolve: F,
    ) -> Result<usize, CartError>
    where
        F: FnOnce() -> Option<CatalogProduct>,
    {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }

        self.apply(|cart| {
            if let Some(line) = cart.line_mut(product) {
                line.set_quantity(quantity)
            } else if let Some(found) = resolve() {
                cart.push_line(product, &found, quantity)
            } else {
                Ok(())
            }
        })?;

        Ok(self.len())
    }

    /// Remove every line for `product`. Unknown products leave the cart unchanged.
    pub fn remove_item(&mut self, product: ProductUuid) {
        self.lines.retain(|line| line.product_id() != product);
    }

    /// Increase the quantity of `product` by one.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Pricing`] when the new quantity or a total crosses
    /// a storage limit. The cart is unchanged.
    pub fn increment_quantity(&mut self, product: ProductUuid) -> Result<(), CartError> {
        self.apply(|cart| match cart.line_mut(product) {
            Some(line) => line.set_quantity(line.quantity().saturating_add(1)),
            None => Ok(()),
        })
    }

    /// Decrease the quantity of `product` by one, never going below one.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Pricing`] when the new total cannot be computed.
    pub fn decrement_quantity(&mut self, product: ProductUuid) -> Result<(), CartError> {
        if let Some(line) = self.line_mut(product)
            && line.quantity() > 1
        {
            let quantity = line.quantity() - 1;

            line.set_quantity(quantity)?;
        }

        Ok(())
    }

    /// Sum of all line totals.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the sum overflows or is above the storage limit.
    pub fn grand_total(&self) -> Result<Decimal, PricingError> {
        grand_total(self.lines.iter().map(CartLine::total_amount))
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Whether `product` has a line in this cart.
    pub fn contains(&self, product: ProductUuid) -> bool {
        self.line(product).is_some()
    }

    /// The line for `product`, if any.
    pub fn line(&self, product: ProductUuid) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id() == product)
    }

    /// All lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Consume the cart, returning its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<CartLine> {
        self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity())).sum()
    }

    /// Run `change` on a copy and keep it only if the grand total still fits.
    fn apply<F>(&mut self, change: F) -> Result<(), CartError>
    where
        F: FnOnce(&mut Self) -> Result<(), CartError>,
    {
        let mut next = self.clone();

        change(&mut next)?;
        next.grand_total()?;

        *self = next;

        Ok(())
    }

    fn line_mut(&mut self, product: ProductUuid) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id() == product)
    }

    fn push_line(
        &mut self,
        product: ProductUuid,
        found: &CatalogProduct,
        quantity: u32,
    ) -> Result<(), CartError> {
        let found = CatalogProduct {
            uuid: product,
            ..found.clone()
        };

        self.lines.push(CartLine::new(&found, quantity)?);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn product(price: i64) -> CatalogProduct {
        CatalogProduct {
            uuid: ProductUuid::new(),
            name: format!("Product {price}"),
            image: None,
            price: Decimal::from(price),
        }
    }

    #[test]
    fn add_item_creates_line_with_quantity_one() -> TestResult {
        let mut cart = Cart::new();
        let keyboard = product(10);

        let count = cart.add_item(keyboard.uuid, || Some(keyboard.clone()))?;

        assert_eq!(count, 1);
        assert_eq!(cart.line(keyboard.uuid).map(CartLine::quantity), Some(1));

        Ok(())
    }

    #[test]
    fn adding_same_product_twice_increments_single_line() -> TestResult {
        let mut cart = Cart::new();
        let keyboard = product(10);

        cart.add_item(keyboard.uuid, || Some(keyboard.clone()))?;
        let count = cart.add_item(keyboard.uuid, || Some(keyboard.clone()))?;

        assert_eq!(count, 1);
        assert_eq!(cart.line(keyboard.uuid).map(CartLine::quantity), Some(2));
        assert_eq!(cart.grand_total()?, Decimal::from(20));

        Ok(())
    }

    #[test]
    fn existing_line_does_not_resolve_product_again() -> TestResult {
        let mut cart = Cart::new();
        let keyboard = product(10);

        cart.add_item(keyboard.uuid, || Some(keyboard.clone()))?;
        cart.add_item(keyboard.uuid, || None)?;

        assert_eq!(cart.line(keyboard.uuid).map(CartLine::quantity), Some(2));

        Ok(())
    }

    #[test]
    fn price_is_locked_when_line_is_added() -> TestResult {
        let mut cart = Cart::new();
        let mut keyboard = product(10);

        cart.add_item(keyboard.uuid, || Some(keyboard.clone()))?;

        keyboard.price = Decimal::from(99);

        cart.add_item(keyboard.uuid, || Some(keyboard.clone()))?;

        assert_eq!(
            cart.line(keyboard.uuid).map(CartLine::unit_amount),
            Some(Decimal::from(10))
        );

        Ok(())
    }

    #[test]
    fn unknown_product_is_ignored() -> TestResult {
        let mut cart = Cart::new();

        let count = cart.add_item(ProductUuid::new(), || None)?;

        assert_eq!(count, 0);
        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn add_with_quantity_on_empty_cart() -> TestResult {
        let mut cart = Cart::new();
        let keyboard = product(10);

        let count = cart.add_item_with_quantity(keyboard.uuid, 3, || Some(keyboard.clone()))?;

        assert_eq!(count, 1);
        assert_eq!(cart.line(keyboard.uuid).map(CartLine::quantity), Some(3));
        assert_eq!(
            cart.line(keyboard.uuid).map(CartLine::total_amount),
            Some(Decimal::from(30))
        );

        Ok(())
    }

    #[test]
    fn add_with_quantity_replaces_existing_quantity() -> TestResult {
        let mut cart = Cart::new();
        let keyboard = product(10);

        cart.add_item_with_quantity(keyboard.uuid, 5, || Some(keyboard.clone()))?;
        cart.add_item_with_quantity(keyboard.uuid, 2, || Some(keyboard.clone()))?;

        assert_eq!(cart.line(keyboard.uuid).map(CartLine::quantity), Some(2));
        assert_eq!(cart.grand_total()?, Decimal::from(20));

        Ok(())
    }

    #[test]
    fn add_with_zero_quantity_is_rejected() {
        let mut cart = Cart::new();
        let keyboard = product(10);

        let result = cart.add_item_with_quantity(keyboard.uuid, 0, || Some(keyboard.clone()));

        assert_eq!(result, Err(CartError::InvalidQuantity(0)));
        assert!(cart.is_empty());
    }

    #[test]
    fn remove_item_deletes_line() -> TestResult {
        let mut cart = Cart::new();
        let keyboard = product(10);
        let mouse = product(5);

        cart.add_item(keyboard.uuid, || Some(keyboard.clone()))?;
        cart.add_item(mouse.uuid, || Some(mouse.clone()))?;
        cart.remove_item(keyboard.uuid);

        assert_eq!(cart.len(), 1);
        assert!(!cart.contains(keyboard.uuid));
        assert!(cart.contains(mouse.uuid));

        Ok(())
    }

    #[test]
    fn remove_unknown_item_leaves_cart_unchanged() -> TestResult {
        let mut cart = Cart::new();
        let keyboard = product(10);

        cart.add_item(keyboard.uuid, || Some(keyboard.clone()))?;

        let before = cart.clone();

        cart.remove_item(ProductUuid::new());

        assert_eq!(cart, before);

        Ok(())
    }

    #[test]
    fn increment_and_decrement_recompute_totals() -> TestResult {
        let mut cart = Cart::new();
        let keyboard = product(10);

        cart.add_item(keyboard.uuid, || Some(keyboard.clone()))?;
        cart.increment_quantity(keyboard.uuid)?;
        cart.increment_quantity(keyboard.uuid)?;

        assert_eq!(cart.grand_total()?, Decimal::from(30));

        cart.decrement_quantity(keyboard.uuid)?;

        assert_eq!(cart.line(keyboard.uuid).map(CartLine::quantity), Some(2));
        assert_eq!(cart.grand_total()?, Decimal::from(20));

        Ok(())
    }

    #[test]
    fn decrement_never_goes_below_one() -> TestResult {
        let mut cart = Cart::new();
        let keyboard = product(10);

        cart.add_item(keyboard.uuid, || Some(keyboard.clone()))?;
        cart.decrement_quantity(keyboard.uuid)?;
        cart.decrement_quantity(keyboard.uuid)?;

        assert_eq!(cart.line(keyboard.uuid).map(CartLine::quantity), Some(1));
        assert_eq!(cart.grand_total()?, Decimal::from(10));

        Ok(())
    }

    #[test]
    fn grand_total_matches_example() -> TestResult {
        let mut cart = Cart::new();
        let ten = product(10);
        let five = product(5);

        cart.add_item_with_quantity(ten.uuid, 2, || Some(ten.clone()))?;
        cart.add_item(five.uuid, || Some(five.clone()))?;

        assert_eq!(cart.grand_total()?, Decimal::from(25));
        assert_eq!(cart.item_count(), 3);

        Ok(())
    }

    #[test]
    fn clear_empties_cart() -> TestResult {
        let mut cart = Cart::new();
        let keyboard = product(10);

        cart.add_item(keyboard.uuid, || Some(keyboard.clone()))?;
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.grand_total()?, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn from_lines_recomputes_totals_and_drops_duplicates() -> TestResult {
        let keyboard = product(10);

        let json = serde_json::json!([
            {
                "product_id": keyboard.uuid,
                "name": "Keyboard",
                "image": null,
                "quantity": 2,
                "unit_amount": "10",
                "total_amount": "1"
            },
            {
                "product_id": keyboard.uuid,
                "name": "Keyboard",
                "image": null,
                "quantity": 7,
                "unit_amount": "10",
                "total_amount": "70"
            },
            {
                "product_id": ProductUuid::new(),
                "name": "Broken",
                "image": null,
                "quantity": 0,
                "unit_amount": "10",
                "total_amount": "0"
            }
        ]);

        let lines: Vec<CartLine> = serde_json::from_value(json)?;
        let cart = Cart::from_lines(lines);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.grand_total()?, Decimal::from(20));

        Ok(())
    }

    #[test]
    fn quantity_beyond_storage_limit_leaves_cart_unchanged() -> TestResult {
        let mut cart = Cart::new();
        let phone = product(15_000_000);

        cart.add_item(phone.uuid, || Some(phone.clone()))?;

        let result = cart.add_item_with_quantity(phone.uuid, 3_000_000_000, || None);

        assert_eq!(
            result,
            Err(CartError::Pricing(PricingError::QuantityTooLarge(
                3_000_000_000
            )))
        );
        assert_eq!(cart.line(phone.uuid).map(CartLine::quantity), Some(1));

        Ok(())
    }

    #[test]
    fn grand_total_beyond_storage_limit_is_rejected() -> TestResult {
        let mut cart = Cart::new();
        let laptop = product(6_000_000_000);
        let tablet = product(4_000_000_000);

        cart.add_item(laptop.uuid, || Some(laptop.clone()))?;

        let result = cart.add_item(tablet.uuid, || Some(tablet.clone()));

        assert!(
            matches!(
                result,
                Err(CartError::Pricing(PricingError::AmountTooLarge(_)))
            ),
            "expected AmountTooLarge, got {result:?}"
        );
        assert!(!cart.contains(tablet.uuid), "rejected line must not be kept");
        assert_eq!(cart.grand_total()?, Decimal::from(6_000_000_000_i64));

        Ok(())
    }

    #[test]
    fn increment_stops_at_storage_limit() -> TestResult {
        let mut cart = Cart::new();
        let laptop = product(5_000_000_000);

        cart.add_item(laptop.uuid, || Some(laptop.clone()))?;

        let result = cart.increment_quantity(laptop.uuid);

        assert!(
            matches!(
                result,
                Err(CartError::Pricing(PricingError::AmountTooLarge(_)))
            ),
            "expected AmountTooLarge, got {result:?}"
        );
        assert_eq!(cart.line(laptop.uuid).map(CartLine::quantity), Some(1));

        Ok(())
    }

    #[test]
    fn from_lines_drops_lines_past_storage_limit() -> TestResult {
        let laptop = product(6_000_000_000);
        let tablet = product(4_000_000_000);

        let lines = vec![CartLine::new(&laptop, 1)?, CartLine::new(&tablet, 1)?];
        let cart = Cart::from_lines(lines);

        assert_eq!(cart.len(), 1);
        assert!(cart.contains(laptop.uuid), "first line should be kept");

        Ok(())
    }
}
