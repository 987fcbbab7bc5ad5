//! Cart Lines

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    cart::CartError,
    pricing::line_total,
    products::{CatalogProduct, ProductUuid},
};

/// One product entry in a cart.
///
/// `unit_amount` is taken from the product price when the line is created
/// and is never refreshed; `total_amount` always equals
/// `quantity × unit_amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    product_id: ProductUuid,
    name: String,
    image: Option<String>,
    quantity: u32,
    unit_amount: Decimal,
    total_amount: Decimal,
}

impl CartLine {
    /// Create a line for `product` with the given quantity.
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidQuantity`]: `quantity` is zero.
    /// - [`CartError::Pricing`]: the price is negative, or the quantity or
    ///   total is above its storage limit.
    pub fn new(product: &CatalogProduct, quantity: u32) -> Result<Self, CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }

        Ok(Self {
            product_id: product.uuid,
            name: product.name.clone(),
            image: product.image.clone(),
            quantity,
            unit_amount: product.price,
            total_amount: line_total(quantity, product.price)?,
        })
    }

    /// Product this line is for.
    pub fn product_id(&self) -> ProductUuid {
        self.product_id
    }

    /// Product name captured when the line was added.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Product image captured when the line was added.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Number of units.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price per unit, locked when the line was added.
    pub fn unit_amount(&self) -> Decimal {
        self.unit_amount
    }

    /// `quantity × unit_amount`
    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    /// Set the quantity and recompute the total.
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidQuantity`]: `quantity` is zero.
    /// - [`CartError::Pricing`]: the quantity or total is above its storage limit.
    pub fn set_quantity(&mut self, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity(quantity));
        }

        self.total_amount = line_total(quantity, self.unit_amount)?;
        self.quantity = quantity;

        Ok(())
    }

    /// Recompute the total from the stored quantity and unit amount.
    ///
    /// Used when lines come back from an untrusted store.
    pub(crate) fn normalized(mut self) -> Result<Self, CartError> {
        self.set_quantity(self.quantity)?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::pricing::{MAX_QUANTITY, PricingError};

    fn product(price: i64) -> CatalogProduct {
        CatalogProduct {
            uuid: ProductUuid::new(),
            name: "Mechanical Keyboard".to_string(),
            image: Some("products/keyboard.png".to_string()),
            price: Decimal::from(price),
        }
    }

    #[test]
    fn new_line_copies_product_snapshot() -> TestResult {
        let product = product(10);
        let line = CartLine::new(&product, 2)?;

        assert_eq!(line.product_id(), product.uuid);
        assert_eq!(line.name(), "Mechanical Keyboard");
        assert_eq!(line.image(), Some("products/keyboard.png"));
        assert_eq!(line.unit_amount(), Decimal::from(10));
        assert_eq!(line.total_amount(), Decimal::from(20));

        Ok(())
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let result = CartLine::new(&product(10), 0);

        assert!(
            matches!(result, Err(CartError::InvalidQuantity(0))),
            "expected InvalidQuantity, got {result:?}"
        );
    }

    #[test]
    fn quantity_above_storage_limit_is_rejected() -> TestResult {
        let mut line = CartLine::new(&product(0), MAX_QUANTITY)?;

        let result = line.set_quantity(MAX_QUANTITY + 1);

        assert_eq!(
            result,
            Err(CartError::Pricing(PricingError::QuantityTooLarge(
                MAX_QUANTITY + 1
            )))
        );
        assert_eq!(line.quantity(), MAX_QUANTITY);

        Ok(())
    }

    #[test]
    fn line_total_above_storage_limit_is_rejected() {
        let result = CartLine::new(&product(15_000_000), 1_000);

        assert!(
            matches!(
                result,
                Err(CartError::Pricing(PricingError::AmountTooLarge(_)))
            ),
            "expected AmountTooLarge, got {result:?}"
        );
    }

    #[test]
    fn serializes_with_readable_keys() -> TestResult {
        let line = CartLine::new(&product(5), 1)?;
        let json = serde_json::to_value(&line)?;

        for key in [
            "product_id",
            "name",
            "image",
            "quantity",
            "unit_amount",
            "total_amount",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }

        Ok(())
    }
}
