//! Pricing

use rust_decimal::Decimal;
use thiserror::Error;

/// Largest quantity a line may hold; order items store it as a 32-bit integer.
pub const MAX_QUANTITY: u32 = i32::MAX.unsigned_abs();

/// Largest line or grand total an order can store (`NUMERIC(12, 2)`).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);

/// Errors that can occur while calculating line and grand totals.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// An amount was negative.
    #[error("amount {0} is negative")]
    NegativeAmount(Decimal),

    /// Decimal arithmetic overflowed.
    #[error("amount overflowed while calculating totals")]
    Overflow,

    /// A quantity is above [`MAX_QUANTITY`].
    #[error("quantity {0} exceeds the maximum of {MAX_QUANTITY}")]
    QuantityTooLarge(u32),

    /// A total is above [`MAX_AMOUNT`].
    #[error("total {0} exceeds the maximum of {MAX_AMOUNT}")]
    AmountTooLarge(Decimal),
}

impl PricingError {
    /// Whether the error comes from caller input crossing a storage limit
    /// rather than from bad stored prices.
    #[must_use]
    pub fn is_limit(&self) -> bool {
        matches!(self, Self::QuantityTooLarge(_) | Self::AmountTooLarge(_))
    }
}

fn within_limit(amount: Decimal) -> Result<Decimal, PricingError> {
    if amount > MAX_AMOUNT {
        return Err(PricingError::AmountTooLarge(amount));
    }

    Ok(amount)
}

/// Calculates `quantity × unit_amount` for a single line.
///
/// # Errors
///
/// - [`PricingError::NegativeAmount`]: the unit amount is below zero.
/// - [`PricingError::QuantityTooLarge`]: `quantity` is above [`MAX_QUANTITY`].
/// - [`PricingError::AmountTooLarge`]: the total is above [`MAX_AMOUNT`].
/// - [`PricingError::Overflow`]: the multiplication overflowed.
pub fn line_total(quantity: u32, unit_amount: Decimal) -> Result<Decimal, PricingError> {
    if unit_amount < Decimal::ZERO {
        return Err(PricingError::NegativeAmount(unit_amount));
    }

    if quantity > MAX_QUANTITY {
        return Err(PricingError::QuantityTooLarge(quantity));
    }

    let total = unit_amount
        .checked_mul(Decimal::from(quantity))
        .ok_or(PricingError::Overflow)?;

    within_limit(total)
}

/// Sums a list of line totals into a grand total.
///
/// An empty list sums to zero.
///
/// # Errors
///
/// - [`PricingError::AmountTooLarge`]: the sum is above [`MAX_AMOUNT`].
/// - [`PricingError::Overflow`]: the sum overflowed.
pub fn grand_total<I>(totals: I) -> Result<Decimal, PricingError>
where
    I: IntoIterator<Item = Decimal>,
{
    let sum = totals
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, total| acc.checked_add(total))
        .ok_or(PricingError::Overflow)?;

    within_limit(sum)
}
