//! Cart Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use storefront::{
    cart::{Cart, CartLine},
    currency::StoreCurrency,
    pricing::PricingError,
};
use uuid::Uuid;

/// One product in the cart.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    /// Product in the line
    pub product_uuid: Uuid,

    /// Product name when it was added
    pub name: String,

    /// First product image when it was added
    pub image: Option<String>,

    /// Units in the cart
    pub quantity: u32,

    /// Price per unit locked in when the product was added
    pub unit_amount: String,

    /// `quantity × unit_amount`
    pub total_amount: String,
}

impl From<&CartLine> for CartLineResponse {
    fn from(line: &CartLine) -> Self {
        CartLineResponse {
            product_uuid: line.product_id().into(),
            name: line.name().to_string(),
            image: line.image().map(ToString::to_string),
            quantity: line.quantity(),
            unit_amount: line.unit_amount().to_string(),
            total_amount: line.total_amount().to_string(),
        }
    }
}

/// The customer's cart.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// Cart lines in the order they were added
    pub items: Vec<CartLineResponse>,

    /// Number of distinct products
    pub line_count: usize,

    /// Sum of all quantities
    pub item_count: u64,

    /// Sum of all line totals
    pub grand_total: String,

    /// Grand total formatted in the store currency
    pub formatted_grand_total: String,
}

impl CartResponse {
    pub(crate) fn from_cart(cart: &Cart, currency: StoreCurrency) -> Result<Self, PricingError> {
        let grand_total = cart.grand_total()?;

        Ok(CartResponse {
            items: cart.lines().iter().map(CartLineResponse::from).collect(),
            line_count: cart.len(),
            item_count: cart.item_count(),
            grand_total: grand_total.to_string(),
            formatted_grand_total: currency.format(grand_total),
        })
    }
}
