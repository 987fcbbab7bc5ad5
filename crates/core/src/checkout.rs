//! Checkout
//!
//! Validates the shipping and payment fields submitted at checkout and turns
//! a cart into an [`OrderDraft`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    cart::Cart,
    currency::StoreCurrency,
    orders::{
        Customer, OrderDraft, OrderItemDraft, OrderStatus, OrderUuid, PaymentMethod,
        PaymentStatus, ShippingAddress, ShippingMethod, UnknownVariant,
    },
    pricing::PricingError,
};

/// Errors raised while validating a checkout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// One or more required fields were blank.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The payment method is not one the store accepts.
    #[error(transparent)]
    PaymentMethod(#[from] UnknownVariant),

    /// There is nothing to order.
    #[error("cart is empty")]
    EmptyCart,

    /// The grand total could not be computed.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Raw checkout form as submitted by the customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutForm {
    /// Recipient first name
    pub first_name: String,

    /// Recipient last name
    pub last_name: String,

    /// Contact phone number
    pub phone: String,

    /// Street and house number
    pub street_address: String,

    /// City
    pub city: String,

    /// State or province
    pub state: String,

    /// Postal code
    pub zip_code: String,

    /// Payment method code, `stripe` or `cod`
    pub payment_method: String,
}

/// A checkout form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCheckout {
    /// Where to ship
    pub address: ShippingAddress,

    /// How the customer pays
    pub payment_method: PaymentMethod,
}

impl CheckoutForm {
    /// Check every required field is present and the payment method is known.
    ///
    /// All blank fields are reported together. Values are trimmed.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::MissingFields`]: at least one required field is blank.
    /// - [`CheckoutError::PaymentMethod`]: the payment method is not recognised.
    pub fn validate(&self) -> Result<ValidCheckout, CheckoutError> {
        let fields = [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("phone", &self.phone),
            ("street_address", &self.street_address),
            ("city", &self.city),
            ("state", &self.state),
            ("zip_code", &self.zip_code),
            ("payment_method", &self.payment_method),
        ];

        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(CheckoutError::MissingFields(missing));
        }

        Ok(ValidCheckout {
            address: ShippingAddress {
                first_name: self.first_name.trim().to_string(),
                last_name: self.last_name.trim().to_string(),
                phone: self.phone.trim().to_string(),
                street_address: self.street_address.trim().to_string(),
                city: self.city.trim().to_string(),
                state: self.state.trim().to_string(),
                zip_code: self.zip_code.trim().to_string(),
            },
            payment_method: self.payment_method.parse()?,
        })
    }
}

impl OrderDraft {
    /// Build an order from the customer's cart.
    ///
    /// The grand total is the cart's grand total at this moment and each cart
    /// line becomes one order item. The order starts as `new` with payment
    /// `pending`, no shipping method and no shipping cost.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`]: the cart has no lines.
    /// - [`CheckoutError::Pricing`]: the grand total overflowed or is above
    ///   the storage limit.
    pub fn from_cart(
        customer: &Customer,
        cart: &Cart,
        checkout: ValidCheckout,
        currency: StoreCurrency,
    ) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        Ok(Self {
            uuid: OrderUuid::new(),
            customer: customer.uuid,
            grand_total: cart.grand_total()?,
            payment_method: checkout.payment_method,
            payment_status: PaymentStatus::Pending,
            status: OrderStatus::New,
            currency,
            shipping_amount: Decimal::ZERO,
            shipping_method: ShippingMethod::None,
            notes: Some(format!("Order placed by {}", customer.name)),
            address: checkout.address,
            items: cart.lines().iter().map(OrderItemDraft::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        orders::CustomerUuid,
        products::{CatalogProduct, ProductUuid},
    };

    use super::*;

    fn complete_form() -> CheckoutForm {
        CheckoutForm {
            first_name: "Siti".to_string(),
            last_name: "Rahma".to_string(),
            phone: "08123456789".to_string(),
            street_address: "Jl. Merdeka 1".to_string(),
            city: "Bandung".to_string(),
            state: "Jawa Barat".to_string(),
            zip_code: "40111".to_string(),
            payment_method: "cod".to_string(),
        }
    }

    fn customer() -> Customer {
        Customer {
            uuid: CustomerUuid::new(),
            name: "Siti".to_string(),
        }
    }

    #[test]
    fn complete_form_validates() -> TestResult {
        let checkout = complete_form().validate()?;

        assert_eq!(checkout.payment_method, PaymentMethod::CashOnDelivery);
        assert_eq!(checkout.address.city, "Bandung");

        Ok(())
    }

    #[test]
    fn every_blank_field_is_reported() {
        let form = CheckoutForm {
            phone: "   ".to_string(),
            zip_code: String::new(),
            ..complete_form()
        };

        assert_eq!(
            form.validate(),
            Err(CheckoutError::MissingFields(vec!["phone", "zip_code"]))
        );
    }

    #[test]
    fn empty_form_reports_all_fields() {
        let result = CheckoutForm::default().validate();

        assert!(
            matches!(&result, Err(CheckoutError::MissingFields(fields)) if fields.len() == 8),
            "expected all eight fields missing, got {result:?}"
        );
    }

    #[test]
    fn unknown_payment_method_is_rejected() {
        let form = CheckoutForm {
            payment_method: "barter".to_string(),
            ..complete_form()
        };

        assert!(
            matches!(form.validate(), Err(CheckoutError::PaymentMethod(_))),
            "expected payment method error"
        );
    }

    #[test]
    fn draft_copies_cart_lines_and_totals() -> TestResult {
        let keyboard = CatalogProduct {
            uuid: ProductUuid::new(),
            name: "Keyboard".to_string(),
            image: None,
            price: Decimal::from(10),
        };
        let mouse = CatalogProduct {
            uuid: ProductUuid::new(),
            name: "Mouse".to_string(),
            image: None,
            price: Decimal::from(5),
        };

        let mut cart = Cart::new();

        cart.add_item_with_quantity(keyboard.uuid, 2, || Some(keyboard.clone()))?;
        cart.add_item(mouse.uuid, || Some(mouse.clone()))?;

        let customer = customer();
        let draft = OrderDraft::from_cart(
            &customer,
            &cart,
            complete_form().validate()?,
            StoreCurrency::Idr,
        )?;

        assert_eq!(draft.customer, customer.uuid);
        assert_eq!(draft.grand_total, Decimal::from(25));
        assert_eq!(draft.items.len(), 2);
        assert_eq!(draft.status, OrderStatus::New);
        assert_eq!(draft.payment_status, PaymentStatus::Pending);
        assert_eq!(draft.shipping_method, ShippingMethod::None);
        assert_eq!(draft.shipping_amount, Decimal::ZERO);
        assert_eq!(draft.notes.as_deref(), Some("Order placed by Siti"));

        Ok(())
    }

    #[test]
    fn empty_cart_cannot_be_ordered() -> TestResult {
        let result = OrderDraft::from_cart(
            &customer(),
            &Cart::new(),
            complete_form().validate()?,
            StoreCurrency::Idr,
        );

        assert_eq!(result, Err(CheckoutError::EmptyCart));

        Ok(())
    }
}
