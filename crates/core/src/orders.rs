//! Orders

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    cart::CartLine,
    currency::StoreCurrency,
    products::ProductUuid,
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderDraft>;

/// Order Item UUID
pub type OrderItemUuid = TypedUuid<OrderItemDraft>;

/// Customer UUID
pub type CustomerUuid = TypedUuid<Customer>;

/// Returned when a stored or submitted code is not a known variant.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    /// What was being parsed
    pub kind: &'static str,

    /// The rejected value
    pub value: String,
}

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$variant_meta:meta])* $variant:ident => $code:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            /// Code used for storage and the wire.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($code => Ok(Self::$variant),)+
                    _ => Err(UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

string_enum! {
    /// Order fulfilment status.
    OrderStatus, "order status" {
        /// Just placed
        New => "new",
        /// Being prepared
        Processing => "processing",
        /// Handed to the carrier
        Shipped => "shipped",
        /// Received by the customer
        Delivered => "delivered",
        /// Will not be fulfilled
        Canceled => "canceled",
    }
}

string_enum! {
    /// Payment status.
    PaymentStatus, "payment status" {
        /// Awaiting payment
        Pending => "pending",
        /// Payment captured
        Paid => "paid",
        /// Payment failed
        Failed => "failed",
    }
}

string_enum! {
    /// How the customer pays.
    PaymentMethod, "payment method" {
        /// Card payment through Stripe
        Stripe => "stripe",
        /// Cash on delivery
        CashOnDelivery => "cod",
    }
}

string_enum! {
    /// Carrier used to ship the order.
    ShippingMethod, "shipping method" {
        /// Not yet chosen
        None => "none",
        /// J&T Express
        Jnt => "jnt",
        /// JNE
        Jne => "jne",
        /// SiCepat
        SiCepat => "siCepat",
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::New
    }
}

impl Default for PaymentStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl Default for ShippingMethod {
    fn default() -> Self {
        Self::None
    }
}

/// The signed-in customer placing an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Customer identifier
    pub uuid: CustomerUuid,

    /// Display name
    pub name: String,
}

/// Shipping address attached 1:1 to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Phone number
    pub phone: String,

    /// Street address
    pub street_address: String,

    /// City
    pub city: String,

    /// State or province
    pub state: String,

    /// Postal code
    pub zip_code: String,
}

impl ShippingAddress {
    /// First and last name joined by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A line copied from a cart line when an order is placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItemDraft {
    /// Item identifier
    pub uuid: OrderItemUuid,

    /// Purchased product
    pub product: ProductUuid,

    /// Units purchased
    pub quantity: u32,

    /// Price per unit at purchase time
    pub unit_amount: Decimal,

    /// `quantity × unit_amount`
    pub total_amount: Decimal,
}

impl From<&CartLine> for OrderItemDraft {
    fn from(line: &CartLine) -> Self {
        Self {
            uuid: OrderItemUuid::new(),
            product: line.product_id(),
            quantity: line.quantity(),
            unit_amount: line.unit_amount(),
            total_amount: line.total_amount(),
        }
    }
}

/// Everything needed to persist a new order, its address and its items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    /// Order identifier
    pub uuid: OrderUuid,

    /// Customer placing the order
    pub customer: CustomerUuid,

    /// Sum of all item totals
    pub grand_total: Decimal,

    /// How the customer pays
    pub payment_method: PaymentMethod,

    /// Payment state
    pub payment_status: PaymentStatus,

    /// Fulfilment state
    pub status: OrderStatus,

    /// Order currency
    pub currency: StoreCurrency,

    /// Shipping cost
    pub shipping_amount: Decimal,

    /// Carrier
    pub shipping_method: ShippingMethod,

    /// Free-form notes
    pub notes: Option<String>,

    /// Where to ship
    pub address: ShippingAddress,

    /// Purchased lines
    pub items: Vec<OrderItemDraft>,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn status_codes_round_trip_through_strings() -> TestResult {
        for status in [
            OrderStatus::New,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Canceled,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>()?, status);
        }

        Ok(())
    }

    #[test]
    fn unknown_payment_method_is_rejected() {
        let result = "paypal".parse::<PaymentMethod>();

        assert_eq!(
            result,
            Err(UnknownVariant {
                kind: "payment method",
                value: "paypal".to_string(),
            })
        );
    }

    #[test]
    fn cash_on_delivery_uses_short_code() -> TestResult {
        assert_eq!(PaymentMethod::CashOnDelivery.as_str(), "cod");
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CashOnDelivery)?,
            "\"cod\""
        );

        Ok(())
    }

    #[test]
    fn defaults_match_a_freshly_placed_order() {
        assert_eq!(OrderStatus::default(), OrderStatus::New);
        assert_eq!(PaymentStatus::default(), PaymentStatus::Pending);
        assert_eq!(ShippingMethod::default(), ShippingMethod::None);
    }
}
