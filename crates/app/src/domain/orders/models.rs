//! Order Models

use jiff::Timestamp;
use rust_decimal::Decimal;
use storefront::{currency::StoreCurrency, products::ProductUuid};

pub use storefront::orders::{
    CustomerUuid, OrderItemUuid, OrderStatus, OrderUuid, PaymentMethod, PaymentStatus,
    ShippingAddress, ShippingMethod,
};

/// Order Model
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub uuid: OrderUuid,
    pub customer: CustomerUuid,
    pub grand_total: Decimal,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub status: OrderStatus,
    pub currency: StoreCurrency,
    pub shipping_amount: Decimal,
    pub shipping_method: ShippingMethod,
    pub notes: Option<String>,
    pub address: ShippingAddress,
    pub items: Vec<OrderItem>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Order Item Model
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub uuid: OrderItemUuid,
    pub product: ProductUuid,
    pub quantity: u32,
    pub unit_amount: Decimal,
    pub total_amount: Decimal,
}

/// Order listing entry, without address or items.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub uuid: OrderUuid,
    pub grand_total: Decimal,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub status: OrderStatus,
    pub currency: StoreCurrency,
    pub created_at: Timestamp,
}

/// Order Status Update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusUpdate {
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
}
