//! Order Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use storefront::orders::ShippingAddress;
use uuid::Uuid;

use storefront_app::domain::orders::models::{Order, OrderItem, OrderSummary};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddressResponse {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub phone: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl From<ShippingAddress> for AddressResponse {
    fn from(address: ShippingAddress) -> Self {
        AddressResponse {
            full_name: address.full_name(),
            first_name: address.first_name,
            last_name: address.last_name,
            phone: address.phone,
            street_address: address.street_address,
            city: address.city,
            state: address.state,
            zip_code: address.zip_code,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    pub uuid: Uuid,
    pub product_uuid: Uuid,
    pub quantity: u32,

    /// Price per unit at purchase time
    pub unit_amount: String,

    pub total_amount: String,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        OrderItemResponse {
            uuid: item.uuid.into(),
            product_uuid: item.product.into(),
            quantity: item.quantity,
            unit_amount: item.unit_amount.to_string(),
            total_amount: item.total_amount.to_string(),
        }
    }
}

/// A stored order with its address and items.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub uuid: Uuid,

    /// The customer who placed the order
    pub customer_uuid: Uuid,

    /// Fulfilment status: `new`, `processing`, `shipped`, `delivered` or `canceled`
    pub status: String,

    /// Payment status: `pending`, `paid` or `failed`
    pub payment_status: String,

    /// Payment method: `stripe` or `cod`
    pub payment_method: String,

    pub shipping_method: String,
    pub shipping_amount: String,

    /// ISO currency code, lowercase
    pub currency: String,

    /// Sum of all item totals
    pub grand_total: String,

    /// Grand total formatted in the order currency
    pub formatted_grand_total: String,

    pub notes: Option<String>,
    pub address: AddressResponse,
    pub items: Vec<OrderItemResponse>,

    /// The date and time the order was placed
    pub created_at: String,

    /// The date and time the order was last updated
    pub updated_at: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            uuid: order.uuid.into(),
            customer_uuid: order.customer.into(),
            status: order.status.to_string(),
            payment_status: order.payment_status.to_string(),
            payment_method: order.payment_method.to_string(),
            shipping_method: order.shipping_method.to_string(),
            shipping_amount: order.shipping_amount.to_string(),
            currency: order.currency.to_string(),
            grand_total: order.grand_total.to_string(),
            formatted_grand_total: order.currency.format(order.grand_total),
            notes: order.notes,
            address: order.address.into(),
            items: order.items.into_iter().map(Into::into).collect(),
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        }
    }
}

/// An order in a customer's order history.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderSummaryResponse {
    pub uuid: Uuid,
    pub status: String,
    pub payment_status: String,
    pub payment_method: String,
    pub currency: String,
    pub grand_total: String,
    pub formatted_grand_total: String,
    pub created_at: String,
}

impl From<OrderSummary> for OrderSummaryResponse {
    fn from(order: OrderSummary) -> Self {
        OrderSummaryResponse {
            uuid: order.uuid.into(),
            status: order.status.to_string(),
            payment_status: order.payment_status.to_string(),
            payment_method: order.payment_method.to_string(),
            currency: order.currency.to_string(),
            grand_total: order.grand_total.to_string(),
            formatted_grand_total: order.currency.format(order.grand_total),
            created_at: order.created_at.to_string(),
        }
    }
}
