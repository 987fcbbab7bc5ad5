//! Test Helpers

use jiff::Timestamp;
use rust_decimal::Decimal;
use storefront::{
    checkout::CheckoutForm,
    orders::{Customer, CustomerUuid, OrderDraft},
    products::{CatalogProduct, ProductUuid},
};

use crate::domain::orders::models::{Order, OrderItem};

pub(crate) fn catalog_product(name: &str, price: i64) -> CatalogProduct {
    CatalogProduct {
        uuid: ProductUuid::new(),
        name: name.to_string(),
        image: None,
        price: Decimal::from(price),
    }
}

pub(crate) fn customer() -> Customer {
    Customer {
        uuid: CustomerUuid::new(),
        name: "Dewi".to_string(),
    }
}

pub(crate) fn checkout_form() -> CheckoutForm {
    CheckoutForm {
        first_name: "Dewi".to_string(),
        last_name: "Lestari".to_string(),
        phone: "0813111222".to_string(),
        street_address: "Jl. Asia Afrika 8".to_string(),
        city: "Bandung".to_string(),
        state: "Jawa Barat".to_string(),
        zip_code: "40111".to_string(),
        payment_method: "cod".to_string(),
    }
}

/// The order a storage layer would return after persisting `draft`.
pub(crate) fn order_from_draft(draft: OrderDraft) -> Order {
    Order {
        uuid: draft.uuid,
        customer: draft.customer,
        grand_total: draft.grand_total,
        payment_method: draft.payment_method,
        payment_status: draft.payment_status,
        status: draft.status,
        currency: draft.currency,
        shipping_amount: draft.shipping_amount,
        shipping_method: draft.shipping_method,
        notes: draft.notes,
        address: draft.address,
        items: draft
            .items
            .into_iter()
            .map(|item| OrderItem {
                uuid: item.uuid,
                product: item.product,
                quantity: item.quantity,
                unit_amount: item.unit_amount,
                total_amount: item.total_amount,
            })
            .collect(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
