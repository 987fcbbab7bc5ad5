//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine},
    checkout::{CheckoutError, CheckoutForm, ValidCheckout},
    currency::{StoreCurrency, UnsupportedCurrency},
    editor::{
        EditorError, LineItemEditor, LineItemRow, change_quantity, recompute_grand_total,
        recompute_row, select_product,
    },
    orders::{
        Customer, CustomerUuid, OrderDraft, OrderItemDraft, OrderItemUuid, OrderStatus,
        OrderUuid, PaymentMethod, PaymentStatus, ShippingAddress, ShippingMethod, UnknownVariant,
    },
    pricing::{MAX_AMOUNT, MAX_QUANTITY, PricingError, grand_total, line_total},
    products::{CatalogProduct, PriceLookup, PriceTable, ProductUuid},
    uuids::TypedUuid,
};
