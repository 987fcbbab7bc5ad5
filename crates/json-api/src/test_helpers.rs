//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*, test::RequestBuilder};
use storefront::{
    cart::{Cart, CartError},
    currency::StoreCurrency,
    orders::{Customer, CustomerUuid, ShippingAddress},
    products::{CatalogProduct, ProductUuid},
};
use uuid::Uuid;

use storefront_app::{
    context::AppContext,
    domain::{
        carts::MockCartsService,
        checkout::MockCheckoutService,
        editor::MockEditorService,
        orders::{
            MockOrdersService,
            models::{
                Order, OrderItem, OrderItemUuid, OrderStatus, OrderUuid, PaymentMethod,
                PaymentStatus, ShippingMethod,
            },
        },
        products::{MockProductsService, models::Product},
    },
};

use crate::{
    cart::{CartCookie, encode_cart},
    customers::{self, CUSTOMER_NAME_HEADER, CUSTOMER_UUID_HEADER},
    state::State,
};

pub(crate) const TEST_CUSTOMER_UUID: CustomerUuid = CustomerUuid::from_uuid(Uuid::nil());

pub(crate) const TEST_CUSTOMER_NAME: &str = "Ayu";

/// Service mocks for one test. Mocks without expectations fail on any call.
#[derive(Default)]
pub(crate) struct TestApp {
    pub(crate) products: MockProductsService,
    pub(crate) carts: MockCartsService,
    pub(crate) orders: MockOrdersService,
    pub(crate) checkout: MockCheckoutService,
    pub(crate) editor: MockEditorService,
}

impl TestApp {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn state(self) -> Arc<State> {
        let app = AppContext {
            products: Arc::new(self.products),
            carts: Arc::new(self.carts),
            orders: Arc::new(self.orders),
            checkout: Arc::new(self.checkout),
            editor: Arc::new(self.editor),
        };

        State::from_app_context(app, CartCookie::default(), StoreCurrency::Idr)
    }

    /// Serve `route` with the mocked state injected.
    pub(crate) fn service(self, route: Router) -> Service {
        Service::new(Router::new().hoop(inject(self.state())).push(route))
    }

    /// Serve `route` behind the customer identity middleware.
    pub(crate) fn customer_service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.state()))
                .hoop(customers::handler)
                .push(route),
        )
    }
}

pub(crate) fn test_customer() -> Customer {
    Customer {
        uuid: TEST_CUSTOMER_UUID,
        name: TEST_CUSTOMER_NAME.to_string(),
    }
}

/// Identify the request as the test customer.
pub(crate) fn as_customer(req: RequestBuilder) -> RequestBuilder {
    req.add_header(CUSTOMER_UUID_HEADER, TEST_CUSTOMER_UUID.to_string(), true)
        .add_header(CUSTOMER_NAME_HEADER, TEST_CUSTOMER_NAME, true)
}

/// Send `cart` in the cart cookie.
pub(crate) fn with_cart(req: RequestBuilder, cart: &Cart) -> RequestBuilder {
    let value = encode_cart(cart).unwrap_or_default();

    req.add_header("cookie", format!("cart_items={value}"), true)
}

/// The cart held in a response's cart cookie, if one was set.
pub(crate) fn response_cart(res: &Response) -> Option<Cart> {
    res.cookie("cart_items")
        .and_then(|cookie| crate::cart::decode_cart(cookie.value()).ok())
}

pub(crate) fn catalog_product(name: &str, price: i64) -> CatalogProduct {
    CatalogProduct {
        uuid: ProductUuid::new(),
        name: name.to_string(),
        image: Some(format!("{}.png", name.to_lowercase())),
        price: Decimal::from(price),
    }
}

/// A cart holding each product with the given quantity.
pub(crate) fn cart_with(lines: &[(&CatalogProduct, u32)]) -> Result<Cart, CartError> {
    let mut cart = Cart::new();

    for (product, quantity) in lines {
        let product = (*product).clone();

        cart.add_item_with_quantity(product.uuid, *quantity, || Some(product))?;
    }

    Ok(cart)
}

pub(crate) fn make_product(product: &CatalogProduct) -> Product {
    Product {
        uuid: product.uuid,
        name: product.name.clone(),
        slug: product.name.to_lowercase(),
        images: product.image.iter().cloned().collect(),
        price: product.price,
        is_active: true,
        in_stock: true,
        is_featured: false,
        on_sale: false,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn shipping_address() -> ShippingAddress {
    ShippingAddress {
        first_name: "Ayu".to_string(),
        last_name: "Pratiwi".to_string(),
        phone: "0811222333".to_string(),
        street_address: "Jl. Gajah Mada 12".to_string(),
        city: "Surabaya".to_string(),
        state: "Jawa Timur".to_string(),
        zip_code: "60111".to_string(),
    }
}

/// A stored order of the test customer with one item per `(product, quantity, unit price)`.
pub(crate) fn make_order(uuid: OrderUuid, items: &[(ProductUuid, u32, i64)]) -> Order {
    let items: Vec<OrderItem> = items
        .iter()
        .map(|(product, quantity, price)| OrderItem {
            uuid: OrderItemUuid::new(),
            product: *product,
            quantity: *quantity,
            unit_amount: Decimal::from(*price),
            total_amount: Decimal::from(*price) * Decimal::from(*quantity),
        })
        .collect();

    Order {
        uuid,
        customer: TEST_CUSTOMER_UUID,
        grand_total: items.iter().map(|item| item.total_amount).sum(),
        payment_method: PaymentMethod::CashOnDelivery,
        payment_status: PaymentStatus::Pending,
        status: OrderStatus::New,
        currency: StoreCurrency::Idr,
        shipping_amount: Decimal::ZERO,
        shipping_method: ShippingMethod::None,
        notes: Some(format!("Order placed by {TEST_CUSTOMER_NAME}")),
        address: shipping_address(),
        items,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
