//! Checkout service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use storefront::{
    cart::Cart,
    checkout::CheckoutForm,
    currency::StoreCurrency,
    orders::{Customer, OrderDraft},
};
use tracing::info;

use crate::domain::{
    checkout::errors::CheckoutServiceError,
    orders::{OrdersService, models::Order},
};

/// Turns a validated cart into a persisted order.
pub struct StoreCheckoutService {
    orders: Arc<dyn OrdersService>,
    currency: StoreCurrency,
}

impl StoreCheckoutService {
    #[must_use]
    pub fn new(orders: Arc<dyn OrdersService>, currency: StoreCurrency) -> Self {
        Self { orders, currency }
    }
}

impl fmt::Debug for StoreCheckoutService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreCheckoutService")
            .field("currency", &self.currency)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CheckoutService for StoreCheckoutService {
    async fn place_order(
        &self,
        customer: Customer,
        cart: Cart,
        form: CheckoutForm,
    ) -> Result<Order, CheckoutServiceError> {
        let checkout = form.validate()?;
        let draft = OrderDraft::from_cart(&customer, &cart, checkout, self.currency)?;

        let order = self.orders.place_order(draft).await?;

        info!(
            order = %order.uuid,
            customer = %customer.uuid,
            items = order.items.len(),
            "order placed"
        );

        Ok(order)
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Validate the form and persist the cart as a new order.
    ///
    /// Clearing the cart is left to the caller, which owns its storage.
    async fn place_order(
        &self,
        customer: Customer,
        cart: Cart,
        form: CheckoutForm,
    ) -> Result<Order, CheckoutServiceError>;
}
