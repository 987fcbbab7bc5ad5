//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use rust_decimal::Decimal;
use sqlx::{Postgres, Transaction};
use storefront::orders::{OrderDraft, OrderItemDraft};

use crate::{
    database::Db,
    domain::orders::{
        errors::OrdersServiceError,
        models::{CustomerUuid, Order, OrderSummary, OrderUuid, StatusUpdate},
        repository::PgOrdersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    repository: PgOrdersRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOrdersRepository::new(),
        }
    }

    async fn load_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        customer: Option<CustomerUuid>,
    ) -> Result<Order, OrdersServiceError> {
        let mut loaded = self.repository.get_order(tx, order, customer).await?;

        let items = self.repository.get_order_items(tx, order).await?;

        loaded.items.extend(items);

        Ok(loaded)
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn place_order(&self, draft: OrderDraft) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        self.repository.create_order(&mut tx, &draft).await?;

        self.repository
            .create_address(&mut tx, draft.uuid, &draft.address)
            .await?;

        self.repository
            .create_items(&mut tx, draft.uuid, &draft.items)
            .await?;

        let order = self.load_order(&mut tx, draft.uuid, None).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self.load_order(&mut tx, order, None).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn get_customer_order(
        &self,
        customer: CustomerUuid,
        order: OrderUuid,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let order = self.load_order(&mut tx, order, Some(customer)).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn list_orders(
        &self,
        customer: CustomerUuid,
    ) -> Result<Vec<OrderSummary>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.repository.list_orders(&mut tx, customer).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn update_status(
        &self,
        order: OrderUuid,
        update: StatusUpdate,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.update_status(&mut tx, order, update).await?;

        if rows_affected == 0 {
            return Err(OrdersServiceError::NotFound);
        }

        let order = self.load_order(&mut tx, order, None).await?;

        tx.commit().await?;

        Ok(order)
    }

    async fn replace_items(
        &self,
        order: OrderUuid,
        items: Vec<OrderItemDraft>,
        grand_total: Decimal,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .repository
            .update_total(&mut tx, order, grand_total)
            .await?;

        if rows_affected == 0 {
            return Err(OrdersServiceError::NotFound);
        }

        self.repository.delete_items(&mut tx, order).await?;
        self.repository.create_items(&mut tx, order, &items).await?;

        let order = self.load_order(&mut tx, order, None).await?;

        tx.commit().await?;

        Ok(order)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Persist an order with its address and items in one transaction.
    async fn place_order(&self, draft: OrderDraft) -> Result<Order, OrdersServiceError>;

    /// Retrieve any order with its items.
    async fn get_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError>;

    /// Retrieve an order only if it belongs to `customer`.
    async fn get_customer_order(
        &self,
        customer: CustomerUuid,
        order: OrderUuid,
    ) -> Result<Order, OrdersServiceError>;

    /// List a customer's orders, newest first.
    async fn list_orders(
        &self,
        customer: CustomerUuid,
    ) -> Result<Vec<OrderSummary>, OrdersServiceError>;

    /// Update the fulfilment and payment status of an order.
    async fn update_status(
        &self,
        order: OrderUuid,
        update: StatusUpdate,
    ) -> Result<Order, OrdersServiceError>;

    /// Replace every item of an order and store the new grand total.
    async fn replace_items(
        &self,
        order: OrderUuid,
        items: Vec<OrderItemDraft>,
        grand_total: Decimal,
    ) -> Result<Order, OrdersServiceError>;
}
