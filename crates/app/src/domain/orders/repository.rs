//! Orders Repository

use std::{error::Error as StdError, str::FromStr};

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use storefront::{
    orders::{OrderDraft, OrderItemDraft},
    products::ProductUuid,
};

use crate::domain::orders::models::{
    CustomerUuid, Order, OrderItem, OrderItemUuid, OrderSummary, OrderUuid, ShippingAddress,
    StatusUpdate,
};

const CREATE_ORDER_SQL: &str = include_str!("sql/create_order.sql");
const CREATE_ADDRESS_SQL: &str = include_str!("sql/create_address.sql");
const CREATE_ORDER_ITEM_SQL: &str = include_str!("sql/create_order_item.sql");
const GET_ORDER_SQL: &str = include_str!("sql/get_order.sql");
const GET_ORDER_ITEMS_SQL: &str = include_str!("sql/get_order_items.sql");
const LIST_ORDERS_SQL: &str = include_str!("sql/list_orders.sql");
const UPDATE_ORDER_STATUS_SQL: &str = include_str!("sql/update_order_status.sql");
const UPDATE_ORDER_TOTAL_SQL: &str = include_str!("sql/update_order_total.sql");
const DELETE_ORDER_ITEMS_SQL: &str = include_str!("sql/delete_order_items.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        draft: &OrderDraft,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_ORDER_SQL)
            .bind(draft.uuid.into_uuid())
            .bind(draft.customer.into_uuid())
            .bind(draft.grand_total)
            .bind(draft.payment_method.as_str())
            .bind(draft.payment_status.as_str())
            .bind(draft.status.as_str())
            .bind(draft.currency.as_str())
            .bind(draft.shipping_amount)
            .bind(draft.shipping_method.as_str())
            .bind(draft.notes.as_deref())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn create_address(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        address: &ShippingAddress,
    ) -> Result<(), sqlx::Error> {
        query(CREATE_ADDRESS_SQL)
            .bind(order.into_uuid())
            .bind(&address.first_name)
            .bind(&address.last_name)
            .bind(&address.phone)
            .bind(&address.street_address)
            .bind(&address.city)
            .bind(&address.state)
            .bind(&address.zip_code)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn create_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        items: &[OrderItemDraft],
    ) -> Result<(), sqlx::Error> {
        for item in items {
            let quantity =
                i32::try_from(item.quantity).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

            query(CREATE_ORDER_ITEM_SQL)
                .bind(item.uuid.into_uuid())
                .bind(order.into_uuid())
                .bind(item.product.into_uuid())
                .bind(quantity)
                .bind(item.unit_amount)
                .bind(item.total_amount)
                .execute(&mut **tx)
                .await?;
        }

        Ok(())
    }

    pub(crate) async fn delete_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ORDER_ITEMS_SQL)
            .bind(order.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        customer: Option<CustomerUuid>,
    ) -> Result<Order, sqlx::Error> {
        query_as::<Postgres, Order>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(customer.map(CustomerUuid::into_uuid))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_order_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Vec<OrderItem>, sqlx::Error> {
        query_as::<Postgres, OrderItem>(GET_ORDER_ITEMS_SQL)
            .bind(order.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<Vec<OrderSummary>, sqlx::Error> {
        query_as::<Postgres, OrderSummary>(LIST_ORDERS_SQL)
            .bind(customer.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn update_status(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        update: StatusUpdate,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_ORDER_STATUS_SQL)
            .bind(order.into_uuid())
            .bind(update.status.as_str())
            .bind(update.payment_status.as_str())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn update_total(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        grand_total: Decimal,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(UPDATE_ORDER_TOTAL_SQL)
            .bind(order.into_uuid())
            .bind(grand_total)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

fn decode_code<T>(row: &PgRow, column: &str) -> sqlx::Result<T>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    let raw: String = row.try_get(column)?;

    raw.parse().map_err(|e| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for Order {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            customer: CustomerUuid::from_uuid(row.try_get("customer_uuid")?),
            grand_total: row.try_get("grand_total")?,
            payment_method: decode_code(row, "payment_method")?,
            payment_status: decode_code(row, "payment_status")?,
            status: decode_code(row, "status")?,
            currency: decode_code(row, "currency")?,
            shipping_amount: row.try_get("shipping_amount")?,
            shipping_method: decode_code(row, "shipping_method")?,
            notes: row.try_get("notes")?,
            address: ShippingAddress {
                first_name: row.try_get("first_name")?,
                last_name: row.try_get("last_name")?,
                phone: row.try_get("phone")?,
                street_address: row.try_get("street_address")?,
                city: row.try_get("city")?,
                state: row.try_get("state")?,
                zip_code: row.try_get("zip_code")?,
            },
            items: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for OrderItem {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let quantity: i32 = row.try_get("quantity")?;

        let quantity = u32::try_from(quantity).map_err(|e| sqlx::Error::ColumnDecode {
            index: "quantity".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: OrderItemUuid::from_uuid(row.try_get("uuid")?),
            product: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            quantity,
            unit_amount: row.try_get("unit_amount")?,
            total_amount: row.try_get("total_amount")?,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for OrderSummary {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            grand_total: row.try_get("grand_total")?,
            payment_method: decode_code(row, "payment_method")?,
            payment_status: decode_code(row, "payment_status")?,
            status: decode_code(row, "status")?,
            currency: decode_code(row, "currency")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
