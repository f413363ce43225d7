use async_trait::async_trait;
use sqlx::MySqlPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;
use business::domain::order::repository::OrderRepository;
use business::domain::order::value_objects::OrderStatus;
use business::domain::shared::value_objects::UserId;

use super::entity::{OrderEntity, OrderItemEntity, assemble};
use crate::convert::{db_error, money};

const ORDER_COLUMNS: &str = "id, user_id, status, total, shipping_address, created_at, updated_at";
const ITEM_COLUMNS: &str = "order_id, product_id, product_name, unit_price, quantity";

pub struct OrderRepositoryMySql {
    pool: MySqlPool,
}

impl OrderRepositoryMySql {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryMySql {
    async fn place(&self, order: &Order) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        sqlx::query(
            "INSERT INTO orders (id, user_id, status, total, shipping_address, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(order.id.to_string())
        .bind(order.user_id.as_str())
        .bind(order.status.to_string())
        .bind(money(order.total))
        .bind(&order.shipping_address)
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(db_error)?;

        for (position, item) in order.items.iter().enumerate() {
            sqlx::query(
                "INSERT INTO order_items (order_id, position, product_id, product_name, unit_price, quantity) VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(order.id.to_string())
            .bind(position as u32)
            .bind(item.product_id.to_string())
            .bind(&item.product_name)
            .bind(money(item.unit_price))
            .bind(item.quantity)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

            let updated =
                sqlx::query("UPDATE products SET stock = stock - ? WHERE id = ? AND stock >= ?")
                    .bind(item.quantity)
                    .bind(item.product_id.to_string())
                    .bind(item.quantity)
                    .execute(&mut *tx)
                    .await
                    .map_err(db_error)?;

            if updated.rows_affected() == 0 {
                tracing::warn!(
                    "Stock for product {} ran out while placing order {}",
                    item.product_id,
                    order.id
                );
                // Dropping the transaction rolls it back.
                return Err(RepositoryError::Conflict);
            }
        }

        sqlx::query("DELETE FROM cart_items WHERE user_id = ?")
            .bind(order.user_id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        tx.commit().await.map_err(db_error)?;
        Ok(())
    }

    async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {} FROM orders WHERE user_id = ? ORDER BY created_at DESC",
            ORDER_COLUMNS
        ))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let items = sqlx::query_as::<_, OrderItemEntity>(&format!(
            "SELECT {} FROM order_items WHERE order_id IN (SELECT id FROM orders WHERE user_id = ?) ORDER BY order_id, position",
            ITEM_COLUMNS
        ))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        assemble(orders, items)
    }

    async fn get_by_id(&self, user_id: &UserId, id: Uuid) -> Result<Order, RepositoryError> {
        let order = sqlx::query_as::<_, OrderEntity>(&format!(
            "SELECT {} FROM orders WHERE id = ? AND user_id = ?",
            ORDER_COLUMNS
        ))
        .bind(id.to_string())
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?
        .ok_or(RepositoryError::NotFound)?;

        let items = sqlx::query_as::<_, OrderItemEntity>(&format!(
            "SELECT {} FROM order_items WHERE order_id = ? ORDER BY position",
            ITEM_COLUMNS
        ))
        .bind(id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        order.into_domain(items)
    }

    async fn cancel(&self, order: &Order) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        let updated = sqlx::query(
            "UPDATE orders SET status = ?, updated_at = ? WHERE id = ? AND user_id = ? AND status IN (?, ?)",
        )
        .bind(OrderStatus::Cancelled.to_string())
        .bind(order.updated_at)
        .bind(order.id.to_string())
        .bind(order.user_id.as_str())
        .bind(OrderStatus::Pending.to_string())
        .bind(OrderStatus::Confirmed.to_string())
        .execute(&mut *tx)
        .await
        .map_err(db_error)?;

        if updated.rows_affected() == 0 {
            return Err(RepositoryError::Conflict);
        }

        for item in &order.items {
            sqlx::query("UPDATE products SET stock = stock + ? WHERE id = ?")
                .bind(item.quantity)
                .bind(item.product_id.to_string())
                .execute(&mut *tx)
                .await
                .map_err(db_error)?;
        }

        tx.commit().await.map_err(db_error)?;
        Ok(())
    }
}
