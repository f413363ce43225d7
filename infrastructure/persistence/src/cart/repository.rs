use async_trait::async_trait;
use sqlx::MySqlPool;
use uuid::Uuid;

use business::domain::cart::model::{CartItem, CartLine};
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::{CartItemEntity, CartLineEntity};
use crate::convert::db_error;
use crate::search_sql::JOINED_PRODUCT_COLUMNS;

pub struct CartRepositoryMySql {
    pool: MySqlPool,
}

impl CartRepositoryMySql {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryMySql {
    async fn get_lines(&self, user_id: &UserId) -> Result<Vec<CartLine>, RepositoryError> {
        let entities = sqlx::query_as::<_, CartLineEntity>(&format!(
            "SELECT {}, c.quantity, c.added_at FROM cart_items c \
             JOIN products p ON p.id = c.product_id \
             WHERE c.user_id = ? ORDER BY c.added_at ASC",
            JOINED_PRODUCT_COLUMNS
        ))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn get_item(
        &self,
        user_id: &UserId,
        product_id: Uuid,
    ) -> Result<CartItem, RepositoryError> {
        let entity = sqlx::query_as::<_, CartItemEntity>(
            "SELECT user_id, product_id, quantity, added_at FROM cart_items WHERE user_id = ? AND product_id = ?",
        )
        .bind(user_id.as_str())
        .bind(product_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn upsert_item(&self, item: &CartItem) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO cart_items (user_id, product_id, quantity, added_at)
            VALUES (?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE quantity = VALUES(quantity)"#,
        )
        .bind(item.user_id.as_str())
        .bind(item.product_id.to_string())
        .bind(item.quantity)
        .bind(item.added_at)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(())
    }

    async fn remove_item(
        &self,
        user_id: &UserId,
        product_id: Uuid,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE user_id = ? AND product_id = ?")
            .bind(user_id.as_str())
            .bind(product_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn clear(&self, user_id: &UserId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE user_id = ?")
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(result.rows_affected())
    }
}
