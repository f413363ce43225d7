use async_trait::async_trait;
use sqlx::MySqlPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::wishlist::model::{WishlistEntry, WishlistItem};
use business::domain::wishlist::repository::WishlistRepository;

use super::entity::WishlistEntryEntity;
use crate::convert::{db_error, insert_error};
use crate::search_sql::JOINED_PRODUCT_COLUMNS;

pub struct WishlistRepositoryMySql {
    pool: MySqlPool,
}

impl WishlistRepositoryMySql {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WishlistRepository for WishlistRepositoryMySql {
    async fn get_entries(&self, user_id: &UserId) -> Result<Vec<WishlistEntry>, RepositoryError> {
        let entities = sqlx::query_as::<_, WishlistEntryEntity>(&format!(
            "SELECT {}, w.added_at FROM wishlist_items w \
             JOIN products p ON p.id = w.product_id \
             WHERE w.user_id = ? ORDER BY w.added_at DESC",
            JOINED_PRODUCT_COLUMNS
        ))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn add(&self, item: &WishlistItem) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO wishlist_items (user_id, product_id, added_at) VALUES (?, ?, ?)")
            .bind(item.user_id.as_str())
            .bind(item.product_id.to_string())
            .bind(item.added_at)
            .execute(&self.pool)
            .await
            .map_err(insert_error)?;

        Ok(())
    }

    async fn remove(&self, user_id: &UserId, product_id: Uuid) -> Result<(), RepositoryError> {
        let result =
            sqlx::query("DELETE FROM wishlist_items WHERE user_id = ? AND product_id = ?")
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
}
