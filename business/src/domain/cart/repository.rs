use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{CartItem, CartLine};

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Cart rows joined with their products, oldest first.
    async fn get_lines(&self, user_id: &UserId) -> Result<Vec<CartLine>, RepositoryError>;
    async fn get_item(&self, user_id: &UserId, product_id: Uuid)
    -> Result<CartItem, RepositoryError>;
    /// Inserts the row or overwrites the quantity of an existing one.
    async fn upsert_item(&self, item: &CartItem) -> Result<(), RepositoryError>;
    async fn remove_item(&self, user_id: &UserId, product_id: Uuid)
    -> Result<(), RepositoryError>;
    /// Returns how many rows were deleted.
    async fn clear(&self, user_id: &UserId) -> Result<u64, RepositoryError>;
}
