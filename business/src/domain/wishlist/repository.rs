use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{WishlistEntry, WishlistItem};

#[async_trait]
pub trait WishlistRepository: Send + Sync {
    /// Saved products, most recently added first.
    async fn get_entries(&self, user_id: &UserId) -> Result<Vec<WishlistEntry>, RepositoryError>;
    /// Fails with `RepositoryError::Duplicated` when the product is already saved.
    async fn add(&self, item: &WishlistItem) -> Result<(), RepositoryError>;
    async fn remove(&self, user_id: &UserId, product_id: Uuid) -> Result<(), RepositoryError>;
}
