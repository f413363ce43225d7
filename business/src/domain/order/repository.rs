use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Order;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists the order and its items, decrements stock for every item and
    /// empties the owner's cart in one transaction.
    ///
    /// Fails with `RepositoryError::Conflict` when stock ran out concurrently.
    async fn place(&self, order: &Order) -> Result<(), RepositoryError>;
    /// Orders of one user, newest first.
    async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, RepositoryError>;
    /// `RepositoryError::NotFound` also covers orders owned by someone else.
    async fn get_by_id(&self, user_id: &UserId, id: Uuid) -> Result<Order, RepositoryError>;
    /// Stores the cancelled status and gives the items back to stock in one transaction.
    async fn cancel(&self, order: &Order) -> Result<(), RepositoryError>;
}
