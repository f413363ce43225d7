use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::User;
use super::value_objects::Email;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new account; a taken e-mail yields `RepositoryError::Duplicated`.
    async fn create(&self, user: &User) -> Result<(), RepositoryError>;
    async fn get_by_id(&self, id: &UserId) -> Result<User, RepositoryError>;
    async fn get_by_email(&self, email: &Email) -> Result<User, RepositoryError>;
    async fn exists_by_email(&self, email: &Email) -> Result<bool, RepositoryError>;
}
