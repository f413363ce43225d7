use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::user::model::User;
use business::domain::user::value_objects::Email;

#[derive(Debug, FromRow)]
pub struct UserEntity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserEntity {
    pub fn into_domain(self) -> Result<User, RepositoryError> {
        let email = Email::parse(&self.email).map_err(|_| {
            tracing::error!("Invalid e-mail stored for user {}", self.id);
            RepositoryError::DatabaseError
        })?;

        Ok(User::from_repository(
            UserId::new(self.id),
            self.name,
            email,
            self.password_hash,
            self.created_at,
            self.updated_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(email: &str) -> UserEntity {
        let now = Utc::now();
        UserEntity {
            id: "u-1".to_string(),
            name: "Ana".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$hash".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn should_map_user_row() {
        let user = entity("ana@example.com").into_domain().unwrap();
        assert_eq!(user.id.as_str(), "u-1");
        assert_eq!(user.email.as_str(), "ana@example.com");
    }

    #[test]
    fn should_fail_on_corrupt_email() {
        assert!(entity("not-an-email").into_domain().is_err());
    }
}
