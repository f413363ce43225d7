use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::UserId;

use super::errors::UserError;
use super::value_objects::Email;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    /// PHC-formatted hash, never the plain password.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: &str, email: Email, password_hash: String) -> Result<Self, UserError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(UserError::NameEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            id: UserId::generate(),
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn from_repository(
        id: UserId,
        name: String,
        email: Email,
        password_hash: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_user_with_trimmed_name() {
        let email = Email::parse("ana@example.com").unwrap();
        let user = User::new("  Ana  ", email, "$argon2id$hash".to_string()).unwrap();

        assert_eq!(user.name, "Ana");
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn should_reject_blank_name() {
        let email = Email::parse("ana@example.com").unwrap();
        assert!(matches!(
            User::new(" ", email, String::new()),
            Err(UserError::NameEmpty)
        ));
    }
}
