use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::user::model::User;

#[derive(Debug, Clone, Object)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    /// At least 8 characters
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email.to_string(),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AuthResponse {
    /// Bearer token for the `Authorization` header
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserResponse,
}
