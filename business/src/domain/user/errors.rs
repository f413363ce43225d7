#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.name_empty")]
    NameEmpty,
    #[error("user.invalid_email")]
    InvalidEmail,
    #[error("user.password_too_short")]
    PasswordTooShort,
    #[error("user.email_taken")]
    EmailTaken,
    #[error("user.invalid_credentials")]
    InvalidCredentials,
    #[error("user.not_found")]
    NotFound,
    #[error("user.hashing_failed")]
    Hashing,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
