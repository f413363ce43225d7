use super::errors::UserError;

/// One-way password hashing port.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, UserError>;
    /// `Ok(false)` for a wrong password; `Err` only when `hash` is unreadable.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, UserError>;
}
