use bigdecimal::BigDecimal;
use num_traits::{FromPrimitive, ToPrimitive};
use uuid::Uuid;

use business::domain::errors::RepositoryError;

/// Maps a driver error to the domain error, logging the cause.
pub fn db_error(e: sqlx::Error) -> RepositoryError {
    tracing::error!("Database error: {}", e);
    RepositoryError::DatabaseError
}

/// Like [`db_error`], but reports unique-key violations as duplicates.
pub fn insert_error(e: sqlx::Error) -> RepositoryError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return RepositoryError::Duplicated;
    }
    db_error(e)
}

pub fn parse_uuid(raw: &str) -> Result<Uuid, RepositoryError> {
    Uuid::parse_str(raw).map_err(|_| {
        tracing::error!("Invalid UUID stored in database: {}", raw);
        RepositoryError::DatabaseError
    })
}

pub fn decimal_to_f64(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// DECIMAL(10,2) value for a price or total.
pub fn money(value: f64) -> BigDecimal {
    BigDecimal::from_f64(value).unwrap_or_default().round(2)
}
