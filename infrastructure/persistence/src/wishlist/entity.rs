use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::wishlist::model::WishlistEntry;

use crate::product::entity::ProductEntity;

#[derive(Debug, FromRow)]
pub struct WishlistEntryEntity {
    #[sqlx(flatten)]
    pub product: ProductEntity,
    pub added_at: DateTime<Utc>,
}

impl WishlistEntryEntity {
    pub fn into_domain(self) -> Result<WishlistEntry, RepositoryError> {
        Ok(WishlistEntry {
            product: self.product.into_domain()?,
            added_at: self.added_at,
        })
    }
}
