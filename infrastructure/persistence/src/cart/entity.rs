use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::cart::model::{CartItem, CartLine};
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use crate::convert::parse_uuid;
use crate::product::entity::ProductEntity;

#[derive(Debug, FromRow)]
pub struct CartItemEntity {
    pub user_id: String,
    pub product_id: String,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

impl CartItemEntity {
    pub fn into_domain(self) -> Result<CartItem, RepositoryError> {
        Ok(CartItem {
            user_id: UserId::new(self.user_id),
            product_id: parse_uuid(&self.product_id)?,
            quantity: self.quantity,
            added_at: self.added_at,
        })
    }
}

/// A `cart_items` row joined with its product.
#[derive(Debug, FromRow)]
pub struct CartLineEntity {
    #[sqlx(flatten)]
    pub product: ProductEntity,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

impl CartLineEntity {
    pub fn into_domain(self) -> Result<CartLine, RepositoryError> {
        Ok(CartLine {
            product: self.product.into_domain()?,
            quantity: self.quantity,
            added_at: self.added_at,
        })
    }
}
