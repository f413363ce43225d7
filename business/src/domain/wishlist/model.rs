use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct WishlistItem {
    pub user_id: UserId,
    pub product_id: Uuid,
    pub added_at: DateTime<Utc>,
}

impl WishlistItem {
    pub fn new(user_id: UserId, product_id: Uuid) -> Self {
        Self {
            user_id,
            product_id,
            added_at: Utc::now(),
        }
    }
}

/// A saved product as shown to the shopper.
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistEntry {
    pub product: Product,
    pub added_at: DateTime<Utc>,
}
