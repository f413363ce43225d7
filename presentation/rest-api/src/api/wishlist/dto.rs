use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::wishlist::model::{WishlistEntry, WishlistItem};

use crate::api::product::dto::ProductResponse;

#[derive(Debug, Clone, Object)]
pub struct AddToWishlistRequest {
    pub product_id: String,
}

#[derive(Debug, Clone, Object)]
pub struct WishlistEntryResponse {
    pub product: ProductResponse,
    pub added_at: DateTime<Utc>,
}

impl From<WishlistEntry> for WishlistEntryResponse {
    fn from(entry: WishlistEntry) -> Self {
        Self {
            product: entry.product.into(),
            added_at: entry.added_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct WishlistItemResponse {
    pub product_id: String,
    pub added_at: DateTime<Utc>,
}

impl From<WishlistItem> for WishlistItemResponse {
    fn from(item: WishlistItem) -> Self {
        Self {
            product_id: item.product_id.to_string(),
            added_at: item.added_at,
        }
    }
}
