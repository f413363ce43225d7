use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::WishlistItem;

pub struct AddToWishlistParams {
    pub user_id: UserId,
    pub product_id: Uuid,
}

#[async_trait]
pub trait AddToWishlistUseCase: Send + Sync {
    async fn execute(&self, params: AddToWishlistParams) -> Result<WishlistItem, WishlistError>;
}
