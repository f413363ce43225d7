use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::WishlistItem;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::add_item::{AddToWishlistParams, AddToWishlistUseCase};

pub struct AddToWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToWishlistUseCase for AddToWishlistUseCaseImpl {
    async fn execute(&self, params: AddToWishlistParams) -> Result<WishlistItem, WishlistError> {
        let product = self
            .product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => WishlistError::ProductNotFound,
                other => WishlistError::Repository(other),
            })?;

        if !product.is_purchasable() {
            return Err(WishlistError::NotPurchasable);
        }

        let item = WishlistItem::new(params.user_id, params.product_id);
        self.repository.add(&item).await.map_err(|e| match e {
            RepositoryError::Duplicated => WishlistError::AlreadyExists,
            other => WishlistError::Repository(other),
        })?;

        self.logger.info(&format!(
            "Saved {} to wishlist of {}",
            item.product_id, item.user_id
        ));
        Ok(item)
    }
}
