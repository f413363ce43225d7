use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::remove_item::{
    RemoveFromWishlistParams, RemoveFromWishlistUseCase,
};

pub struct RemoveFromWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromWishlistUseCase for RemoveFromWishlistUseCaseImpl {
    async fn execute(&self, params: RemoveFromWishlistParams) -> Result<(), WishlistError> {
        self.repository
            .remove(&params.user_id, params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => WishlistError::ItemNotFound,
                other => WishlistError::Repository(other),
            })?;

        self.logger.info(&format!(
            "Removed {} from wishlist of {}",
            params.product_id, params.user_id
        ));
        Ok(())
    }
}
