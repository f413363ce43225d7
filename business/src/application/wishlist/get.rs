use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::WishlistEntry;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::get::{GetWishlistParams, GetWishlistUseCase};

pub struct GetWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetWishlistUseCase for GetWishlistUseCaseImpl {
    async fn execute(
        &self,
        params: GetWishlistParams,
    ) -> Result<Vec<WishlistEntry>, WishlistError> {
        self.logger
            .debug(&format!("Fetching wishlist for user {}", params.user_id));
        Ok(self.repository.get_entries(&params.user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::fixtures::product;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::wishlist::model::WishlistItem;
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub WishlistRepo {}

        #[async_trait]
        impl WishlistRepository for WishlistRepo {
            async fn get_entries(&self, user_id: &UserId) -> Result<Vec<WishlistEntry>, RepositoryError>;
            async fn add(&self, item: &WishlistItem) -> Result<(), RepositoryError>;
            async fn remove(&self, user_id: &UserId, product_id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_saved_products() {
        let mut repo = MockWishlistRepo::new();
        repo.expect_get_entries().returning(|_| {
            Ok(vec![WishlistEntry {
                product: product("Silk Scarf", 30.0, 4),
                added_at: Utc::now(),
            }])
        });

        let use_case = GetWishlistUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let entries = use_case
            .execute(GetWishlistParams {
                user_id: UserId::new("user-1"),
            })
            .await
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].product.name, "Silk Scarf");
    }
}
