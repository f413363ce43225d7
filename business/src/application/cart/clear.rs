use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self, params: ClearCartParams) -> Result<u64, CartError> {
        let removed = self.repository.clear(&params.user_id).await?;
        self.logger.info(&format!(
            "Cleared {} lines from cart of {}",
            removed, params.user_id
        ));
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{CartItem, CartLine};
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn get_lines(&self, user_id: &UserId) -> Result<Vec<CartLine>, RepositoryError>;
            async fn get_item(&self, user_id: &UserId, product_id: Uuid) -> Result<CartItem, RepositoryError>;
            async fn upsert_item(&self, item: &CartItem) -> Result<(), RepositoryError>;
            async fn remove_item(&self, user_id: &UserId, product_id: Uuid) -> Result<(), RepositoryError>;
            async fn clear(&self, user_id: &UserId) -> Result<u64, RepositoryError>;
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
    async fn should_return_number_of_removed_lines() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_clear()
            .withf(|user_id| user_id.as_str() == "user-9")
            .returning(|_| Ok(3));

        let use_case = ClearCartUseCaseImpl {
            repository: Arc::new(cart_repo),
            logger: mock_logger(),
        };

        let removed = use_case
            .execute(ClearCartParams {
                user_id: UserId::new("user-9"),
            })
            .await
            .unwrap();

        assert_eq!(removed, 3);
    }
}
