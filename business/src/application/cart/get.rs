use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<Cart, CartError> {
        self.logger
            .debug(&format!("Fetching cart for user {}", params.user_id));

        let lines = self.repository.get_lines(&params.user_id).await?;
        Ok(Cart::new(params.user_id, lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{CartItem, CartLine};
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::fixtures::product;
    use crate::domain::shared::value_objects::UserId;
    use chrono::Utc;
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
    async fn should_build_cart_with_total_from_lines() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get_lines()
            .withf(|user_id| user_id.as_str() == "user-1")
            .returning(|_| {
                Ok(vec![
                    CartLine {
                        product: product("Linen Shirt", 25.0, 5),
                        quantity: 2,
                        added_at: Utc::now(),
                    },
                    CartLine {
                        product: product("Belt", 12.5, 5),
                        quantity: 1,
                        added_at: Utc::now(),
                    },
                ])
            });

        let use_case = GetCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(GetCartParams {
                user_id: UserId::new("user-1"),
            })
            .await
            .unwrap();

        assert_eq!(cart.lines.len(), 2);
        assert_eq!(cart.total(), 62.5);
    }

    #[tokio::test]
    async fn should_return_empty_cart_for_new_user() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_get_lines().returning(|_| Ok(vec![]));

        let use_case = GetCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(GetCartParams {
                user_id: UserId::new("user-2"),
            })
            .await
            .unwrap();

        assert!(cart.is_empty());
    }
}
