use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_item::{UpdateCartItemParams, UpdateCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct UpdateCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

fn missing_line(e: RepositoryError) -> CartError {
    match e {
        RepositoryError::NotFound => CartError::ItemNotFound,
        other => CartError::Repository(other),
    }
}

#[async_trait]
impl UpdateCartItemUseCase for UpdateCartItemUseCaseImpl {
    async fn execute(&self, params: UpdateCartItemParams) -> Result<Cart, CartError> {
        if params.quantity == 0 {
            self.repository
                .remove_item(&params.user_id, params.product_id)
                .await
                .map_err(missing_line)?;
            self.logger.info(&format!(
                "Removed {} from cart of {}",
                params.product_id, params.user_id
            ));
        } else {
            let mut item = self
                .repository
                .get_item(&params.user_id, params.product_id)
                .await
                .map_err(missing_line)?;

            let product = self
                .product_repository
                .get_by_id(params.product_id)
                .await
                .map_err(|e| match e {
                    RepositoryError::NotFound => CartError::ProductNotFound,
                    other => CartError::Repository(other),
                })?;

            if params.quantity > product.stock {
                return Err(CartError::InsufficientStock);
            }

            item.quantity = params.quantity;
            self.repository.upsert_item(&item).await?;
            self.logger.info(&format!(
                "Set quantity of {} in cart of {} to {}",
                params.product_id, params.user_id, params.quantity
            ));
        }

        let lines = self.repository.get_lines(&params.user_id).await?;
        Ok(Cart::new(params.user_id, lines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{CartItem, CartLine};
    use crate::domain::product::filter::ProductFilter;
    use crate::domain::product::model::fixtures::product;
    use crate::domain::product::model::{CategorySummary, Product};
    use crate::domain::shared::value_objects::{Page, UserId};
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
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn search(&self, filter: &ProductFilter, page: Page) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn list_categories(&self) -> Result<Vec<CategorySummary>, RepositoryError>;
            async fn get_by_category(&self, category: &str, page: Page) -> Result<Vec<Product>, RepositoryError>;
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

    fn params(product_id: Uuid, quantity: u32) -> UpdateCartItemParams {
        UpdateCartItemParams {
            user_id: UserId::new("user-1"),
            product_id,
            quantity,
        }
    }

    #[tokio::test]
    async fn should_overwrite_quantity_of_existing_line() {
        let stored = product("Chinos", 45.0, 6);
        let product_id = stored.id;

        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_get_item()
            .returning(|user_id, id| Ok(CartItem::new(user_id.clone(), id, 1)));
        cart_repo
            .expect_upsert_item()
            .withf(|item| item.quantity == 6)
            .times(1)
            .returning(|_| Ok(()));
        cart_repo.expect_get_lines().returning(|_| Ok(vec![]));

        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));

        let use_case = UpdateCartItemUseCaseImpl {
            repository: Arc::new(cart_repo),
            product_repository: Arc::new(product_repo),
            logger: mock_logger(),
        };

        assert!(use_case.execute(params(product_id, 6)).await.is_ok());
    }

    #[tokio::test]
    async fn should_remove_line_when_quantity_is_zero() {
        let product_id = Uuid::new_v4();

        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_remove_item()
            .withf(move |_, id| *id == product_id)
            .times(1)
            .returning(|_, _| Ok(()));
        cart_repo.expect_upsert_item().never();
        cart_repo.expect_get_lines().returning(|_| Ok(vec![]));

        let use_case = UpdateCartItemUseCaseImpl {
            repository: Arc::new(cart_repo),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let cart = use_case.execute(params(product_id, 0)).await.unwrap();
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn should_report_unknown_line() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_get_item()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = UpdateCartItemUseCaseImpl {
            repository: Arc::new(cart_repo),
            product_repository: Arc::new(MockProductRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(Uuid::new_v4(), 2)).await;
        assert!(matches!(result.unwrap_err(), CartError::ItemNotFound));
    }

    #[tokio::test]
    async fn should_reject_quantity_above_stock() {
        let stored = product("Chinos", 45.0, 2);
        let product_id = stored.id;

        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_get_item()
            .returning(|user_id, id| Ok(CartItem::new(user_id.clone(), id, 1)));
        cart_repo.expect_upsert_item().never();

        let mut product_repo = MockProductRepo::new();
        product_repo
            .expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));

        let use_case = UpdateCartItemUseCaseImpl {
            repository: Arc::new(cart_repo),
            product_repository: Arc::new(product_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(product_id, 3)).await;
        assert!(matches!(result.unwrap_err(), CartError::InsufficientStock));
    }
}
