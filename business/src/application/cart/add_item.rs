use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddToCartParams, AddToCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddToCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCartUseCase for AddToCartUseCaseImpl {
    async fn execute(&self, params: AddToCartParams) -> Result<Cart, CartError> {
        if params.quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        let product = self
            .product_repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        if !product.is_purchasable() {
            return Err(CartError::NotPurchasable);
        }

        let in_cart = match self
            .repository
            .get_item(&params.user_id, params.product_id)
            .await
        {
            Ok(item) => item.quantity,
            Err(RepositoryError::NotFound) => 0,
            Err(other) => return Err(other.into()),
        };

        let quantity = in_cart.saturating_add(params.quantity);
        if quantity > product.stock {
            self.logger.warn(&format!(
                "Cannot add {} x {} to cart of {}: only {} in stock",
                params.quantity, product.id, params.user_id, product.stock
            ));
            return Err(CartError::InsufficientStock);
        }

        let item = CartItem::new(params.user_id.clone(), params.product_id, quantity);
        self.repository.upsert_item(&item).await?;

        self.logger.info(&format!(
            "Cart of {} now holds {} x {}",
            params.user_id, quantity, product.id
        ));

        let lines = self.repository.get_lines(&params.user_id).await?;
        Ok(Cart::new(params.user_id, lines))
    }
}
