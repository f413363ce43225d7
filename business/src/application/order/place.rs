use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};

pub struct PlaceOrderUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub cart_repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Result<Order, OrderError> {
        let lines = self.cart_repository.get_lines(&params.user_id).await?;
        let cart = Cart::new(params.user_id, lines);

        let order = Order::from_cart(&cart, params.shipping_address)?;

        self.repository.place(&order).await.map_err(|e| match e {
            RepositoryError::Conflict => {
                self.logger.warn(&format!(
                    "Checkout of {} lost a stock race",
                    order.user_id
                ));
                OrderError::InsufficientStock
            }
            other => OrderError::Repository(other),
        })?;

        self.logger.info(&format!(
            "Order {} placed by {}: {} items, total {:.2}",
            order.id,
            order.user_id,
            order.item_count(),
            order.total
        ));
        Ok(order)
    }
}
