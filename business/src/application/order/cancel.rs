use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::cancel::{CancelOrderParams, CancelOrderUseCase};

pub struct CancelOrderUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CancelOrderUseCase for CancelOrderUseCaseImpl {
    async fn execute(&self, params: CancelOrderParams) -> Result<Order, OrderError> {
        let mut order = self
            .repository
            .get_by_id(&params.user_id, params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::NotFound,
                other => OrderError::Repository(other),
            })?;

        order.cancel()?;
        self.repository.cancel(&order).await.map_err(|e| match e {
            // Status moved on (e.g. shipped) between the read and the update.
            RepositoryError::Conflict => OrderError::NotCancellable,
            other => OrderError::Repository(other),
        })?;

        self.logger.info(&format!(
            "Order {} cancelled by {}, {} items returned to stock",
            order.id,
            order.user_id,
            order.item_count()
        ));
        Ok(order)
    }
}
