use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::shared::value_objects::UserId;

pub struct CancelOrderParams {
    pub user_id: UserId,
    pub id: Uuid,
}

#[async_trait]
pub trait CancelOrderUseCase: Send + Sync {
    async fn execute(&self, params: CancelOrderParams) -> Result<Order, OrderError>;
}
