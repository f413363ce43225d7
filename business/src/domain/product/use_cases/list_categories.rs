use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::CategorySummary;

#[async_trait]
pub trait ListCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CategorySummary>, ProductError>;
}
