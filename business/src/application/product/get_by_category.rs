use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_category::{
    GetProductsByCategoryParams, GetProductsByCategoryUseCase,
};

pub struct GetProductsByCategoryUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsByCategoryUseCase for GetProductsByCategoryUseCaseImpl {
    async fn execute(
        &self,
        params: GetProductsByCategoryParams,
    ) -> Result<Vec<Product>, ProductError> {
        let category = params.category.trim();
        if category.is_empty() {
            return Err(ProductError::CategoryEmpty);
        }

        self.logger.info(&format!(
            "Fetching products in category '{}' (limit {}, offset {})",
            category, params.page.limit, params.page.offset
        ));

        let products = self
            .repository
            .get_by_category(category, params.page)
            .await?;

        Ok(products)
    }
}
