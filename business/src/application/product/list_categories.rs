use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::CategorySummary;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list_categories::ListCategoriesUseCase;

pub struct ListCategoriesUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListCategoriesUseCase for ListCategoriesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<CategorySummary>, ProductError> {
        self.logger.info("Listing product categories");

        let mut categories = self.repository.list_categories().await?;
        categories.retain(|c| !c.name.trim().is_empty());
        categories.sort_by_key(|c| c.name.to_lowercase());

        Ok(categories)
    }
}
