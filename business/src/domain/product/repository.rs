use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::Page;

use super::filter::ProductFilter;
use super::model::{CategorySummary, Product};

/// Read access to the own catalog (`products` table).
///
/// Listing queries (`search`, `get_by_category`, `list_categories`) only see
/// in-stock products; `get_by_id` returns a product regardless of stock.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn search(&self, filter: &ProductFilter, page: Page)
    -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn list_categories(&self) -> Result<Vec<CategorySummary>, RepositoryError>;
    async fn get_by_category(
        &self,
        category: &str,
        page: Page,
    ) -> Result<Vec<Product>, RepositoryError>;
}
