use async_trait::async_trait;

use crate::domain::product::model::Product;

use super::errors::MarketplaceError;

/// Service port for a third-party marketplace search API.
///
/// Returned listings are built with `Product::marketplace_listing` and are
/// browse-only.
#[async_trait]
pub trait ExternalCatalogService: Send + Sync {
    /// Name under which calls are metered in `api_usage`.
    fn api_name(&self) -> &'static str;
    /// Endpoint path recorded alongside the usage counter.
    fn endpoint(&self) -> &'static str;
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Product>, MarketplaceError>;
}
