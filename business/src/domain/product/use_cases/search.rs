use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::filter::ProductFilter;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::{Gender, SortOrder};
use crate::domain::search::vocabulary;
use crate::domain::shared::value_objects::Page;

/// Explicit filter values sent alongside the free-text query. Each one
/// replaces whatever the query text implied for that attribute.
#[derive(Debug, Clone, Default)]
pub struct SearchOverrides {
    pub category: Option<String>,
    pub gender: Option<Gender>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: Option<SortOrder>,
}

impl SearchOverrides {
    pub fn apply(self, filter: &mut ProductFilter) {
        if let Some(category) = self.category.filter(|c| !c.trim().is_empty()) {
            filter.category = Some(vocabulary::resolve_category(&category));
        }
        if let Some(gender) = self.gender {
            filter.gender = Some(gender);
        }
        if let Some(color) = self.color.filter(|c| !c.trim().is_empty()) {
            let color = color.trim().to_lowercase();
            let canonical = vocabulary::color_for(&color).map(str::to_string);
            filter.color = Some(canonical.unwrap_or(color));
        }
        if let Some(size) = self.size.filter(|s| !s.trim().is_empty()) {
            filter.size = Some(size.trim().to_uppercase());
        }
        if self.min_price.is_some() {
            filter.min_price = self.min_price;
        }
        if self.max_price.is_some() {
            filter.max_price = self.max_price;
        }
        if let Some(sort) = self.sort {
            filter.sort = sort;
        }
        filter.normalize_price_range();
    }
}

pub struct SearchProductsParams {
    pub query: Option<String>,
    pub overrides: SearchOverrides,
    pub page: Page,
}

/// Which product source produced a search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    Catalog,
    Cache,
    Marketplace,
}

impl std::fmt::Display for ResultSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultSource::Catalog => write!(f, "catalog"),
            ResultSource::Cache => write!(f, "cache"),
            ResultSource::Marketplace => write!(f, "marketplace"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub products: Vec<Product>,
    /// The filter actually applied, for clients that echo it back.
    pub filter: ProductFilter,
    pub source: ResultSource,
}

#[async_trait]
pub trait SearchProductsUseCase: Send + Sync {
    async fn execute(&self, params: SearchProductsParams) -> Result<SearchResult, ProductError>;
}
