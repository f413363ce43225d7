use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::errors::RepositoryError;
use crate::domain::product::filter::ProductFilter;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::Page;

use super::model::UsageMonth;

/// Marketplace listings previously fetched and kept in `api_cache`.
#[async_trait]
pub trait ListingCacheRepository: Send + Sync {
    /// Listings matching `filter` that were cached at or after `fresh_since`.
    async fn search_fresh(
        &self,
        filter: &ProductFilter,
        fresh_since: DateTime<Utc>,
        page: Page,
    ) -> Result<Vec<Product>, RepositoryError>;
    /// Upserts `listings` and purges rows cached before `expired_before`.
    async fn store(
        &self,
        query_key: &str,
        listings: &[Product],
        expired_before: DateTime<Utc>,
    ) -> Result<(), RepositoryError>;
}

/// Per-month call counters in `api_usage`, keyed by (api name, month).
#[async_trait]
pub trait ApiUsageRepository: Send + Sync {
    /// Atomically claims one call for the month if fewer than `monthly_limit`
    /// were made. Returns the new count, or `None` when the month is used up.
    async fn try_reserve(
        &self,
        api_name: &str,
        endpoint: &str,
        month: &UsageMonth,
        monthly_limit: u32,
    ) -> Result<Option<u32>, RepositoryError>;
}
