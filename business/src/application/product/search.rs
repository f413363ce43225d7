use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::domain::logger::Logger;
use crate::domain::marketplace::model::{MarketplaceQuota, UsageMonth, query_key};
use crate::domain::marketplace::repository::{ApiUsageRepository, ListingCacheRepository};
use crate::domain::marketplace::services::ExternalCatalogService;
use crate::domain::product::errors::ProductError;
use crate::domain::product::filter::ProductFilter;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::search::{
    ResultSource, SearchProductsParams, SearchProductsUseCase, SearchResult,
};
use crate::domain::search::parser::parse_query;
use crate::domain::shared::value_objects::Page;

/// How many listings are requested from the marketplace per outbound call.
const MARKETPLACE_FETCH_SIZE: usize = 40;

/// Metered third-party search used when neither the catalog nor the cache has results.
pub struct MarketplaceFallback {
    pub service: Arc<dyn ExternalCatalogService>,
    pub usage: Arc<dyn ApiUsageRepository>,
    pub quota: MarketplaceQuota,
}

pub struct SearchProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub cache: Arc<dyn ListingCacheRepository>,
    pub marketplace: Option<MarketplaceFallback>,
    pub cache_ttl: Duration,
    pub logger: Arc<dyn Logger>,
}

impl SearchProductsUseCaseImpl {
    async fn search_cache(&self, filter: &ProductFilter, page: Page) -> Vec<Product> {
        let fresh_since = Utc::now() - self.cache_ttl;
        match self.cache.search_fresh(filter, fresh_since, page).await {
            Ok(listings) => listings,
            Err(e) => {
                self.logger
                    .warn(&format!("Listing cache lookup failed: {}", e));
                Vec::new()
            }
        }
    }

    async fn search_marketplace(
        &self,
        fallback: &MarketplaceFallback,
        query: &str,
        filter: &ProductFilter,
        page: Page,
    ) -> Vec<Product> {
        let api_name = fallback.service.api_name();
        let month = UsageMonth::current();

        let reserved = fallback
            .usage
            .try_reserve(
                api_name,
                fallback.service.endpoint(),
                &month,
                fallback.quota.monthly_limit,
            )
            .await;

        match reserved {
            Ok(Some(count)) => self.logger.debug(&format!(
                "{} calls this month: {}/{}",
                api_name, count, fallback.quota.monthly_limit
            )),
            Ok(None) => {
                self.logger.info(&format!(
                    "Monthly {} quota of {} exhausted, skipping marketplace search",
                    api_name, fallback.quota.monthly_limit
                ));
                return Vec::new();
            }
            Err(e) => {
                self.logger
                    .warn(&format!("Could not reserve {} call for {}: {}", api_name, month, e));
                return Vec::new();
            }
        }

        let response = fallback.service.search(query, MARKETPLACE_FETCH_SIZE).await;

        let listings = match response {
            Ok(listings) => listings,
            Err(e) => {
                self.logger
                    .error(&format!("Marketplace search for '{}' failed: {}", query, e));
                return Vec::new();
            }
        };

        let expired_before = Utc::now() - self.cache_ttl;
        if let Err(e) = self
            .cache
            .store(&query_key(query), &listings, expired_before)
            .await
        {
            self.logger
                .warn(&format!("Could not cache marketplace listings: {}", e));
        }

        let mut matching: Vec<Product> = listings
            .into_iter()
            .filter(|listing| filter.matches(listing))
            .collect();
        filter.sort_products(&mut matching);
        matching.truncate(page.limit as usize);
        matching
    }
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, params: SearchProductsParams) -> Result<SearchResult, ProductError> {
        let query = params.query.as_deref().unwrap_or_default().trim().to_string();
        self.logger
            .info(&format!("Searching products for query: '{}'", query));

        let mut filter = parse_query(&query);
        params.overrides.apply(&mut filter);

        let products = self.repository.search(&filter, params.page).await?;
        if !products.is_empty() || query.is_empty() {
            return Ok(SearchResult {
                products,
                filter,
                source: ResultSource::Catalog,
            });
        }

        let cached = self.search_cache(&filter, params.page).await;
        if !cached.is_empty() {
            self.logger
                .info(&format!("Serving {} cached listings", cached.len()));
            return Ok(SearchResult {
                products: cached,
                filter,
                source: ResultSource::Cache,
            });
        }

        // Only the first page may spend quota.
        if params.page.offset == 0
            && let Some(fallback) = &self.marketplace
        {
            let listings = self
                .search_marketplace(fallback, &query, &filter, params.page)
                .await;
            if !listings.is_empty() {
                return Ok(SearchResult {
                    products: listings,
                    filter,
                    source: ResultSource::Marketplace,
                });
            }
        }

        Ok(SearchResult {
            products: Vec::new(),
            filter,
            source: ResultSource::Catalog,
        })
    }
}
