use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;

use business::domain::errors::RepositoryError;
use business::domain::marketplace::repository::ListingCacheRepository;
use business::domain::product::filter::ProductFilter;
use business::domain::product::model::Product;
use business::domain::shared::value_objects::Page;

use crate::convert::{db_error, money};
use crate::product::entity::{CachedListingEntity, into_products};
use crate::search_sql::{PRODUCT_COLUMNS, SearchQuery, SqlParam, bind_params};

/// Listing ids are derived from the external URL (or name and price), so
/// re-fetching an item refreshes its existing row.
const UPSERT_LISTING: &str = r#"INSERT INTO api_cache
    (id, query_key, name, price, image_url, category, gender, color, size, stock,
     description, rating, external_url, cached_at, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
    ON DUPLICATE KEY UPDATE
        query_key = VALUES(query_key),
        name = VALUES(name),
        price = VALUES(price),
        image_url = VALUES(image_url),
        category = VALUES(category),
        gender = VALUES(gender),
        color = VALUES(color),
        size = VALUES(size),
        stock = VALUES(stock),
        description = VALUES(description),
        rating = VALUES(rating),
        cached_at = VALUES(cached_at),
        updated_at = VALUES(updated_at)"#;

pub struct ListingCacheRepositoryMySql {
    pool: MySqlPool,
}

impl ListingCacheRepositoryMySql {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListingCacheRepository for ListingCacheRepositoryMySql {
    async fn search_fresh(
        &self,
        filter: &ProductFilter,
        fresh_since: DateTime<Utc>,
        page: Page,
    ) -> Result<Vec<Product>, RepositoryError> {
        let mut query = SearchQuery::new(&format!(
            "SELECT {}, external_url, cached_at FROM api_cache WHERE stock > 0",
            PRODUCT_COLUMNS
        ));
        query
            .and("cached_at >= ?", [SqlParam::Timestamp(fresh_since)])
            .filter(filter)
            .order_and_page(filter.sort, page);

        let entities = bind_params(
            sqlx::query_as::<_, CachedListingEntity>(&query.sql),
            &query.params,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        into_products(entities, CachedListingEntity::into_domain)
    }

    async fn store(
        &self,
        query_key: &str,
        listings: &[Product],
        expired_before: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(db_error)?;
        let now = Utc::now();

        let purged = sqlx::query("DELETE FROM api_cache WHERE cached_at < ?")
            .bind(expired_before)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?
            .rows_affected();
        if purged > 0 {
            tracing::debug!("Purged {} expired cached listings", purged);
        }

        for listing in listings {
            sqlx::query(UPSERT_LISTING)
                .bind(listing.id.to_string())
                .bind(query_key)
                .bind(&listing.name)
                .bind(money(listing.price))
                .bind(&listing.image_url)
                .bind(&listing.category)
                .bind(listing.gender.map(|g| g.to_string()))
                .bind(&listing.color)
                .bind(&listing.size)
                .bind(listing.stock)
                .bind(&listing.description)
                .bind(listing.rating)
                .bind(&listing.external_url)
                .bind(now)
                .bind(listing.created_at)
                .bind(now)
                .execute(&mut *tx)
                .await
                .map_err(db_error)?;
        }

        tx.commit().await.map_err(db_error)?;
        tracing::debug!("Cached {} listings for '{}'", listings.len(), query_key);
        Ok(())
    }
}
