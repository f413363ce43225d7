use async_trait::async_trait;
use sqlx::MySqlPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::filter::ProductFilter;
use business::domain::product::model::{CategorySummary, Product};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::SortOrder;
use business::domain::shared::value_objects::Page;

use super::entity::{CachedListingEntity, CategoryCountEntity, ProductEntity, into_products};
use crate::convert::db_error;
use crate::search_sql::{PRODUCT_COLUMNS, SearchQuery, SqlParam, bind_params};

pub struct ProductRepositoryMySql {
    pool: MySqlPool,
}

impl ProductRepositoryMySql {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, query: SearchQuery) -> Result<Vec<Product>, RepositoryError> {
        let entities = bind_params(sqlx::query_as::<_, ProductEntity>(&query.sql), &query.params)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        into_products(entities, ProductEntity::into_domain)
    }
}

fn in_stock_select() -> SearchQuery {
    SearchQuery::new(&format!(
        "SELECT {} FROM products WHERE stock > 0",
        PRODUCT_COLUMNS
    ))
}

#[async_trait]
impl ProductRepository for ProductRepositoryMySql {
    async fn search(
        &self,
        filter: &ProductFilter,
        page: Page,
    ) -> Result<Vec<Product>, RepositoryError> {
        let mut query = in_stock_select();
        query.filter(filter).order_and_page(filter.sort, page);
        tracing::debug!("Catalog search: {}", query.sql);

        self.fetch(query).await
    }

    /// Falls back to cached marketplace listings, so ids handed out by a
    /// marketplace search still resolve.
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {} FROM products WHERE id = ?",
            PRODUCT_COLUMNS
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        if let Some(entity) = entity {
            return entity.into_domain();
        }

        sqlx::query_as::<_, CachedListingEntity>(&format!(
            "SELECT {}, external_url, cached_at FROM api_cache WHERE id = ?",
            PRODUCT_COLUMNS
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?
        .ok_or(RepositoryError::NotFound)?
        .into_domain()
    }

    async fn list_categories(&self) -> Result<Vec<CategorySummary>, RepositoryError> {
        let entities = sqlx::query_as::<_, CategoryCountEntity>(
            "SELECT category, COUNT(*) AS product_count FROM products WHERE stock > 0 GROUP BY category ORDER BY category",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_category(
        &self,
        category: &str,
        page: Page,
    ) -> Result<Vec<Product>, RepositoryError> {
        let mut query = in_stock_select();
        query.and(
            "LOWER(category) = LOWER(?)",
            [SqlParam::Text(category.to_string())],
        );
        query.order_and_page(SortOrder::Relevance, page);

        self.fetch(query).await
    }
}
