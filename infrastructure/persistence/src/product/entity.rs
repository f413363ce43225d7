use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{CategorySummary, Product};
use business::domain::product::value_objects::{Gender, ProductSource};

use crate::convert::{decimal_to_f64, parse_uuid};

/// Row shape shared by `products` and `api_cache`.
#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: String,
    pub name: String,
    pub price: BigDecimal,
    pub image_url: Option<String>,
    pub category: String,
    pub gender: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub stock: u32,
    pub description: Option<String>,
    pub rating: Option<f32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        Ok(Product {
            id: parse_uuid(&self.id)?,
            name: self.name,
            price: decimal_to_f64(&self.price),
            image_url: self.image_url,
            category: self.category,
            gender: self.gender.and_then(|g| g.parse::<Gender>().ok()),
            color: self.color,
            size: self.size,
            stock: self.stock,
            description: self.description,
            rating: self.rating,
            source: ProductSource::Catalog,
            external_url: None,
            cached_at: None,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
pub struct CachedListingEntity {
    #[sqlx(flatten)]
    pub product: ProductEntity,
    pub external_url: Option<String>,
    pub cached_at: DateTime<Utc>,
}

impl CachedListingEntity {
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let mut product = self.product.into_domain()?;
        product.source = ProductSource::Marketplace;
        product.external_url = self.external_url;
        product.cached_at = Some(self.cached_at);
        Ok(product)
    }
}

#[derive(Debug, FromRow)]
pub struct CategoryCountEntity {
    pub category: String,
    pub product_count: i64,
}

impl CategoryCountEntity {
    pub fn into_domain(self) -> CategorySummary {
        CategorySummary {
            name: self.category,
            product_count: self.product_count.max(0) as u64,
        }
    }
}

/// Collects rows, failing on the first one that cannot be mapped.
pub fn into_products<E>(
    entities: Vec<E>,
    map: impl Fn(E) -> Result<Product, RepositoryError>,
) -> Result<Vec<Product>, RepositoryError> {
    entities.into_iter().map(map).collect()
}
