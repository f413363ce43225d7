use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::{Gender, ProductSource};
use crate::domain::marketplace::model::listing_id;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub category: String,
    pub gender: Option<Gender>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub stock: u32,
    pub description: Option<String>,
    pub rating: Option<f32>,
    pub source: ProductSource,
    pub external_url: Option<String>,
    pub cached_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub category: String,
    pub gender: Option<Gender>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub stock: u32,
    pub description: Option<String>,
    pub rating: Option<f32>,
}

impl Product {
    /// Builds a validated catalog product.
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        let name = props.name.trim().to_string();
        if name.is_empty() {
            return Err(ProductError::NameEmpty);
        }

        let category = props.category.trim().to_string();
        if category.is_empty() {
            return Err(ProductError::CategoryEmpty);
        }

        if !props.price.is_finite() || props.price < 0.0 {
            return Err(ProductError::InvalidPrice);
        }

        if let Some(rating) = props.rating
            && !(0.0..=5.0).contains(&rating)
        {
            return Err(ProductError::InvalidRating);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            price: props.price,
            image_url: props.image_url,
            category,
            gender: props.gender,
            color: props.color.map(|c| c.trim().to_lowercase()),
            size: props.size,
            stock: props.stock,
            description: props.description,
            rating: props.rating,
            source: ProductSource::Catalog,
            external_url: None,
            cached_at: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Builds a browse-only listing fetched from the third-party marketplace.
    pub fn marketplace_listing(
        props: NewProductProps,
        external_url: Option<String>,
    ) -> Result<Self, ProductError> {
        let mut product = Self::new(props)?;
        product.id = listing_id(external_url.as_deref(), &product.name, product.price);
        product.source = ProductSource::Marketplace;
        product.external_url = external_url;
        product.cached_at = Some(product.created_at);
        Ok(product)
    }

    pub fn is_purchasable(&self) -> bool {
        self.source == ProductSource::Catalog
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// A catalog category and how many in-stock products it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub name: String,
    pub product_count: u64,
}


#[cfg(test)]
mod tests {
    use super::*;

    fn props(name: &str, price: f64) -> NewProductProps {
        NewProductProps {
            name: name.to_string(),
            price,
            image_url: None,
            category: " Dresses ".to_string(),
            gender: Some(Gender::Women),
            color: Some(" Red ".to_string()),
            size: None,
            stock: 3,
            description: None,
            rating: None,
        }
    }

    #[test]
    fn should_create_catalog_product_when_valid() {
        let product = Product::new(props("Floral Maxi Dress", 49.99)).unwrap();

        assert_eq!(product.name, "Floral Maxi Dress");
        assert_eq!(product.category, "Dresses");
        assert_eq!(product.color.as_deref(), Some("red"));
        assert_eq!(product.source, ProductSource::Catalog);
        assert!(product.is_purchasable());
        assert!(product.in_stock());
    }

    #[test]
    fn should_reject_blank_name() {
        let result = Product::new(props("   ", 10.0));
        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[test]
    fn should_reject_blank_category() {
        let mut p = props("Tee", 10.0);
        p.category = "  ".to_string();
        assert!(matches!(
            Product::new(p).unwrap_err(),
            ProductError::CategoryEmpty
        ));
    }

    #[test]
    fn should_reject_negative_or_nan_price() {
        assert!(matches!(
            Product::new(props("Tee", -1.0)).unwrap_err(),
            ProductError::InvalidPrice
        ));
        assert!(matches!(
            Product::new(props("Tee", f64::NAN)).unwrap_err(),
            ProductError::InvalidPrice
        ));
    }

    #[test]
    fn should_reject_rating_out_of_range() {
        let mut p = props("Tee", 10.0);
        p.rating = Some(5.5);
        assert!(matches!(
            Product::new(p).unwrap_err(),
            ProductError::InvalidRating
        ));
    }

    #[test]
    fn should_mark_marketplace_listing_as_not_purchasable() {
        let listing = Product::marketplace_listing(
            props("Linen Shirt", 25.0),
            Some("https://market.example/item/1".to_string()),
        )
        .unwrap();

        assert_eq!(listing.source, ProductSource::Marketplace);
        assert!(listing.cached_at.is_some());
        assert!(!listing.is_purchasable());
    }

    #[test]
    fn should_keep_listing_id_across_fetches() {
        let url = Some("https://market.example/item/1".to_string());
        let first = Product::marketplace_listing(props("Linen Shirt", 25.0), url.clone()).unwrap();
        let again = Product::marketplace_listing(props("Linen Shirt", 22.0), url).unwrap();

        assert_eq!(first.id, again.id);
    }
}
