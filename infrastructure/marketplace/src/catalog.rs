use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use business::domain::marketplace::errors::MarketplaceError;
use business::domain::marketplace::services::ExternalCatalogService;
use business::domain::product::model::{NewProductProps, Product};
use business::domain::product::value_objects::Gender;

use crate::client::MarketplaceClient;

pub const API_NAME: &str = "marketplace";
pub const SEARCH_ENDPOINT: &str = "/v1/products/search";

const DEFAULT_CATEGORY: &str = "Marketplace";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Vec<Listing>,
}

/// One listing as returned by the API; every field but the title is optional.
#[derive(Debug, Deserialize)]
struct Listing {
    #[serde(alias = "name")]
    title: Option<String>,
    /// Either a number or a display string such as "$1,299.00".
    price: Option<Value>,
    #[serde(alias = "image_url", alias = "thumbnail")]
    image: Option<String>,
    category: Option<String>,
    gender: Option<String>,
    color: Option<String>,
    size: Option<String>,
    stock: Option<u32>,
    description: Option<String>,
    rating: Option<f32>,
    #[serde(alias = "link", alias = "product_url")]
    url: Option<String>,
}

fn parse_price(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect::<String>()
            .parse()
            .ok(),
        _ => None,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl Listing {
    /// `None` when the listing has no usable title or price.
    fn into_product(self) -> Option<Product> {
        let name = non_blank(self.title)?;
        let price = self.price.as_ref().and_then(parse_price)?;

        let props = NewProductProps {
            name,
            price,
            image_url: non_blank(self.image),
            category: non_blank(self.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            gender: self.gender.and_then(|g| g.parse::<Gender>().ok()),
            color: non_blank(self.color),
            size: non_blank(self.size).map(|s| s.to_uppercase()),
            stock: self.stock.unwrap_or(1),
            description: non_blank(self.description),
            rating: self.rating.filter(|r| (0.0..=5.0).contains(r)),
        };

        match Product::marketplace_listing(props, non_blank(self.url)) {
            Ok(product) => Some(product),
            Err(e) => {
                tracing::warn!("Skipping marketplace listing: {}", e);
                None
            }
        }
    }
}

fn parse_listings(body: Value) -> Result<Vec<Product>, MarketplaceError> {
    let response: SearchResponse = serde_json::from_value(body).map_err(|e| {
        tracing::error!("Unexpected marketplace response: {}", e);
        MarketplaceError::InvalidResponse
    })?;

    Ok(response
        .products
        .into_iter()
        .filter_map(Listing::into_product)
        .collect())
}

pub struct MarketplaceCatalog {
    client: MarketplaceClient,
}

impl MarketplaceCatalog {
    pub fn new(client: MarketplaceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ExternalCatalogService for MarketplaceCatalog {
    fn api_name(&self) -> &'static str {
        API_NAME
    }

    fn endpoint(&self) -> &'static str {
        SEARCH_ENDPOINT
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Product>, MarketplaceError> {
        let limit = limit.to_string();
        let response = self
            .client
            .client
            .get(self.client.url(SEARCH_ENDPOINT))
            .header("X-Api-Key", &self.client.api_key)
            .query(&[("q", query), ("limit", limit.as_str())])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Marketplace request failed: {}", e);
                MarketplaceError::RequestFailed
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketplaceError::RateLimited);
        }
        if !status.is_success() {
            tracing::error!("Marketplace answered {}", status);
            return Err(MarketplaceError::RequestFailed);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|_| MarketplaceError::InvalidResponse)?;

        let listings = parse_listings(body)?;
        tracing::info!("Marketplace returned {} listings for '{}'", listings.len(), query);
        Ok(listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::value_objects::ProductSource;
    use serde_json::json;

    #[test]
    fn should_map_listings_to_browse_only_products() {
        let body = json!({
            "products": [
                {
                    "title": "Linen Summer Dress",
                    "price": "$1,299.50",
                    "image": "https://cdn.example.com/1.jpg",
                    "category": "Dresses",
                    "gender": "Women",
                    "color": "Blue",
                    "size": "m",
                    "rating": 4.1,
                    "url": "https://market.example.com/p/1"
                },
                { "name": "Canvas Tote", "price": 18 }
            ]
        });

        let products = parse_listings(body).unwrap();

        assert_eq!(products.len(), 2);
        let dress = &products[0];
        assert_eq!(dress.price, 1299.5);
        assert_eq!(dress.gender, Some(Gender::Women));
        assert_eq!(dress.color.as_deref(), Some("blue"));
        assert_eq!(dress.size.as_deref(), Some("M"));
        assert_eq!(dress.source, ProductSource::Marketplace);
        assert_eq!(
            dress.external_url.as_deref(),
            Some("https://market.example.com/p/1")
        );
        assert!(!dress.is_purchasable());

        assert_eq!(products[1].category, DEFAULT_CATEGORY);
        assert_eq!(products[1].stock, 1);
    }

    #[test]
    fn should_skip_listings_without_title_or_price() {
        let body = json!({
            "products": [
                { "title": "  ", "price": 10 },
                { "title": "Scarf" },
                { "title": "Beanie", "price": "free" }
            ]
        });

        assert!(parse_listings(body).unwrap().is_empty());
    }

    #[test]
    fn should_drop_out_of_range_rating() {
        let body = json!({ "products": [{ "title": "Cap", "price": 9.5, "rating": 9.0 }] });
        assert_eq!(parse_listings(body).unwrap()[0].rating, None);
    }

    #[test]
    fn should_treat_missing_products_as_empty() {
        assert!(parse_listings(json!({})).unwrap().is_empty());
    }

    #[test]
    fn should_reject_malformed_body() {
        let result = parse_listings(json!({ "products": "nope" }));
        assert!(matches!(result, Err(MarketplaceError::InvalidResponse)));
    }

    #[tokio::test]
    async fn should_report_unreachable_api_as_request_failure() {
        let catalog = MarketplaceCatalog::new(MarketplaceClient::new(
            "http://127.0.0.1:9".to_string(),
            "key".to_string(),
        ));

        let result = catalog.search("red dress", 5).await;

        assert!(matches!(result, Err(MarketplaceError::RequestFailed)));
        assert_eq!(catalog.api_name(), API_NAME);
    }
}
