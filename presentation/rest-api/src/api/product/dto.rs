use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::product::filter::ProductFilter;
use business::domain::product::model::{CategorySummary, Product};
use business::domain::product::use_cases::search::SearchResult;
use business::domain::product::value_objects::{Gender, ProductSource, SortOrder};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum GenderDto {
    #[oai(rename = "men")]
    Men,
    #[oai(rename = "women")]
    Women,
    #[oai(rename = "kids")]
    Kids,
    #[oai(rename = "unisex")]
    Unisex,
}

impl From<Gender> for GenderDto {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Men => GenderDto::Men,
            Gender::Women => GenderDto::Women,
            Gender::Kids => GenderDto::Kids,
            Gender::Unisex => GenderDto::Unisex,
        }
    }
}

impl From<GenderDto> for Gender {
    fn from(dto: GenderDto) -> Self {
        match dto {
            GenderDto::Men => Gender::Men,
            GenderDto::Women => Gender::Women,
            GenderDto::Kids => Gender::Kids,
            GenderDto::Unisex => Gender::Unisex,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum SortOrderDto {
    #[oai(rename = "relevance")]
    Relevance,
    #[oai(rename = "price_asc")]
    PriceAsc,
    #[oai(rename = "price_desc")]
    PriceDesc,
    #[oai(rename = "rating_desc")]
    RatingDesc,
    #[oai(rename = "newest")]
    Newest,
}

impl From<SortOrder> for SortOrderDto {
    fn from(sort: SortOrder) -> Self {
        match sort {
            SortOrder::Relevance => SortOrderDto::Relevance,
            SortOrder::PriceAsc => SortOrderDto::PriceAsc,
            SortOrder::PriceDesc => SortOrderDto::PriceDesc,
            SortOrder::RatingDesc => SortOrderDto::RatingDesc,
            SortOrder::Newest => SortOrderDto::Newest,
        }
    }
}

impl From<SortOrderDto> for SortOrder {
    fn from(dto: SortOrderDto) -> Self {
        match dto {
            SortOrderDto::Relevance => SortOrder::Relevance,
            SortOrderDto::PriceAsc => SortOrder::PriceAsc,
            SortOrderDto::PriceDesc => SortOrder::PriceDesc,
            SortOrderDto::RatingDesc => SortOrder::RatingDesc,
            SortOrderDto::Newest => SortOrder::Newest,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum ProductSourceDto {
    #[oai(rename = "catalog")]
    Catalog,
    #[oai(rename = "marketplace")]
    Marketplace,
}

impl From<ProductSource> for ProductSourceDto {
    fn from(source: ProductSource) -> Self {
        match source {
            ProductSource::Catalog => ProductSourceDto::Catalog,
            ProductSource::Marketplace => ProductSourceDto::Marketplace,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    pub category: String,
    #[oai(skip_serializing_if_is_none)]
    pub gender: Option<GenderDto>,
    #[oai(skip_serializing_if_is_none)]
    pub color: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub size: Option<String>,
    pub stock: u32,
    pub in_stock: bool,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub rating: Option<f32>,
    pub source: ProductSourceDto,
    /// False for marketplace listings, which can only be browsed.
    pub purchasable: bool,
    /// Link to the listing on the partner marketplace
    #[oai(skip_serializing_if_is_none)]
    pub external_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            in_stock: product.in_stock(),
            purchasable: product.is_purchasable(),
            id: product.id,
            name: product.name,
            price: product.price,
            image_url: product.image_url,
            category: product.category,
            gender: product.gender.map(Into::into),
            color: product.color,
            size: product.size,
            stock: product.stock,
            description: product.description,
            rating: product.rating,
            source: product.source.into(),
            external_url: product.external_url,
            created_at: product.created_at,
        }
    }
}

/// The filter the search actually ran with, after parsing and overrides.
#[derive(Debug, Clone, Object)]
pub struct AppliedFilterResponse {
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub gender: Option<GenderDto>,
    #[oai(skip_serializing_if_is_none)]
    pub color: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub size: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub min_price: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub max_price: Option<f64>,
    pub keywords: Vec<String>,
    pub sort: SortOrderDto,
}

impl From<ProductFilter> for AppliedFilterResponse {
    fn from(filter: ProductFilter) -> Self {
        Self {
            category: filter.category.map(|c| c.name),
            gender: filter.gender.map(Into::into),
            color: filter.color,
            size: filter.size,
            min_price: filter.min_price,
            max_price: filter.max_price,
            keywords: filter.keywords,
            sort: filter.sort.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SearchResponse {
    pub products: Vec<ProductResponse>,
    pub count: u32,
    /// `catalog`, `cache` or `marketplace`
    pub source: String,
    pub filter: AppliedFilterResponse,
}

impl From<SearchResult> for SearchResponse {
    fn from(result: SearchResult) -> Self {
        Self {
            count: result.products.len() as u32,
            source: result.source.to_string(),
            products: result.products.into_iter().map(Into::into).collect(),
            filter: result.filter.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    pub name: String,
    pub product_count: u64,
}

impl From<CategorySummary> for CategoryResponse {
    fn from(summary: CategorySummary) -> Self {
        Self {
            name: summary.name,
            product_count: summary.product_count,
        }
    }
}
