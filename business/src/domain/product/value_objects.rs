use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Men,
    Women,
    Kids,
    Unisex,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Men => write!(f, "men"),
            Gender::Women => write!(f, "women"),
            Gender::Kids => write!(f, "kids"),
            Gender::Unisex => write!(f, "unisex"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    /// Accepts the canonical tags plus the spellings found in imported catalog rows.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "men" | "male" | "man" | "mens" => Ok(Gender::Men),
            "women" | "female" | "woman" | "womens" => Ok(Gender::Women),
            "kids" | "kid" | "children" | "child" => Ok(Gender::Kids),
            "unisex" => Ok(Gender::Unisex),
            _ => Err(format!("Invalid gender: {}", s)),
        }
    }
}

/// Where a product row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSource {
    /// Own catalog, purchasable.
    Catalog,
    /// Third-party marketplace listing served from `api_cache`, browse-only.
    Marketplace,
}

impl std::fmt::Display for ProductSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductSource::Catalog => write!(f, "catalog"),
            ProductSource::Marketplace => write!(f, "marketplace"),
        }
    }
}

impl std::str::FromStr for ProductSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "catalog" => Ok(ProductSource::Catalog),
            "marketplace" => Ok(ProductSource::Marketplace),
            _ => Err(format!("Invalid product source: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Best rated first, then by name.
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    Newest,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Relevance => write!(f, "relevance"),
            SortOrder::PriceAsc => write!(f, "price_asc"),
            SortOrder::PriceDesc => write!(f, "price_desc"),
            SortOrder::RatingDesc => write!(f, "rating_desc"),
            SortOrder::Newest => write!(f, "newest"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(SortOrder::Relevance),
            "price_asc" => Ok(SortOrder::PriceAsc),
            "price_desc" => Ok(SortOrder::PriceDesc),
            "rating_desc" => Ok(SortOrder::RatingDesc),
            "newest" => Ok(SortOrder::Newest),
            _ => Err(format!("Invalid sort order: {}", s)),
        }
    }
}
