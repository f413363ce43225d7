use chrono::{DateTime, Datelike, Utc};
use uuid::Uuid;

/// Calendar month key (`YYYY-MM`) under which outbound API calls are counted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UsageMonth(String);

impl UsageMonth {
    pub fn of(date: DateTime<Utc>) -> Self {
        Self(format!("{:04}-{:02}", date.year(), date.month()))
    }

    pub fn current() -> Self {
        Self::of(Utc::now())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UsageMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monthly ceiling on calls to a metered third-party API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketplaceQuota {
    pub monthly_limit: u32,
}

impl MarketplaceQuota {
    pub fn new(monthly_limit: u32) -> Self {
        Self { monthly_limit }
    }
}

/// Normalized cache key for a free-text query: lower-cased, whitespace collapsed.
pub fn query_key(query: &str) -> String {
    query
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Stable id for a marketplace listing, so re-fetching the same item keeps
/// the id clients were already given.
///
/// Keyed on the external URL, or on name and price when the listing has none.
pub fn listing_id(external_url: Option<&str>, name: &str, price: f64) -> Uuid {
    let key = match external_url.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => url.to_string(),
        None => format!("{}|{:.2}", name.trim().to_lowercase(), price),
    };
    Uuid::new_v5(&Uuid::NAMESPACE_URL, key.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn should_format_usage_month_with_zero_padding() {
        let date = Utc.with_ymd_and_hms(2025, 3, 9, 12, 0, 0).unwrap();
        assert_eq!(UsageMonth::of(date).as_str(), "2025-03");
    }

    #[test]
    fn should_derive_same_listing_id_for_same_item() {
        let url = Some("https://market.example/item/9");
        assert_eq!(listing_id(url, "Tee", 9.0), listing_id(url, "Tee (new)", 8.5));
        assert_eq!(listing_id(None, "Linen Tee", 9.0), listing_id(None, " linen tee", 9.0));
        assert_ne!(listing_id(None, "Linen Tee", 9.0), listing_id(None, "Linen Tee", 9.5));
        assert_ne!(listing_id(url, "Tee", 9.0), listing_id(None, "Tee", 9.0));
    }

    #[test]
    fn should_normalize_query_key() {
        assert_eq!(query_key("  Red   DRESSES\tunder 50 "), "red dresses under 50");
    }
}
