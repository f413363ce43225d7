use super::env::{non_empty_var, var_or};

/// Third-party marketplace fallback settings.
///
/// Environment variables:
/// - MARKETPLACE_API_URL / MARKETPLACE_API_KEY: the fallback is disabled unless both are set
/// - MARKETPLACE_MONTHLY_LIMIT: outbound calls allowed per calendar month (default: 100)
/// - MARKETPLACE_CACHE_TTL_HOURS: how long cached listings are served (default: 72)
pub struct MarketplaceConfig {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub monthly_limit: u32,
    pub cache_ttl_hours: i64,
}

impl MarketplaceConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: non_empty_var("MARKETPLACE_API_URL"),
            api_key: non_empty_var("MARKETPLACE_API_KEY"),
            monthly_limit: var_or("MARKETPLACE_MONTHLY_LIMIT", 100),
            cache_ttl_hours: var_or("MARKETPLACE_CACHE_TTL_HOURS", 72i64).max(0),
        }
    }

    /// `(url, key)` when outbound calls are configured.
    pub fn credentials(&self) -> Option<(String, String)> {
        match (&self.api_url, &self.api_key) {
            (Some(url), Some(key)) => Some((url.clone(), key.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_url: Option<&str>, api_key: Option<&str>) -> MarketplaceConfig {
        MarketplaceConfig {
            api_url: api_url.map(str::to_string),
            api_key: api_key.map(str::to_string),
            monthly_limit: 100,
            cache_ttl_hours: 72,
        }
    }

    #[test]
    fn should_require_both_url_and_key() {
        assert!(config(Some("https://m.test"), None).credentials().is_none());
        assert!(config(None, Some("key")).credentials().is_none());
        assert_eq!(
            config(Some("https://m.test"), Some("key")).credentials(),
            Some(("https://m.test".to_string(), "key".to_string()))
        );
    }
}
