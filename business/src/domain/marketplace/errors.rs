#[derive(Debug, thiserror::Error)]
pub enum MarketplaceError {
    #[error("marketplace.request_failed")]
    RequestFailed,
    #[error("marketplace.invalid_response")]
    InvalidResponse,
    #[error("marketplace.rate_limited")]
    RateLimited,
}
