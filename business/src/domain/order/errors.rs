#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.empty_cart")]
    EmptyCart,
    #[error("order.insufficient_stock")]
    InsufficientStock,
    #[error("order.not_found")]
    NotFound,
    #[error("order.not_cancellable")]
    NotCancellable,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
