#[derive(Debug, thiserror::Error)]
pub enum WishlistError {
    #[error("wishlist.product_not_found")]
    ProductNotFound,
    #[error("wishlist.product_not_purchasable")]
    NotPurchasable,
    #[error("wishlist.already_exists")]
    AlreadyExists,
    #[error("wishlist.item_not_found")]
    ItemNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
