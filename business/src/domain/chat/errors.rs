use crate::domain::product::errors::ProductError;

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat.empty_message")]
    EmptyMessage,
    #[error("chat.message_too_long")]
    MessageTooLong,
    #[error(transparent)]
    Product(#[from] ProductError),
}
