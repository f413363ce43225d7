use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::model::ChatReply;

pub struct ChatParams {
    pub message: String,
}

#[async_trait]
pub trait ChatUseCase: Send + Sync {
    async fn execute(&self, params: ChatParams) -> Result<ChatReply, ChatError>;
}
