use poem_openapi::Object;

use business::domain::chat::model::ChatReply;

use crate::api::product::dto::ProductResponse;

#[derive(Debug, Clone, Object)]
pub struct ChatRequest {
    /// Up to 500 characters
    pub message: String,
}

#[derive(Debug, Clone, Object)]
pub struct ChatResponse {
    /// Detected intent, e.g. `greeting` or `product_search`
    pub intent: String,
    pub reply: String,
    pub products: Vec<ProductResponse>,
    /// Quick replies the client can offer next
    pub suggestions: Vec<String>,
}

impl From<ChatReply> for ChatResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            intent: reply.intent.to_string(),
            reply: reply.reply,
            products: reply.products.into_iter().map(Into::into).collect(),
            suggestions: reply.suggestions,
        }
    }
}
