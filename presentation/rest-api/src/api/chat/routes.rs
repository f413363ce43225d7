use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::chat::use_cases::respond::{ChatParams, ChatUseCase};

use crate::api::chat::dto::{ChatRequest, ChatResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct ChatApi {
    chat_use_case: Arc<dyn ChatUseCase>,
}

impl ChatApi {
    pub fn new(chat_use_case: Arc<dyn ChatUseCase>) -> Self {
        Self { chat_use_case }
    }
}

/// Shopping assistant API
#[OpenApi]
impl ChatApi {
    /// Chat with the shopping assistant
    ///
    /// Product questions are answered with matching products; small talk gets a canned reply.
    #[oai(path = "/chat", method = "post", tag = "ApiTags::Chat")]
    async fn chat(&self, body: Json<ChatRequest>) -> ChatEndpointResponse {
        let params = ChatParams {
            message: body.0.message,
        };

        match self.chat_use_case.execute(params).await {
            Ok(reply) => ChatEndpointResponse::Ok(Json(reply.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ChatEndpointResponse::BadRequest(json),
                    _ => ChatEndpointResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ChatEndpointResponse {
    #[oai(status = 200)]
    Ok(Json<ChatResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
