use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::chat::errors::ChatError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for ChatError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            ChatError::EmptyMessage | ChatError::MessageTooLong => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", &message)
            }
            ChatError::Product(err) => err.into_error_response(),
        }
    }
}
