use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response, internal_error};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            ProductError::NameEmpty => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.name_empty",
            ),
            ProductError::InvalidPrice => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.invalid_price",
            ),
            ProductError::InvalidRating => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.invalid_rating",
            ),
            ProductError::CategoryEmpty => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.category_empty",
            ),
            ProductError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "product.not_found")
            }
            ProductError::Repository(_) => internal_error(),
        }
    }
}
