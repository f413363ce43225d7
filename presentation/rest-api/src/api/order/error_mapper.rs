use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response, internal_error};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            OrderError::EmptyCart => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", &message)
            }
            OrderError::NotFound => error_response(StatusCode::NOT_FOUND, "NotFound", &message),
            OrderError::InsufficientStock | OrderError::NotCancellable => {
                error_response(StatusCode::CONFLICT, "Conflict", &message)
            }
            OrderError::Repository(_) => internal_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_empty_cart_to_400() {
        let (status, body) = OrderError::EmptyCart.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.message, "order.empty_cart");
    }

    #[test]
    fn should_map_not_cancellable_to_conflict() {
        let (status, body) = OrderError::NotCancellable.into_error_response();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.0.name, "Conflict");
    }

    #[test]
    fn should_hide_repository_details() {
        let (status, body) =
            OrderError::Repository(RepositoryError::DatabaseError).into_error_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.message, "repository.persistence");
    }
}
