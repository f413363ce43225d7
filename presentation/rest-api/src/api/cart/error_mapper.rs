use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response, internal_error};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            CartError::InvalidQuantity => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", &message)
            }
            CartError::ProductNotFound | CartError::ItemNotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", &message)
            }
            CartError::NotPurchasable | CartError::InsufficientStock => {
                error_response(StatusCode::CONFLICT, "Conflict", &message)
            }
            CartError::Repository(_) => internal_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_stock_shortage_to_conflict() {
        let (status, body) = CartError::InsufficientStock.into_error_response();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.0.message, "cart.insufficient_stock");
    }

    #[test]
    fn should_map_missing_line_to_404() {
        let (status, body) = CartError::ItemNotFound.into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.0.message, "cart.item_not_found");
    }

    #[test]
    fn should_map_zero_quantity_to_400() {
        let (status, _) = CartError::InvalidQuantity.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
