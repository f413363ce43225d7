use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::wishlist::errors::WishlistError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response, internal_error};

impl IntoErrorResponse for WishlistError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            WishlistError::ProductNotFound | WishlistError::ItemNotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", &message)
            }
            WishlistError::NotPurchasable | WishlistError::AlreadyExists => {
                error_response(StatusCode::CONFLICT, "Conflict", &message)
            }
            WishlistError::Repository(_) => internal_error(),
        }
    }
}
