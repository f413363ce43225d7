use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::UserError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response, internal_error};

impl IntoErrorResponse for UserError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            UserError::NameEmpty => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", "user.name_empty")
            }
            UserError::InvalidEmail => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "user.invalid_email",
            ),
            UserError::PasswordTooShort => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "user.password_too_short",
            ),
            UserError::EmailTaken => {
                error_response(StatusCode::CONFLICT, "Conflict", "user.email_taken")
            }
            UserError::InvalidCredentials => error_response(
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "user.invalid_credentials",
            ),
            UserError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "user.not_found")
            }
            UserError::Hashing => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "user.hashing_failed",
            ),
            UserError::Repository(_) => internal_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_taken_email_to_conflict() {
        let (status, body) = UserError::EmailTaken.into_error_response();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.0.message, "user.email_taken");
    }

    #[test]
    fn should_map_bad_credentials_to_unauthorized() {
        let (status, _) = UserError::InvalidCredentials.into_error_response();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
