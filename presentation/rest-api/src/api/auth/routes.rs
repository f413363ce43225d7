use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::user::model::User;
use business::domain::user::use_cases::get_profile::{GetProfileParams, GetProfileUseCase};
use business::domain::user::use_cases::login::{LoginParams, LoginUseCase};
use business::domain::user::use_cases::signup::{SignupParams, SignupUseCase};

use crate::api::auth::dto::{AuthResponse, LoginRequest, SignupRequest, UserResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::{JwtBearer, TokenService};
use crate::api::tags::ApiTags;

pub struct AuthApi {
    signup_use_case: Arc<dyn SignupUseCase>,
    login_use_case: Arc<dyn LoginUseCase>,
    get_profile_use_case: Arc<dyn GetProfileUseCase>,
    tokens: TokenService,
}

impl AuthApi {
    pub fn new(
        signup_use_case: Arc<dyn SignupUseCase>,
        login_use_case: Arc<dyn LoginUseCase>,
        get_profile_use_case: Arc<dyn GetProfileUseCase>,
        tokens: TokenService,
    ) -> Self {
        Self {
            signup_use_case,
            login_use_case,
            get_profile_use_case,
            tokens,
        }
    }

    fn session(&self, user: User) -> Result<AuthResponse, Json<ErrorResponse>> {
        let issued = self.tokens.issue(&user.id).map_err(|e| {
            Json(ErrorResponse::new("InternalError", &e.to_string()))
        })?;

        Ok(AuthResponse {
            token: issued.token,
            expires_at: issued.expires_at,
            user: user.into(),
        })
    }
}

/// Account API
#[OpenApi]
impl AuthApi {
    /// Sign up
    ///
    /// Creates an account and returns a bearer token for it.
    #[oai(path = "/auth/signup", method = "post", tag = "ApiTags::Auth")]
    async fn signup(&self, body: Json<SignupRequest>) -> SignupResponse {
        let params = SignupParams {
            name: body.0.name,
            email: body.0.email,
            password: body.0.password,
        };

        match self.signup_use_case.execute(params).await {
            Ok(user) => match self.session(user) {
                Ok(session) => SignupResponse::Created(Json(session)),
                Err(json) => SignupResponse::InternalError(json),
            },
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SignupResponse::BadRequest(json),
                    409 => SignupResponse::Conflict(json),
                    _ => SignupResponse::InternalError(json),
                }
            }
        }
    }

    /// Log in
    #[oai(path = "/auth/login", method = "post", tag = "ApiTags::Auth")]
    async fn login(&self, body: Json<LoginRequest>) -> LoginResponse {
        let params = LoginParams {
            email: body.0.email,
            password: body.0.password,
        };

        match self.login_use_case.execute(params).await {
            Ok(user) => match self.session(user) {
                Ok(session) => LoginResponse::Ok(Json(session)),
                Err(json) => LoginResponse::InternalError(json),
            },
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => LoginResponse::Unauthorized(json),
                    _ => LoginResponse::InternalError(json),
                }
            }
        }
    }

    /// Current user profile
    #[oai(path = "/auth/me", method = "get", tag = "ApiTags::Auth")]
    async fn me(&self, auth: JwtBearer) -> ProfileResponse {
        match self
            .get_profile_use_case
            .execute(GetProfileParams { user_id: auth.0 })
            .await
        {
            Ok(user) => ProfileResponse::Ok(Json(UserResponse::from(user))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ProfileResponse::NotFound(json),
                    _ => ProfileResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SignupResponse {
    #[oai(status = 201)]
    Created(Json<AuthResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginResponse {
    #[oai(status = 200)]
    Ok(Json<AuthResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProfileResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
