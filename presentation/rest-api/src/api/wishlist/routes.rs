use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::wishlist::use_cases::add_item::{AddToWishlistParams, AddToWishlistUseCase};
use business::domain::wishlist::use_cases::get::{GetWishlistParams, GetWishlistUseCase};
use business::domain::wishlist::use_cases::remove_item::{
    RemoveFromWishlistParams, RemoveFromWishlistUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;
use crate::api::wishlist::dto::{AddToWishlistRequest, WishlistEntryResponse, WishlistItemResponse};

pub struct WishlistApi {
    get_use_case: Arc<dyn GetWishlistUseCase>,
    add_use_case: Arc<dyn AddToWishlistUseCase>,
    remove_use_case: Arc<dyn RemoveFromWishlistUseCase>,
}

impl WishlistApi {
    pub fn new(
        get_use_case: Arc<dyn GetWishlistUseCase>,
        add_use_case: Arc<dyn AddToWishlistUseCase>,
        remove_use_case: Arc<dyn RemoveFromWishlistUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_use_case,
            remove_use_case,
        }
    }
}

/// Wishlist API
#[OpenApi]
impl WishlistApi {
    /// Get the wishlist
    ///
    /// Most recently added first.
    #[oai(path = "/wishlist", method = "get", tag = "ApiTags::Wishlist")]
    async fn get_wishlist(&self, auth: JwtBearer) -> GetWishlistResponse {
        match self
            .get_use_case
            .execute(GetWishlistParams { user_id: auth.0 })
            .await
        {
            Ok(entries) => GetWishlistResponse::Ok(Json(
                entries.into_iter().map(Into::into).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetWishlistResponse::InternalError(json)
            }
        }
    }

    /// Save a product to the wishlist
    #[oai(path = "/wishlist/items", method = "post", tag = "ApiTags::Wishlist")]
    async fn add_item(
        &self,
        auth: JwtBearer,
        body: Json<AddToWishlistRequest>,
    ) -> AddToWishlistResponse {
        let Ok(product_id) = Uuid::parse_str(&body.0.product_id) else {
            return AddToWishlistResponse::BadRequest(ErrorResponse::invalid_id(
                "wishlist.invalid_product_id",
            ));
        };

        let params = AddToWishlistParams {
            user_id: auth.0,
            product_id,
        };

        match self.add_use_case.execute(params).await {
            Ok(item) => AddToWishlistResponse::Created(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AddToWishlistResponse::NotFound(json),
                    409 => AddToWishlistResponse::Conflict(json),
                    _ => AddToWishlistResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a product from the wishlist
    #[oai(
        path = "/wishlist/items/:product_id",
        method = "delete",
        tag = "ApiTags::Wishlist"
    )]
    async fn remove_item(
        &self,
        auth: JwtBearer,
        product_id: Path<String>,
    ) -> RemoveFromWishlistResponse {
        let Ok(product_id) = Uuid::parse_str(&product_id.0) else {
            return RemoveFromWishlistResponse::BadRequest(ErrorResponse::invalid_id(
                "wishlist.invalid_product_id",
            ));
        };

        let params = RemoveFromWishlistParams {
            user_id: auth.0,
            product_id,
        };

        match self.remove_use_case.execute(params).await {
            Ok(()) => RemoveFromWishlistResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveFromWishlistResponse::NotFound(json),
                    _ => RemoveFromWishlistResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetWishlistResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<WishlistEntryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddToWishlistResponse {
    #[oai(status = 201)]
    Created(Json<WishlistItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveFromWishlistResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::shared::value_objects::UserId;
    use business::domain::wishlist::errors::WishlistError;
    use business::domain::wishlist::model::{WishlistEntry, WishlistItem};
    use mockall::mock;
    use poem::EndpointExt;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    use crate::api::security::TokenService;

    mock! {
        pub GetWishlist {}

        #[async_trait]
        impl GetWishlistUseCase for GetWishlist {
            async fn execute(&self, params: GetWishlistParams) -> Result<Vec<WishlistEntry>, WishlistError>;
        }
    }

    mock! {
        pub Add {}

        #[async_trait]
        impl AddToWishlistUseCase for Add {
            async fn execute(&self, params: AddToWishlistParams) -> Result<WishlistItem, WishlistError>;
        }
    }

    mock! {
        pub Remove {}

        #[async_trait]
        impl RemoveFromWishlistUseCase for Remove {
            async fn execute(&self, params: RemoveFromWishlistParams) -> Result<(), WishlistError>;
        }
    }

    const SECRET: &str = "wishlist-secret";

    fn client(get: MockGetWishlist, add: MockAdd, remove: MockRemove) -> TestClient<impl poem::Endpoint> {
        let api = WishlistApi::new(Arc::new(get), Arc::new(add), Arc::new(remove));
        TestClient::new(
            OpenApiService::new(api, "test", "0.0.0").data(TokenService::new(SECRET, 1)),
        )
    }

    fn bearer() -> String {
        let token = TokenService::new(SECRET, 1)
            .issue(&UserId::new("user-7"))
            .unwrap()
            .token;
        format!("Bearer {}", token)
    }

    #[tokio::test]
    async fn should_reject_requests_without_token() {
        let response = client(MockGetWishlist::new(), MockAdd::new(), MockRemove::new())
            .get("/wishlist")
            .send()
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_create_wishlist_item() {
        let product_id = Uuid::new_v4();
        let mut add = MockAdd::new();
        add.expect_execute()
            .withf(move |p| p.product_id == product_id && p.user_id.as_str() == "user-7")
            .returning(|p| Ok(WishlistItem::new(p.user_id, p.product_id)));

        let response = client(MockGetWishlist::new(), add, MockRemove::new())
            .post("/wishlist/items")
            .header("Authorization", bearer())
            .body_json(&json!({ "product_id": product_id.to_string() }))
            .send()
            .await;

        response.assert_status(StatusCode::CREATED);
        let json = response.json().await;
        json.value()
            .object()
            .get("product_id")
            .assert_string(&product_id.to_string());
    }

    #[tokio::test]
    async fn should_return_409_for_duplicate_entry() {
        let mut add = MockAdd::new();
        add.expect_execute()
            .returning(|_| Err(WishlistError::AlreadyExists));

        let response = client(MockGetWishlist::new(), add, MockRemove::new())
            .post("/wishlist/items")
            .header("Authorization", bearer())
            .body_json(&json!({ "product_id": Uuid::new_v4().to_string() }))
            .send()
            .await;

        response.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn should_return_404_when_removing_unknown_entry() {
        let mut remove = MockRemove::new();
        remove
            .expect_execute()
            .returning(|_| Err(WishlistError::ItemNotFound));

        let response = client(MockGetWishlist::new(), MockAdd::new(), remove)
            .delete(format!("/wishlist/items/{}", Uuid::new_v4()))
            .header("Authorization", bearer())
            .send()
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
