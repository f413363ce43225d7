use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::cart::errors::CartError;
use business::domain::cart::model::Cart;
use business::domain::cart::use_cases::add_item::{AddToCartParams, AddToCartUseCase};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use business::domain::cart::use_cases::remove_item::{
    RemoveCartItemParams, RemoveCartItemUseCase,
};
use business::domain::cart::use_cases::update_item::{
    UpdateCartItemParams, UpdateCartItemUseCase,
};

use crate::api::cart::dto::{
    AddToCartRequest, CartResponse, ClearCartResponse, UpdateCartItemRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_use_case: Arc<dyn AddToCartUseCase>,
    update_use_case: Arc<dyn UpdateCartItemUseCase>,
    remove_use_case: Arc<dyn RemoveCartItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_use_case: Arc<dyn AddToCartUseCase>,
        update_use_case: Arc<dyn UpdateCartItemUseCase>,
        remove_use_case: Arc<dyn RemoveCartItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_use_case,
            update_use_case,
            remove_use_case,
            clear_use_case,
        }
    }
}

fn cart_response(result: Result<Cart, CartError>) -> CartMutationResponse {
    match result {
        Ok(cart) => CartMutationResponse::Ok(Json(cart.into())),
        Err(err) => {
            let (status, json) = err.into_error_response();
            match status.as_u16() {
                400 => CartMutationResponse::BadRequest(json),
                404 => CartMutationResponse::NotFound(json),
                409 => CartMutationResponse::Conflict(json),
                _ => CartMutationResponse::InternalError(json),
            }
        }
    }
}

fn invalid_product_id() -> CartMutationResponse {
    CartMutationResponse::BadRequest(ErrorResponse::invalid_id("cart.invalid_product_id"))
}

/// Shopping cart API
#[OpenApi]
impl CartApi {
    /// Get the cart
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self, auth: JwtBearer) -> GetCartResponse {
        match self
            .get_use_case
            .execute(GetCartParams { user_id: auth.0 })
            .await
        {
            Ok(cart) => GetCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCartResponse::InternalError(json)
            }
        }
    }

    /// Add a product to the cart
    ///
    /// Adding a product that is already in the cart increases its quantity.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(&self, auth: JwtBearer, body: Json<AddToCartRequest>) -> CartMutationResponse {
        let Ok(product_id) = Uuid::parse_str(&body.0.product_id) else {
            return invalid_product_id();
        };

        let params = AddToCartParams {
            user_id: auth.0,
            product_id,
            quantity: body.0.quantity,
        };
        cart_response(self.add_use_case.execute(params).await)
    }

    /// Change the quantity of a cart line
    #[oai(
        path = "/cart/items/:product_id",
        method = "put",
        tag = "ApiTags::Cart"
    )]
    async fn update_item(
        &self,
        auth: JwtBearer,
        product_id: Path<String>,
        body: Json<UpdateCartItemRequest>,
    ) -> CartMutationResponse {
        let Ok(product_id) = Uuid::parse_str(&product_id.0) else {
            return invalid_product_id();
        };

        let params = UpdateCartItemParams {
            user_id: auth.0,
            product_id,
            quantity: body.0.quantity,
        };
        cart_response(self.update_use_case.execute(params).await)
    }

    /// Remove a cart line
    #[oai(
        path = "/cart/items/:product_id",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn remove_item(&self, auth: JwtBearer, product_id: Path<String>) -> CartMutationResponse {
        let Ok(product_id) = Uuid::parse_str(&product_id.0) else {
            return invalid_product_id();
        };

        let params = RemoveCartItemParams {
            user_id: auth.0,
            product_id,
        };
        cart_response(self.remove_use_case.execute(params).await)
    }

    /// Empty the cart
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear(&self, auth: JwtBearer) -> ClearResponse {
        match self
            .clear_use_case
            .execute(ClearCartParams { user_id: auth.0 })
            .await
        {
            Ok(count) => ClearResponse::Ok(Json(ClearCartResponse { count })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ClearResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartMutationResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
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
pub enum ClearResponse {
    #[oai(status = 200)]
    Ok(Json<ClearCartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
