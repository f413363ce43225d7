use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::order::use_cases::cancel::{CancelOrderParams, CancelOrderUseCase};
use business::domain::order::use_cases::get_all::{GetOrdersParams, GetOrdersUseCase};
use business::domain::order::use_cases::get_by_id::{GetOrderByIdParams, GetOrderByIdUseCase};
use business::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::{OrderResponse, PlaceOrderRequest};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct OrderApi {
    place_use_case: Arc<dyn PlaceOrderUseCase>,
    get_all_use_case: Arc<dyn GetOrdersUseCase>,
    get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
    cancel_use_case: Arc<dyn CancelOrderUseCase>,
}

impl OrderApi {
    pub fn new(
        place_use_case: Arc<dyn PlaceOrderUseCase>,
        get_all_use_case: Arc<dyn GetOrdersUseCase>,
        get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
        cancel_use_case: Arc<dyn CancelOrderUseCase>,
    ) -> Self {
        Self {
            place_use_case,
            get_all_use_case,
            get_by_id_use_case,
            cancel_use_case,
        }
    }
}

/// Orders API
#[OpenApi]
impl OrderApi {
    /// List orders
    ///
    /// Newest first.
    #[oai(path = "/orders", method = "get", tag = "ApiTags::Orders")]
    async fn get_orders(&self, auth: JwtBearer) -> GetOrdersResponse {
        match self
            .get_all_use_case
            .execute(GetOrdersParams { user_id: auth.0 })
            .await
        {
            Ok(orders) => GetOrdersResponse::Ok(Json(orders.into_iter().map(Into::into).collect())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetOrdersResponse::InternalError(json)
            }
        }
    }

    /// Check out
    ///
    /// Turns the whole cart into a pending order, reserves stock and empties the cart.
    #[oai(path = "/orders", method = "post", tag = "ApiTags::Orders")]
    async fn place_order(&self, auth: JwtBearer, body: Json<PlaceOrderRequest>) -> PlaceOrderResponse {
        let params = PlaceOrderParams {
            user_id: auth.0,
            shipping_address: body.0.shipping_address,
        };

        match self.place_use_case.execute(params).await {
            Ok(order) => PlaceOrderResponse::Created(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => PlaceOrderResponse::BadRequest(json),
                    409 => PlaceOrderResponse::Conflict(json),
                    _ => PlaceOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// Get an order by ID
    #[oai(path = "/orders/:id", method = "get", tag = "ApiTags::Orders")]
    async fn get_order_by_id(&self, auth: JwtBearer, id: Path<String>) -> GetOrderByIdResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return GetOrderByIdResponse::BadRequest(ErrorResponse::invalid_id("order.invalid_id"));
        };

        match self
            .get_by_id_use_case
            .execute(GetOrderByIdParams {
                user_id: auth.0,
                id,
            })
            .await
        {
            Ok(order) => GetOrderByIdResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetOrderByIdResponse::NotFound(json),
                    _ => GetOrderByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Cancel an order
    ///
    /// Only pending or confirmed orders can be cancelled. Reserved stock is released.
    #[oai(path = "/orders/:id/cancel", method = "post", tag = "ApiTags::Orders")]
    async fn cancel_order(&self, auth: JwtBearer, id: Path<String>) -> CancelOrderResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return CancelOrderResponse::BadRequest(ErrorResponse::invalid_id("order.invalid_id"));
        };

        match self
            .cancel_use_case
            .execute(CancelOrderParams {
                user_id: auth.0,
                id,
            })
            .await
        {
            Ok(order) => CancelOrderResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => CancelOrderResponse::NotFound(json),
                    409 => CancelOrderResponse::Conflict(json),
                    _ => CancelOrderResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum PlaceOrderResponse {
    #[oai(status = 201)]
    Created(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrderByIdResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CancelOrderResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::order::errors::OrderError;
    use business::domain::order::model::{Order, OrderItem};
    use business::domain::order::value_objects::OrderStatus;
    use business::domain::shared::value_objects::UserId;
    use chrono::Utc;
    use mockall::mock;
    use poem::EndpointExt;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    use crate::api::security::TokenService;

    mock! {
        pub Place {}

        #[async_trait]
        impl PlaceOrderUseCase for Place {
            async fn execute(&self, params: PlaceOrderParams) -> Result<Order, OrderError>;
        }
    }

    mock! {
        pub GetAll {}

        #[async_trait]
        impl GetOrdersUseCase for GetAll {
            async fn execute(&self, params: GetOrdersParams) -> Result<Vec<Order>, OrderError>;
        }
    }

    mock! {
        pub GetById {}

        #[async_trait]
        impl GetOrderByIdUseCase for GetById {
            async fn execute(&self, params: GetOrderByIdParams) -> Result<Order, OrderError>;
        }
    }

    mock! {
        pub Cancel {}

        #[async_trait]
        impl CancelOrderUseCase for Cancel {
            async fn execute(&self, params: CancelOrderParams) -> Result<Order, OrderError>;
        }
    }

    const SECRET: &str = "orders-secret";

    struct Mocks {
        place: MockPlace,
        get_all: MockGetAll,
        get_by_id: MockGetById,
        cancel: MockCancel,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                place: MockPlace::new(),
                get_all: MockGetAll::new(),
                get_by_id: MockGetById::new(),
                cancel: MockCancel::new(),
            }
        }

        fn client(self) -> TestClient<impl poem::Endpoint> {
            let api = OrderApi::new(
                Arc::new(self.place),
                Arc::new(self.get_all),
                Arc::new(self.get_by_id),
                Arc::new(self.cancel),
            );
            TestClient::new(
                OpenApiService::new(api, "test", "0.0.0").data(TokenService::new(SECRET, 1)),
            )
        }
    }

    fn bearer() -> String {
        let token = TokenService::new(SECRET, 1)
            .issue(&UserId::new("user-3"))
            .unwrap()
            .token;
        format!("Bearer {}", token)
    }

    fn order(status: OrderStatus) -> Order {
        let now = Utc::now();
        Order {
            id: Uuid::new_v4(),
            user_id: UserId::new("user-3"),
            status,
            items: vec![OrderItem {
                product_id: Uuid::new_v4(),
                product_name: "Denim Jacket".to_string(),
                unit_price: 80.0,
                quantity: 2,
            }],
            total: 160.0,
            shipping_address: Some("1 Main St".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn should_reject_requests_without_token() {
        let response = Mocks::new().client().get("/orders").send().await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_place_order_from_cart() {
        let mut mocks = Mocks::new();
        mocks
            .place
            .expect_execute()
            .withf(|p| {
                p.user_id.as_str() == "user-3" && p.shipping_address.as_deref() == Some("1 Main St")
            })
            .returning(|_| Ok(order(OrderStatus::Pending)));

        let response = mocks
            .client()
            .post("/orders")
            .header("Authorization", bearer())
            .body_json(&json!({ "shipping_address": "1 Main St" }))
            .send()
            .await;

        response.assert_status(StatusCode::CREATED);
        let json = response.json().await;
        let body = json.value().object();
        body.get("status").assert_string("pending");
        body.get("item_count").assert_i64(2);
        body.get("items").array().get(0).object().get("subtotal").assert_f64(160.0);
    }

    #[tokio::test]
    async fn should_return_400_for_empty_cart() {
        let mut mocks = Mocks::new();
        mocks
            .place
            .expect_execute()
            .returning(|_| Err(OrderError::EmptyCart));

        let response = mocks
            .client()
            .post("/orders")
            .header("Authorization", bearer())
            .body_json(&json!({}))
            .send()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_404_for_foreign_order() {
        let mut mocks = Mocks::new();
        mocks
            .get_by_id
            .expect_execute()
            .returning(|_| Err(OrderError::NotFound));

        let response = mocks
            .client()
            .get(format!("/orders/{}", Uuid::new_v4()))
            .header("Authorization", bearer())
            .send()
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_409_when_order_already_shipped() {
        let mut mocks = Mocks::new();
        mocks
            .cancel
            .expect_execute()
            .returning(|_| Err(OrderError::NotCancellable));

        let response = mocks
            .client()
            .post(format!("/orders/{}/cancel", Uuid::new_v4()))
            .header("Authorization", bearer())
            .send()
            .await;

        response.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn should_return_cancelled_order() {
        let mut mocks = Mocks::new();
        mocks
            .cancel
            .expect_execute()
            .returning(|_| Ok(order(OrderStatus::Cancelled)));

        let response = mocks
            .client()
            .post(format!("/orders/{}/cancel", Uuid::new_v4()))
            .header("Authorization", bearer())
            .send()
            .await;

        response.assert_status_is_ok();
        let json = response.json().await;
        json.value().object().get("status").assert_string("cancelled");
    }
}
