use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::product::use_cases::get_by_category::{
    GetProductsByCategoryParams, GetProductsByCategoryUseCase,
};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::list_categories::ListCategoriesUseCase;
use business::domain::product::use_cases::search::{
    SearchOverrides, SearchProductsParams, SearchProductsUseCase,
};
use business::domain::shared::value_objects::Page;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CategoryResponse, GenderDto, ProductResponse, SearchResponse, SortOrderDto,
};
use crate::api::tags::ApiTags;

fn is_valid_price(price: Option<f64>) -> bool {
    price.is_none_or(|p| p.is_finite() && p >= 0.0)
}

pub struct ProductApi {
    search_use_case: Arc<dyn SearchProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
}

impl ProductApi {
    pub fn new(
        search_use_case: Arc<dyn SearchProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    ) -> Self {
        Self {
            search_use_case,
            get_by_id_use_case,
        }
    }
}

/// Product catalog API
#[OpenApi]
impl ProductApi {
    /// Search products
    ///
    /// `q` is free text such as "red dresses for women under 50". Explicit
    /// filter parameters override what is read from `q`. When the catalog has
    /// no match, cached or live marketplace listings may be returned instead
    /// (see `source`).
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    #[allow(clippy::too_many_arguments)]
    async fn search_products(
        &self,
        q: Query<Option<String>>,
        category: Query<Option<String>>,
        gender: Query<Option<GenderDto>>,
        color: Query<Option<String>>,
        size: Query<Option<String>>,
        min_price: Query<Option<f64>>,
        max_price: Query<Option<f64>>,
        sort: Query<Option<SortOrderDto>>,
        limit: Query<Option<u32>>,
        offset: Query<Option<u32>>,
    ) -> SearchProductsResponse {
        if !is_valid_price(min_price.0) || !is_valid_price(max_price.0) {
            return SearchProductsResponse::BadRequest(Json(ErrorResponse::new(
                "ValidationError",
                "product.invalid_price",
            )));
        }

        let params = SearchProductsParams {
            query: q.0,
            overrides: SearchOverrides {
                category: category.0,
                gender: gender.0.map(Into::into),
                color: color.0,
                size: size.0,
                min_price: min_price.0,
                max_price: max_price.0,
                sort: sort.0.map(Into::into),
            },
            page: Page::new(limit.0, offset.0),
        };

        match self.search_use_case.execute(params).await {
            Ok(result) => SearchProductsResponse::Ok(Json(result.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SearchProductsResponse::BadRequest(json),
                    _ => SearchProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by ID
    ///
    /// Returns the product even when it is out of stock.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetProductByIdResponse::BadRequest(ErrorResponse::invalid_id(
                "product.invalid_id",
            ));
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }
}

pub struct CategoryApi {
    list_use_case: Arc<dyn ListCategoriesUseCase>,
    get_by_category_use_case: Arc<dyn GetProductsByCategoryUseCase>,
}

impl CategoryApi {
    pub fn new(
        list_use_case: Arc<dyn ListCategoriesUseCase>,
        get_by_category_use_case: Arc<dyn GetProductsByCategoryUseCase>,
    ) -> Self {
        Self {
            list_use_case,
            get_by_category_use_case,
        }
    }
}

/// Category browsing API
#[OpenApi]
impl CategoryApi {
    /// List categories
    ///
    /// Categories with at least one product in stock, with their product counts.
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Categories")]
    async fn list_categories(&self) -> ListCategoriesResponse {
        match self.list_use_case.execute().await {
            Ok(categories) => {
                ListCategoriesResponse::Ok(Json(categories.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListCategoriesResponse::InternalError(json)
            }
        }
    }

    /// Browse a category
    #[oai(
        path = "/categories/:name/products",
        method = "get",
        tag = "ApiTags::Categories"
    )]
    async fn get_products_by_category(
        &self,
        name: Path<String>,
        limit: Query<Option<u32>>,
        offset: Query<Option<u32>>,
    ) -> GetProductsByCategoryResponse {
        let params = GetProductsByCategoryParams {
            category: name.0,
            page: Page::new(limit.0, offset.0),
        };

        match self.get_by_category_use_case.execute(params).await {
            Ok(products) => GetProductsByCategoryResponse::Ok(Json(
                products.into_iter().map(Into::into).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetProductsByCategoryResponse::BadRequest(json),
                    _ => GetProductsByCategoryResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchProductsResponse {
    #[oai(status = 200)]
    Ok(Json<SearchResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CategoryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductsByCategoryResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
