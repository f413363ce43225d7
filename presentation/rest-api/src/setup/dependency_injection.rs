use std::sync::Arc;

use chrono::Duration;
use sqlx::MySqlPool;

use crypto::Argon2PasswordHasher;
use logger::TracingLogger;
use marketplace::catalog::MarketplaceCatalog;
use marketplace::client::MarketplaceClient;
use persistence::cart::repository::CartRepositoryMySql;
use persistence::marketplace::api_usage::ApiUsageRepositoryMySql;
use persistence::marketplace::listing_cache::ListingCacheRepositoryMySql;
use persistence::order::repository::OrderRepositoryMySql;
use persistence::product::repository::ProductRepositoryMySql;
use persistence::user::repository::UserRepositoryMySql;
use persistence::wishlist::repository::WishlistRepositoryMySql;

use business::application::cart::add_item::AddToCartUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::update_item::UpdateCartItemUseCaseImpl;
use business::application::chat::respond::ChatUseCaseImpl;
use business::application::order::cancel::CancelOrderUseCaseImpl;
use business::application::order::get_all::GetOrdersUseCaseImpl;
use business::application::order::get_by_id::GetOrderByIdUseCaseImpl;
use business::application::order::place::PlaceOrderUseCaseImpl;
use business::application::product::get_by_category::GetProductsByCategoryUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::list_categories::ListCategoriesUseCaseImpl;
use business::application::product::search::{MarketplaceFallback, SearchProductsUseCaseImpl};
use business::application::user::get_profile::GetProfileUseCaseImpl;
use business::application::user::login::LoginUseCaseImpl;
use business::application::user::signup::SignupUseCaseImpl;
use business::application::wishlist::add_item::AddToWishlistUseCaseImpl;
use business::application::wishlist::get::GetWishlistUseCaseImpl;
use business::application::wishlist::remove_item::RemoveFromWishlistUseCaseImpl;
use business::domain::marketplace::model::MarketplaceQuota;

use crate::api::auth::routes::AuthApi;
use crate::api::cart::routes::CartApi;
use crate::api::chat::routes::ChatApi;
use crate::api::health::routes::HealthApi;
use crate::api::order::routes::OrderApi;
use crate::api::product::routes::{CategoryApi, ProductApi};
use crate::api::security::TokenService;
use crate::api::wishlist::routes::WishlistApi;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub category_api: CategoryApi,
    pub auth_api: AuthApi,
    pub cart_api: CartApi,
    pub wishlist_api: WishlistApi,
    pub order_api: OrderApi,
    pub chat_api: ChatApi,
    pub token_service: TokenService,
}

impl DependencyContainer {
    pub fn new(pool: MySqlPool, config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let token_service = TokenService::new(&config.jwt.secret, config.jwt.ttl_hours);

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryMySql::new(pool.clone()));
        let listing_cache = Arc::new(ListingCacheRepositoryMySql::new(pool.clone()));
        let api_usage = Arc::new(ApiUsageRepositoryMySql::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryMySql::new(pool.clone()));
        let cart_repository = Arc::new(CartRepositoryMySql::new(pool.clone()));
        let wishlist_repository = Arc::new(WishlistRepositoryMySql::new(pool.clone()));
        let order_repository = Arc::new(OrderRepositoryMySql::new(pool));
        let hasher = Arc::new(Argon2PasswordHasher::new());

        let marketplace = match config.marketplace.credentials() {
            Some((api_url, api_key)) => {
                tracing::info!(
                    "Marketplace fallback enabled ({} calls per month)",
                    config.marketplace.monthly_limit
                );
                Some(MarketplaceFallback {
                    service: Arc::new(MarketplaceCatalog::new(MarketplaceClient::new(
                        api_url, api_key,
                    ))),
                    usage: api_usage,
                    quota: MarketplaceQuota::new(config.marketplace.monthly_limit),
                })
            }
            None => {
                tracing::info!("Marketplace fallback disabled: API URL or key not configured");
                None
            }
        };

        // Product use cases
        let search_use_case = Arc::new(SearchProductsUseCaseImpl {
            repository: product_repository.clone(),
            cache: listing_cache,
            marketplace,
            cache_ttl: Duration::hours(config.marketplace.cache_ttl_hours),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let list_categories_use_case = Arc::new(ListCategoriesUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_category_use_case = Arc::new(GetProductsByCategoryUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // User use cases
        let signup_use_case = Arc::new(SignupUseCaseImpl {
            repository: user_repository.clone(),
            hasher: hasher.clone(),
            logger: logger.clone(),
        });
        let login_use_case = Arc::new(LoginUseCaseImpl {
            repository: user_repository.clone(),
            hasher,
            logger: logger.clone(),
        });
        let get_profile_use_case = Arc::new(GetProfileUseCaseImpl {
            repository: user_repository,
            logger: logger.clone(),
        });

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let add_to_cart_use_case = Arc::new(AddToCartUseCaseImpl {
            repository: cart_repository.clone(),
            product_repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_cart_item_use_case = Arc::new(UpdateCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            product_repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let remove_cart_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });

        // Wishlist use cases
        let get_wishlist_use_case = Arc::new(GetWishlistUseCaseImpl {
            repository: wishlist_repository.clone(),
            logger: logger.clone(),
        });
        let add_to_wishlist_use_case = Arc::new(AddToWishlistUseCaseImpl {
            repository: wishlist_repository.clone(),
            product_repository,
            logger: logger.clone(),
        });
        let remove_from_wishlist_use_case = Arc::new(RemoveFromWishlistUseCaseImpl {
            repository: wishlist_repository,
            logger: logger.clone(),
        });

        // Order use cases
        let place_order_use_case = Arc::new(PlaceOrderUseCaseImpl {
            repository: order_repository.clone(),
            cart_repository,
            logger: logger.clone(),
        });
        let get_orders_use_case = Arc::new(GetOrdersUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let get_order_by_id_use_case = Arc::new(GetOrderByIdUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let cancel_order_use_case = Arc::new(CancelOrderUseCaseImpl {
            repository: order_repository,
            logger: logger.clone(),
        });

        // Chat composes the catalog use cases
        let chat_use_case = Arc::new(ChatUseCaseImpl {
            search: search_use_case.clone(),
            categories: list_categories_use_case.clone(),
            logger,
        });

        Ok(Self {
            health_api: HealthApi::new(),
            product_api: ProductApi::new(search_use_case, get_by_id_use_case),
            category_api: CategoryApi::new(list_categories_use_case, get_by_category_use_case),
            auth_api: AuthApi::new(
                signup_use_case,
                login_use_case,
                get_profile_use_case,
                token_service.clone(),
            ),
            cart_api: CartApi::new(
                get_cart_use_case,
                add_to_cart_use_case,
                update_cart_item_use_case,
                remove_cart_item_use_case,
                clear_cart_use_case,
            ),
            wishlist_api: WishlistApi::new(
                get_wishlist_use_case,
                add_to_wishlist_use_case,
                remove_from_wishlist_use_case,
            ),
            order_api: OrderApi::new(
                place_order_use_case,
                get_orders_use_case,
                get_order_by_id_use_case,
                cancel_order_use_case,
            ),
            chat_api: ChatApi::new(chat_use_case),
            token_service,
        })
    }
}
