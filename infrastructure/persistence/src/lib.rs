pub mod convert;
pub mod db;
pub mod search_sql;
pub mod cart {
    pub mod entity;
    pub mod repository;
}
pub mod marketplace {
    pub mod api_usage;
    pub mod listing_cache;
}
pub mod order {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod user {
    pub mod entity;
    pub mod repository;
}
pub mod wishlist {
    pub mod entity;
    pub mod repository;
}
