pub mod auth;
pub mod cart;
pub mod chat;
pub mod error;
pub mod health;
pub mod order;
pub mod product;
pub mod security;
pub mod tags;
pub mod wishlist;
