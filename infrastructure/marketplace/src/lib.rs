pub mod catalog;
pub mod client;
