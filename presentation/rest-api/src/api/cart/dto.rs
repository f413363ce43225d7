use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartLine};

use crate::api::product::dto::ProductResponse;

#[derive(Debug, Clone, Object)]
pub struct AddToCartRequest {
    pub product_id: String,
    /// Defaults to 1
    #[oai(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCartItemRequest {
    /// New quantity; 0 removes the line
    pub quantity: u32,
}

#[derive(Debug, Clone, Object)]
pub struct CartLineResponse {
    pub product: ProductResponse,
    pub quantity: u32,
    pub subtotal: f64,
    pub added_at: DateTime<Utc>,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            subtotal: line.subtotal(),
            quantity: line.quantity,
            added_at: line.added_at,
            product: line.product.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub items: Vec<CartLineResponse>,
    /// Sum of all quantities
    pub item_count: u32,
    pub total: f64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            item_count: cart.item_count(),
            total: cart.total(),
            items: cart.lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ClearCartResponse {
    /// Number of lines removed
    pub count: u64,
}
