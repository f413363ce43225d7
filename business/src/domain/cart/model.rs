use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::UserId;

/// Rounds a currency amount to cents.
pub fn round_money(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// One `cart_items` row.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub user_id: UserId,
    pub product_id: Uuid,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    pub fn new(user_id: UserId, product_id: Uuid, quantity: u32) -> Self {
        Self {
            user_id,
            product_id,
            quantity,
            added_at: Utc::now(),
        }
    }
}

/// A cart row joined with its product.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        round_money(self.product.price * f64::from(self.quantity))
    }

    pub fn exceeds_stock(&self) -> bool {
        self.quantity > self.product.stock
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub user_id: UserId,
    pub lines: Vec<CartLine>,
}

impl Cart {
    pub fn new(user_id: UserId, lines: Vec<CartLine>) -> Self {
        Self { user_id, lines }
    }

    pub fn total(&self) -> f64 {
        round_money(self.lines.iter().map(CartLine::subtotal).sum())
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
