use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::order::model::{Order, OrderItem};

#[derive(Debug, Clone, Object)]
pub struct PlaceOrderRequest {
    #[oai(skip_serializing_if_is_none)]
    pub shipping_address: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct OrderItemResponse {
    pub product_id: String,
    /// Name at checkout time
    pub product_name: String,
    /// Price at checkout time
    pub unit_price: f64,
    pub quantity: u32,
    pub subtotal: f64,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            subtotal: item.subtotal(),
            product_id: item.product_id.to_string(),
            product_name: item.product_name,
            unit_price: item.unit_price,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderResponse {
    pub id: String,
    /// `pending`, `confirmed`, `shipped`, `delivered` or `cancelled`
    pub status: String,
    pub items: Vec<OrderItemResponse>,
    pub item_count: u32,
    pub total: f64,
    #[oai(skip_serializing_if_is_none)]
    pub shipping_address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            item_count: order.item_count(),
            id: order.id.to_string(),
            status: order.status.to_string(),
            items: order.items.into_iter().map(Into::into).collect(),
            total: order.total,
            shipping_address: order.shipping_address,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}
