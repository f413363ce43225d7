use std::collections::HashMap;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::order::model::{Order, OrderItem};
use business::domain::order::value_objects::OrderStatus;
use business::domain::shared::value_objects::UserId;

use crate::convert::{decimal_to_f64, parse_uuid};

#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: String,
    pub user_id: String,
    pub status: String,
    pub total: BigDecimal,
    pub shipping_address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
pub struct OrderItemEntity {
    pub order_id: String,
    pub product_id: String,
    pub product_name: String,
    pub unit_price: BigDecimal,
    pub quantity: u32,
}

impl OrderItemEntity {
    fn into_domain(self) -> Result<OrderItem, RepositoryError> {
        Ok(OrderItem {
            product_id: parse_uuid(&self.product_id)?,
            product_name: self.product_name,
            unit_price: decimal_to_f64(&self.unit_price),
            quantity: self.quantity,
        })
    }
}

impl OrderEntity {
    pub fn into_domain(self, items: Vec<OrderItemEntity>) -> Result<Order, RepositoryError> {
        let status = self.status.parse::<OrderStatus>().map_err(|e| {
            tracing::error!("{} on order {}", e, self.id);
            RepositoryError::DatabaseError
        })?;

        Ok(Order {
            id: parse_uuid(&self.id)?,
            user_id: UserId::new(self.user_id),
            status,
            items: items
                .into_iter()
                .map(OrderItemEntity::into_domain)
                .collect::<Result<_, _>>()?,
            total: decimal_to_f64(&self.total),
            shipping_address: self.shipping_address,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Attaches item rows to their orders, keeping the order rows' sequence.
pub fn assemble(
    orders: Vec<OrderEntity>,
    items: Vec<OrderItemEntity>,
) -> Result<Vec<Order>, RepositoryError> {
    let mut by_order: HashMap<String, Vec<OrderItemEntity>> = HashMap::new();
    for item in items {
        by_order.entry(item.order_id.clone()).or_default().push(item);
    }

    orders
        .into_iter()
        .map(|order| {
            let items = by_order.remove(&order.id).unwrap_or_default();
            order.into_domain(items)
        })
        .collect()
}
