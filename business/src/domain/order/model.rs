use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::cart::model::{Cart, round_money};
use crate::domain::shared::value_objects::UserId;

use super::errors::OrderError;
use super::value_objects::OrderStatus;

/// Product snapshot taken at checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product_id: Uuid,
    pub product_name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

impl OrderItem {
    pub fn subtotal(&self) -> f64 {
        round_money(self.unit_price * f64::from(self.quantity))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub user_id: UserId,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub shipping_address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Builds a pending order from every line of the cart.
    pub fn from_cart(cart: &Cart, shipping_address: Option<String>) -> Result<Self, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        if cart
            .lines
            .iter()
            .any(|line| line.exceeds_stock() || !line.product.is_purchasable())
        {
            return Err(OrderError::InsufficientStock);
        }

        let items = cart
            .lines
            .iter()
            .map(|line| OrderItem {
                product_id: line.product.id,
                product_name: line.product.name.clone(),
                unit_price: line.product.price,
                quantity: line.quantity,
            })
            .collect();

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id: cart.user_id.clone(),
            status: OrderStatus::Pending,
            items,
            total: cart.total(),
            shipping_address: shipping_address
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty()),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn cancel(&mut self) -> Result<(), OrderError> {
        if !self.status.is_cancellable() {
            return Err(OrderError::NotCancellable);
        }
        self.status = OrderStatus::Cancelled;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::domain::cart::model::CartLine;
    use crate::domain::product::model::fixtures::product;

    pub fn order(user_id: &str, status: OrderStatus) -> Order {
        let cart = Cart::new(
            UserId::new(user_id),
            vec![CartLine {
                product: product("Wool Coat", 120.0, 3),
                quantity: 1,
                added_at: Utc::now(),
            }],
        );
        let mut order = Order::from_cart(&cart, Some("1 High St".to_string())).unwrap();
        order.status = status;
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartLine;
    use crate::domain::product::model::fixtures::product;
    use crate::domain::product::value_objects::ProductSource;

    fn line(name: &str, price: f64, quantity: u32, stock: u32) -> CartLine {
        CartLine {
            product: product(name, price, stock),
            quantity,
            added_at: Utc::now(),
        }
    }

    #[test]
    fn should_snapshot_cart_lines_into_pending_order() {
        let cart = Cart::new(
            UserId::new("u1"),
            vec![line("Coat", 99.5, 2, 5), line("Scarf", 15.0, 1, 5)],
        );

        let order = Order::from_cart(&cart, Some("  12 Rose Lane ".to_string())).unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.items[0].product_name, "Coat");
        assert_eq!(order.items[0].subtotal(), 199.0);
        assert_eq!(order.total, 214.0);
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.shipping_address.as_deref(), Some("12 Rose Lane"));
    }

    #[test]
    fn should_reject_empty_cart() {
        let cart = Cart::new(UserId::new("u1"), vec![]);
        assert!(matches!(
            Order::from_cart(&cart, None),
            Err(OrderError::EmptyCart)
        ));
    }

    #[test]
    fn should_reject_line_exceeding_stock() {
        let cart = Cart::new(UserId::new("u1"), vec![line("Coat", 99.5, 4, 3)]);
        assert!(matches!(
            Order::from_cart(&cart, None),
            Err(OrderError::InsufficientStock)
        ));
    }

    #[test]
    fn should_reject_marketplace_line() {
        let mut listing = line("Listing", 10.0, 1, 5);
        listing.product.source = ProductSource::Marketplace;
        let cart = Cart::new(UserId::new("u1"), vec![listing]);
        assert!(Order::from_cart(&cart, None).is_err());
    }

    #[test]
    fn should_drop_blank_shipping_address() {
        let cart = Cart::new(UserId::new("u1"), vec![line("Coat", 10.0, 1, 1)]);
        let order = Order::from_cart(&cart, Some("   ".to_string())).unwrap();
        assert!(order.shipping_address.is_none());
    }

    #[test]
    fn should_cancel_pending_but_not_shipped_order() {
        let mut order = fixtures::order("u1", OrderStatus::Pending);
        assert!(order.cancel().is_ok());
        assert_eq!(order.status, OrderStatus::Cancelled);

        let mut shipped = fixtures::order("u1", OrderStatus::Shipped);
        assert!(matches!(shipped.cancel(), Err(OrderError::NotCancellable)));
    }
}
