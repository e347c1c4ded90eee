use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, Entity, OrderId, ProductId, UserId};

/// Order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
}

/// Order line: product, quantity, and the unit price captured at purchase
/// time (decoupled from the product's current price).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    product_id: ProductId,
    quantity: i64,
    unit_price: Decimal,
}

impl OrderItem {
    /// Create an order line. Quantity must be strictly positive.
    pub fn new(
        product_id: ProductId,
        quantity: i64,
        unit_price: Decimal,
    ) -> Result<Self, DomainError> {
        if quantity <= 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        Ok(Self {
            product_id,
            quantity,
            unit_price,
        })
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// `unit_price × quantity`.
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    pub fn set_quantity(&mut self, quantity: i64) -> Result<(), DomainError> {
        if quantity <= 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        self.quantity = quantity;
        Ok(())
    }
}

/// An order placed by one user, owning its order lines.
///
/// The total is always derived from the lines; there is no way to set it
/// directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    user_id: UserId,
    items: Vec<OrderItem>,
    total_price: Decimal,
    status: OrderStatus,
    created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(
        id: OrderId,
        user_id: UserId,
        items: Vec<OrderItem>,
        status: OrderStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        let mut order = Self {
            id,
            user_id,
            items,
            total_price: Decimal::ZERO,
            status,
            created_at,
        };
        order.recalculate_total();
        order
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Sum of line subtotals. Recomputed whenever the lines change.
    pub fn total_price(&self) -> Decimal {
        self.total_price
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn push_item(&mut self, item: OrderItem) {
        self.items.push(item);
        self.recalculate_total();
    }

    fn recalculate_total(&mut self) {
        self.total_price = self.items.iter().map(OrderItem::subtotal).sum();
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
