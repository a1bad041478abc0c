//! Cart lines and submitted orders.
use crate::model::{CategoryRef, Product, ProductId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// One line of the cart.
///
/// Lines are identified by `unique_id`, derived from the product and variant, so
/// adding the same product and variant twice grows one line instead of adding another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub unique_id: String,
    pub product_id: ProductId,
    pub name: String,
    #[serde(default)]
    pub variant: Option<String>,
    pub category: CategoryRef,
    pub quantity: u32,
    /// Unit price, tax included.
    pub price: f64,
}

impl OrderItem {
    pub fn from_product(
        product: &Product,
        category: CategoryRef,
        variant: Option<String>,
        quantity: u32,
    ) -> Self {
        Self {
            unique_id: Self::line_key(product.id, variant.as_deref()),
            product_id: product.id,
            name: product.name.clone(),
            variant,
            category,
            quantity,
            price: product.price,
        }
    }

    pub fn line_key(product_id: ProductId, variant: Option<&str>) -> String {
        match variant {
            Some(variant) => format!("{}-{}", product_id.0, variant),
            None => product_id.0.to_string(),
        }
    }

    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    /// Sequential, human-facing number.
    pub order_number: u32,
    pub items: Vec<OrderItem>,
    pub total: f64,
}

/// Payload for submitting the cart as an order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Creates a new Order; the total is the undiscounted sum of its lines.
    pub fn new(id: OrderId, order_number: u32, items: Vec<OrderItem>) -> Self {
        let total = items.iter().map(OrderItem::line_total).fold(0.0, |acc, x| acc + x);
        Self {
            id,
            order_number,
            items,
            total,
        }
    }

    /// The label shown in the order summary header ("Orden #7").
    pub fn label(&self) -> String {
        self.order_number.to_string()
    }
}
