//! Order summary: cart lines grouped by category, plus tax-inclusive totals.
//!
//! Menu prices already include IGV. The summary backs the tax out of the total:
//!
//! ```text
//! total    = Σ quantity × price
//! subtotal = total / 1.18
//! igv      = total - subtotal
//! ```

use crate::model::{CategoryRef, OrderItem};
use serde::Serialize;

/// Divisor that turns an IGV-inclusive amount into its net amount.
pub const IGV_FACTOR: f64 = 1.18;

/// Cart lines sharing one category, in the order they were added.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGroup {
    pub category: CategoryRef,
    pub items: Vec<OrderItem>,
}

/// Groups lines by category name, ordered by the category's order number.
///
/// Groups with equal order numbers keep the order in which their first line
/// appears in the cart.
pub fn group_by_category(items: &[OrderItem]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    for item in items {
        match groups
            .iter_mut()
            .find(|group| group.category.name == item.category.name)
        {
            Some(group) => group.items.push(item.clone()),
            None => groups.push(CategoryGroup {
                category: item.category.clone(),
                items: vec![item.clone()],
            }),
        }
    }
    groups.sort_by_key(|group| group.category.order_number);
    groups
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub igv: f64,
    pub total: f64,
}

impl OrderTotals {
    pub fn from_items(items: &[OrderItem]) -> Self {
        Self::with_factor(items, IGV_FACTOR)
    }

    pub fn with_factor(items: &[OrderItem], tax_factor: f64) -> Self {
        let total = items.iter().map(OrderItem::line_total).fold(0.0, |acc, x| acc + x);
        let subtotal = total / tax_factor;
        Self {
            subtotal,
            igv: total - subtotal,
            total,
        }
    }
}

/// Everything the summary panel renders for one cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub groups: Vec<CategoryGroup>,
    pub totals: OrderTotals,
}

impl OrderSummary {
    pub fn new(items: &[OrderItem], tax_factor: f64) -> Self {
        Self {
            groups: group_by_category(items),
            totals: OrderTotals::with_factor(items, tax_factor),
        }
    }

    /// An empty cart renders the "La Comanda está Vacía" placeholder.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Formats an amount in soles, e.g. `S/ 25.00`.
pub fn format_currency(amount: f64) -> String {
    format!("S/ {:.2}", amount)
}
