//! Drag-and-drop reordering of categories.
//!
//! A move is applied locally with [`array_move`] and then persisted by
//! renumbering every category to its 1-based position, one update at a time.
//! If an update fails the categories before it keep their new numbers and the
//! rest keep their old ones; nothing is rolled back.

use crate::category_actor::CategoryError;
use crate::clients::CategoryClient;
use crate::model::{Category, CategoryId, CategoryUpdate};
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Removes the element at `from` and inserts it at `to`.
///
/// Out-of-range indices return the list unchanged.
pub fn array_move<T>(mut items: Vec<T>, from: usize, to: usize) -> Vec<T> {
    if from >= items.len() || to >= items.len() || from == to {
        return items;
    }
    let item = items.remove(from);
    items.insert(to, item);
    items
}

/// The `(id, order_number)` pairs that persist `categories` in their current order.
pub fn renumber_plan(categories: &[Category]) -> Vec<(CategoryId, u32)> {
    categories
        .iter()
        .zip(1u32..)
        .map(|(category, position)| (category.id, position))
        .collect()
}

/// Rewrites the local order numbers to match list positions.
pub fn renumber_local(categories: &mut [Category]) {
    for (category, position) in categories.iter_mut().zip(1u32..) {
        category.order_number = position;
    }
}

#[derive(Debug, Error)]
#[error("Renumbering stopped at {failed_id} after {renumbered} of {total} categories: {source}")]
pub struct ReorderError {
    /// Categories already persisted with their new number.
    pub renumbered: usize,
    pub total: usize,
    pub failed_id: CategoryId,
    #[source]
    pub source: CategoryError,
}

/// Persists the list order, awaiting each update before sending the next.
#[instrument(skip(client, categories), fields(total = categories.len()))]
pub async fn persist_order(
    client: &CategoryClient,
    categories: &[Category],
) -> Result<(), ReorderError> {
    let plan = renumber_plan(categories);
    let total = plan.len();

    for (renumbered, (id, order_number)) in plan.into_iter().enumerate() {
        if let Err(source) = client
            .edit_category(id, CategoryUpdate::reposition(order_number))
            .await
        {
            warn!(category_id = %id, renumbered, total, error = %source, "Renumbering failed");
            return Err(ReorderError {
                renumbered,
                total,
                failed_id: id,
                source,
            });
        }
    }

    info!(total, "Category order persisted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Owner;

    fn named(names: &[&str]) -> Vec<Category> {
        let owner = Owner::new("Ana Torres", "Centro");
        names
            .iter()
            .zip(1u32..)
            .map(|(name, n)| Category::new(CategoryId(n), *name, n, owner.clone()))
            .collect()
    }

    fn names(categories: &[Category]) -> Vec<&str> {
        categories.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_array_move_forward_and_back() {
        assert_eq!(names(&array_move(named(&["A", "B", "C"]), 0, 2)), ["B", "C", "A"]);
        assert_eq!(names(&array_move(named(&["A", "B", "C"]), 0, 1)), ["B", "A", "C"]);
        assert_eq!(names(&array_move(named(&["A", "B", "C"]), 2, 0)), ["C", "A", "B"]);
    }

    #[test]
    fn test_array_move_out_of_range_is_noop() {
        assert_eq!(names(&array_move(named(&["A", "B"]), 0, 5)), ["A", "B"]);
        assert_eq!(names(&array_move(named(&["A", "B"]), 9, 0)), ["A", "B"]);
    }

    #[test]
    fn test_renumber_plan_is_one_based() {
        let moved = array_move(named(&["A", "B", "C"]), 0, 2);
        assert_eq!(
            renumber_plan(&moved),
            vec![(CategoryId(2), 1), (CategoryId(3), 2), (CategoryId(1), 3)]
        );
    }
}
