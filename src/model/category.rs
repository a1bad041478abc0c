//! A menu category as shown on the admin board and in the menu navigation.
//!
//! # Actor Framework
//! Managed by a [`ResourceActor`](actor_framework::ResourceActor); see
//! [`crate::category_actor`] for the hooks, including the product cascade on delete.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u32);

impl From<u32> for CategoryId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "category_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
}

/// The staff member who created the category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub full_name: String,
    pub branch: Branch,
}

impl Owner {
    pub fn new(full_name: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            branch: Branch {
                name: branch.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// 1-based display position.
    pub order_number: u32,
    #[serde(default)]
    pub image: Option<String>,
    pub user: Owner,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>, order_number: u32, user: Owner) -> Self {
        Self {
            id,
            name: name.into(),
            order_number,
            image: None,
            user,
        }
    }

    /// The slice of the category that travels with a cart line.
    pub fn snapshot(&self) -> CategoryRef {
        CategoryRef {
            id: self.id,
            name: self.name.clone(),
            order_number: self.order_number,
        }
    }
}

/// Sorts categories for display: ascending order number, ties by id.
pub fn sort_by_order_number(categories: &mut [Category]) {
    categories.sort_by_key(|c| (c.order_number, c.id));
}

/// Payload for creating a category. Without an order number the category takes
/// its id as position, which places it after every existing one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreate {
    pub name: String,
    #[serde(default)]
    pub order_number: Option<u32>,
    #[serde(default)]
    pub image: Option<String>,
    pub user: Owner,
}

impl CategoryCreate {
    pub fn new(name: impl Into<String>, user: Owner) -> Self {
        Self {
            name: name.into(),
            order_number: None,
            image: None,
            user,
        }
    }
}

/// Partial patch for a category; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<u32>,
    /// `Some(None)` clears the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Option<String>>,
}

impl CategoryUpdate {
    /// The patch sent for every category when the board is renumbered.
    pub fn reposition(order_number: u32) -> Self {
        Self {
            order_number: Some(order_number),
            ..Self::default()
        }
    }
}

/// Category data copied into each cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRef {
    pub id: CategoryId,
    pub name: String,
    pub order_number: u32,
}
