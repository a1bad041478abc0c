//! Menu products. Prices already include IGV.
use crate::model::CategoryId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category_id: CategoryId,
    #[serde(default)]
    pub image: Option<String>,
    /// Named variants ("Personal", "Familiar"); empty when the product has none.
    #[serde(default)]
    pub variants: Vec<String>,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically set by the actor system)
    /// * `name` - Product name
    /// * `price` - Unit price, tax included
    /// * `category_id` - Owning category
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, category_id: CategoryId) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category_id,
            image: None,
            variants: Vec::new(),
        }
    }
}

/// DTOs for Product creation and updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub category_id: CategoryId,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub variants: Vec<String>,
}

impl ProductCreate {
    pub fn new(name: impl Into<String>, price: f64, category_id: CategoryId) -> Self {
        Self {
            name: name.into(),
            price,
            category_id,
            image: None,
            variants: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category_id: Option<CategoryId>,
    pub variants: Option<Vec<String>>,
}
