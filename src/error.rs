//! Errors shared by the views that load data on mount.

use crate::category_actor::CategoryError;
use crate::product_actor::ProductError;
use thiserror::Error;

/// A view could not fetch its initial data.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LoadError {
    #[error("Failed to load categories: {0}")]
    Categories(#[from] CategoryError),

    #[error("Failed to load products: {0}")]
    Products(#[from] ProductError),
}
