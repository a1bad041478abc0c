//! Error types for the Category actor.

use thiserror::Error;

/// Errors that can occur during category operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CategoryError {
    /// The requested category was not found.
    #[error("Category not found: {0}")]
    NotFound(String),

    /// Category names must not be blank.
    #[error("Category name must not be empty")]
    EmptyName,

    /// Order numbers are 1-based.
    #[error("Invalid order number: {0}")]
    InvalidOrderNumber(u32),

    /// Deleting the category's products failed; the category was kept.
    #[error("Failed to delete products of category: {0}")]
    Cascade(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CategoryError {
    fn from(msg: String) -> Self {
        CategoryError::ActorCommunicationError(msg)
    }
}
