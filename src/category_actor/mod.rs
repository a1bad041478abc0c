//! # Category Actor
//!
//! Menu categories: CRUD plus a cascade that removes a category's products when
//! the category is deleted.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Category`]
//! - [`error`] - [`CategoryError`]
//! - [`new()`] - factory that creates the actor and its client
//!
//! The actor must be run with a [`ProductClient`](crate::clients::ProductClient) as context.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Category;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Category actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Category>, ResourceClient<Category>) {
    ResourceActor::new(buffer_size)
}
