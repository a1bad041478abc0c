//! # Framework Errors
//!
//! Errors raised by the plumbing between a [`ResourceClient`](crate::ResourceClient)
//! and its [`ResourceActor`](crate::ResourceActor). Entity-specific failures travel
//! boxed inside [`FrameworkError::EntityError`] so each resource keeps its own type.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Wraps an entity error raised by one of the lifecycle hooks.
    pub fn entity(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        FrameworkError::EntityError(Box::new(e))
    }

    /// Returns the entity error as `E` if that is what this error carries.
    pub fn downcast_entity<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            FrameworkError::EntityError(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }
}
