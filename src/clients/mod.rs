//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).

pub mod category_client;
pub mod order_client;
pub mod product_client;

pub use category_client::*;
pub use order_client::*;
pub use product_client::*;

use actor_framework::FrameworkError;

/// Maps a framework error into a resource error.
///
/// `NotFound` becomes the resource's own not-found variant, entity errors raised by
/// the hooks come back as themselves, anything else is a communication error.
pub(crate) fn map_framework_error<E>(e: FrameworkError, not_found: fn(String) -> E) -> E
where
    E: std::error::Error + Clone + From<String> + 'static,
{
    match e {
        FrameworkError::NotFound(id) => not_found(id),
        other => other
            .downcast_entity::<E>()
            .cloned()
            .unwrap_or_else(|| E::from(other.to_string())),
    }
}
