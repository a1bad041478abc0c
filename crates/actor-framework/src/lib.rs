//! # Actor Framework
//!
//! Building blocks for resource services: each resource type (a menu category, a
//! product, a submitted order) lives in its own actor that owns the collection and
//! answers CRUD requests one at a time.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - the domain type, its payloads and lifecycle hooks
//! 2. **Runtime** ([`ResourceActor`]) - the message loop and the store
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - typed, cloneable handles
//!
//! ## Requests
//!
//! | Request | Returns |
//! |---------|---------|
//! | Create  | the new id |
//! | Get     | `Option<T>` |
//! | List    | every entity, ordered by id |
//! | Update  | the patched entity |
//! | Delete  | `()` |
//!
//! ## Context Injection
//!
//! Dependencies are injected when the actor starts, through `run(context)`, not when
//! it is constructed. A category actor can hold the product client it needs to cascade
//! deletes even though both actors are created side by side:
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor, ResourceClient};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Dish { id: u32, section: u32 }
//! #[derive(Debug)] struct DishCreate { section: u32 }
//! #[derive(Debug)] struct DishUpdate;
//! #[derive(Debug, thiserror::Error)] #[error("dish error")] struct DishError;
//!
//! #[async_trait]
//! impl ActorEntity for Dish {
//!     type Id = u32; type Create = DishCreate; type Update = DishUpdate;
//!     type Context = (); type Error = DishError;
//!     fn from_create_params(id: u32, p: DishCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, section: p.section })
//!     }
//!     async fn on_update(&mut self, _: DishUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[derive(Clone, Debug)] struct Section { id: u32 }
//! #[derive(Debug)] struct SectionCreate;
//! #[derive(Debug)] struct SectionUpdate;
//! #[derive(Debug, thiserror::Error)] #[error("section error")] struct SectionError;
//!
//! #[async_trait]
//! impl ActorEntity for Section {
//!     type Id = u32; type Create = SectionCreate; type Update = SectionUpdate;
//!     type Context = ResourceClient<Dish>;
//!     type Error = SectionError;
//!
//!     fn from_create_params(id: u32, _: SectionCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id })
//!     }
//!     async fn on_update(&mut self, _: SectionUpdate, _: &Self::Context) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//!     async fn on_delete(&self, dishes: &Self::Context) -> Result<(), Self::Error> {
//!         for dish in dishes.list().await.map_err(|_| SectionError)? {
//!             if dish.section == self.id {
//!                 dishes.delete(dish.id).await.map_err(|_| SectionError)?;
//!             }
//!         }
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (dish_actor, dishes) = ResourceActor::<Dish>::new(10);
//!     let (section_actor, sections) = ResourceActor::<Section>::new(10);
//!     tokio::spawn(dish_actor.run(()));
//!     tokio::spawn(section_actor.run(dishes.clone()));
//!
//!     let section = sections.create(SectionCreate).await.unwrap();
//!     dishes.create(DishCreate { section }).await.unwrap();
//!     sections.delete(section).await.unwrap();
//!     assert!(dishes.list().await.unwrap().is_empty());
//! }
//! ```
//!
//! Shutdown is channel closure: once every client of an actor is dropped its loop
//! ends. Keep the context graph acyclic or an actor will keep its own channel open.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a client's requests from scripted expectations, which
//! makes failure injection trivial. See the [`mock`] module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
