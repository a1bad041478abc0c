//! # System Lifecycle
//!
//! Starts and wires the resource actors ([`PosSystem`]) and carries the
//! [`RefreshTrigger`] views use to tell each other that data changed.
//!
//! ## Wiring
//!
//! ```text
//! Product actor   Context = ()
//! Category actor  Context = ProductClient   (cascade delete)
//! Order actor     Context = ()
//! ```
//!
//! The dependency graph is acyclic, so dropping the clients is enough to stop
//! every actor: the Category actor exits first and releases its
//! `ProductClient`, which lets the Product actor exit.
//!
//! Tracing is set up by the binary through
//! [`actor_framework::tracing::setup_tracing`].

pub mod pos_system;
pub mod trigger;

pub use pos_system::*;
pub use trigger::*;
