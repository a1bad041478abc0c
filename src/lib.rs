//! # Comanda
//!
//! Ordering core for a restaurant point of sale.
//!
//! - [`lifecycle`]: starts the Category, Product and Order actors ([`lifecycle::PosSystem`])
//!   and the shared [`lifecycle::RefreshTrigger`].
//! - [`clients`]: typed clients over the actors.
//! - [`board`] and [`reorder`]: the admin category board with drag reordering.
//! - [`menu`], [`cart`], [`summary`] and [`order_panel`]: the order screen.
//! - [`storage`]: where the cart is persisted between sessions.

pub mod board;
pub mod cart;
pub mod category_actor;
pub mod clients;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod menu;
pub mod model;
pub mod order_actor;
pub mod order_panel;
pub mod product_actor;
pub mod reorder;
pub mod storage;
pub mod summary;
