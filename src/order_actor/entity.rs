//! [`ActorEntity`] implementation for [`Order`].
//!
//! Orders are immutable once submitted, so the update payload is uninhabited.

use super::OrderError;
use crate::model::{Order, OrderCreate, OrderId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = Infallible;
    type Context = ();
    type Error = OrderError;

    /// The order number follows the id sequence.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.items.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        if let Some(item) = params.items.iter().find(|item| item.quantity == 0) {
            return Err(OrderError::InvalidQuantity(item.unique_id.clone()));
        }
        Ok(Self::new(id, id.0, params.items))
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }
}
