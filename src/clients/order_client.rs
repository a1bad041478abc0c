//! # Order Client
//!
//! Submits carts and looks up the latest order number.
use super::map_framework_error;
use crate::model::{Order, OrderCreate, OrderId, OrderItem};
use crate::order_actor::OrderError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, items), fields(lines = items.len()))]
    pub async fn submit_order(&self, items: Vec<OrderItem>) -> Result<OrderId, OrderError> {
        debug!(?items, "submit_order called");
        let id = self
            .inner
            .create(OrderCreate { items })
            .await
            .map_err(Self::map_error)?;
        info!(order_id = %id, "Order submitted");
        Ok(id)
    }

    /// Label of the most recently submitted order.
    ///
    /// Fails with [`OrderError::NoOrders`] before the first submission.
    #[instrument(skip(self))]
    pub async fn find_last_order(&self) -> Result<String, OrderError> {
        let orders = self.inner.list().await.map_err(Self::map_error)?;
        orders
            .iter()
            .max_by_key(|order| order.order_number)
            .map(Order::label)
            .ok_or(OrderError::NoOrders)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        map_framework_error(e, OrderError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::MockClient;

    #[tokio::test]
    async fn test_find_last_order_picks_highest_number() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_list().return_ok(vec![
            Order::new(OrderId(1), 1, Vec::new()),
            Order::new(OrderId(12), 12, Vec::new()),
            Order::new(OrderId(4), 4, Vec::new()),
        ]);
        mock.expect_list().return_ok(Vec::new());

        let orders = OrderClient::new(mock.client());
        assert_eq!(orders.find_last_order().await.unwrap(), "12");
        assert_eq!(orders.find_last_order().await, Err(OrderError::NoOrders));
        mock.verify();
    }
}
