//! Side panel of the order screen: the cart, its summary and the number of
//! the last submitted order.

use crate::cart::{CartError, CartStore};
use crate::clients::OrderClient;
use crate::lifecycle::{RefreshTrigger, TriggerListener};
use crate::model::OrderId;
use crate::order_actor::OrderError;
use crate::storage::KeyValueStore;
use crate::summary::OrderSummary;
use tracing::{debug, warn};

pub struct OrderPanel<S: KeyValueStore> {
    cart: CartStore<S>,
    orders: OrderClient,
    trigger: RefreshTrigger,
    listener: TriggerListener,
    order_number: String,
    tax_factor: f64,
}

impl<S: KeyValueStore> OrderPanel<S> {
    pub fn new(
        cart: CartStore<S>,
        orders: OrderClient,
        trigger: RefreshTrigger,
        tax_factor: f64,
    ) -> Self {
        let listener = trigger.subscribe();
        Self {
            cart,
            orders,
            trigger,
            listener,
            order_number: String::new(),
            tax_factor,
        }
    }

    /// Restores the stored cart and fetches the order number label.
    pub async fn mount(&mut self) -> Result<(), CartError> {
        self.cart.rehydrate()?;
        self.refresh_order_number().await;
        Ok(())
    }

    /// Best effort: on failure the previous label stays.
    pub async fn refresh_order_number(&mut self) {
        match self.orders.find_last_order().await {
            Ok(label) => self.order_number = label,
            Err(OrderError::NoOrders) => debug!("No order submitted yet"),
            Err(e) => warn!(error = %e, "Could not fetch last order number"),
        }
    }

    pub async fn refresh_if_triggered(&mut self) -> bool {
        if !self.listener.take_pending() {
            return false;
        }
        self.refresh_order_number().await;
        true
    }

    /// Blank until an order number has been fetched.
    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    pub fn header(&self) -> String {
        format!("Orden #{}", self.order_number)
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary::new(self.cart.items(), self.tax_factor)
    }

    pub fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartStore<S> {
        &mut self.cart
    }

    /// Submits the cart; the label catches up on the next refresh.
    pub async fn submit(&mut self) -> Result<OrderId, CartError> {
        self.cart.submit(&self.orders, &self.trigger).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Order;
    use crate::storage::MemoryStore;
    use crate::summary::IGV_FACTOR;
    use actor_framework::mock::MockClient;
    use actor_framework::FrameworkError;

    fn panel(mock: &MockClient<Order>) -> OrderPanel<MemoryStore> {
        OrderPanel::new(
            CartStore::new(MemoryStore::new()),
            OrderClient::new(mock.client()),
            RefreshTrigger::new(),
            IGV_FACTOR,
        )
    }

    #[tokio::test]
    async fn test_label_blank_without_orders() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_list().return_ok(Vec::new());
        let mut panel = panel(&mock);

        panel.mount().await.unwrap();

        assert_eq!(panel.order_number(), "");
        assert_eq!(panel.header(), "Orden #");
        assert!(panel.summary().is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn test_failed_lookup_keeps_previous_label() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_list()
            .return_ok(vec![Order::new(OrderId(3), 3, Vec::new())]);
        mock.expect_list().return_err(FrameworkError::ActorClosed);
        let mut panel = panel(&mock);

        panel.refresh_order_number().await;
        assert_eq!(panel.order_number(), "3");
        panel.refresh_order_number().await;
        assert_eq!(panel.order_number(), "3");
        mock.verify();
    }
}
