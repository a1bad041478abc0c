//! The cart ("comanda") being built by staff.
//!
//! Every change is written to the [`KeyValueStore`] under [`CART_KEY`], so the
//! cart survives a restart and is picked up again by [`CartStore::rehydrate`].

use crate::clients::OrderClient;
use crate::lifecycle::RefreshTrigger;
use crate::model::{OrderId, OrderItem};
use crate::order_actor::OrderError;
use crate::storage::{KeyValueStore, StorageError, CART_KEY};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Error)]
pub enum CartError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Stored cart is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Order submission failed: {0}")]
    Submit(#[from] OrderError),

    #[error("No cart line with id {0:?}")]
    UnknownLine(String),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Cart line {0:?} has no units")]
    ZeroQuantity(String),

    /// The order went through but the stored cart could not be removed.
    #[error("Order {order_id} submitted, but the stored cart could not be cleared: {source}")]
    SubmittedNotCleared {
        order_id: OrderId,
        #[source]
        source: StorageError,
    },
}

pub struct CartStore<S: KeyValueStore> {
    storage: S,
    items: Vec<OrderItem>,
    hydrated: bool,
}

impl<S: KeyValueStore> CartStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            items: Vec::new(),
            hydrated: false,
        }
    }

    /// Loads the stored cart the first time it is called; later calls do nothing.
    ///
    /// A stored cart replaces whatever is in memory. With nothing stored the
    /// in-memory cart is kept as is.
    pub fn rehydrate(&mut self) -> Result<(), CartError> {
        if self.hydrated {
            return Ok(());
        }
        self.hydrated = true;

        match self.storage.get(CART_KEY)? {
            Some(raw) => {
                self.items = serde_json::from_str(&raw)?;
                info!(lines = self.items.len(), "Cart restored from storage");
            }
            None => debug!("No stored cart"),
        }
        Ok(())
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replaces the whole cart.
    pub fn set_order(&mut self, items: Vec<OrderItem>) -> Result<(), CartError> {
        self.commit(items)
    }

    /// Adds a line, or grows the existing line with the same unique id.
    pub fn add_item(&mut self, item: OrderItem) -> Result<(), CartError> {
        if item.quantity == 0 {
            return Err(CartError::ZeroQuantity(item.unique_id));
        }
        let mut items = self.items.clone();
        match items
            .iter_mut()
            .find(|line| line.unique_id == item.unique_id)
        {
            Some(line) => line.quantity += item.quantity,
            None => items.push(item),
        }
        self.commit(items)
    }

    pub fn increase(&mut self, unique_id: &str) -> Result<(), CartError> {
        let mut items = self.items.clone();
        line_mut(&mut items, unique_id)?.quantity += 1;
        self.commit(items)
    }

    /// Takes one unit off a line; the line goes away at zero.
    pub fn decrease(&mut self, unique_id: &str) -> Result<(), CartError> {
        let mut items = self.items.clone();
        let line = line_mut(&mut items, unique_id)?;
        line.quantity = line.quantity.saturating_sub(1);
        if line.quantity == 0 {
            items.retain(|line| line.unique_id != unique_id);
        }
        self.commit(items)
    }

    pub fn remove_item(&mut self, unique_id: &str) -> Result<(), CartError> {
        let mut items = self.items.clone();
        items.retain(|line| line.unique_id != unique_id);
        if items.len() == self.items.len() {
            return Err(CartError::UnknownLine(unique_id.to_string()));
        }
        self.commit(items)
    }

    pub fn clear(&mut self) -> Result<(), CartError> {
        self.commit(Vec::new())
    }

    /// Sends the cart as a new order, then empties it and signals a refresh.
    ///
    /// If the order is rejected the cart is left untouched. Once the order is
    /// accepted the cart is emptied and the refresh signalled even when the
    /// stored copy cannot be cleared; that case is reported as
    /// [`CartError::SubmittedNotCleared`].
    #[instrument(skip(self, orders, trigger), fields(lines = self.items.len()))]
    pub async fn submit(
        &mut self,
        orders: &OrderClient,
        trigger: &RefreshTrigger,
    ) -> Result<OrderId, CartError> {
        if self.items.is_empty() {
            return Err(CartError::EmptyCart);
        }
        let id = orders.submit_order(self.items.clone()).await.map_err(|e| {
            warn!(error = %e, "Order submission failed");
            e
        })?;

        self.items.clear();
        trigger.toggle();

        if let Err(e) = self.storage.remove(CART_KEY) {
            warn!(order_id = %id, error = %e, "Submitted cart is still in storage");
            return Err(CartError::SubmittedNotCleared {
                order_id: id,
                source: e,
            });
        }
        Ok(id)
    }

    /// Writes `items` to storage and only then makes them the cart.
    fn commit(&mut self, items: Vec<OrderItem>) -> Result<(), CartError> {
        let raw = serde_json::to_string(&items)?;
        self.storage.set(CART_KEY, &raw)?;
        self.items = items;
        Ok(())
    }
}

fn line_mut<'a>(items: &'a mut [OrderItem], unique_id: &str) -> Result<&'a mut OrderItem, CartError> {
    items
        .iter_mut()
        .find(|line| line.unique_id == unique_id)
        .ok_or_else(|| CartError::UnknownLine(unique_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, CategoryId, Owner, Product, ProductId};
    use crate::storage::MemoryStore;
    use actor_framework::mock::MockClient;
    use actor_framework::FrameworkError;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    /// Memory store whose writes fail while `broken` is set.
    #[derive(Default)]
    struct BrokenDisk {
        inner: MemoryStore,
        broken: AtomicBool,
    }

    impl BrokenDisk {
        fn check(&self) -> Result<(), StorageError> {
            if self.broken.load(Ordering::SeqCst) {
                return Err(StorageError::Io(std::io::Error::other("disk full")));
            }
            Ok(())
        }
    }

    impl KeyValueStore for BrokenDisk {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.check()?;
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.check()?;
            self.inner.remove(key)
        }
    }

    fn ceviche(variant: Option<&str>, quantity: u32) -> OrderItem {
        let category = Category::new(CategoryId(1), "Entradas", 1, Owner::new("Ana", "Centro"));
        let product = Product::new(ProductId(7), "Ceviche", 32.0, category.id);
        OrderItem::from_product(&product, category.snapshot(), variant.map(String::from), quantity)
    }

    #[test]
    fn test_add_merges_same_line_and_persists() {
        let storage = Arc::new(MemoryStore::new());
        let mut cart = CartStore::new(storage.clone());

        cart.add_item(ceviche(None, 1)).unwrap();
        cart.add_item(ceviche(None, 2)).unwrap();
        cart.add_item(ceviche(Some("mixto"), 1)).unwrap();

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.items()[1].unique_id, "7-mixto");

        let stored: Vec<OrderItem> =
            serde_json::from_str(&storage.get(CART_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(stored, cart.items());
    }

    #[test]
    fn test_decrease_to_zero_removes_line() {
        let mut cart = CartStore::new(MemoryStore::new());
        cart.add_item(ceviche(None, 1)).unwrap();
        cart.increase("7").unwrap();
        assert_eq!(cart.items()[0].quantity, 2);

        cart.decrease("7").unwrap();
        cart.decrease("7").unwrap();
        assert!(cart.is_empty());
        assert!(matches!(cart.decrease("7"), Err(CartError::UnknownLine(_))));
        assert!(matches!(cart.remove_item("7"), Err(CartError::UnknownLine(_))));
    }

    #[test]
    fn test_rehydrate_overwrites_memory_once() {
        let storage = Arc::new(MemoryStore::new());
        storage
            .set(CART_KEY, &serde_json::to_string(&vec![ceviche(None, 4)]).unwrap())
            .unwrap();

        let mut cart = CartStore::new(storage.clone());
        cart.items.push(ceviche(Some("mixto"), 1));
        cart.rehydrate().unwrap();
        assert_eq!(cart.items(), &[ceviche(None, 4)]);

        storage.set(CART_KEY, "[]").unwrap();
        cart.rehydrate().unwrap();
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_rehydrate_without_stored_cart_keeps_memory() {
        let mut cart = CartStore::new(MemoryStore::new());
        cart.items.push(ceviche(None, 1));
        cart.rehydrate().unwrap();
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_rehydrate_reports_corrupt_cart() {
        let storage = MemoryStore::new();
        storage.set(CART_KEY, "{not json").unwrap();
        let mut cart = CartStore::new(storage);
        assert!(matches!(cart.rehydrate(), Err(CartError::Corrupt(_))));
    }

    #[tokio::test]
    async fn test_submit_clears_cart_and_toggles() {
        let mut mock = MockClient::<crate::model::Order>::new();
        mock.expect_create().return_ok(OrderId(1));
        let orders = OrderClient::new(mock.client());
        let trigger = RefreshTrigger::new();
        let mut listener = trigger.subscribe();

        let mut cart = CartStore::new(MemoryStore::new());
        cart.add_item(ceviche(None, 2)).unwrap();

        assert_eq!(cart.submit(&orders, &trigger).await.unwrap(), OrderId(1));
        assert!(cart.is_empty());
        assert!(listener.take_pending());
        mock.verify();
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_cart() {
        let mut mock = MockClient::<crate::model::Order>::new();
        mock.expect_create().return_err(FrameworkError::ActorClosed);
        let orders = OrderClient::new(mock.client());
        let trigger = RefreshTrigger::new();
        let mut listener = trigger.subscribe();

        let mut cart = CartStore::new(MemoryStore::new());
        assert!(matches!(
            cart.submit(&orders, &trigger).await,
            Err(CartError::EmptyCart)
        ));

        cart.add_item(ceviche(None, 2)).unwrap();
        assert!(matches!(
            cart.submit(&orders, &trigger).await,
            Err(CartError::Submit(OrderError::ActorCommunicationError(_)))
        ));
        assert_eq!(cart.items().len(), 1);
        assert!(!listener.take_pending());
        mock.verify();
    }

    #[test]
    fn test_failed_write_leaves_cart_unchanged() {
        let storage = Arc::new(BrokenDisk::default());
        let mut cart = CartStore::new(storage.clone());
        cart.add_item(ceviche(None, 1)).unwrap();
        storage.broken.store(true, Ordering::SeqCst);

        assert!(matches!(
            cart.add_item(ceviche(Some("mixto"), 1)),
            Err(CartError::Storage(_))
        ));
        assert!(matches!(cart.increase("7"), Err(CartError::Storage(_))));
        assert!(matches!(cart.decrease("7"), Err(CartError::Storage(_))));
        assert!(matches!(cart.clear(), Err(CartError::Storage(_))));

        assert_eq!(cart.items(), &[ceviche(None, 1)]);
        let stored: Vec<OrderItem> =
            serde_json::from_str(&storage.get(CART_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(stored, cart.items());
    }

    #[test]
    fn test_zero_quantity_line_is_rejected() {
        let storage = Arc::new(MemoryStore::new());
        let mut cart = CartStore::new(storage.clone());

        assert!(matches!(
            cart.add_item(ceviche(None, 0)),
            Err(CartError::ZeroQuantity(id)) if id == "7"
        ));
        assert!(cart.is_empty());
        assert_eq!(storage.get(CART_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_submitted_order_is_not_restored_when_storage_fails() {
        let mut mock = MockClient::<crate::model::Order>::new();
        mock.expect_create().return_ok(OrderId(1));
        let orders = OrderClient::new(mock.client());
        let trigger = RefreshTrigger::new();
        let mut listener = trigger.subscribe();

        let storage = Arc::new(BrokenDisk::default());
        let mut cart = CartStore::new(storage.clone());
        cart.add_item(ceviche(None, 2)).unwrap();
        storage.broken.store(true, Ordering::SeqCst);

        match cart.submit(&orders, &trigger).await {
            Err(CartError::SubmittedNotCleared { order_id, .. }) => {
                assert_eq!(order_id, OrderId(1))
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(cart.is_empty());
        assert!(listener.take_pending());

        // Once storage recovers, the next mutation overwrites the stale copy.
        storage.broken.store(false, Ordering::SeqCst);
        cart.clear().unwrap();
        let mut restarted = CartStore::new(storage.clone());
        restarted.rehydrate().unwrap();
        assert!(restarted.is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn test_submit_removes_stored_cart() {
        let mut mock = MockClient::<crate::model::Order>::new();
        mock.expect_create().return_ok(OrderId(3));
        let orders = OrderClient::new(mock.client());
        let trigger = RefreshTrigger::new();

        let storage = Arc::new(MemoryStore::new());
        let mut cart = CartStore::new(storage.clone());
        cart.add_item(ceviche(None, 1)).unwrap();

        assert_eq!(cart.submit(&orders, &trigger).await.unwrap(), OrderId(3));
        assert_eq!(storage.get(CART_KEY).unwrap(), None);

        let mut restarted = CartStore::new(storage);
        restarted.rehydrate().unwrap();
        assert!(restarted.is_empty());
        mock.verify();
    }
}
