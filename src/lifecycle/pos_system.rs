use crate::clients::{CategoryClient, OrderClient, ProductClient};
use crate::config::PosConfig;
use crate::lifecycle::RefreshTrigger;
use tracing::{error, info};

/// Runtime orchestrator for the point-of-sale resources.
///
/// Spawns the Product, Category and Order actors and hands out their clients.
/// The Category actor receives a [`ProductClient`] as context so deleting a
/// category also deletes its products.
///
/// # Example
///
/// ```ignore
/// let system = PosSystem::new(&PosConfig::default());
/// let id = system.category_client.create_category(params).await?;
/// system.shutdown().await?;
/// ```
pub struct PosSystem {
    pub category_client: CategoryClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,

    /// Shared by every view built on top of this system.
    pub trigger: RefreshTrigger,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl PosSystem {
    /// Creates the actors and starts them on the current runtime.
    pub fn new(config: &PosConfig) -> Self {
        let (product_actor, product_client) = crate::product_actor::new(config.buffer_size);
        let (category_actor, category_client) = crate::category_actor::new(config.buffer_size);
        let (order_actor, order_client) = crate::order_actor::new(config.buffer_size);

        let product_client = ProductClient::new(product_client);

        let product_handle = tokio::spawn(product_actor.run(()));
        let category_handle = tokio::spawn(category_actor.run(product_client.clone()));
        let order_handle = tokio::spawn(order_actor.run(()));

        info!(buffer_size = config.buffer_size, "Point-of-sale system started");

        Self {
            category_client: CategoryClient::new(category_client),
            product_client,
            order_client: OrderClient::new(order_client),
            trigger: RefreshTrigger::new(),
            handles: vec![category_handle, product_handle, order_handle],
        }
    }

    /// Drops the clients and waits for every actor to stop.
    ///
    /// Clones handed to views must be dropped first, otherwise their actor
    /// keeps running and this call does not return.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.category_client);
        drop(self.product_client);
        drop(self.order_client);

        // Category first: it holds the last ProductClient clone in its context.
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
