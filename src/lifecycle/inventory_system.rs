use crate::clients::{ActorClient, ProductClient, RestockClient, SaleClient};
use crate::repository::ActorRepository;
use tracing::{error, info};

/// Runtime orchestrator for the in-memory inventory store.
///
/// `InventorySystem` starts one actor per collection and wires the ones that depend on each
/// other:
/// - **Product Actor**: needs the `SaleClient` to refuse deleting a product that has sales
/// - **Sale Actor**: needs the `ProductClient` to reserve and restore stock
/// - **Restock Actor**: needs the `ProductClient` to check products and receive stock
///
/// # Example
///
/// ```ignore
/// let system = InventorySystem::new();
/// let repo = system.repository();
///
/// let product = Repository::<Product>::create(&repo, fields).await?;
///
/// system.shutdown().await?;
/// ```
pub struct InventorySystem {
    pub product_client: ProductClient,
    pub sale_client: SaleClient,
    pub restock_client: RestockClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl InventorySystem {
    /// Creates every actor, then starts each with its dependencies injected.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        // 1. Create actors (no dependencies)
        let (product_actor, product_client) = crate::product_actor::new();
        let (sale_actor, sale_client) = crate::sale_actor::new();
        let (restock_actor, restock_client) = crate::restock_actor::new();

        // 2. Start actors with injected context
        let product_handle = tokio::spawn(product_actor.run(sale_client.clone()));
        let sale_handle = tokio::spawn(sale_actor.run(product_client.clone()));
        let restock_handle = tokio::spawn(restock_actor.run(product_client.clone()));

        Self {
            product_client,
            sale_client,
            restock_client,
            handles: vec![product_handle, sale_handle, restock_handle],
        }
    }

    /// A [`Repository`](crate::repository::Repository) over all three collections.
    pub fn repository(&self) -> ActorRepository {
        ActorRepository::new(
            self.product_client.clone(),
            self.sale_client.clone(),
            self.restock_client.clone(),
        )
    }

    /// Stops every actor and waits for their tasks.
    ///
    /// Product and sale actors hold each other's clients, so their channels never close
    /// while both run. Each actor is sent an explicit `Shutdown` instead; requests already
    /// queued are answered first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down inventory store...");

        // Restock first: it depends on products but nothing depends on it
        let _ = self.restock_client.shutdown().await;
        let _ = self.sale_client.shutdown().await;
        let _ = self.product_client.shutdown().await;

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Inventory store shutdown complete.");
        Ok(())
    }
}

impl Default for InventorySystem {
    fn default() -> Self {
        Self::new()
    }
}
