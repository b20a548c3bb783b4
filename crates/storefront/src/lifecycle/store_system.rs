use crate::checkout::Checkout;
use crate::clients::{CartClient, CatalogClient, IdentityClient, OrderClient};
use crate::config::StoreConfig;
use crate::{account_actor, cart_actor, catalog_actor, order_actor};
use actor_store::{KeyValueStore, StorageError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Failed to open storage: {0}")]
    Storage(#[from] StorageError),
    #[error("Actor task failed: {0}")]
    ActorTask(String),
}

/// The runtime orchestrator for the commerce stores.
///
/// `StoreSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Hydration**: Every actor loads its collection from the shared store
///   before its loop starts
/// - **Wiring**: Building the checkout coordinator from the store clients
///
/// # Architecture
///
/// - **Catalog Actor**: products, seeded on first start
/// - **Account Actor**: account directory plus the session record
/// - **Cart Actor**: cart lines keyed by product id
/// - **Order Actor**: the append-only ledger
pub struct StoreSystem {
    pub catalog: CatalogClient,
    pub identity: IdentityClient,
    pub cart: CartClient,
    pub orders: OrderClient,
    pub checkout: Checkout,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    /// Opens the configured storage backend and starts every store on it.
    pub fn start(config: &StoreConfig) -> Result<Self, LifecycleError> {
        let kv = config.open_store()?;
        Ok(Self::with_store(kv, config))
    }

    /// Starts every store on an already opened key-value store.
    ///
    /// Two systems built over clones of one
    /// [`MemoryStore`](actor_store::MemoryStore) see each other's writes on
    /// restart, which is how tests simulate a process restart.
    pub fn with_store(kv: Arc<dyn KeyValueStore>, config: &StoreConfig) -> Self {
        let capacity = config.channel_capacity;

        // 1. Create actors; each hydrates from storage here
        let (catalog_actor, catalog) = catalog_actor::new(kv.clone(), capacity);
        let (account_actor, identity) = account_actor::new(kv.clone(), capacity);
        let (cart_actor, cart) = cart_actor::new(kv.clone(), capacity);
        let (order_actor, orders) = order_actor::new(kv, capacity);

        // 2. Start actors (no store needs a context)
        let handles = vec![
            tokio::spawn(catalog_actor.run(())),
            tokio::spawn(account_actor.run(())),
            tokio::spawn(cart_actor.run(())),
            tokio::spawn(order_actor.run(())),
        ];

        // 3. Wire checkout over clones of the clients
        let checkout = Checkout::new(
            identity.clone(),
            cart.clone(),
            orders.clone(),
            config.checkout_delay(),
        );

        info!(
            capacity,
            checkout_delay_ms = config.checkout_delay_ms,
            "Store system started"
        );

        Self {
            catalog,
            identity,
            cart,
            orders,
            checkout,
            handles,
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes every actor's channel; each actor then
    /// leaves its loop. Returns an error if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down system...");

        drop(self.checkout);
        drop(self.catalog);
        drop(self.identity);
        drop(self.cart);
        drop(self.orders);

        for handle in self.handles {
            // If the task panicked, this will return an Err
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(LifecycleError::ActorTask(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
