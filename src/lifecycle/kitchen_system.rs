use crate::clients::{ClientDirectory, MenuClient, OrderClient};
use crate::identity::{IdentityResolver, PasscodeResolver};
use crate::lifecycle::config::KitchenConfig;
use crate::order_actor::PlacementContext;
use crate::stats::StatsAggregator;
use crate::{client_actor, menu_actor, order_actor};
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for the kitchen's tables.
///
/// `KitchenSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the Menu, Client and Order actors
/// - **Dependency Wiring**: handing the Order actor the identity resolver and menu client it places orders with
/// - **Configuration**: channel sizes, allowed statuses and passcode attempts from [`KitchenConfig`]
///
/// # Example
///
/// ```ignore
/// let system = KitchenSystem::new(&KitchenConfig::default());
///
/// let client = system.client_directory.create_client(NewClient::named("Ana")).await?;
/// let details = system.order_client.place_order(Principal::SelfService, request).await?;
/// let stats = system.stats.snapshot().await;
///
/// system.shutdown().await?;
/// ```
pub struct KitchenSystem {
    pub menu_client: MenuClient,
    pub client_directory: ClientDirectory,
    pub order_client: OrderClient,
    pub stats: StatsAggregator,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl KitchenSystem {
    /// Creates every table actor, wires them together and starts them.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &KitchenConfig) -> Self {
        let buffer_size = config.store.buffer_size;

        // 1. Create actors (no dependencies)
        let (menu_actor, menu_generic) = menu_actor::new(buffer_size);
        let (client_actor, client_generic) = client_actor::new(buffer_size);
        let (order_actor, order_generic) = order_actor::new(buffer_size);

        let menu_client = MenuClient::new(menu_generic);
        let client_directory = ClientDirectory::new(client_generic)
            .with_passcode_attempts(config.clients.passcode_attempts);
        let resolver: Arc<dyn IdentityResolver> =
            Arc::new(PasscodeResolver::new(client_directory.clone()));
        let order_client = OrderClient::new(
            order_generic,
            client_directory.clone(),
            resolver.clone(),
            config.orders.allowed_statuses.clone(),
        );

        // 2. Start actors with injected context
        let menu_handle = tokio::spawn(menu_actor.run(()));
        let client_handle = tokio::spawn(client_actor.run(()));
        let order_handle = tokio::spawn(
            order_actor.run(PlacementContext::new(resolver, menu_client.clone())),
        );

        let stats = StatsAggregator::new(
            menu_client.clone(),
            client_directory.clone(),
            order_client.clone(),
        );

        info!(buffer_size, "Kitchen system started");

        Self {
            menu_client,
            client_directory,
            order_client,
            stats,
            handles: vec![menu_handle, client_handle, order_handle],
        }
    }

    /// Shuts the system down.
    ///
    /// Dropping the clients closes the actors' channels. The order client is
    /// dropped first: the Order actor's context holds the only other handles
    /// to the menu and client tables, so those stop once it has.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down kitchen system");
        drop(self.stats);
        drop(self.order_client);
        drop(self.menu_client);
        drop(self.client_directory);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(format!("Actor task failed: {e}"));
            }
        }

        info!("Kitchen system shutdown complete");
        Ok(())
    }
}
