//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` actor.
//! Request validation and the allowed-status check happen here; the
//! placement itself (client resolution, menu checks, pricing) runs inside the
//! Order actor's create step so it commits as a single unit.
use crate::clients::ClientDirectory;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::identity::{ClientRef, IdentityResolver, Principal};
use crate::model::{Client, ClientId, Order, OrderCreate, OrderDetails, OrderId, OrderStatus, PlaceOrderRequest};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    clients: ClientDirectory,
    resolver: Arc<dyn IdentityResolver>,
    statuses: Arc<[OrderStatus]>,
}

impl OrderClient {
    /// `statuses` is the set [`OrderClient::set_status`] accepts.
    pub fn new(
        inner: ResourceClient<Order>,
        clients: ClientDirectory,
        resolver: Arc<dyn IdentityResolver>,
        statuses: impl Into<Arc<[OrderStatus]>>,
    ) -> Self {
        Self {
            inner,
            clients,
            resolver,
            statuses: statuses.into(),
        }
    }

    /// Places an order for the client named in `request`.
    ///
    /// Nothing is stored unless every line is valid and available. Identical
    /// requests create distinct orders.
    ///
    /// # Errors
    /// - [`OrderError::ValidationError`] for a malformed request
    /// - [`OrderError::NotFound`] / [`OrderError::InvalidCredential`] if the
    ///   client cannot be resolved
    /// - [`OrderError::InvalidReference`] / [`OrderError::ItemUnavailable`]
    ///   for the first bad line
    #[instrument(skip(self, request), fields(lines = request.order_items.len()))]
    pub async fn place_order(
        &self,
        principal: Principal,
        request: PlaceOrderRequest,
    ) -> Result<OrderDetails, OrderError> {
        request
            .validate()
            .map_err(|e| OrderError::ValidationError(e.to_string()))?;
        let client = request
            .client_ref(principal)
            .map_err(OrderError::ValidationError)?;

        let params = OrderCreate {
            principal,
            client,
            notes: request.notes,
            lines: request.order_items,
        };
        debug!("Sending create to order actor");
        let order = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order_id = %order.id, total = %order.total_amount, "Order placed");
        self.details(order).await
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<OrderDetails, OrderError> {
        let order = self
            .get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;
        self.details(order).await
    }

    /// Every order with its client, ordered by ID.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<OrderDetails>, OrderError> {
        let orders = self.list().await?;
        let clients: HashMap<ClientId, Client> = self
            .clients
            .list()
            .await
            .map_err(|e| OrderError::storage(e.to_string()))?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();
        Ok(orders
            .into_iter()
            .map(|order| {
                let client = clients.get(&order.client_id).cloned();
                OrderDetails { order, client }
            })
            .collect())
    }

    /// Deletes an order together with its items.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<(), OrderError> {
        self.delete(id).await?;
        info!(order_id = %id, "Order deleted");
        Ok(())
    }

    /// Sets an order's status.
    ///
    /// # Errors
    /// - [`OrderError::InvalidStatus`] if `status` is not in the allowed set;
    ///   the order is left untouched
    /// - [`OrderError::NotFound`] if the order does not exist
    #[instrument(skip(self))]
    pub async fn set_status(&self, id: OrderId, status: &str) -> Result<OrderDetails, OrderError> {
        let status = status
            .parse::<OrderStatus>()
            .ok()
            .filter(|s| self.statuses.contains(s))
            .ok_or_else(|| {
                warn!(%status, "Status not allowed");
                OrderError::InvalidStatus(status.to_string())
            })?;

        let order = self
            .inner
            .perform_action(id, OrderAction::SetStatus(status))
            .await
            .map_err(Self::map_error)?;
        info!(order_id = %id, %status, "Status updated");
        self.details(order).await
    }

    /// Orders belonging to the client who owns `passcode`, each carrying
    /// that client.
    #[instrument(skip_all)]
    pub async fn client_orders(&self, passcode: &str) -> Result<Vec<OrderDetails>, OrderError> {
        let client = self
            .resolver
            .resolve(Principal::SelfService, &ClientRef::Passcode(passcode.to_string()))
            .await?;
        let orders = self.list().await?;
        Ok(orders
            .into_iter()
            .filter(|order| order.client_id == client.id)
            .map(|order| OrderDetails {
                order,
                client: Some(client.clone()),
            })
            .collect())
    }

    /// The statuses [`OrderClient::set_status`] accepts.
    pub fn allowed_statuses(&self) -> &[OrderStatus] {
        &self.statuses
    }

    async fn details(&self, order: Order) -> Result<OrderDetails, OrderError> {
        let client = self
            .clients
            .get(order.client_id)
            .await
            .map_err(|e| OrderError::storage(e.to_string()))?;
        Ok(OrderDetails { order, client })
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<OrderError>() {
            Ok(order_error) => order_error,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::storage(other.to_string()),
        }
    }
}
