//! [`ActorEntity`] implementation for [`Order`].
//!
//! Placement runs inside the order table's create step. The row is only
//! inserted if every step succeeds, and because the actor handles one request
//! at a time the order and all of its items land together or not at all.

use super::actions::OrderAction;
use super::error::OrderError;
use crate::clients::MenuClient;
use crate::framework::{ActorClient, ActorEntity};
use crate::identity::IdentityResolver;
use crate::model::{MenuItem, Order, OrderCreate, OrderId, OrderLine, OrderStatus};
use crate::pricing;
use async_trait::async_trait;
use chrono::Utc;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Dependencies the order table consults while placing an order.
#[derive(Clone)]
pub struct PlacementContext {
    pub resolver: Arc<dyn IdentityResolver>,
    pub menu: MenuClient,
}

impl PlacementContext {
    pub fn new(resolver: Arc<dyn IdentityResolver>, menu: MenuClient) -> Self {
        Self { resolver, menu }
    }
}

/// Fetches the menu item a line refers to and checks it can be ordered.
pub async fn fetch_orderable(menu: &MenuClient, line: &OrderLine) -> Result<MenuItem, OrderError> {
    let item = menu
        .get(line.menu_item_id)
        .await
        .map_err(|e| OrderError::storage(e.to_string()))?
        .ok_or(OrderError::InvalidReference(line.menu_item_id))?;

    if !item.available {
        warn!(menu_item_id = %item.id, name = %item.name, "Menu item unavailable");
        return Err(OrderError::ItemUnavailable {
            id: item.id,
            name: item.name,
        });
    }
    Ok(item)
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = Infallible;
    type Action = OrderAction;
    type ActionResult = Order;
    type Context = PlacementContext;
    type Error = OrderError;

    /// Places an order.
    ///
    /// 1. Resolve the client (fails with `NotFound` or `InvalidCredential`).
    /// 2. Check every line against the live menu (`InvalidReference`,
    ///    `ItemUnavailable`). The first bad line aborts the whole order.
    /// 3. Price the lines, capturing name and unit price.
    /// 4. Build the order as `Pending`, stamped with the current time.
    async fn from_create_params(
        id: OrderId,
        params: OrderCreate,
        ctx: &PlacementContext,
    ) -> Result<Self, OrderError> {
        if params.lines.is_empty() {
            return Err(OrderError::ValidationError(
                "an order needs at least one item".to_string(),
            ));
        }
        if let Some(line) = params.lines.iter().find(|line| line.quantity == 0) {
            return Err(OrderError::ValidationError(format!(
                "quantity for {} must be at least 1",
                line.menu_item_id
            )));
        }

        let client = ctx.resolver.resolve(params.principal, &params.client).await?;
        debug!(%id, client_id = %client.id, lines = params.lines.len(), "Client resolved");

        let mut priced_lines = Vec::with_capacity(params.lines.len());
        for line in &params.lines {
            let item = fetch_orderable(&ctx.menu, line).await?;
            priced_lines.push((item, line.quantity));
        }

        let priced = pricing::price_lines(id, &priced_lines)?;
        info!(%id, client_id = %client.id, total = %priced.total, "Order priced");

        Ok(Order {
            id,
            client_id: client.id,
            order_date: Utc::now(),
            total_amount: priced.total,
            status: OrderStatus::Pending,
            notes: params.notes,
            order_items: priced.items,
        })
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &PlacementContext) -> Result<(), OrderError> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &PlacementContext,
    ) -> Result<Order, OrderError> {
        match action {
            OrderAction::SetStatus(status) => {
                debug!(id = %self.id, from = %self.status, to = %status, "Status change");
                self.status = status;
                Ok(self.clone())
            }
        }
    }
}
