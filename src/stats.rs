//! # Dashboard Statistics
//!
//! A point-in-time summary of the three tables for the kitchen dashboard.
//! Each figure is computed from its own read, so figures taken from different
//! tables may not agree with each other. A failed read is logged and its
//! figures fall back to zero; a snapshot is always returned.

use crate::clients::{ClientDirectory, MenuClient, OrderClient};
use crate::framework::ActorClient;
use crate::model::{Order, OrderStatus};
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{instrument, warn};

/// Number of orders currently in one status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: OrderStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_menus: usize,
    pub total_orders: usize,
    pub total_clients: usize,
    /// Sum of totals of orders placed on the current local calendar day.
    pub revenue_today: Decimal,
    pub pending_orders: usize,
    /// One entry per status that has at least one order, in status order.
    pub orders_by_status: Vec<StatusCount>,
}

/// Sum of `total_amount` over orders placed on `day` (local time).
///
/// Returns `None` if the sum overflows.
pub fn revenue_on(orders: &[Order], day: NaiveDate) -> Option<Decimal> {
    orders
        .iter()
        .filter(|order| order.order_date.with_timezone(&Local).date_naive() == day)
        .try_fold(Decimal::ZERO, |sum, order| sum.checked_add(order.total_amount))
}

/// Order counts per status present.
pub fn count_by_status(orders: &[Order]) -> Vec<StatusCount> {
    let mut counts: BTreeMap<OrderStatus, usize> = BTreeMap::new();
    for order in orders {
        *counts.entry(order.status).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(status, count)| StatusCount { status, count })
        .collect()
}

/// Computes [`DashboardStats`] from the live tables.
#[derive(Clone)]
pub struct StatsAggregator {
    menu: MenuClient,
    clients: ClientDirectory,
    orders: OrderClient,
}

impl StatsAggregator {
    pub fn new(menu: MenuClient, clients: ClientDirectory, orders: OrderClient) -> Self {
        Self {
            menu,
            clients,
            orders,
        }
    }

    /// Statistics as of now, with "today" taken in local time.
    pub async fn snapshot(&self) -> DashboardStats {
        self.snapshot_on(Local::now().date_naive()).await
    }

    /// Statistics with revenue counted for `day`.
    #[instrument(skip(self))]
    pub async fn snapshot_on(&self, day: NaiveDate) -> DashboardStats {
        let (menu, clients, orders) =
            tokio::join!(self.menu.list(), self.clients.list(), self.orders.list());

        let total_menus = menu.map(|items| items.len()).unwrap_or_else(|e| {
            warn!(error = %e, "Menu count failed");
            0
        });
        let total_clients = clients.map(|clients| clients.len()).unwrap_or_else(|e| {
            warn!(error = %e, "Client count failed");
            0
        });
        let orders = orders.unwrap_or_else(|e| {
            warn!(error = %e, "Order listing failed");
            Vec::new()
        });

        let revenue_today = revenue_on(&orders, day).unwrap_or_else(|| {
            warn!(%day, "Revenue overflowed, reporting zero");
            Decimal::ZERO
        });

        DashboardStats {
            total_menus,
            total_orders: orders.len(),
            total_clients,
            revenue_today,
            pending_orders: orders
                .iter()
                .filter(|order| order.status == OrderStatus::Pending)
                .count(),
            orders_by_status: count_by_status(&orders),
        }
    }
}
