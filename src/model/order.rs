use crate::identity::{ClientRef, Principal};
use crate::model::{Client, ClientId, MenuItemId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use validator::Validate;

entity_id!(
    /// Type-safe identifier for Orders.
    OrderId,
    "order"
);

/// Fulfillment status of an order.
///
/// Any status may follow any other; which ones a deployment accepts is set by
/// `orders.allowed_statuses`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Accepted,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Accepted,
        OrderStatus::Ready,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Accepted => "Accepted",
            OrderStatus::Ready => "Ready",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known status.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A placed order together with its line items.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// The items are stored inside the order row, so the order and its items are
/// inserted and deleted as one unit. After creation only `status` changes.
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Custom actions ([`OrderAction`](crate::order_actor::OrderAction))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub client_id: ClientId,
    pub order_date: DateTime<Utc>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub notes: Option<String>,
    pub order_items: Vec<OrderItem>,
}

/// One priced line of an order. Name and unit price are captured when the
/// order is placed and never follow later menu changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_id: OrderId,
    pub menu_item_id: MenuItemId,
    pub item_name: String,
    pub item_price: Decimal,
    pub quantity: u32,
    pub subtotal: Decimal,
}

/// An order as returned to callers: the row plus the client it belongs to.
///
/// `client` is `None` only if the client row has since been deleted. A
/// failed client read fails the whole call instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetails {
    #[serde(flatten)]
    pub order: Order,
    pub client: Option<Client>,
}

/// A line of a placement request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrderLine {
    pub menu_item_id: MenuItemId,
    #[validate(range(min = 1, message = "quantity must be at least 1"))]
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(menu_item_id: MenuItemId, quantity: u32) -> Self {
        Self {
            menu_item_id,
            quantity,
        }
    }
}

/// Body of a placement request.
///
/// Administrators name the client by `client_id`; self-service callers
/// identify themselves with `passcode`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PlaceOrderRequest {
    pub client_id: Option<ClientId>,
    pub passcode: Option<String>,
    pub notes: Option<String>,
    #[validate(length(min = 1, message = "an order needs at least one item"), nested)]
    pub order_items: Vec<OrderLine>,
}

impl PlaceOrderRequest {
    /// Picks the client reference the caller's principal is entitled to use.
    pub fn client_ref(&self, principal: Principal) -> Result<ClientRef, String> {
        match (principal, &self.client_id, &self.passcode) {
            (Principal::Administrator, Some(id), _) => Ok(ClientRef::Id(*id)),
            (Principal::Administrator, None, Some(code)) => Ok(ClientRef::Passcode(code.clone())),
            (Principal::Administrator, None, None) => Err("client_id is required".to_string()),
            (Principal::SelfService, _, Some(code)) => Ok(ClientRef::Passcode(code.clone())),
            (Principal::SelfService, _, None) => Err("passcode is required".to_string()),
        }
    }
}

/// Payload for creating a new order. Built by the order client from a
/// validated [`PlaceOrderRequest`]; the order table prices and checks it.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub principal: Principal,
    pub client: ClientRef,
    pub notes: Option<String>,
    pub lines: Vec<OrderLine>,
}
