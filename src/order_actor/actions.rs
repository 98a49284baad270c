//! Custom actions for the Order actor.
//!
//! Once placed, an order's items and total are frozen. Its status is the
//! only thing that changes, through [`OrderAction::SetStatus`].

use crate::model::OrderStatus;

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Replaces the order's status. Returns the updated order.
    ///
    /// The allowed set is checked by [`OrderClient`](crate::clients::OrderClient)
    /// before the action is sent; any allowed status may follow any other.
    SetStatus(OrderStatus),
}
