//! # Order Actor
//!
//! The order table. Unlike the client and menu tables it depends on other
//! actors: placing an order resolves the client and reads the menu, so the
//! actor is started with a [`PlacementContext`].
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`](crate::model::Order)
//! - [`error`] - [`OrderError`], the error taxonomy callers see
//! - [`actions`] - [`OrderAction`] for status changes
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (order_actor, generic_client) = order_actor::new(32);
//! tokio::spawn(order_actor.run(PlacementContext::new(resolver.clone(), menu_client)));
//! let order_client = OrderClient::new(generic_client, directory, resolver, statuses);
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Order;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
