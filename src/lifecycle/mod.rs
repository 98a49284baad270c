//! # System Lifecycle & Orchestration
//!
//! Loads configuration, sets up tracing, and starts, wires and stops the
//! table actors.
//!
//! ## Startup
//!
//! [`KitchenSystem::new`] creates the Menu, Client and Order actors first and
//! binds dependencies when it starts them (`run(context)`). Only the Order
//! actor has any:
//!
//! ```rust,ignore
//! impl ActorEntity for Client    { type Context = (); }
//! impl ActorEntity for MenuItem  { type Context = (); }
//! impl ActorEntity for Order     { type Context = PlacementContext; } // resolver + menu
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of each channel
//! 2. **Actors drain** - `receiver.recv()` returns `None` once queued requests are handled
//! 3. **Await completion** - [`KitchenSystem::shutdown`] joins every actor task
//!
//! The dependency graph is acyclic (Order → Client, Order → Menu), so closing
//! channels is enough to stop everything.

pub mod config;
pub mod kitchen_system;
pub mod tracing;

pub use self::config::*;
pub use self::tracing::*;
pub use kitchen_system::*;
