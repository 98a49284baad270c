//! # Kitchen Orders
//!
//! > **Order-taking backend for a restaurant kitchen.**
//!
//! Kitchen staff place and manage orders for any client; walk-in customers
//! order for themselves with a four-digit passcode. Every order is checked
//! against the live menu, priced in exact decimals, stored together with its
//! items as one unit, and then moved through its fulfillment statuses.
//!
//! ## Design
//!
//! ### Tables as Actors
//! Each table (menu items, clients, orders) is a [`ResourceActor`](framework::ResourceActor)
//! running in its own Tokio task. An actor handles one request at a time, so a
//! request either applies completely or not at all, without locks. The actor
//! is written once, generically over [`ActorEntity`](framework::ActorEntity).
//!
//! ### Placement Inside the Order Table
//! Placing an order resolves the client, checks each line against the menu,
//! and prices the lines. All of it happens in the Order actor's create step
//! ([`Order`](model::Order)'s `from_create_params`), which gets the identity
//! resolver and menu client through its injected context. If any step fails
//! nothing is inserted; if the caller goes away first, the finished order is
//! discarded.
//!
//! ### Type-Safe Errors
//! Each table has its own `thiserror` enum. Row errors travel through the
//! actor boxed and are recovered by the table's client wrapper, so callers
//! match on [`OrderError`](order_actor::OrderError) variants directly.
//!
//! ## Module Tour
//!
//! - [`framework`]: the generic table actor, its client and test mocks
//! - [`model`]: row types, IDs and request DTOs
//! - [`client_actor`], [`menu_actor`], [`order_actor`]: `ActorEntity` implementations and errors
//! - [`clients`]: typed wrappers ([`OrderClient`](clients::OrderClient), [`ClientDirectory`](clients::ClientDirectory), [`MenuClient`](clients::MenuClient))
//! - [`identity`]: principals and passcode authentication
//! - [`pricing`]: subtotal and total computation
//! - [`stats`]: dashboard statistics
//! - [`lifecycle`]: configuration, tracing and the [`KitchenSystem`](lifecycle::KitchenSystem) orchestrator
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod client_actor;
pub mod clients;
pub mod framework;
pub mod identity;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod pricing;
pub mod stats;
