//! Generic table storage built on the actor model.
//!
//! Every table in the kitchen (clients, menu items, orders) is a
//! [`ResourceActor`] running in its own Tokio task. The actor owns its rows
//! exclusively and processes requests one at a time, so each request is an
//! atomic unit against that table: a create either inserts a fully built row
//! or nothing at all, and updates are applied to a copy that is only stored
//! when the hook succeeds.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that row types implement to be stored by an actor
//! - [`ResourceActor`] - The table server: rows, unique index, message loop
//! - [`ResourceClient`] - Cloneable typed handle for sending requests
//! - [`ActorClient`] - Default `get`/`list`/`delete` for table-specific wrappers
//! - [`FrameworkError`] - Transport and storage-level errors
//!
//! # Testing
//!
//! See [`mock`] for a scripted stand-in that answers requests without a real actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
