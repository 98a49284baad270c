//! # ActorEntity Trait
//!
//! The contract every stored row type implements. It names the row's ID,
//! the DTOs used to create and update it, its custom actions, the context
//! injected by the orchestrator, and its error type.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::unique_key`] - opt into the table's unique index
//! - [`ActorEntity::on_delete`] - veto or observe a delete
//!
//! Both default to doing nothing.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any row type must implement to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
///
/// # Async & Context
/// Construction and hooks are async and receive the table's `Context`, so a
/// row can consult other tables while it is being built. Dependencies are
/// bound when the actor is started (`run(context)`), not when it is created.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Row identifier. Allocated by the actor from a `u32` sequence.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new row.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing row.
    type Update: Send + Sync + Debug;

    /// Row-specific operations beyond CRUD.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into every hook. Use `()` if none are needed.
    type Context: Send + Sync;

    /// The error type for this row. Travels through the actor boxed and can
    /// be downcast back by the table's client wrapper.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the full row from its allocated ID and the create payload.
    ///
    /// Returning an error aborts the create: nothing is inserted.
    async fn from_create_params(
        id: Self::Id,
        params: Self::Create,
        ctx: &Self::Context,
    ) -> Result<Self, Self::Error>;

    /// Key for the table's unique index. Two rows may never share a key;
    /// a create or update that would collide fails with
    /// [`FrameworkError::Conflict`](crate::framework::FrameworkError::Conflict).
    fn unique_key(&self) -> Option<String> {
        None
    }

    /// Called when an update request is received.
    async fn on_update(&mut self, update: Self::Update, ctx: &Self::Context)
        -> Result<(), Self::Error>;

    /// Called immediately before the row is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a row-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
