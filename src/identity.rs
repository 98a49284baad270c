//! # Client Identity
//!
//! Turns the caller's principal and the client reference in a request into a
//! [`Client`] row. Administrators may name any client by ID. Self-service
//! callers prove who they are with their passcode, which is the only
//! credential a walk-in customer has.
//!
//! The resolver sits behind [`IdentityResolver`] so order placement does not
//! care how a client is authenticated.

use crate::clients::ClientDirectory;
use crate::framework::ActorClient;
use crate::model::{Client, ClientId};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use std::fmt;
use tracing::{debug, instrument, warn};

/// Verified identity of whoever is calling. Issued upstream; never derived
/// from request data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principal {
    /// Kitchen staff acting on behalf of any client.
    Administrator,
    /// A client ordering for themselves.
    SelfService,
}

/// How a request names the client an order is for.
#[derive(Clone, PartialEq, Eq)]
pub enum ClientRef {
    Id(ClientId),
    Passcode(String),
}

impl fmt::Debug for ClientRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientRef::Id(id) => f.debug_tuple("Id").field(id).finish(),
            ClientRef::Passcode(_) => f.write_str("Passcode(****)"),
        }
    }
}

#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolves `client` on behalf of `principal`.
    ///
    /// # Errors
    /// - [`OrderError::NotFound`] if an administrator names a missing client
    /// - [`OrderError::InvalidCredential`] if a passcode matches nobody, or a
    ///   self-service caller tries to name a client by ID
    async fn resolve(&self, principal: Principal, client: &ClientRef) -> Result<Client, OrderError>;
}

/// Resolves clients against the client table, authenticating self-service
/// callers by passcode.
#[derive(Clone)]
pub struct PasscodeResolver {
    directory: ClientDirectory,
}

impl PasscodeResolver {
    pub fn new(directory: ClientDirectory) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl IdentityResolver for PasscodeResolver {
    #[instrument(skip_all, fields(principal = ?principal))]
    async fn resolve(&self, principal: Principal, client: &ClientRef) -> Result<Client, OrderError> {
        match (principal, client) {
            (Principal::Administrator, ClientRef::Id(id)) => {
                debug!(%id, "Resolving client by id");
                self.directory
                    .get(*id)
                    .await
                    .map_err(|e| OrderError::storage(e.to_string()))?
                    .ok_or_else(|| OrderError::NotFound(id.to_string()))
            }
            (Principal::SelfService, ClientRef::Id(_)) => {
                warn!("Self-service caller named a client by id");
                Err(OrderError::InvalidCredential)
            }
            (_, ClientRef::Passcode(passcode)) => {
                let found = self
                    .directory
                    .find_by_passcode(passcode)
                    .await
                    .map_err(|e| OrderError::storage(e.to_string()))?;
                match found {
                    Some(client) if client.passcode == *passcode => {
                        debug!(client_id = %client.id, "Passcode accepted");
                        Ok(client)
                    }
                    Some(client) => {
                        warn!(client_id = %client.id, "Passcode lookup returned a mismatched row");
                        Err(OrderError::InvalidCredential)
                    }
                    None => {
                        warn!("Unknown passcode");
                        Err(OrderError::InvalidCredential)
                    }
                }
            }
        }
    }
}
