//! # Client Directory
//!
//! High-level API for the `Client` actor. Registering a client draws a random
//! passcode, checks it is free, and inserts. The table's unique index backs up
//! the check: if another registration took the same passcode in between, the
//! insert fails with a conflict and a new passcode is drawn.
use crate::client_actor::ClientError;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{generate_passcode, Client, ClientCreate, ClientId, ClientUpdate, NewClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Default bound on passcode draws per registration.
pub const DEFAULT_PASSCODE_ATTEMPTS: u32 = 100;

/// Client for interacting with the Client actor.
#[derive(Clone)]
pub struct ClientDirectory {
    inner: ResourceClient<Client>,
    passcode_attempts: u32,
}

impl ClientDirectory {
    pub fn new(inner: ResourceClient<Client>) -> Self {
        Self {
            inner,
            passcode_attempts: DEFAULT_PASSCODE_ATTEMPTS,
        }
    }

    pub fn with_passcode_attempts(mut self, attempts: u32) -> Self {
        self.passcode_attempts = attempts.max(1);
        self
    }

    /// Registers a client under a freshly generated passcode.
    ///
    /// # Errors
    /// [`ClientError::PasscodeExhausted`] if every draw collided.
    #[instrument(skip(self), fields(name = %profile.name))]
    pub async fn create_client(&self, profile: NewClient) -> Result<Client, ClientError> {
        for attempt in 1..=self.passcode_attempts {
            let passcode = generate_passcode();
            if self.find_by_passcode(&passcode).await?.is_some() {
                debug!(attempt, "Passcode taken, drawing again");
                continue;
            }

            let params = ClientCreate {
                profile: profile.clone(),
                passcode,
            };
            match self.inner.create(params).await {
                Ok(client) => {
                    info!(client_id = %client.id, attempt, "Client registered");
                    return Ok(client);
                }
                Err(FrameworkError::Conflict(_)) => {
                    warn!(attempt, "Passcode claimed concurrently, drawing again");
                }
                Err(e) => return Err(Self::map_error(e)),
            }
        }
        warn!(attempts = self.passcode_attempts, "Passcode space exhausted");
        Err(ClientError::PasscodeExhausted(self.passcode_attempts))
    }

    /// Looks a client up by passcode.
    #[instrument(skip_all)]
    pub async fn find_by_passcode(&self, passcode: &str) -> Result<Option<Client>, ClientError> {
        debug!("Sending request");
        self.inner
            .find_unique(passcode.to_string())
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_client(&self, id: ClientId, update: ClientUpdate) -> Result<Client, ClientError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Client> for ClientDirectory {
    type Error = ClientError;

    fn inner(&self) -> &ResourceClient<Client> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<ClientError>() {
            Ok(client_error) => client_error,
            Err(FrameworkError::NotFound(id)) => ClientError::NotFound(id),
            Err(other) => ClientError::ActorCommunicationError(other.to_string()),
        }
    }
}
