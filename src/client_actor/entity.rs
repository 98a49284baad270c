//! [`ActorEntity`] implementation for [`Client`].
//!
//! The passcode is the table's unique key. Uniqueness is enforced by the
//! actor's index, not here.

use super::error::ClientError;
use crate::framework::ActorEntity;
use crate::model::{is_valid_passcode, Client, ClientCreate, ClientId, ClientUpdate};
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for Client {
    type Id = ClientId;
    type Create = ClientCreate;
    type Update = ClientUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = ClientError;

    async fn from_create_params(id: ClientId, params: ClientCreate, _ctx: &()) -> Result<Self, ClientError> {
        if !is_valid_passcode(&params.passcode) {
            return Err(ClientError::InvalidPasscode);
        }
        let name = params.profile.name.trim();
        if name.is_empty() {
            return Err(ClientError::ValidationError("name must not be empty".to_string()));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            passcode: params.passcode,
            email: params.profile.email,
            phone: params.profile.phone,
            address: params.profile.address,
            is_active: true,
            created_at: Utc::now(),
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.passcode.clone())
    }

    /// Handles updates to the Client entity. The passcode cannot be changed.
    async fn on_update(&mut self, update: ClientUpdate, _ctx: &()) -> Result<(), ClientError> {
        if let Some(name) = update.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(ClientError::ValidationError("name must not be empty".to_string()));
            }
            self.name = name.to_string();
        }
        if let Some(email) = update.email {
            self.email = Some(email);
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(address) = update.address {
            self.address = Some(address);
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), ClientError> {
        Ok(())
    }
}
