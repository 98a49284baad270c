use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of digits in a client passcode.
pub const PASSCODE_LEN: usize = 4;

entity_id!(
    /// Type-safe identifier for Clients.
    ClientId,
    "client"
);

/// A walk-in customer, identified at the counter by a short numeric passcode.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
/// The passcode is the table's unique key, so no two clients can hold the same one.
///
/// See [`impl ActorEntity for Client`](#impl-ActorEntity-for-Client) for details on:
/// - Creation parameters ([`ClientCreate`])
/// - Update parameters ([`ClientUpdate`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub passcode: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Client {
    /// Creates a new active Client instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically set by the actor system)
    /// * `name` - Display name
    /// * `passcode` - Four-digit passcode
    pub fn new(id: ClientId, name: impl Into<String>, passcode: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            passcode: passcode.into(),
            email: None,
            phone: None,
            address: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}

/// Profile fields supplied by whoever registers a client. The passcode is
/// never part of it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl NewClient {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Payload for inserting a client row: the profile plus a freshly drawn passcode.
#[derive(Clone)]
pub struct ClientCreate {
    pub profile: NewClient,
    pub passcode: String,
}

impl std::fmt::Debug for ClientCreate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCreate")
            .field("profile", &self.profile)
            .field("passcode", &"****")
            .finish()
    }
}

/// Payload for updating an existing client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_active: Option<bool>,
}

/// Draws a random passcode of [`PASSCODE_LEN`] digits, zero padded.
pub fn generate_passcode() -> String {
    format!("{:04}", rand::rng().random_range(0..10_000u32))
}

/// True if `passcode` is exactly [`PASSCODE_LEN`] ASCII digits.
pub fn is_valid_passcode(passcode: &str) -> bool {
    passcode.len() == PASSCODE_LEN && passcode.bytes().all(|b| b.is_ascii_digit())
}
