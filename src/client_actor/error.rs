//! Error types for the Client actor.

use thiserror::Error;

/// Errors that can occur during client operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    /// The requested client was not found.
    #[error("Client not found: {0}")]
    NotFound(String),

    /// The client data provided is invalid.
    #[error("Client validation error: {0}")]
    ValidationError(String),

    /// A passcode was not exactly four digits.
    #[error("Invalid passcode format")]
    InvalidPasscode,

    /// Every passcode drawn was already taken.
    #[error("No free passcode after {0} attempts")]
    PasscodeExhausted(u32),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
