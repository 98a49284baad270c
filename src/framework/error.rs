//! # Framework Errors
//!
//! Errors raised by the storage layer itself, independent of any row type.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// A row with the same unique key already exists. The key is kept out
    /// of the message since it may be a credential.
    #[error("Unique key conflict")]
    Conflict(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers a row's own error type from [`FrameworkError::EntityError`].
    ///
    /// Any other variant, or an entity error of a different type, is handed
    /// back unchanged.
    pub fn downcast_entity<E: std::error::Error + 'static>(self) -> Result<E, FrameworkError> {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(inner) => Err(FrameworkError::EntityError(inner)),
            },
            other => Err(other),
        }
    }
}
