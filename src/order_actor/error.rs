//! Error types for the Order actor.

use crate::model::MenuItemId;
use thiserror::Error;
use tracing::error;

/// Errors that can occur during order operations.
///
/// Business-rule failures carry the offending id or field. Storage failures
/// are logged with their detail when constructed and display opaquely.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order or client was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The caller's passcode did not identify a client.
    #[error("Invalid credential")]
    InvalidCredential,

    /// An order line names a menu item that does not exist.
    #[error("Invalid menu item: {0}")]
    InvalidReference(MenuItemId),

    /// An order line names a menu item that is currently unavailable.
    #[error("Menu item unavailable: {name} ({id})")]
    ItemUnavailable { id: MenuItemId, name: String },

    /// The requested status is not in the allowed set.
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    /// The request itself is malformed.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// The store failed. The detail is logged, never shown.
    #[error("Storage failure")]
    StorageFailure(String),
}

impl OrderError {
    /// Builds a [`OrderError::StorageFailure`] and logs its detail.
    pub fn storage(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        error!(%detail, "Storage failure");
        OrderError::StorageFailure(detail)
    }
}
