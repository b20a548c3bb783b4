//! # Framework Errors
//!
//! Common error types shared by every store actor and client. Domain crates
//! map these into their own per-store error enums.

use thiserror::Error;

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// A create request collided with an existing entity's unique fields.
    #[error("Conflicts with existing item: {0}")]
    Conflict(String),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

/// Errors raised by a [`KeyValueStore`](crate::storage::KeyValueStore) backend
/// or while encoding a stored value.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to encode or decode key {key}: {source}")]
    Serde {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
}
