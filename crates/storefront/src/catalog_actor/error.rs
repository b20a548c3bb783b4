//! Error types for the Catalog actor.

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// A product field is outside its allowed range.
    #[error("Invalid product: {0}")]
    Validation(String),

    /// The catalog changed in memory but could not be written to storage.
    #[error("Catalog storage error: {0}")]
    Storage(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
