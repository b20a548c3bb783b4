//! Error types for the Cart actor.

use thiserror::Error;

/// Errors that can occur during cart operations.
///
/// Unknown product ids are not errors; updates and removals of absent lines
/// do nothing.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// A requested quantity is above what a cart line can hold.
    #[error("Invalid quantity: {0}")]
    Validation(String),

    /// The cart changed in memory but could not be written to storage.
    #[error("Cart storage error: {0}")]
    Storage(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
