//! Error types for the Account actor and session.

use thiserror::Error;

/// Errors that can occur during identity operations.
///
/// Bad credentials and duplicate emails are not errors; `login` and
/// `register` report them as `false`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IdentityError {
    /// The directory or session changed in memory but could not be written.
    #[error("Identity storage error: {0}")]
    Storage(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
