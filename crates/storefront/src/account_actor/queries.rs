//! Read-only views over the account directory.

use crate::model::{Credentials, User};

#[derive(Debug, Clone)]
pub enum DirectoryQuery {
    /// Profile of the account matching email and password exactly.
    Authenticate(Credentials),
    /// Profiles of every registered account, without passwords.
    Profiles,
}

/// Results of directory queries. Variants match [`DirectoryQuery`] one to one.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryQueryResult {
    Authenticated(Option<User>),
    Profiles(Vec<User>),
}
