//! Identity records.
//!
//! The directory stores [`Account`]s, which carry the password. Everything
//! handed to callers or written to the session slot is a [`User`], which
//! does not. The only way from one to the other is [`Account::profile`].

use serde::{Deserialize, Serialize};
use std::fmt;

super::string_id!(
    /// Identifier of a directory account.
    UserId
);

pub const ADMIN_ID: &str = "admin";
pub const ADMIN_NAME: &str = "Administrator";
pub const ADMIN_EMAIL: &str = "admin@store.com";
pub const ADMIN_PASSWORD: &str = "admin123";

/// Session-facing view of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
}

impl User {
    /// The built-in superuser, authenticatable without a directory entry.
    pub fn admin() -> Self {
        Self {
            id: ADMIN_ID.into(),
            name: ADMIN_NAME.to_string(),
            email: ADMIN_EMAIL.to_string(),
            is_admin: true,
        }
    }
}

/// Directory record. Persisted with its password, never exposed with it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: UserId,
    pub name: String,
    pub email: String,
    password: String,
    pub is_admin: bool,
}

impl Account {
    pub fn new(id: UserId, params: AccountCreate) -> Self {
        Self {
            id,
            name: params.name,
            email: params.email,
            password: params.password,
            is_admin: false,
        }
    }

    /// Exact email and password match.
    pub fn authenticates(&self, credentials: &Credentials) -> bool {
        self.email == credentials.email && self.password == credentials.password
    }

    pub fn profile(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            is_admin: self.is_admin,
        }
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("is_admin", &self.is_admin)
            .finish()
    }
}

/// DTO for registering a directory account.
#[derive(Clone)]
pub struct AccountCreate {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for AccountCreate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountCreate")
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Login attempt.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.email == ADMIN_EMAIL && self.password == ADMIN_PASSWORD
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
