//! # Account Actor
//!
//! Owns the registered-user directory and the session record.
//!
//! The directory is a [`ResourceActor`] over [`Account`]s, persisted under
//! `users`, with email as a uniqueness constraint. The session is a single
//! optional [`User`](crate::model::User) held in a [`Session`] and persisted
//! under `user`. Both sit behind one
//! [`IdentityClient`](crate::clients::IdentityClient).
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_store::ActorEntity) implementation for [`Account`]
//! - [`error`] - [`IdentityError`] type for type-safe error handling
//! - [`queries`] - [`DirectoryQuery`] for credential checks and profile listings
//! - [`session`] - the observable current-user record
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use actor_store::MemoryStore;
//! use std::sync::Arc;
//! use storefront::account_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, identity) = account_actor::new(Arc::new(MemoryStore::new()), 32);
//!     tokio::spawn(actor.run(()));
//!
//!     assert!(identity.register("Alice", "alice@example.com", "secret").await?);
//!     assert!(!identity.register("Alice", "alice@example.com", "other").await?);
//!     assert!(identity.is_authenticated());
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;
pub mod queries;
pub mod session;

pub use error::*;
pub use queries::*;
pub use session::Session;

use crate::clients::IdentityClient;
use crate::model::Account;
use actor_store::id::timestamp_ids;
use actor_store::{KeyValueStore, ResourceActor, StorageSlot};
use std::sync::Arc;

/// Storage key of the account directory.
pub const STORAGE_KEY: &str = "users";

/// Storage key of the signed-in user.
pub const SESSION_KEY: &str = "user";

/// Creates a new Account actor and the identity client over it.
///
/// The session record is hydrated here, alongside the directory.
pub fn new(kv: Arc<dyn KeyValueStore>, capacity: usize) -> (ResourceActor<Account>, IdentityClient) {
    let session = Session::open(StorageSlot::new(kv.clone(), SESSION_KEY));
    let slot = StorageSlot::new(kv, STORAGE_KEY);
    let (actor, generic_client) = ResourceActor::new(capacity, slot, timestamp_ids());
    (actor, IdentityClient::new(generic_client, Arc::new(session)))
}
