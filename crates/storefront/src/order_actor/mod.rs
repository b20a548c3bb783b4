//! # Order Actor
//!
//! Owns the order ledger. Orders are appended once and never edited or
//! removed; the only write path is [`OrderClient::submit`].
//!
//! An order stores a `userId` but nothing checks it against the directory:
//! an order whose user no longer exists is still a valid order.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_store::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`queries`] - [`OrderQuery`] and [`OrderQueryResult`] for per-user and admin views
//! - [`new()`] - Factory function that creates the actor and client
//!
//! [`OrderClient::submit`]: crate::clients::OrderClient::submit

pub mod entity;
pub mod error;
pub mod queries;

pub use error::*;
pub use queries::*;

use crate::clients::OrderClient;
use crate::model::Order;
use actor_store::id::timestamp_ids;
use actor_store::{KeyValueStore, ResourceActor, StorageSlot};
use std::sync::Arc;

/// Storage key of the ledger.
pub const STORAGE_KEY: &str = "orders";

/// Creates a new Order actor and its client.
pub fn new(kv: Arc<dyn KeyValueStore>, capacity: usize) -> (ResourceActor<Order>, OrderClient) {
    let slot = StorageSlot::new(kv, STORAGE_KEY);
    let (actor, generic_client) = ResourceActor::new(capacity, slot, timestamp_ids());
    (actor, OrderClient::new(generic_client))
}
