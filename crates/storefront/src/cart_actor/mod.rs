//! # Cart Actor
//!
//! Owns the cart lines of this process. The cart is keyed by product id and
//! is not tied to the signed-in user: login and logout leave it alone.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_store::ActorEntity) implementation for [`CartItem`]
//! - [`error`] - [`CartError`] type for type-safe error handling
//! - [`queries`] - [`CartQuery`] for the derived totals
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Line Rules
//!
//! - Adding a product already in the cart bumps its quantity by one.
//! - A quantity set to zero or below removes the line.
//! - Name, price and image are copied when the line is created and never
//!   refreshed from the catalog.

pub mod entity;
pub mod error;
pub mod queries;

pub use error::*;
pub use queries::*;

use crate::clients::CartClient;
use crate::model::CartItem;
use actor_store::id::timestamp_ids;
use actor_store::{KeyValueStore, ResourceActor, StorageSlot};
use std::sync::Arc;

/// Storage key of the cart lines.
pub const STORAGE_KEY: &str = "cartItems";

/// Creates a new Cart actor and its client.
pub fn new(kv: Arc<dyn KeyValueStore>, capacity: usize) -> (ResourceActor<CartItem>, CartClient) {
    let slot = StorageSlot::new(kv, STORAGE_KEY);
    // Lines always carry their product id, so the generator is never consulted.
    let (actor, generic_client) = ResourceActor::new(capacity, slot, timestamp_ids());
    (actor, CartClient::new(generic_client))
}
