//! # Catalog Actor
//!
//! Owns the product catalog. The catalog is a leaf store: it has no context
//! dependencies, and nothing else reads it at runtime. Cart items and orders
//! keep their own copies of product fields.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_store::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`CatalogError`] type for type-safe error handling
//! - [`queries`] - [`CatalogQuery`] and [`CatalogQueryResult`] for derived views
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use actor_store::{ActorClient, MemoryStore};
//! use std::sync::Arc;
//! use storefront::catalog_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = catalog_actor::new(Arc::new(MemoryStore::new()), 32);
//!     tokio::spawn(actor.run(()));
//!
//!     // An empty store starts from the seed catalog
//!     assert_eq!(client.count().await?, 6);
//!     assert!(client.get("1".into()).await?.is_some());
//!     Ok(())
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Seeded**: six products when storage holds no catalog
//! - **Validated**: negative prices and ratings outside `0..=5` are rejected
//! - **Timestamp ids**: added products get millisecond-derived ids

pub mod entity;
pub mod error;
pub mod queries;

pub use error::*;
pub use queries::*;

use crate::clients::CatalogClient;
use crate::model::Product;
use actor_store::id::timestamp_ids;
use actor_store::{KeyValueStore, ResourceActor, StorageSlot};
use std::sync::Arc;

/// Storage key of the product collection.
pub const STORAGE_KEY: &str = "products";

/// Creates a new Catalog actor and its client.
pub fn new(kv: Arc<dyn KeyValueStore>, capacity: usize) -> (ResourceActor<Product>, CatalogClient) {
    let slot = StorageSlot::new(kv, STORAGE_KEY);
    let (actor, generic_client) = ResourceActor::new(capacity, slot, timestamp_ids());
    (actor, CatalogClient::new(generic_client))
}
