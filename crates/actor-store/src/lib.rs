//! # Actor Store
//!
//! Building blocks for persisted, single-writer resource stores on Tokio.
//!
//! Each store is a [`ResourceActor`] that owns one collection, processes its
//! requests strictly in order, and mirrors the whole collection into a
//! [`KeyValueStore`] after every mutation. Callers talk to it through a cheap,
//! cloneable [`ResourceClient`].
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - domain model and its lifecycle hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - message loop, hydration, persistence
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed requests
//! 4. **Storage Layer** ([`KeyValueStore`], [`StorageSlot`]) - whole-value JSON writes
//!
//! ## Example
//!
//! ```rust
//! use actor_store::{ActorEntity, MemoryStore, ResourceActor, StorageSlot};
//! use actor_store::id::sequential_ids;
//! use async_trait::async_trait;
//! use serde::{Deserialize, Serialize};
//! use std::sync::Arc;
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! struct Note { id: String, body: String }
//! #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
//!
//! #[async_trait]
//! impl ActorEntity for Note {
//!     type Id = String; type Create = String; type Update = String;
//!     type Action = (); type ActionResult = (); type Query = (); type QueryResult = usize;
//!     type Context = (); type Error = NoteError;
//!     fn id(&self) -> &String { &self.id }
//!     fn from_create_params(id: String, body: String) -> Result<Self, NoteError> { Ok(Self { id, body }) }
//!     async fn on_update(&mut self, body: String, _: &()) -> Result<(), NoteError> { self.body = body; Ok(()) }
//!     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), NoteError> { Ok(()) }
//!     fn handle_query(items: &[Self], _: ()) -> usize { items.len() }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let kv = Arc::new(MemoryStore::new());
//!     let slot = StorageSlot::new(kv.clone(), "notes");
//!     let (actor, client) = ResourceActor::<Note>::new(10, slot, sequential_ids("note"));
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create("hello".into()).await.unwrap();
//!     assert_eq!(id, "note_1");
//!     assert_eq!(client.query(()).await.unwrap(), 1);
//! }
//! ```
//!
//! ## Testing
//!
//! [`MemoryStore`] is the storage test double; the [`mock`] module answers
//! client requests from queued expectations without running an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod id;
pub mod message;
pub mod mock;
pub mod storage;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::{FrameworkError, StorageError};
pub use message::{ResourceRequest, Response};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageSlot};
