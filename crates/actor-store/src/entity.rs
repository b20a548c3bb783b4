//! # ActorEntity Trait
//!
//! The contract every persisted resource (Product, Account, CartItem, Order)
//! implements to be managed by the generic [`ResourceActor`](crate::ResourceActor).
//! It names the id, DTO, action, query and error types, and exposes lifecycle
//! hooks the actor calls around each request.
//!
//! Only [`ActorEntity::id`], [`ActorEntity::from_create_params`],
//! [`ActorEntity::on_update`], [`ActorEntity::handle_action`] and
//! [`ActorEntity::handle_query`] are required. The remaining hooks have
//! defaults that do nothing.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// Hooks are `async` so an entity may call other actors. The `Context` type is
/// injected into every hook when the actor's loop starts.
///
/// # Persistence
/// Entities are `Serialize + DeserializeOwned`: after every mutation the actor
/// writes its whole collection to storage, and it hydrates from storage when
/// constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing entity-specific mutations.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Enum representing read-only questions asked of the whole collection.
    type Query: Send + Sync + Debug;

    /// The result type returned by queries.
    type QueryResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Initial collection used when storage holds nothing for this entity.
    fn seed() -> Vec<Self> {
        Vec::new()
    }

    /// Natural key carried by a create payload.
    ///
    /// Entities keyed this way are not given a generated id. When an entity
    /// with the same key already exists the payload is routed to
    /// [`on_merge`](Self::on_merge) instead of creating a second row.
    fn natural_id(_params: &Self::Create) -> Option<Self::Id> {
        None
    }

    /// Whether `self` and `other` violate a uniqueness constraint.
    /// Checked against every stored entity before a create is accepted.
    fn conflicts_with(&self, _other: &Self) -> bool {
        false
    }

    /// Whether the entity stays in the collection after an update or action.
    fn is_retained(&self) -> bool {
        true
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is built and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when a create payload targets an existing natural key.
    async fn on_merge(
        &mut self,
        _params: Self::Create,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action & Query Handlers ---

    /// Handle a custom entity-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Answer a read-only query over the whole collection, in stored order.
    fn handle_query(items: &[Self], query: Self::Query) -> Self::QueryResult;
}
