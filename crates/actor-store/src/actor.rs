//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns one
//! persisted collection. It processes messages sequentially, so no two
//! mutations of the same collection ever interleave, and writes the whole
//! collection back to its [`StorageSlot`] after each mutation.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::storage::StorageSlot;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`),
/// the storage slot the state is mirrored to, and the receiver end of the
/// channel. Because each actor processes its own messages one at a time, the
/// collection needs no `Mutex`.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and
///     `client` (interface). The collection is hydrated from storage here, or
///     from [`ActorEntity::seed`] when storage has nothing.
/// 2.  **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// # Operations
///
/// * **Create**: uses the payload's natural key if it has one (merging into an
///   existing entity with that key), otherwise a fresh id from the generator.
///   Rejects payloads that conflict with a stored entity.
/// * **Get / List / Query**: read-only, never persist.
/// * **Update / Action**: mutate one entity in place, then drop it if
///   [`ActorEntity::is_retained`] turns false.
/// * **Delete / Clear**: remove one or all entities.
///
/// The collection keeps insertion order, which is also the persisted order.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    storage: StorageSlot<Vec<T>>,
    next_id: Box<dyn Fn() -> T::Id + Send + Sync>,
    entity_type: &'static str,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `storage` - Slot the collection is hydrated from and saved to.
    /// * `next_id` - Generator for ids of created entities without a natural key.
    pub fn new(
        buffer_size: usize,
        storage: StorageSlot<Vec<T>>,
        next_id: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        // Extract just the type name (e.g., "Product" instead of "storefront::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");

        let store = match storage.load_or_discard() {
            Some(items) => {
                info!(entity_type, key = storage.key(), size = items.len(), "Hydrated");
                items
            }
            None => {
                let items = T::seed();
                info!(entity_type, key = storage.key(), size = items.len(), "Seeded");
                items
            }
        };

        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store,
            storage,
            next_id: Box::new(next_id),
            entity_type,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies (like other clients) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = self.entity_type;
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|idx| self.store[idx].clone());
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(id, update, &context).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(id, &context).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Clear { respond_to } => {
                    let removed = self.store.len();
                    self.store.clear();
                    info!(entity_type, removed, "Cleared");
                    let _ = respond_to.send(self.persist().map(|()| removed));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self.action(id, action, &context).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Query { query, respond_to } => {
                    debug!(entity_type, ?query, "Query");
                    let _ = respond_to.send(Ok(T::handle_query(&self.store, query)));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let entity_type = self.entity_type;
        let natural_id = T::natural_id(&params);

        if let Some(idx) = natural_id.as_ref().and_then(|id| self.position(id)) {
            let item = &mut self.store[idx];
            if let Err(e) = item.on_merge(params, context).await {
                warn!(entity_type, id = %item.id(), error = %e, "on_merge failed");
                return Err(FrameworkError::EntityError(Box::new(e)));
            }
            let id = item.id().clone();
            info!(entity_type, %id, "Merged");
            self.persist()?;
            return Ok(id);
        }

        let id = natural_id.unwrap_or_else(|| (self.next_id)());
        let mut item = match T::from_create_params(id.clone(), params) {
            Ok(item) => item,
            Err(e) => {
                warn!(entity_type, error = %e, "Create failed");
                return Err(FrameworkError::EntityError(Box::new(e)));
            }
        };

        if let Some(existing) = self.store.iter().find(|other| item.conflicts_with(other)) {
            warn!(entity_type, %id, existing = %existing.id(), "Create conflicts");
            return Err(FrameworkError::Conflict(existing.id().to_string()));
        }

        // Await the async hook
        if let Err(e) = item.on_create(context).await {
            warn!(entity_type, error = %e, "on_create failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }

        self.store.push(item);
        info!(entity_type, %id, size = self.store.len(), "Created");
        self.persist()?;
        Ok(id)
    }

    async fn update(
        &mut self,
        id: T::Id,
        update: T::Update,
        context: &T::Context,
    ) -> Result<Option<T>, FrameworkError> {
        let entity_type = self.entity_type;
        let Some(idx) = self.position(&id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };

        // Await the async hook
        if let Err(e) = self.store[idx].on_update(update, context).await {
            warn!(entity_type, %id, error = %e, "Update failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }

        let retained = self.retain_at(idx);
        info!(entity_type, %id, retained = retained.is_some(), "Updated");
        self.persist()?;
        Ok(retained)
    }

    async fn delete(&mut self, id: T::Id, context: &T::Context) -> Result<(), FrameworkError> {
        let entity_type = self.entity_type;
        let Some(idx) = self.position(&id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };

        // Await the async hook
        if let Err(e) = self.store[idx].on_delete(context).await {
            warn!(entity_type, %id, error = %e, "on_delete failed");
            return Err(FrameworkError::EntityError(Box::new(e)));
        }

        self.store.remove(idx);
        info!(entity_type, %id, size = self.store.len(), "Deleted");
        self.persist()
    }

    async fn action(
        &mut self,
        id: T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let entity_type = self.entity_type;
        let Some(idx) = self.position(&id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };

        match self.store[idx].handle_action(action, context).await {
            Ok(result) => {
                let retained = self.retain_at(idx).is_some();
                info!(entity_type, %id, retained, "Action ok");
                self.persist()?;
                Ok(result)
            }
            Err(e) => {
                warn!(entity_type, %id, error = %e, "Action failed");
                Err(FrameworkError::EntityError(Box::new(e)))
            }
        }
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.store.iter().position(|item| item.id() == id)
    }

    /// Drops the entity at `idx` unless it is still retained.
    fn retain_at(&mut self, idx: usize) -> Option<T> {
        if self.store[idx].is_retained() {
            Some(self.store[idx].clone())
        } else {
            let removed = self.store.remove(idx);
            info!(entity_type = self.entity_type, id = %removed.id(), "Removed");
            None
        }
    }

    fn persist(&self) -> Result<(), FrameworkError> {
        self.storage.save(&self.store).map_err(|e| {
            error!(entity_type = self.entity_type, key = self.storage.key(), error = %e, "Persist failed");
            FrameworkError::Storage(e)
        })
    }
}
