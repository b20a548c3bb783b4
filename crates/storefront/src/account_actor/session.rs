//! The signed-in user.
//!
//! At most one [`User`] is signed in per process. The value lives in a
//! [`watch`] channel so consumers can react to login and logout, and is
//! mirrored to its own storage slot so a restart keeps the session. Sign-in
//! and sign-out update both under one lock, so concurrent calls cannot leave
//! them holding different users.

use crate::model::User;
use actor_store::{StorageError, StorageSlot};
use std::sync::{Mutex, MutexGuard};
use tokio::sync::watch;
use tracing::{error, info};

pub struct Session {
    current: watch::Sender<Option<User>>,
    storage: Mutex<StorageSlot<User>>,
}

impl Session {
    /// Hydrates the session from `storage`. Unreadable data counts as signed out.
    pub fn open(storage: StorageSlot<User>) -> Self {
        let user = storage.load_or_discard();
        info!(key = storage.key(), signed_in = user.is_some(), "Session hydrated");
        let (current, _) = watch::channel(user);
        Self {
            current,
            storage: Mutex::new(storage),
        }
    }

    pub fn current(&self) -> Option<User> {
        self.current.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.current.subscribe()
    }

    /// Replaces the signed-in user and persists it.
    pub fn sign_in(&self, user: User) -> Result<(), StorageError> {
        let storage = self.lock()?;
        info!(user_id = %user.id, is_admin = user.is_admin, "Signed in");
        self.current.send_replace(Some(user.clone()));
        storage.save(&user).inspect_err(|e| {
            error!(key = storage.key(), error = %e, "Persist failed");
        })
    }

    /// Clears the signed-in user and removes its stored record.
    pub fn sign_out(&self) -> Result<(), StorageError> {
        let storage = self.lock()?;
        if let Some(user) = self.current.send_replace(None) {
            info!(user_id = %user.id, "Signed out");
        }
        storage.clear().inspect_err(|e| {
            error!(key = storage.key(), error = %e, "Persist failed");
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, StorageSlot<User>>, StorageError> {
        self.storage
            .lock()
            .map_err(|_| StorageError::Unavailable("session lock poisoned".into()))
    }
}
