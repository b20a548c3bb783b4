//! # Identity Client
//!
//! Provides a high‑level API over the account directory and the session
//! record. Bad credentials and duplicate registrations are answered with
//! `false`; only infrastructure failures are errors.
use crate::account_actor::{DirectoryQuery, DirectoryQueryResult, IdentityError, Session};
use crate::model::{Account, AccountCreate, Credentials, User};
use actor_store::ActorClient;
use actor_store::{FrameworkError, ResourceClient, StorageError};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, instrument};

/// Client for the account directory and the signed-in user.
#[derive(Clone)]
pub struct IdentityClient {
    inner: ResourceClient<Account>,
    session: Arc<Session>,
}

impl IdentityClient {
    pub fn new(inner: ResourceClient<Account>, session: Arc<Session>) -> Self {
        Self { inner, session }
    }
}

#[async_trait]
impl ActorClient<Account> for IdentityClient {
    type Error = IdentityError;

    fn inner(&self) -> &ResourceClient<Account> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::Storage(e) => session_error(e),
            other => IdentityError::ActorCommunicationError(other.to_string()),
        }
    }
}

fn session_error(e: StorageError) -> IdentityError {
    IdentityError::Storage(e.to_string())
}

impl IdentityClient {
    /// Signs in the directory account matching `email` and `password`
    /// exactly, falling back to the built-in admin.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<bool, IdentityError> {
        let credentials = Credentials::new(email, password);
        let user = match self.authenticate(credentials.clone()).await? {
            Some(user) => Some(user),
            None if credentials.is_admin() => Some(User::admin()),
            None => None,
        };

        let Some(user) = user else {
            info!("Login rejected");
            return Ok(false);
        };
        self.session.sign_in(user).map_err(session_error)?;
        Ok(true)
    }

    /// Adds a non-admin account and signs it in. Resolves to `false`, with
    /// nothing changed, when the email is already registered.
    #[instrument(skip(self, password))]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<bool, IdentityError> {
        debug!("Sending request");
        let params = AccountCreate {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let id = match self.inner.create(params).await {
            Ok(id) => id,
            Err(FrameworkError::Conflict(existing)) => {
                info!(%existing, "Email already registered");
                return Ok(false);
            }
            Err(e) => return Err(Self::map_error(e)),
        };

        let user = User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            is_admin: false,
        };
        self.session.sign_in(user).map_err(session_error)?;
        Ok(true)
    }

    /// Clears the signed-in user. The directory is untouched.
    #[instrument(skip(self))]
    pub fn logout(&self) -> Result<(), IdentityError> {
        self.session.sign_out().map_err(session_error)
    }

    pub fn current_user(&self) -> Option<User> {
        self.session.current()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.current().is_some()
    }

    /// Observes login and logout.
    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.session.subscribe()
    }

    /// Profiles of every registered account.
    #[instrument(skip(self))]
    pub async fn users(&self) -> Result<Vec<User>, IdentityError> {
        match self.query(DirectoryQuery::Profiles).await? {
            DirectoryQueryResult::Profiles(users) => Ok(users),
            _ => unreachable!("Profiles query must return Profiles result"),
        }
    }

    async fn authenticate(&self, credentials: Credentials) -> Result<Option<User>, IdentityError> {
        match self.query(DirectoryQuery::Authenticate(credentials)).await? {
            DirectoryQueryResult::Authenticated(user) => Ok(user),
            _ => unreachable!("Authenticate query must return Authenticated result"),
        }
    }

    async fn query(&self, query: DirectoryQuery) -> Result<DirectoryQueryResult, IdentityError> {
        debug!("Sending request");
        self.inner.query(query).await.map_err(Self::map_error)
    }
}
