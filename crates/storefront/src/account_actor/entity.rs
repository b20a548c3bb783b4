//! [`ActorEntity`] implementation for the [`Account`] domain type.

use super::error::IdentityError;
use super::queries::{DirectoryQuery, DirectoryQueryResult};
use crate::model::{Account, AccountCreate, UserId};
use actor_store::ActorEntity;
use async_trait::async_trait;

/// Directory entries are never edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountUpdate {}

#[async_trait]
impl ActorEntity for Account {
    type Id = UserId;
    type Create = AccountCreate;
    type Update = AccountUpdate;
    type Action = ();
    type ActionResult = ();
    type Query = DirectoryQuery;
    type QueryResult = DirectoryQueryResult;
    type Context = ();
    type Error = IdentityError;

    fn id(&self) -> &UserId {
        &self.id
    }

    fn from_create_params(id: UserId, params: AccountCreate) -> Result<Self, IdentityError> {
        Ok(Account::new(id, params))
    }

    /// Emails are unique across the directory.
    fn conflicts_with(&self, other: &Self) -> bool {
        self.email == other.email
    }

    async fn on_update(&mut self, update: AccountUpdate, _ctx: &()) -> Result<(), IdentityError> {
        match update {}
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), IdentityError> {
        Ok(())
    }

    fn handle_query(items: &[Self], query: DirectoryQuery) -> DirectoryQueryResult {
        match query {
            DirectoryQuery::Authenticate(credentials) => DirectoryQueryResult::Authenticated(
                items
                    .iter()
                    .find(|account| account.authenticates(&credentials))
                    .map(Account::profile),
            ),
            DirectoryQuery::Profiles => {
                DirectoryQueryResult::Profiles(items.iter().map(Account::profile).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Credentials;

    fn account(id: &str, email: &str) -> Account {
        Account::from_create_params(
            id.into(),
            AccountCreate {
                name: id.to_uppercase(),
                email: email.into(),
                password: "pw".into(),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_new_accounts_are_never_admin() {
        assert!(!account("1", "a@example.com").is_admin);
    }

    #[test]
    fn test_email_conflict() {
        let a = account("1", "a@example.com");
        assert!(account("2", "a@example.com").conflicts_with(&a));
        assert!(!account("2", "b@example.com").conflicts_with(&a));
    }

    #[test]
    fn test_authenticate_returns_profile_of_first_match() {
        let items = vec![account("1", "a@example.com"), account("2", "b@example.com")];
        let result = Account::handle_query(
            &items,
            DirectoryQuery::Authenticate(Credentials::new("b@example.com", "pw")),
        );
        let DirectoryQueryResult::Authenticated(Some(user)) = result else {
            panic!("expected a match");
        };
        assert_eq!(user.id, UserId::from("2"));

        let miss = Account::handle_query(
            &items,
            DirectoryQuery::Authenticate(Credentials::new("b@example.com", "nope")),
        );
        assert_eq!(miss, DirectoryQueryResult::Authenticated(None));
    }
}
