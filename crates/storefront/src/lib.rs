//! # Storefront
//!
//! In-process commerce state: a product catalog, an account directory with a
//! session record, a cart, and an order ledger. Each is a persisted
//! [`ResourceActor`](actor_store::ResourceActor) that writes its whole
//! collection to a [`KeyValueStore`](actor_store::KeyValueStore) after every
//! change and reloads it on start.
//!
//! ## Core Components
//!
//! - **[model]**: Pure data structures ([`Product`](model::Product),
//!   [`User`](model::User), [`CartItem`](model::CartItem), [`Order`](model::Order))
//! - **Actors**: [`catalog_actor`], [`account_actor`], [`cart_actor`],
//!   [`order_actor`], one per store
//! - **[clients]**: Type-safe wrappers that hide the message passing
//! - **[checkout]**: The cart-to-order sequence
//! - **[config]**: Environment-driven settings
//! - **[lifecycle]**: [`StoreSystem`](lifecycle::StoreSystem), which starts and
//!   stops everything
//!
//! ## Storage Layout
//!
//! | Key | Value |
//! |-----|-------|
//! | `products` | array of products |
//! | `users` | array of directory accounts |
//! | `user` | the signed-in user, absent when signed out |
//! | `cartItems` | array of cart lines |
//! | `orders` | array of orders |
//!
//! Writes overwrite a whole key. Two processes sharing a data directory race
//! with last-writer-wins semantics.

pub mod account_actor;
pub mod cart_actor;
pub mod catalog_actor;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
