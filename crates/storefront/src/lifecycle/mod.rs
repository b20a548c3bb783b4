//! # System Lifecycle & Orchestration
//!
//! Starts the four store actors against one key-value store, wires the
//! checkout coordinator on top of their clients, and shuts everything down.
//!
//! ## The StoreSystem Pattern
//!
//! ```rust,ignore
//! let system = StoreSystem::start(&StoreConfig::from_env()?)?;
//!
//! system.identity.login("admin@store.com", "admin123").await?;
//! let products = system.catalog.list().await?;
//! system.cart.add_product(&products[0]).await?;
//! let order = system.checkout.place_order(shipping_info).await?;
//!
//! system.shutdown().await?;
//! ```
//!
//! ## Dependency Injection
//!
//! None of the store entities needs a runtime context, so every actor runs
//! with `()`. Cross-store behaviour (checkout reading the session, reading
//! and clearing the cart, appending to the ledger) lives in
//! [`Checkout`](crate::checkout::Checkout), which holds clones of the
//! clients rather than living inside any one actor.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients**, including the ones held by `Checkout`
//! 2. **Actors detect closure**, `receiver.recv()` returns `None`
//! 3. **Await completion** of every actor task
//!
//! A checkout that is still in its delay holds its own client clones, so the
//! cart and order actors stay up until it finishes.
//!
//! ## Observability & Tracing
//!
//! Call [`setup_tracing`] once at startup; filter with `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Lifecycle and mutations
//! RUST_LOG=debug cargo run     # Full payloads
//! ```

pub mod store_system;

pub use actor_store::tracing::setup_tracing;
pub use store_system::*;
