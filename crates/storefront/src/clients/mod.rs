//! Type-safe wrappers around [`ResourceClient`](actor_store::ResourceClient).
//!
//! Each client maps framework errors into its store's error enum and turns
//! "no such id" into a quiet no-op or `None`.

pub mod cart_client;
pub mod catalog_client;
pub mod identity_client;
pub mod order_client;

pub use cart_client::*;
pub use catalog_client::*;
pub use identity_client::*;
pub use order_client::*;
