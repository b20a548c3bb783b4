//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber.
//!
//! The output uses the compact format without module targets; every actor log
//! line instead carries an `entity_type` field (`Product`, `CartItem`, ...), so
//! a filtered line stays short while remaining attributable.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: hydration or seeding, startup, shutdown and final size
//! - **Store Operations**: Create, Merge, Update, Delete, Clear, Actions, Queries
//! - **Persistence**: each save at `debug`, failed saves at `error`
//! - **Client Calls**: `#[instrument]` spans on every store client method
//!
//! ```bash
//! RUST_LOG=info cargo run      # one line per mutation
//! RUST_LOG=debug cargo run     # full payloads and reads
//! RUST_LOG=actor_store=debug,storefront=info cargo run
//! ```
//!
//! With `RUST_LOG=info` a checkout looks like:
//!
//! ```text
//! INFO checkout: Checkout processing lines=2 total=25.00
//! INFO checkout: Created entity_type="Order" id=1760870400123 size=1
//! INFO checkout: Cleared entity_type="CartItem" removed=2
//! INFO checkout: Checkout confirmed order_id=1760870400123
//! ```

/// Initializes the tracing subscriber, filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
