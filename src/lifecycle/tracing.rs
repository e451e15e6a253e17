//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`, defaulting to `info`.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown and final collection size (`entity_type` field)
//! - **Store Operations**: Create, Update, Delete and stock Actions with record ids
//! - **Deletion Flow**: every state transition of a product deletion, conflicts and
//!   cascade progress
//! - **Dashboard Refresh**: request tokens, discarded stale responses and failures
//!
//! ## Usage Examples
//!
//! ```bash
//! # Transitions and store writes
//! RUST_LOG=info cargo run
//!
//! # Full payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the deletion controller
//! RUST_LOG=stockroom::deletion=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! A cascade delete of a product with two sales, at `info`:
//!
//! ```text
//! INFO Delete requested product=product_1 from=Idle
//! INFO Delete blocked by dependent sales product=product_1
//! INFO Dependents loaded product=product_1 dependents=2
//! INFO Deleted entity_type="Sale" id=sale_1 size=1
//! INFO Deleted entity_type="Sale" id=sale_2 size=0
//! INFO Deleted entity_type="Product" id=product_1 size=0
//! INFO Cascade delete complete product=product_1
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
