//! # System Lifecycle
//!
//! Starting, wiring and stopping the in-memory store, plus logging setup.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive the clients they need at
//! `run(context)`. This late binding lets the product and sale actors reference each other:
//!
//! ```rust,ignore
//! impl ActorEntity for Product {
//!     type Context = SaleClient;    // veto deletes while sales exist
//! }
//!
//! impl ActorEntity for Sale {
//!     type Context = ProductClient; // reserve and restore stock
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! Because that dependency graph is cyclic, dropping the clients would never close the
//! channels. [`InventorySystem::shutdown`] sends each actor an explicit `Shutdown` request
//! and then awaits every task.

pub mod inventory_system;
pub mod tracing;

pub use self::inventory_system::*;
pub use self::tracing::setup_tracing;
