//! # Stockroom
//!
//! > **Inventory administration: products, sales, restock orders, and a dashboard.**
//!
//! The operator-facing pieces are state containers over a [`Repository`](repository::Repository):
//!
//! - **Deleting products** ([`deletion`]). A product with recorded sales cannot be removed.
//!   The store refuses with status `400` and code `PRODUCT_HAS_SALES`; the controller lists
//!   the blocking sales and, on confirmation, deletes them before the product. A cascade
//!   that fails halfway keeps the sales still to delete, so a retry resumes.
//! - **Dashboard** ([`dashboard`]). Metrics and chart series computed from the three
//!   collections, fetched concurrently. Stale responses are dropped and a failed refresh
//!   keeps the last good dashboard.
//! - **Catalog** ([`catalog`]). Add, edit, sell and restock, with form input validated
//!   before any request.
//!
//! ## Stores
//!
//! Two repositories implement the same contract:
//!
//! - [`HttpRepository`](repository::HttpRepository) for the REST backend.
//! - [`ActorRepository`](repository::ActorRepository) for an in-memory store built from
//!   resource actors: one Tokio task per collection, each owning its records and handling
//!   requests one at a time (no locks). The actors enforce the backend's rules: stock is
//!   reserved by sales, restored when a sale is deleted, added when a restock order is
//!   received.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` and the [`ActorEntity`](framework::ActorEntity) hooks
//! records implement, plus [`MockClient`](framework::mock::MockClient) for tests.
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! [`InventorySystem`](lifecycle::InventorySystem) starts the actors, wires their
//! dependencies and shuts them down.
//!
//! ### 3. The Interface ([`clients`])
//! Typed wrappers around the generic client, one per resource.
//!
//! ### 4. The Implementation ([`product_actor`], [`sale_actor`], [`restock_actor`])
//! The store rules, as `ActorEntity` implementations.
//!
//! ### 5. The Operator Side ([`repository`], [`deletion`], [`dashboard`], [`catalog`])
//!
//! ## 🚀 Running the Demo
//!
//! ```bash
//! # In-memory store
//! RUST_LOG=info cargo run
//!
//! # Against the REST backend
//! STOCKROOM_API_URL=http://localhost:5000 cargo run
//! ```

pub mod catalog;
pub mod clients;
pub mod config;
pub mod dashboard;
pub mod deletion;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod repository;
pub mod restock_actor;
pub mod sale_actor;
