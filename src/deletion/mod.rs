//! # Product Deletion
//!
//! A product cannot be deleted while sales reference it. The store refuses such a delete
//! with status `400` and code `PRODUCT_HAS_SALES`; the [`DeletionController`] then lists the
//! blocking sales and offers to delete them first.
//!
//! - [`state`] - the flow as a pure reducer, [`DeletionState::apply`]
//! - [`controller`] - runs the flow against a [`Repository`](crate::repository::Repository)
//!
//! ```rust,ignore
//! let mut deletion = DeletionController::new(repo);
//! deletion.load().await?;
//!
//! deletion.request_delete(product);
//! if let Err(DeleteFailure::Conflict) = deletion.confirm_delete().await {
//!     println!("{} sales reference this product", deletion.dependents().len());
//!     deletion.confirm_cascade_delete().await?;
//! }
//! ```

pub mod controller;
pub mod state;

pub use controller::*;
pub use state::*;
