//! # Product Actor
//!
//! Owns the product collection of the in-memory store.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`], with the HTTP status and code the backend would answer with
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`] for stock management
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Context
//!
//! The actor runs with a [`SaleClient`](crate::clients::SaleClient) as its context, which it
//! uses to refuse deleting a product that still has sales:
//!
//! ```rust,ignore
//! let (product_actor, products) = product_actor::new();
//! let (sale_actor, sales) = sale_actor::new();
//! tokio::spawn(product_actor.run(sales.clone()));
//! tokio::spawn(sale_actor.run(products.clone()));
//!
//! let err = products.delete(product_id).await.unwrap_err();
//! assert_eq!(err.code(), Some(PRODUCT_HAS_SALES));
//! ```

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::framework::ResourceActor;
use crate::model::Product;

/// Creates a new Product actor and its client.
pub fn new() -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, ProductClient::new(generic_client))
}
