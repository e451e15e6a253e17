//! # Sale Actor
//!
//! Owns the sale collection of the in-memory store. Runs with a
//! [`ProductClient`](crate::clients::ProductClient) as context to move stock in and out of
//! the sold product.

pub mod entity;
pub mod error;

pub use entity::SaleAction;
pub use error::*;

use crate::clients::SaleClient;
use crate::framework::ResourceActor;
use crate::model::Sale;

/// Creates a new Sale actor and its client.
pub fn new() -> (ResourceActor<Sale>, SaleClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, SaleClient::new(generic_client))
}
