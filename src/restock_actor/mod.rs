//! # Restock Actor
//!
//! Owns the restock order collection of the in-memory store. Runs with a
//! [`ProductClient`](crate::clients::ProductClient) as context to check the ordered product
//! and to add received quantities to its stock.

pub mod entity;
pub mod error;

pub use entity::RestockAction;
pub use error::*;

use crate::clients::RestockClient;
use crate::framework::ResourceActor;
use crate::model::RestockOrder;

/// Creates a new Restock actor and its client.
pub fn new() -> (ResourceActor<RestockOrder>, RestockClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, RestockClient::new(generic_client))
}
