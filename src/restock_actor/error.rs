//! Error types for the Restock actor.

use crate::model::{ProductId, RestockOrderId};
use thiserror::Error;

/// Errors that can occur during restock order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestockError {
    /// The requested order was not found.
    #[error("Restock order not found: {0}")]
    NotFound(String),

    /// The ordered product does not exist.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The order was already received and can no longer change.
    #[error("Order not found or already completed: {0}")]
    AlreadyReceived(RestockOrderId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl RestockError {
    pub fn status(&self) -> u16 {
        match self {
            RestockError::NotFound(_)
            | RestockError::ProductNotFound(_)
            | RestockError::AlreadyReceived(_) => 404,
            RestockError::ActorCommunicationError(_) => 500,
        }
    }

    pub fn code(&self) -> Option<&'static str> {
        None
    }
}

impl From<String> for RestockError {
    fn from(msg: String) -> Self {
        RestockError::ActorCommunicationError(msg)
    }
}
