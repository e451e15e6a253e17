//! Error types for the Sale actor.

use crate::model::ProductId;
use crate::product_actor::ProductError;
use thiserror::Error;

/// Errors that can occur during sale operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SaleError {
    /// The requested sale was not found.
    #[error("Sale not found: {0}")]
    NotFound(String),

    /// The sold product does not exist.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The product does not have enough stock for the sale.
    #[error("Not enough stock available: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl SaleError {
    pub fn status(&self) -> u16 {
        match self {
            SaleError::NotFound(_) | SaleError::ProductNotFound(_) => 404,
            SaleError::InsufficientStock { .. } => 400,
            SaleError::ActorCommunicationError(_) => 500,
        }
    }

    pub fn code(&self) -> Option<&'static str> {
        match self {
            SaleError::InsufficientStock { .. } => Some("INSUFFICIENT_STOCK"),
            _ => None,
        }
    }

    /// Translates a failed stock reservation on `product_id`.
    pub(crate) fn from_reservation(product_id: ProductId, err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => SaleError::ProductNotFound(product_id),
            ProductError::InsufficientStock {
                requested,
                available,
            } => SaleError::InsufficientStock {
                requested,
                available,
            },
            other => SaleError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<String> for SaleError {
    fn from(msg: String) -> Self {
        SaleError::ActorCommunicationError(msg)
    }
}
