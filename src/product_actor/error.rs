//! Error types for the Product actor.

use crate::model::ProductId;
use crate::repository::PRODUCT_HAS_SALES;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Sales still reference the product, so it cannot be deleted.
    #[error("This product has existing sales and cant be removed")]
    HasSales { product_id: ProductId, count: usize },

    /// The requested quantity exceeds the available stock.
    #[error("Not enough stock available: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl ProductError {
    /// HTTP status the REST backend answers with for this error.
    pub fn status(&self) -> u16 {
        match self {
            ProductError::NotFound(_) => 404,
            ProductError::HasSales { .. } | ProductError::InsufficientStock { .. } => 400,
            ProductError::ActorCommunicationError(_) => 500,
        }
    }

    /// Machine-readable error code, when the backend defines one.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            ProductError::HasSales { .. } => Some(PRODUCT_HAS_SALES),
            ProductError::InsufficientStock { .. } => Some("INSUFFICIENT_STOCK"),
            _ => None,
        }
    }
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::ActorCommunicationError(msg)
    }
}
