//! Custom actions for the Product actor.
//!
//! Stock is only ever changed by other records: a sale reserves it, a deleted sale or a
//! received restock order adds it back. These actions are handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

/// Custom actions for Product entities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProductAction {
    /// Takes `u32` units out of stock.
    ///
    /// # Errors
    /// Fails with [`ProductError::InsufficientStock`](super::ProductError::InsufficientStock)
    /// when the requested amount exceeds available stock.
    ReserveStock(u32),
    /// Puts `u32` units into stock.
    AddStock(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProductActionResult {
    /// Unit price at the moment of the reservation, used to price the sale.
    ReserveStock { unit_price: f64 },
    /// Stock level after the addition.
    AddStock(u32),
}
