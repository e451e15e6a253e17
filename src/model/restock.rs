//! A restock order placed for one product.
//!
//! An order is pending until it is received; receiving adds its quantity to the product's
//! stock.

use crate::model::{lenient, record_id, Collection, ProductId, Resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

record_id!(
    /// Server-assigned restock order identifier.
    RestockOrderId,
    "restock"
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestockOrder {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: RestockOrderId,
    #[serde(default, deserialize_with = "lenient::id")]
    pub product_id: ProductId,
    #[serde(default, deserialize_with = "lenient::count")]
    pub quantity: u32,
    #[serde(
        alias = "order_date",
        default = "Utc::now",
        deserialize_with = "lenient::timestamp_or_now"
    )]
    pub restock_date: DateTime<Utc>,
    #[serde(default, deserialize_with = "lenient::optional_timestamp")]
    pub received_date: Option<DateTime<Utc>>,
}

impl RestockOrder {
    pub fn new(
        id: impl Into<RestockOrderId>,
        product_id: impl Into<ProductId>,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            product_id: product_id.into(),
            quantity,
            restock_date: Utc::now(),
            received_date: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.received_date.is_none()
    }
}

/// Payload for placing a restock order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewRestockOrder {
    pub product_id: ProductId,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: u32,
}

/// The only change a restock order accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RestockUpdate {
    MarkReceived,
}

impl Resource for RestockOrder {
    type Id = RestockOrderId;
    type Create = NewRestockOrder;
    type Update = RestockUpdate;

    const COLLECTION: Collection = Collection::RestockOrders;

    fn id(&self) -> RestockOrderId {
        self.id
    }
}
