//! Represents a product in the inventory.
//!
//! Stored by the product actor (see [`crate::product_actor`]) and served by the
//! `/products` collection.

use crate::model::{lenient, record_id, Collection, Resource};
use serde::{Deserialize, Serialize};
use validator::Validate;

record_id!(
    /// Server-assigned product identifier.
    ProductId,
    "product"
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: ProductId,
    #[serde(default = "lenient::placeholder_name", deserialize_with = "lenient::name")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub stock: u32,
}

impl Product {
    /// Creates a new Product instance with an empty description.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64, stock: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            stock,
        }
    }

    /// Stock value of this product (`price × stock`).
    pub fn inventory_value(&self) -> f64 {
        self.price * f64::from(self.stock)
    }
}

/// Full set of editable product fields, sent on create and on edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProductFields {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: String,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
    pub stock: u32,
}

impl Resource for Product {
    type Id = ProductId;
    type Create = ProductFields;
    type Update = ProductFields;

    const COLLECTION: Collection = Collection::Products;

    fn id(&self) -> ProductId {
        self.id
    }
}
