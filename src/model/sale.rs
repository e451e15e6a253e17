//! A recorded sale of one product.
//!
//! Sales are immutable once recorded; they can only be deleted. A sale is the only kind of
//! record that blocks a product delete.

use crate::model::{lenient, record_id, Collection, ProductId, Resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

record_id!(
    /// Server-assigned sale identifier.
    SaleId,
    "sale"
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: SaleId,
    #[serde(default, deserialize_with = "lenient::id")]
    pub product_id: ProductId,
    #[serde(default, deserialize_with = "lenient::count")]
    pub quantity: u32,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_price: f64,
    /// Missing dates are filled with the decode time; display only.
    #[serde(default = "Utc::now", deserialize_with = "lenient::timestamp_or_now")]
    pub sale_date: DateTime<Utc>,
}

impl Sale {
    pub fn new(
        id: impl Into<SaleId>,
        product_id: impl Into<ProductId>,
        quantity: u32,
        total_price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            product_id: product_id.into(),
            quantity,
            total_price,
            sale_date: Utc::now(),
        }
    }
}

/// Payload for recording a sale. The store prices it from the product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewSale {
    pub product_id: ProductId,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: u32,
}

/// Sales have no update operation.
#[derive(Debug, Clone, Serialize)]
pub enum SaleUpdate {}

impl Resource for Sale {
    type Id = SaleId;
    type Create = NewSale;
    type Update = SaleUpdate;

    const COLLECTION: Collection = Collection::Sales;

    fn id(&self) -> SaleId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use serde_json::json;

    #[test]
    fn decodes_flask_sale_row() {
        let row = json!({
            "id": 10,
            "product_id": 1,
            "quantity": 2,
            "total_price": "21.98",
            "sale_date": "Mon, 06 Jan 2025 12:00:00 GMT"
        });
        let sale: Sale = serde_json::from_value(row).unwrap();
        assert_eq!(sale.id, SaleId(10));
        assert_eq!(sale.product_id, ProductId(1));
        assert_eq!(sale.total_price, 21.98);
        assert_eq!(sale.sale_date.year(), 2025);
    }

    #[test]
    fn missing_sale_date_defaults_to_now() {
        let before = Utc::now();
        let sale: Sale = serde_json::from_value(json!({"id": 1, "product_id": 1})).unwrap();
        assert!(sale.sale_date >= before);
        assert_eq!(sale.quantity, 0);
        assert_eq!(sale.total_price, 0.0);
    }
}
