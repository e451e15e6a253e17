//! Operator input as typed text, checked before anything is sent to the store.

use crate::model::{NewRestockOrder, NewSale, ProductFields, ProductId};
use validator::{Validate, ValidationError, ValidationErrors};

fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
}

fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("required", "Name is required"));
    }
    Ok(())
}

fn valid_price(value: &str) -> Result<(), ValidationError> {
    match parse_price(value) {
        Some(_) => Ok(()),
        None => Err(invalid("price", "Price must be a number of at least 0")),
    }
}

fn valid_stock(value: &str) -> Result<(), ValidationError> {
    match parse_count(value) {
        Some(_) => Ok(()),
        None => Err(invalid("stock", "Stock must be a whole number of at least 0")),
    }
}

/// The add/edit product form.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ProductForm {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    pub description: String,
    #[validate(custom(function = "valid_price"))]
    pub price: String,
    #[validate(custom(function = "valid_stock"))]
    pub stock: String,
}

impl ProductForm {
    pub fn new(name: &str, description: &str, price: &str, stock: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            price: price.to_string(),
            stock: stock.to_string(),
        }
    }

    /// Filled with the current values of `fields`, for editing.
    pub fn from_fields(fields: &ProductFields) -> Self {
        Self {
            name: fields.name.clone(),
            description: fields.description.clone(),
            price: fields.price.to_string(),
            stock: fields.stock.to_string(),
        }
    }

    pub fn parse(&self) -> Result<ProductFields, ValidationErrors> {
        self.validate()?;
        let fields = ProductFields {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: parse_price(&self.price).unwrap_or_default(),
            stock: parse_count(&self.stock).unwrap_or_default(),
        };
        fields.validate()?;
        Ok(fields)
    }
}

/// Parses a quantity typed for a sale or a restock order: a whole number, at least 1.
pub fn parse_quantity(raw: &str) -> Result<u32, ValidationErrors> {
    match parse_count(raw) {
        Some(quantity) if quantity >= 1 => Ok(quantity),
        _ => {
            let mut errors = ValidationErrors::new();
            errors.add(
                "quantity",
                invalid("range", "Quantity must be a whole number of at least 1"),
            );
            Err(errors)
        }
    }
}

pub fn sale_payload(
    product_id: ProductId,
    raw_quantity: &str,
) -> Result<NewSale, ValidationErrors> {
    let sale = NewSale {
        product_id,
        quantity: parse_quantity(raw_quantity)?,
    };
    sale.validate()?;
    Ok(sale)
}

pub fn restock_payload(
    product_id: ProductId,
    raw_quantity: &str,
) -> Result<NewRestockOrder, ValidationErrors> {
    let order = NewRestockOrder {
        product_id,
        quantity: parse_quantity(raw_quantity)?,
    };
    order.validate()?;
    Ok(order)
}
