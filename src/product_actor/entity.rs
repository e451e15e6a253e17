//! [`ActorEntity`] implementation for [`Product`].
//!
//! A product cannot be deleted while any sale references it. The check runs in `on_delete`
//! against the sale actor, so it sees the sales as they are when the delete is processed.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::clients::{ActorClient, SaleClient};
use crate::framework::ActorEntity;
use crate::model::{Product, ProductFields, ProductId};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductFields;
    type Update = ProductFields;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = SaleClient;
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductFields) -> Result<Self, ProductError> {
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
            stock: params.stock,
        })
    }

    /// Replaces every editable field.
    async fn on_update(
        &mut self,
        update: ProductFields,
        _ctx: &SaleClient,
    ) -> Result<(), ProductError> {
        self.name = update.name;
        self.description = update.description;
        self.price = update.price;
        self.stock = update.stock;
        Ok(())
    }

    /// Vetoes the delete when sales reference this product.
    async fn on_delete(&self, sales: &SaleClient) -> Result<(), ProductError> {
        let count = sales
            .list()
            .await
            .map_err(|e| ProductError::ActorCommunicationError(e.to_string()))?
            .iter()
            .filter(|sale| sale.product_id == self.id)
            .count();

        if count > 0 {
            return Err(ProductError::HasSales {
                product_id: self.id,
                count,
            });
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &SaleClient,
    ) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::ReserveStock(quantity) => {
                if self.stock < quantity {
                    return Err(ProductError::InsufficientStock {
                        requested: quantity,
                        available: self.stock,
                    });
                }
                self.stock -= quantity;
                Ok(ProductActionResult::ReserveStock {
                    unit_price: self.price,
                })
            }
            ProductAction::AddStock(quantity) => {
                self.stock = self.stock.saturating_add(quantity);
                Ok(ProductActionResult::AddStock(self.stock))
            }
        }
    }
}
