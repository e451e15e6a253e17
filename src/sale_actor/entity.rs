//! [`ActorEntity`] implementation for [`Sale`].
//!
//! Recording a sale reserves the product's stock and prices the sale from the product;
//! deleting one puts the stock back.

use super::error::SaleError;
use crate::clients::ProductClient;
use crate::framework::ActorEntity;
use crate::model::{NewSale, Sale, SaleId, SaleUpdate};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use chrono::Utc;
use tracing::warn;

/// Sales have no custom actions.
#[derive(Debug, Clone)]
pub enum SaleAction {}

#[async_trait]
impl ActorEntity for Sale {
    type Id = SaleId;
    type Create = NewSale;
    type Update = SaleUpdate;
    type Action = SaleAction;
    type ActionResult = ();
    type Context = ProductClient;
    type Error = SaleError;

    /// Builds an unpriced sale; `on_create` fills in the price.
    fn from_create_params(id: SaleId, params: NewSale) -> Result<Self, SaleError> {
        Ok(Sale::new(id, params.product_id, params.quantity, 0.0))
    }

    async fn on_create(&mut self, products: &ProductClient) -> Result<(), SaleError> {
        let unit_price = products
            .reserve_stock(self.product_id, self.quantity)
            .await
            .map_err(|e| SaleError::from_reservation(self.product_id, e))?;
        self.total_price = unit_price * f64::from(self.quantity);
        self.sale_date = Utc::now();
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: SaleUpdate,
        _ctx: &ProductClient,
    ) -> Result<(), SaleError> {
        match update {}
    }

    /// Puts the sold quantity back into stock. A product that no longer exists is skipped.
    async fn on_delete(&self, products: &ProductClient) -> Result<(), SaleError> {
        match products.add_stock(self.product_id, self.quantity).await {
            Ok(_) => Ok(()),
            Err(ProductError::NotFound(_)) => {
                warn!(
                    sale = %self.id,
                    product = %self.product_id,
                    "Product gone, stock not restored"
                );
                Ok(())
            }
            Err(e) => Err(SaleError::ActorCommunicationError(e.to_string())),
        }
    }

    async fn handle_action(
        &mut self,
        action: SaleAction,
        _ctx: &ProductClient,
    ) -> Result<(), SaleError> {
        match action {}
    }
}
