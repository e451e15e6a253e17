//! [`ActorEntity`] implementation for [`RestockOrder`].
//!
//! Orders are mutable only while pending: receiving one adds its quantity to the product's
//! stock, and a received order can no longer be deleted.

use super::error::RestockError;
use crate::clients::{ActorClient, ProductClient};
use crate::framework::ActorEntity;
use crate::model::{NewRestockOrder, RestockOrder, RestockOrderId, RestockUpdate};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use chrono::Utc;

/// Restock orders have no custom actions.
#[derive(Debug, Clone)]
pub enum RestockAction {}

#[async_trait]
impl ActorEntity for RestockOrder {
    type Id = RestockOrderId;
    type Create = NewRestockOrder;
    type Update = RestockUpdate;
    type Action = RestockAction;
    type ActionResult = ();
    type Context = ProductClient;
    type Error = RestockError;

    fn from_create_params(
        id: RestockOrderId,
        params: NewRestockOrder,
    ) -> Result<Self, RestockError> {
        Ok(RestockOrder::new(id, params.product_id, params.quantity))
    }

    async fn on_create(&mut self, products: &ProductClient) -> Result<(), RestockError> {
        match products.get(self.product_id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(RestockError::ProductNotFound(self.product_id)),
            Err(e) => Err(RestockError::ActorCommunicationError(e.to_string())),
        }
    }

    async fn on_update(
        &mut self,
        update: RestockUpdate,
        products: &ProductClient,
    ) -> Result<(), RestockError> {
        match update {
            RestockUpdate::MarkReceived => {
                if !self.is_pending() {
                    return Err(RestockError::AlreadyReceived(self.id));
                }
                products
                    .add_stock(self.product_id, self.quantity)
                    .await
                    .map_err(|e| match e {
                        ProductError::NotFound(_) => RestockError::ProductNotFound(self.product_id),
                        other => RestockError::ActorCommunicationError(other.to_string()),
                    })?;
                self.received_date = Some(Utc::now());
                Ok(())
            }
        }
    }

    async fn on_delete(&self, _ctx: &ProductClient) -> Result<(), RestockError> {
        if !self.is_pending() {
            return Err(RestockError::AlreadyReceived(self.id));
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: RestockAction,
        _ctx: &ProductClient,
    ) -> Result<(), RestockError> {
        match action {}
    }
}
