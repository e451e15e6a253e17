//! # Product Client
//!
//! High-level API for the `Product` actor. Wraps a `ResourceClient<Product>` and exposes
//! typed methods for the product payloads and stock actions.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Product, ProductFields, ProductId};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<ProductError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => ProductError::NotFound(id),
            Err(other) => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductFields) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        fields: ProductFields,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, fields).await.map_err(Self::map_error)
    }

    /// Take `quantity` units out of stock.
    ///
    /// Returns the unit price at the time of the reservation.
    #[instrument(skip(self))]
    pub async fn reserve_stock(&self, id: ProductId, quantity: u32) -> Result<f64, ProductError> {
        debug!("Reserving {} units for product {}", quantity, id);
        match self
            .inner
            .perform_action(id, ProductAction::ReserveStock(quantity))
            .await
        {
            Ok(ProductActionResult::ReserveStock { unit_price }) => Ok(unit_price),
            Ok(_) => unreachable!("ReserveStock action must return ReserveStock result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Put `quantity` units into stock. Returns the new stock level.
    #[instrument(skip(self))]
    pub async fn add_stock(&self, id: ProductId, quantity: u32) -> Result<u32, ProductError> {
        debug!("Adding {} units to product {}", quantity, id);
        match self
            .inner
            .perform_action(id, ProductAction::AddStock(quantity))
            .await
        {
            Ok(ProductActionResult::AddStock(level)) => Ok(level),
            Ok(_) => unreachable!("AddStock action must return AddStock result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}
