//! # Restock Client
//!
//! High-level API for the `RestockOrder` actor.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{NewRestockOrder, RestockOrder, RestockOrderId, RestockUpdate};
use crate::restock_actor::RestockError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Restock actor.
#[derive(Clone)]
pub struct RestockClient {
    inner: ResourceClient<RestockOrder>,
}

impl RestockClient {
    pub fn new(inner: ResourceClient<RestockOrder>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn place_order(&self, params: NewRestockOrder) -> Result<RestockOrder, RestockError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Receives a pending order, adding its quantity to the product's stock.
    #[instrument(skip(self))]
    pub async fn mark_received(&self, id: RestockOrderId) -> Result<RestockOrder, RestockError> {
        debug!("Sending request");
        self.inner
            .update(id, RestockUpdate::MarkReceived)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<RestockOrder> for RestockClient {
    type Error = RestockError;

    fn inner(&self) -> &ResourceClient<RestockOrder> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<RestockError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => RestockError::NotFound(id),
            Err(other) => RestockError::ActorCommunicationError(other.to_string()),
        }
    }
}
