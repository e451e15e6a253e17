//! # Sale Client
//!
//! High-level API for the `Sale` actor.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{NewSale, Sale};
use crate::sale_actor::SaleError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Sale actor.
#[derive(Clone)]
pub struct SaleClient {
    inner: ResourceClient<Sale>,
}

impl SaleClient {
    pub fn new(inner: ResourceClient<Sale>) -> Self {
        Self { inner }
    }

    /// Records a sale. The store prices it and takes the quantity out of stock.
    #[instrument(skip(self))]
    pub async fn record_sale(&self, params: NewSale) -> Result<Sale, SaleError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Sale> for SaleClient {
    type Error = SaleError;

    fn inner(&self) -> &ResourceClient<Sale> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<SaleError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => SaleError::NotFound(id),
            Err(other) => SaleError::ActorCommunicationError(other.to_string()),
        }
    }
}
