//! [`Repository`] over the in-memory resource store.

use super::{ApiError, Repository, RepositoryError};
use crate::clients::{ActorClient, ProductClient, RestockClient, SaleClient};
use crate::model::{
    NewRestockOrder, NewSale, Product, ProductFields, ProductId, RestockOrder, RestockOrderId,
    RestockUpdate, Sale, SaleId, SaleUpdate,
};
use crate::product_actor::ProductError;
use crate::restock_actor::RestockError;
use crate::sale_actor::SaleError;
use async_trait::async_trait;

/// Serves the three collections from their resource actors.
///
/// Store errors come back as the status and code the REST backend would answer with, and
/// broken actor channels as [`RepositoryError::Transport`].
#[derive(Clone)]
pub struct ActorRepository {
    products: ProductClient,
    sales: SaleClient,
    restocks: RestockClient,
}

impl ActorRepository {
    pub fn new(products: ProductClient, sales: SaleClient, restocks: RestockClient) -> Self {
        Self {
            products,
            sales,
            restocks,
        }
    }
}

fn rejected(status: u16, message: String, code: Option<&str>) -> RepositoryError {
    RepositoryError::Rejected(ApiError::new(status, message, code))
}

impl From<ProductError> for RepositoryError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::ActorCommunicationError(msg) => RepositoryError::Transport(msg),
            other => rejected(other.status(), other.to_string(), other.code()),
        }
    }
}

impl From<SaleError> for RepositoryError {
    fn from(e: SaleError) -> Self {
        match e {
            SaleError::ActorCommunicationError(msg) => RepositoryError::Transport(msg),
            other => rejected(other.status(), other.to_string(), other.code()),
        }
    }
}

impl From<RestockError> for RepositoryError {
    fn from(e: RestockError) -> Self {
        match e {
            RestockError::ActorCommunicationError(msg) => RepositoryError::Transport(msg),
            other => rejected(other.status(), other.to_string(), other.code()),
        }
    }
}

#[async_trait]
impl Repository<Product> for ActorRepository {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.list().await?)
    }

    async fn create(&self, params: ProductFields) -> Result<Product, RepositoryError> {
        Ok(self.products.create_product(params).await?)
    }

    async fn update(
        &self,
        id: ProductId,
        update: ProductFields,
    ) -> Result<Product, RepositoryError> {
        Ok(self.products.update_product(id, update).await?)
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        Ok(self.products.delete(id).await?)
    }
}

#[async_trait]
impl Repository<Sale> for ActorRepository {
    async fn list(&self) -> Result<Vec<Sale>, RepositoryError> {
        Ok(self.sales.list().await?)
    }

    async fn create(&self, params: NewSale) -> Result<Sale, RepositoryError> {
        Ok(self.sales.record_sale(params).await?)
    }

    async fn update(&self, _id: SaleId, update: SaleUpdate) -> Result<Sale, RepositoryError> {
        match update {}
    }

    async fn delete(&self, id: SaleId) -> Result<(), RepositoryError> {
        Ok(self.sales.delete(id).await?)
    }
}

#[async_trait]
impl Repository<RestockOrder> for ActorRepository {
    async fn list(&self) -> Result<Vec<RestockOrder>, RepositoryError> {
        Ok(self.restocks.list().await?)
    }

    async fn create(&self, params: NewRestockOrder) -> Result<RestockOrder, RepositoryError> {
        Ok(self.restocks.place_order(params).await?)
    }

    async fn update(
        &self,
        id: RestockOrderId,
        update: RestockUpdate,
    ) -> Result<RestockOrder, RepositoryError> {
        match update {
            RestockUpdate::MarkReceived => Ok(self.restocks.mark_received(id).await?),
        }
    }

    async fn delete(&self, id: RestockOrderId) -> Result<(), RepositoryError> {
        Ok(self.restocks.delete(id).await?)
    }
}
