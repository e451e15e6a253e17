//! # Repository
//!
//! The seam between the operator-facing controllers and wherever the records live.
//!
//! - [`ActorRepository`] talks to the in-memory resource store.
//! - [`HttpRepository`] talks to the REST backend.
//!
//! Both fail with the same [`RepositoryError`], so the deletion controller recognises a
//! conflict the same way against either store.

pub mod actor;
pub mod error;
pub mod http;

pub use actor::ActorRepository;
pub use error::*;
pub use http::HttpRepository;

use crate::model::{Product, Resource, RestockOrder, Sale};
use async_trait::async_trait;

/// CRUD access to one collection of records.
#[async_trait]
pub trait Repository<T: Resource>: Send + Sync {
    /// Every record of the collection, in the order the store returns them.
    async fn list(&self) -> Result<Vec<T>, RepositoryError>;

    /// Creates a record and returns it as stored.
    async fn create(&self, params: T::Create) -> Result<T, RepositoryError>;

    /// Applies `update` to the record `id` and returns it as stored.
    async fn update(&self, id: T::Id, update: T::Update) -> Result<T, RepositoryError>;

    async fn delete(&self, id: T::Id) -> Result<(), RepositoryError>;
}

/// A repository serving all three inventory collections.
pub trait InventoryRepository:
    Repository<Product> + Repository<Sale> + Repository<RestockOrder>
{
}

impl<R> InventoryRepository for R where
    R: Repository<Product> + Repository<Sale> + Repository<RestockOrder>
{
}
