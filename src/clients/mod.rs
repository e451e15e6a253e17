//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Each client turns [`FrameworkError`](crate::framework::FrameworkError)s back into the
//! error type of its resource, so callers match on `ProductError::HasSales` rather than on
//! boxed errors.

pub mod actor_client;
pub mod product_client;
pub mod restock_client;
pub mod sale_client;

pub use actor_client::*;
pub use product_client::*;
pub use restock_client::*;
pub use sale_client::*;
