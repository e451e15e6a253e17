//! Inventory records, their identifiers and request payloads.
//!
//! Records decode leniently (see [`lenient`]) so the dashboard and lists survive rows with
//! missing or oddly typed fields. Payloads are strict and validated before dispatch.

pub mod lenient;
pub mod product;
pub mod restock;
pub mod sale;

pub use product::*;
pub use restock::*;
pub use sale::*;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};

/// The three collections exposed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Products,
    Sales,
    RestockOrders,
}

impl Collection {
    /// Path segment of the collection on the REST backend.
    pub fn path(self) -> &'static str {
        match self {
            Collection::Products => "products",
            Collection::Sales => "sales",
            Collection::RestockOrders => "restock-orders",
        }
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// A record type served by one backend collection.
pub trait Resource: Clone + Debug + Send + Sync + Serialize + DeserializeOwned + 'static {
    type Id: Copy + Eq + Debug + Display + Send + Sync + From<u32> + Into<u32>;
    type Create: Serialize + Debug + Send + Sync;
    type Update: Serialize + Debug + Send + Sync;

    const COLLECTION: Collection;

    fn id(&self) -> Self::Id;
}

/// Declares a `u32` identifier newtype that serializes as a bare number.
macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

pub(crate) use record_id;
