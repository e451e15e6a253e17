//! Generic resource store for the in-memory inventory backend.
//!
//! Each collection (products, sales, restock orders) is owned by one [`ResourceActor`]
//! running in its own Tokio task. Callers talk to it through a cloneable
//! [`ResourceClient`], which turns every CRUD call into a message and awaits the reply.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that record types implement to be managed by an actor
//! - [`ResourceActor`] - Generic actor that owns one collection
//! - [`ResourceClient`] - Typed handle for sending requests to an actor
//! - [`FrameworkError`] - Plumbing errors plus boxed entity errors
//!
//! # Testing
//!
//! See [`mock`] for a client that answers from an expectation queue instead of an actor.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
