//! # Dashboard
//!
//! Summary metrics and chart series for the inventory overview.
//!
//! - [`engine`] - [`Dashboard::compute`], a pure function of products, sales and restock
//!   orders
//! - [`controller`] - [`DashboardController`], which fetches the collections and keeps the
//!   last good dashboard

pub mod controller;
pub mod engine;

pub use controller::*;
pub use engine::*;
