//! HTTP API layer: wire types and the REST client.

pub mod client;
pub mod types;

pub use client::DydxClient;
pub use types::{ApiOrder, CreateOrderRequest, OrderParams, QueryFilter};
