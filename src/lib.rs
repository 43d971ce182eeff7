//! Exchange trading client
//!
//! Deterministic EIP-712 hashing and typed-signature production for the
//! three order schemas the settlement contracts verify (legacy limit,
//! solo canonical, perpetual), the companion cancel flow, the default
//! fee schedule, and the REST client that submits orders.
//!
//! The hashing and signing core is pure, synchronous, and free of
//! shared state; only the REST client performs I/O.

pub mod api;
pub mod config;
pub mod error;
pub mod orders;
pub mod signing;

pub use api::client::DydxClient;
pub use api::types::{OrderParams, QueryFilter};
pub use config::loader::ClientConfig;
pub use config::types::{PerpetualMarket, SoloMarket, TradingPair};
pub use error::{ClientError, ClientResult};
pub use orders::{
    cancel_order_hash, default_fee, sign_cancel, CanonicalOrder, LimitOrder, Order, OrderSchema,
    PerpetualOrder,
};
pub use signing::signer::{PrivateKey, TypedSignature};
