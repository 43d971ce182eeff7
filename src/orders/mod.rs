//! Order schemas and cancel flow
//!
//! A closed set of schema-tagged order variants. The tag selects the
//! type string, domain, and byte layout; nothing is inferred from the
//! shape of the fields.

pub mod cancel;
pub mod fees;
pub mod limit;
pub mod perp;
pub mod solo;

use ethers::core::types::{H256, U256};
use rand::RngCore;

use crate::config::constants::DEFAULT_EXPIRATION_SECS;
use crate::config::types::PerpetualMarket;
use crate::error::ClientResult;
use crate::signing::domain::OrderDomain;
use crate::signing::signer::{PrivateKey, TypedSignature};

pub use fees::default_fee;
pub use limit::LimitOrder;
pub use perp::PerpetualOrder;
pub use solo::CanonicalOrder;

/// Order schema tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderSchema {
    Limit,
    Canonical,
    Perpetual,
}

impl OrderSchema {
    /// Domain used for cancellations of this schema's orders.
    ///
    /// Cancellation is market-agnostic, so the perpetual schema signs
    /// cancels under one fixed market's domain by convention; the
    /// orderbook accepts it for every perpetual market.
    pub fn cancel_domain(self) -> ClientResult<OrderDomain> {
        match self {
            OrderSchema::Limit => OrderDomain::limit_orders(),
            OrderSchema::Canonical => OrderDomain::canonical_orders(),
            OrderSchema::Perpetual => OrderDomain::perpetual_orders(PerpetualMarket::PbtcUsdc),
        }
    }
}

/// A signable order, tagged by schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Order {
    Limit(LimitOrder),
    Canonical(CanonicalOrder),
    Perpetual(PerpetualOrder),
}

impl Order {
    pub fn schema(&self) -> OrderSchema {
        match self {
            Order::Limit(_) => OrderSchema::Limit,
            Order::Canonical(_) => OrderSchema::Canonical,
            Order::Perpetual(_) => OrderSchema::Perpetual,
        }
    }

    /// EIP-712 struct hash for the order's schema.
    pub fn struct_hash(&self) -> ClientResult<H256> {
        match self {
            Order::Limit(order) => Ok(order.struct_hash()),
            Order::Canonical(order) => order.struct_hash(),
            Order::Perpetual(order) => order.struct_hash(),
        }
    }

    /// Final signable order hash, recomputed from current field values
    /// on every call.
    pub fn hash(&self) -> ClientResult<H256> {
        match self {
            Order::Limit(order) => order.hash(),
            Order::Canonical(order) => order.hash(),
            Order::Perpetual(order) => order.hash(),
        }
    }

    pub fn sign(&self, key: &PrivateKey) -> ClientResult<TypedSignature> {
        key.sign_typed(self.hash()?)
    }
}

/// Final signable hash cancelling `order_hash` for orders of `schema`.
pub fn cancel_order_hash(schema: OrderSchema, order_hash: H256) -> ClientResult<H256> {
    Ok(cancel::cancel_hash(&schema.cancel_domain()?, order_hash))
}

/// Sign a cancellation of `order_hash` for orders of `schema`.
pub fn sign_cancel(
    schema: OrderSchema,
    order_hash: H256,
    key: &PrivateKey,
) -> ClientResult<TypedSignature> {
    key.sign_typed(cancel_order_hash(schema, order_hash)?)
}

/// Uniform 256-bit order salt.
pub fn random_salt() -> U256 {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    U256::from_big_endian(&bytes)
}

/// Default expiration: four weeks from now, unix seconds.
pub fn epoch_in_four_weeks() -> u64 {
    let now = chrono::Utc::now().timestamp().max(0) as u64;
    now + DEFAULT_EXPIRATION_SECS
}
