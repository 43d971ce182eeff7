//! Cancel-order hashing
//!
//! A cancellation is struct-hashed and signed exactly like an order:
//! the fixed action literal plus the order hash re-hashed once as a
//! single-element bytes32 array, combined with the same domain the
//! order was signed under. The resulting signature acts as a bearer
//! credential authorizing deletion of that one order hash.

use ethers::core::types::H256;
use ethers::core::utils::keccak256;

use crate::signing::domain::OrderDomain;
use crate::signing::hashing::{final_digest, hash_packed, hash_string, PackedValue};

const CANCEL_ORDER_TYPE: &str = "CancelLimitOrder(\
    string action,\
    bytes32[] orderHashes\
)";

const CANCEL_ACTION: &str = "Cancel Orders";

/// Final signable hash authorizing cancellation of `order_hash` under
/// `domain`. The domain must be the one the order was hashed with, or
/// the counterparty rejects the signature.
pub fn cancel_hash(domain: &OrderDomain, order_hash: H256) -> H256 {
    // bytes32[] of one element: hash the concatenated contents.
    let hashes_hash = H256::from(keccak256(order_hash.as_bytes()));
    let struct_hash = hash_packed(&[
        PackedValue::Bytes32(hash_string(CANCEL_ORDER_TYPE)),
        PackedValue::Bytes32(hash_string(CANCEL_ACTION)),
        PackedValue::Bytes32(hashes_hash),
    ]);
    final_digest(domain.separator(), struct_hash)
}
