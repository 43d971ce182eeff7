//! Legacy limit-order schema
//!
//! The original order format: explicit maker/taker markets and amounts,
//! owner plus sub-account identities on both sides, no price or fee
//! fields. Field order in the type string is part of the signature.

use ethers::core::types::{Address, H256, U256};

use crate::error::ClientResult;
use crate::signing::domain::OrderDomain;
use crate::signing::hashing::{
    address_to_bytes32, final_digest, hash_packed, hash_string, PackedValue,
};
use crate::signing::signer::{PrivateKey, TypedSignature};

const LIMIT_ORDER_TYPE: &str = "LimitOrder(\
    uint256 makerMarket,\
    uint256 takerMarket,\
    uint256 makerAmount,\
    uint256 takerAmount,\
    address makerAccountOwner,\
    uint256 makerAccountNumber,\
    address takerAccountOwner,\
    uint256 takerAccountNumber,\
    uint256 expiration,\
    uint256 salt\
)";

/// Legacy limit order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitOrder {
    pub maker_market: u64,
    pub taker_market: u64,
    pub maker_amount: U256,
    pub taker_amount: U256,
    pub maker_account_owner: Address,
    pub maker_account_number: U256,
    pub taker_account_owner: Address,
    pub taker_account_number: U256,
    /// Unix seconds; 0 means the order never expires.
    pub expiration: u64,
    pub salt: U256,
}

impl LimitOrder {
    /// EIP-712 struct hash over the declared field order.
    pub fn struct_hash(&self) -> H256 {
        hash_packed(&[
            PackedValue::Bytes32(hash_string(LIMIT_ORDER_TYPE)),
            PackedValue::Uint(U256::from(self.maker_market)),
            PackedValue::Uint(U256::from(self.taker_market)),
            PackedValue::Uint(self.maker_amount),
            PackedValue::Uint(self.taker_amount),
            PackedValue::Bytes32(address_to_bytes32(self.maker_account_owner)),
            PackedValue::Uint(self.maker_account_number),
            PackedValue::Bytes32(address_to_bytes32(self.taker_account_owner)),
            PackedValue::Uint(self.taker_account_number),
            PackedValue::Uint(U256::from(self.expiration)),
            PackedValue::Uint(self.salt),
        ])
    }

    /// Final signable order hash.
    pub fn hash(&self) -> ClientResult<H256> {
        let domain = OrderDomain::limit_orders()?;
        Ok(final_digest(domain.separator(), self.struct_hash()))
    }

    pub fn sign(&self, key: &PrivateKey) -> ClientResult<TypedSignature> {
        key.sign_typed(self.hash()?)
    }
}
