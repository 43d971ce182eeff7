//! EIP-712 hashing primitives
//!
//! Tight-packed keccak hashing in the `soliditySha3` style: every value
//! contributes exactly its ABI width, concatenated in field order, then
//! hashed. The byte layout here must match what the verifying contracts
//! recompute on-chain, so each helper is pinned by golden-vector tests.

use ethers::core::types::{Address, H256, U256};
use ethers::core::utils::keccak256;

use crate::error::{ClientError, ClientResult};

/// One tightly-packed value.
#[derive(Debug, Clone)]
pub enum PackedValue {
    /// 32 raw bytes.
    Bytes32(H256),
    /// Unsigned integer, 32 bytes big-endian.
    Uint(U256),
}

/// keccak256 of the UTF-8 bytes of a string (EIP-712 type strings,
/// domain names, action literals).
pub fn hash_string(s: &str) -> H256 {
    H256::from(keccak256(s.as_bytes()))
}

/// keccak256 over values packed at their exact ABI widths, in order.
pub fn hash_packed(values: &[PackedValue]) -> H256 {
    let mut buf = Vec::with_capacity(values.len() * 32);
    for value in values {
        match value {
            PackedValue::Bytes32(h) => buf.extend_from_slice(h.as_bytes()),
            PackedValue::Uint(u) => {
                let mut word = [0u8; 32];
                u.to_big_endian(&mut word);
                buf.extend_from_slice(&word);
            }
        }
    }
    H256::from(keccak256(&buf))
}

/// Widen a 20-byte address into a 32-byte word, left-padded with zeros.
/// Addresses appearing as struct fields always use this form; the raw
/// 20-byte form is never hashed directly.
pub fn address_to_bytes32(address: Address) -> H256 {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(address.as_bytes());
    H256::from(word)
}

/// Parse a hex address, with or without the 0x prefix.
pub fn parse_address(s: &str) -> ClientResult<Address> {
    let stripped = s.strip_prefix("0x").unwrap_or(s);
    stripped
        .parse::<Address>()
        .map_err(|e| ClientError::Encoding {
            schema: "address",
            field: "hex",
            reason: e.to_string(),
        })
}

/// Final EIP-712 digest: keccak256(0x1901 ‖ domain separator ‖ struct hash).
pub fn final_digest(domain_separator: H256, struct_hash: H256) -> H256 {
    let mut data = Vec::with_capacity(66);
    data.push(0x19);
    data.push(0x01);
    data.extend_from_slice(domain_separator.as_bytes());
    data.extend_from_slice(struct_hash.as_bytes());
    H256::from(keccak256(&data))
}

/// Pack salt and the side/rebate bits into one 256-bit flags word.
///
/// Bit 0 = isBuy, bit 2 = negative limit fee (rebate); the low 252 bits
/// of the salt occupy the rest of the word, shifted past the nibble.
/// The contracts unpack this layout bit-for-bit.
pub fn pack_order_flags(salt: U256, is_buy: bool, negative_fee: bool) -> H256 {
    let mut flags = salt << 4usize;
    if is_buy {
        flags = flags | U256::one();
    }
    if negative_fee {
        flags = flags | U256::from(4u8);
    }
    let mut word = [0u8; 32];
    flags.to_big_endian(&mut word);
    H256::from(word)
}
