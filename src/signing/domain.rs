//! EIP-712 signing domains
//!
//! One domain per order schema, and for perpetuals one per market,
//! because each market is settled by its own verifying contract. The
//! inverse-quoted ETH market additionally uses a different contract
//! display name; that distinction is part of the protocol.

use ethers::core::types::{Address, H256, U256};

use crate::config::constants;
use crate::config::types::PerpetualMarket;
use crate::error::ClientResult;

use super::hashing::{address_to_bytes32, hash_packed, hash_string, parse_address, PackedValue};

const EIP712_DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

/// EIP-712 domain descriptor: contract display name, version, chain id,
/// and verifying contract address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDomain {
    name: &'static str,
    version: &'static str,
    chain_id: u64,
    verifying_contract: Address,
}

impl OrderDomain {
    /// Domain of the legacy limit-order contract.
    pub fn limit_orders() -> ClientResult<Self> {
        Ok(Self {
            name: constants::LIMIT_ORDERS_NAME,
            version: constants::LIMIT_ORDERS_VERSION,
            chain_id: constants::NETWORK_ID,
            verifying_contract: parse_address(constants::LIMIT_ORDERS_CONTRACT)?,
        })
    }

    /// Domain of the solo canonical-order contract.
    pub fn canonical_orders() -> ClientResult<Self> {
        Ok(Self {
            name: constants::CANONICAL_ORDERS_NAME,
            version: constants::CANONICAL_ORDERS_VERSION,
            chain_id: constants::NETWORK_ID,
            verifying_contract: parse_address(constants::CANONICAL_ORDERS_CONTRACT)?,
        })
    }

    /// Domain of the perpetual order contract serving `market`.
    pub fn perpetual_orders(market: PerpetualMarket) -> ClientResult<Self> {
        let (name, contract) = match market {
            PerpetualMarket::PbtcUsdc => (
                constants::PERPETUAL_ORDERS_NAME,
                constants::BTC_P1_ORDERS_CONTRACT,
            ),
            PerpetualMarket::PlinkUsdc => (
                constants::PERPETUAL_ORDERS_NAME,
                constants::LINK_P1_ORDERS_CONTRACT,
            ),
            PerpetualMarket::WethPusd => (
                constants::PERPETUAL_INVERSE_ORDERS_NAME,
                constants::ETH_P1_ORDERS_CONTRACT,
            ),
        };
        Ok(Self {
            name,
            version: constants::PERPETUAL_ORDERS_VERSION,
            chain_id: constants::NETWORK_ID,
            verifying_contract: parse_address(contract)?,
        })
    }

    /// Domain separator hash, recomputed on every call.
    pub fn separator(&self) -> H256 {
        hash_packed(&[
            PackedValue::Bytes32(hash_string(EIP712_DOMAIN_TYPE)),
            PackedValue::Bytes32(hash_string(self.name)),
            PackedValue::Bytes32(hash_string(self.version)),
            PackedValue::Uint(U256::from(self.chain_id)),
            PackedValue::Bytes32(address_to_bytes32(self.verifying_contract)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_separator_golden() {
        let separator = OrderDomain::canonical_orders().unwrap().separator();
        assert_eq!(
            format!("{:?}", separator),
            "0x38e15ce87bbd68238316482ba476c305a5071960dff4a02b5dc1caa071d9eac8"
        );
    }

    #[test]
    fn test_separator_is_deterministic() {
        let a = OrderDomain::limit_orders().unwrap().separator();
        let b = OrderDomain::limit_orders().unwrap().separator();
        assert_eq!(a, b);
    }

    #[test]
    fn test_perpetual_domains_differ_per_market() {
        let btc = OrderDomain::perpetual_orders(PerpetualMarket::PbtcUsdc).unwrap();
        let link = OrderDomain::perpetual_orders(PerpetualMarket::PlinkUsdc).unwrap();
        let eth = OrderDomain::perpetual_orders(PerpetualMarket::WethPusd).unwrap();
        assert_ne!(btc.separator(), link.separator());
        assert_ne!(btc.separator(), eth.separator());
        assert_ne!(link.separator(), eth.separator());
    }

    #[test]
    fn test_schema_domains_differ() {
        let limit = OrderDomain::limit_orders().unwrap().separator();
        let canonical = OrderDomain::canonical_orders().unwrap().separator();
        assert_ne!(limit, canonical);
    }
}
