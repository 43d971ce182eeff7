//! Perpetual order schema
//!
//! No market-id fields: the market is implied by which verifying
//! contract signs the domain, so the order carries its market tag and
//! the domain builder branches on it. Maker and taker are raw address
//! fields rather than owner/account pairs.

use ethers::core::types::{Address, H256, U256};
use rust_decimal::Decimal;

use crate::config::constants::BASE_DECIMALS;
use crate::config::types::PerpetualMarket;
use crate::error::ClientResult;
use crate::signing::codec::scale;
use crate::signing::domain::OrderDomain;
use crate::signing::hashing::{
    address_to_bytes32, final_digest, hash_packed, hash_string, pack_order_flags, PackedValue,
};
use crate::signing::signer::{PrivateKey, TypedSignature};

const PERPETUAL_ORDER_TYPE: &str = "Order(\
    bytes32 flags,\
    uint256 amount,\
    uint256 limitPrice,\
    uint256 triggerPrice,\
    uint256 limitFee,\
    address maker,\
    address taker,\
    uint256 expiration\
)";

/// Perpetual market order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerpetualOrder {
    /// Selects the verifying contract and domain.
    pub market: PerpetualMarket,
    pub is_buy: bool,
    /// Trade size in the market's native units.
    pub amount: U256,
    pub limit_price: Decimal,
    pub trigger_price: Decimal,
    /// Negative fee is a rebate; only the magnitude is hashed.
    pub limit_fee: Decimal,
    pub maker: Address,
    pub taker: Address,
    pub expiration: u64,
    pub salt: U256,
}

impl PerpetualOrder {
    /// Build an order, resolving the default fee when the caller does
    /// not override it. Post-only orders get the pair's post-only rate,
    /// including the PBTC-USDC maker rebate above its threshold.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        market: PerpetualMarket,
        is_buy: bool,
        amount: U256,
        limit_price: Decimal,
        trigger_price: Decimal,
        limit_fee: Option<Decimal>,
        post_only: bool,
        maker: Address,
        taker: Address,
        expiration: u64,
        salt: U256,
    ) -> Self {
        let limit_fee = limit_fee
            .unwrap_or_else(|| super::fees::default_fee(market.pair(), amount, post_only));
        Self {
            market,
            is_buy,
            amount,
            limit_price,
            trigger_price,
            limit_fee,
            maker,
            taker,
            expiration,
            salt,
        }
    }

    /// EIP-712 struct hash. The market does not appear in the struct;
    /// it only selects the domain.
    pub fn struct_hash(&self) -> ClientResult<H256> {
        let flags = pack_order_flags(self.salt, self.is_buy, self.limit_fee < Decimal::ZERO);
        Ok(hash_packed(&[
            PackedValue::Bytes32(hash_string(PERPETUAL_ORDER_TYPE)),
            PackedValue::Bytes32(flags),
            PackedValue::Uint(self.amount),
            PackedValue::Uint(scale("limitPrice", self.limit_price, BASE_DECIMALS)?),
            PackedValue::Uint(scale("triggerPrice", self.trigger_price, BASE_DECIMALS)?),
            PackedValue::Uint(scale("limitFee", self.limit_fee.abs(), BASE_DECIMALS)?),
            PackedValue::Bytes32(address_to_bytes32(self.maker)),
            PackedValue::Bytes32(address_to_bytes32(self.taker)),
            PackedValue::Uint(U256::from(self.expiration)),
        ]))
    }

    /// Final signable order hash under the market's domain.
    pub fn hash(&self) -> ClientResult<H256> {
        let domain = OrderDomain::perpetual_orders(self.market)?;
        Ok(final_digest(domain.separator(), self.struct_hash()?))
    }

    pub fn sign(&self, key: &PrivateKey) -> ClientResult<TypedSignature> {
        key.sign_typed(self.hash()?)
    }
}
