//! Solo canonical-order schema
//!
//! Replaces the legacy market/amount pairs with a side flag plus price
//! and fee fields. Salt, side, and the fee sign are packed into a
//! single 256-bit flags word; prices and fees are scaled by the
//! protocol base before hashing, with the fee hashed as its absolute
//! value and the sign carried in the flags.

use ethers::core::types::{Address, H256, U256};
use rust_decimal::Decimal;

use crate::config::constants::BASE_DECIMALS;
use crate::config::types::TradingPair;
use crate::error::ClientResult;
use crate::signing::codec::scale;
use crate::signing::domain::OrderDomain;
use crate::signing::hashing::{
    address_to_bytes32, final_digest, hash_packed, hash_string, pack_order_flags, PackedValue,
};
use crate::signing::signer::{PrivateKey, TypedSignature};

const CANONICAL_ORDER_TYPE: &str = "CanonicalOrder(\
    bytes32 flags,\
    uint256 baseMarket,\
    uint256 quoteMarket,\
    uint256 amount,\
    uint256 limitPrice,\
    uint256 triggerPrice,\
    uint256 limitFee,\
    address makerAccountOwner,\
    uint256 makerAccountNumber,\
    uint256 expiration\
)";

/// Solo margin canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalOrder {
    pub is_buy: bool,
    pub base_market: u64,
    pub quote_market: u64,
    /// Trade size in the base market's native units.
    pub amount: U256,
    pub limit_price: Decimal,
    pub trigger_price: Decimal,
    /// Negative fee is a rebate; only the magnitude is hashed.
    pub limit_fee: Decimal,
    pub maker_account_owner: Address,
    pub maker_account_number: U256,
    pub expiration: u64,
    pub salt: U256,
}

impl CanonicalOrder {
    /// Build an order for a solo pair, resolving the default fee when
    /// the caller does not override it. Fails for pairs without a solo
    /// market mapping.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pair: TradingPair,
        is_buy: bool,
        amount: U256,
        limit_price: Decimal,
        trigger_price: Decimal,
        limit_fee: Option<Decimal>,
        post_only: bool,
        maker_account_owner: Address,
        maker_account_number: U256,
        expiration: u64,
        salt: U256,
    ) -> ClientResult<Self> {
        let (base_market, quote_market) = pair.solo_markets()?;
        let limit_fee =
            limit_fee.unwrap_or_else(|| super::fees::default_fee(pair, amount, post_only));
        Ok(Self {
            is_buy,
            base_market: base_market.id(),
            quote_market: quote_market.id(),
            amount,
            limit_price,
            trigger_price,
            limit_fee,
            maker_account_owner,
            maker_account_number,
            expiration,
            salt,
        })
    }

    /// EIP-712 struct hash. Fails if a price or fee cannot be scaled
    /// into its unsigned slot.
    pub fn struct_hash(&self) -> ClientResult<H256> {
        let flags = pack_order_flags(self.salt, self.is_buy, self.limit_fee < Decimal::ZERO);
        Ok(hash_packed(&[
            PackedValue::Bytes32(hash_string(CANONICAL_ORDER_TYPE)),
            PackedValue::Bytes32(flags),
            PackedValue::Uint(U256::from(self.base_market)),
            PackedValue::Uint(U256::from(self.quote_market)),
            PackedValue::Uint(self.amount),
            PackedValue::Uint(scale("limitPrice", self.limit_price, BASE_DECIMALS)?),
            PackedValue::Uint(scale("triggerPrice", self.trigger_price, BASE_DECIMALS)?),
            PackedValue::Uint(scale("limitFee", self.limit_fee.abs(), BASE_DECIMALS)?),
            PackedValue::Bytes32(address_to_bytes32(self.maker_account_owner)),
            PackedValue::Uint(self.maker_account_number),
            PackedValue::Uint(U256::from(self.expiration)),
        ]))
    }

    /// Final signable order hash.
    pub fn hash(&self) -> ClientResult<H256> {
        let domain = OrderDomain::canonical_orders()?;
        Ok(final_digest(domain.separator(), self.struct_hash()?))
    }

    pub fn sign(&self, key: &PrivateKey) -> ClientResult<TypedSignature> {
        key.sign_typed(self.hash()?)
    }
}
