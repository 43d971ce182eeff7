//! Default fee schedule
//!
//! Pure lookup over the per-pair fee table: small trades pay the
//! small-trade rate, larger ones the standard rate. Post-only orders
//! pay nothing, with one deliberate exception: PBTC-USDC still charges
//! its maker rate (a rebate) at or above the size threshold.

use ethers::core::types::U256;
use rust_decimal::Decimal;

use crate::config::types::TradingPair;

/// Default protocol fee for `pair` given the trade size in native
/// units. Never fails: every listed pair has a table entry.
pub fn default_fee(pair: TradingPair, amount: U256, post_only: bool) -> Decimal {
    let tier = pair.fee_tier();
    let threshold = U256::from(tier.threshold);
    if post_only {
        if pair == TradingPair::PbtcUsdc && amount >= threshold {
            return tier.maker_fee;
        }
        return Decimal::ZERO;
    }
    if amount < threshold {
        tier.small_fee
    } else {
        tier.standard_fee
    }
}
