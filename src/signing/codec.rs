//! Fixed-point decimal codec
//!
//! Converts human-denominated decimals into the unsigned fixed-point
//! integers the contracts hash, and renders canonical decimal strings
//! for wire payloads. Truncation below the target precision is the
//! defined behavior, matching the on-chain fixed-point conventions.

use ethers::core::types::U256;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::config::types::SoloMarket;
use crate::error::{ClientError, ClientResult};

/// Scale a decimal by `10^decimal_places` and truncate to an unsigned
/// integer. Negative values cannot enter an unsigned slot and fail with
/// `InvalidAmount`; sub-precision digits are truncated, not rejected.
pub fn scale(field: &'static str, value: Decimal, decimal_places: u32) -> ClientResult<U256> {
    if value < Decimal::ZERO {
        return Err(ClientError::InvalidAmount {
            field,
            reason: "negative value in unsigned slot".to_string(),
        });
    }
    let factor = 10u128
        .checked_pow(decimal_places)
        .and_then(Decimal::from_u128)
        .ok_or_else(|| ClientError::InvalidAmount {
            field,
            reason: format!("unsupported precision: {}", decimal_places),
        })?;
    let scaled = value
        .checked_mul(factor)
        .ok_or_else(|| ClientError::InvalidAmount {
            field,
            reason: "scaled value exceeds representable range".to_string(),
        })?;
    let integral = scaled
        .trunc()
        .to_u128()
        .ok_or_else(|| ClientError::InvalidAmount {
            field,
            reason: "scaled value exceeds representable range".to_string(),
        })?;
    Ok(U256::from(integral))
}

/// Render a canonical decimal string for JSON payloads: trailing zeros
/// stripped, never exponential notation.
pub fn format_decimal(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Convert a human token amount into the asset's native units.
pub fn token_to_wei(amount: Decimal, market: SoloMarket) -> ClientResult<U256> {
    scale("amount", amount, market.decimals())
}
