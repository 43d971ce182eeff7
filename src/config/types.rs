//! Market and pair model types
//!
//! Static lookup tables mapping markets to decimals, pairs to fee tiers,
//! and perpetual markets to their verifying contracts live here so the
//! encoders consume immutable data instead of process-wide globals.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::ClientError;

// =============================================================================
// Solo margin markets
// =============================================================================

/// Solo margin market ids. The id identifies an asset, not a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoloMarket {
    Weth = 0,
    Sai = 1,
    Usdc = 2,
    Dai = 3,
}

impl SoloMarket {
    /// Numeric market id used in order fields.
    pub fn id(self) -> u64 {
        self as u64
    }

    /// Native decimal precision of the asset.
    pub fn decimals(self) -> u32 {
        match self {
            SoloMarket::Weth | SoloMarket::Sai | SoloMarket::Dai => 18,
            SoloMarket::Usdc => 6,
        }
    }

    /// Resolve a numeric market id.
    pub fn from_id(id: u64) -> Result<Self, ClientError> {
        match id {
            0 => Ok(SoloMarket::Weth),
            1 => Ok(SoloMarket::Sai),
            2 => Ok(SoloMarket::Usdc),
            3 => Ok(SoloMarket::Dai),
            other => Err(ClientError::InvalidMarket(other.to_string())),
        }
    }
}

// =============================================================================
// Trading pairs
// =============================================================================

/// Listed trading pairs across the margin and perpetual venues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradingPair {
    WethDai,
    WethUsdc,
    DaiUsdc,
    PbtcUsdc,
    WethPusd,
    PlinkUsdc,
}

impl TradingPair {
    pub fn as_str(self) -> &'static str {
        match self {
            TradingPair::WethDai => "WETH-DAI",
            TradingPair::WethUsdc => "WETH-USDC",
            TradingPair::DaiUsdc => "DAI-USDC",
            TradingPair::PbtcUsdc => "PBTC-USDC",
            TradingPair::WethPusd => "WETH-PUSD",
            TradingPair::PlinkUsdc => "PLINK-USDC",
        }
    }

    /// Solo base and quote markets behind the pair. Perpetual pairs
    /// have no solo market mapping.
    pub fn solo_markets(self) -> Result<(SoloMarket, SoloMarket), ClientError> {
        match self {
            TradingPair::WethDai => Ok((SoloMarket::Weth, SoloMarket::Dai)),
            TradingPair::WethUsdc => Ok((SoloMarket::Weth, SoloMarket::Usdc)),
            TradingPair::DaiUsdc => Ok((SoloMarket::Dai, SoloMarket::Usdc)),
            other => Err(ClientError::InvalidPair(other.as_str().to_string())),
        }
    }

    /// Default fee schedule entry for the pair.
    ///
    /// Thresholds are in the pair's native base units (wei for WETH
    /// pairs, satoshis for PBTC-USDC).
    pub fn fee_tier(self) -> FeeTier {
        match self {
            TradingPair::WethDai | TradingPair::WethUsdc => FeeTier {
                threshold: 500_000_000_000_000_000, // 0.5 ETH
                small_fee: Decimal::new(5, 3),
                standard_fee: Decimal::new(15, 4),
                maker_fee: Decimal::ZERO,
            },
            TradingPair::DaiUsdc => FeeTier {
                threshold: 10_000_000_000_000_000_000_000, // 10,000 DAI
                small_fee: Decimal::new(5, 3),
                standard_fee: Decimal::new(5, 4),
                maker_fee: Decimal::ZERO,
            },
            TradingPair::PbtcUsdc => FeeTier {
                threshold: 10_000_000, // 0.1 BTC
                small_fee: Decimal::new(5, 3),
                standard_fee: Decimal::new(75, 5),
                maker_fee: Decimal::new(-25, 5),
            },
            TradingPair::WethPusd => FeeTier {
                threshold: 1_000_000_000_000_000_000, // 1 ETH
                small_fee: Decimal::new(5, 3),
                standard_fee: Decimal::new(75, 5),
                maker_fee: Decimal::ZERO,
            },
            TradingPair::PlinkUsdc => FeeTier {
                threshold: 500_000_000_000_000_000_000, // 500 LINK
                small_fee: Decimal::new(5, 3),
                standard_fee: Decimal::new(75, 5),
                maker_fee: Decimal::ZERO,
            },
        }
    }
}

impl FromStr for TradingPair {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WETH-DAI" => Ok(TradingPair::WethDai),
            "WETH-USDC" => Ok(TradingPair::WethUsdc),
            "DAI-USDC" => Ok(TradingPair::DaiUsdc),
            "PBTC-USDC" => Ok(TradingPair::PbtcUsdc),
            "WETH-PUSD" => Ok(TradingPair::WethPusd),
            "PLINK-USDC" => Ok(TradingPair::PlinkUsdc),
            other => Err(ClientError::InvalidPair(other.to_string())),
        }
    }
}

impl fmt::Display for TradingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Perpetual markets
// =============================================================================

/// Markets served by the perpetual contracts. Each market has its own
/// verifying contract, so the market selects the signing domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerpetualMarket {
    PbtcUsdc,
    PlinkUsdc,
    WethPusd,
}

impl PerpetualMarket {
    pub fn pair(self) -> TradingPair {
        match self {
            PerpetualMarket::PbtcUsdc => TradingPair::PbtcUsdc,
            PerpetualMarket::PlinkUsdc => TradingPair::PlinkUsdc,
            PerpetualMarket::WethPusd => TradingPair::WethPusd,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.pair().as_str()
    }
}

impl FromStr for PerpetualMarket {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PBTC-USDC" => Ok(PerpetualMarket::PbtcUsdc),
            "PLINK-USDC" => Ok(PerpetualMarket::PlinkUsdc),
            "WETH-PUSD" => Ok(PerpetualMarket::WethPusd),
            other => Err(ClientError::InvalidMarket(other.to_string())),
        }
    }
}

impl fmt::Display for PerpetualMarket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Fee tiers
// =============================================================================

/// One row of the default fee schedule: a size threshold in native
/// units, the fee below it, the fee at or above it, and the maker fee
/// charged post-only where the pair has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeTier {
    pub threshold: u128,
    pub small_fee: Decimal,
    pub standard_fee: Decimal,
    pub maker_fee: Decimal,
}
