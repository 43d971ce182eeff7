//! Configuration: protocol constants, market tables, environment
//! loading, and logging setup.

pub mod constants;
pub mod loader;
pub mod logging;
pub mod types;

pub use loader::ClientConfig;
pub use types::{FeeTier, PerpetualMarket, SoloMarket, TradingPair};
