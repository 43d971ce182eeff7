//! Protocol constants
//!
//! Fixed EIP-712 domain parameters, well-known addresses, and numeric
//! bases shared by every order schema. These are immutable protocol
//! facts, not tunables.

/// Ethereum mainnet chain id, baked into every domain separator.
pub const NETWORK_ID: u64 = 1;

/// Fixed-point base for prices and fees: values are scaled by 10^18
/// and truncated before hashing.
pub const BASE_DECIMALS: u32 = 18;

// =============================================================================
// EIP-712 domain parameters per order schema
// =============================================================================

pub const LIMIT_ORDERS_NAME: &str = "LimitOrders";
pub const LIMIT_ORDERS_VERSION: &str = "1.1";
pub const LIMIT_ORDERS_CONTRACT: &str = "0xDEf136D9884528e1EB302f39457af0E4d3AD24EB";

pub const CANONICAL_ORDERS_NAME: &str = "CanonicalOrders";
pub const CANONICAL_ORDERS_VERSION: &str = "1.1";
/// Stand-in address: the deployed CanonicalOrders contract is not
/// recorded here. Hashes are self-consistent but will not verify
/// against the production deployment until this is replaced.
pub const CANONICAL_ORDERS_CONTRACT: &str = "0xCD81398B0DcC0cb9C1d006bc296b0c8724058db5";

/// Standard perpetual markets share this contract display name.
pub const PERPETUAL_ORDERS_NAME: &str = "P1Orders";
/// The inverse-quoted ETH market uses a different display name. This is
/// a protocol distinction, not a typo.
pub const PERPETUAL_INVERSE_ORDERS_NAME: &str = "P1InverseOrders";
pub const PERPETUAL_ORDERS_VERSION: &str = "1.0";

// Stand-in addresses, like the canonical contract above: swap in the
// deployed P1Orders addresses to target the production orderbook.
pub const BTC_P1_ORDERS_CONTRACT: &str = "0x3ea6F88eC8F7b24Bb3Ad206fa80124210e8e28F3";
pub const LINK_P1_ORDERS_CONTRACT: &str = "0x747D6e7F3A0AB05Cb1cd97fF9038892BEbCb88A4";
pub const ETH_P1_ORDERS_CONTRACT: &str = "0x6263032a2AA9Bfef52439bBBe1E2772DCda39e1c";

// =============================================================================
// Well-known accounts
// =============================================================================

/// Sentinel taker identity for legacy orders: the orderbook operator
/// account that may take any order.
pub const TAKER_ACCOUNT_OWNER: &str = "0xf809e07870dca762B9536d61A4fBEF1a17178092";
pub const TAKER_ACCOUNT_NUMBER: u64 = 0;

// =============================================================================
// API defaults
// =============================================================================

/// Base URL of the exchange HTTP API.
///
/// Environment variable: `DYDX_API_URL`
pub const DEFAULT_API_URL: &str = "https://api.dydx.exchange";

/// Default order lifetime when the caller does not pass an expiration.
pub const DEFAULT_EXPIRATION_SECS: u64 = 28 * 24 * 3600;
