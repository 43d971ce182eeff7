//! Client configuration from environment variables
//!
//! Reads the signing key, account number, and API base URL from the
//! environment (with `.env` support via dotenvy). The private key is
//! kept as the raw hex string here; it is parsed into a key type once
//! at client construction.

use crate::error::{ClientError, ClientResult};

use super::constants::DEFAULT_API_URL;

/// Runtime configuration for [`crate::api::client::DydxClient`].
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the exchange API.
    pub api_url: String,
    /// Hex-encoded secp256k1 private key, with or without 0x prefix.
    pub private_key: String,
    /// Sub-account number orders are placed from.
    pub account_number: u64,
}

impl ClientConfig {
    pub fn new(
        api_url: impl Into<String>,
        private_key: impl Into<String>,
        account_number: u64,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            private_key: private_key.into(),
            account_number,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// - `DYDX_PRIVATE_KEY`: required
    /// - `DYDX_API_URL`: optional, defaults to the production API
    /// - `DYDX_ACCOUNT_NUMBER`: optional, defaults to 0
    pub fn from_env() -> ClientResult<Self> {
        dotenvy::dotenv().ok();

        let private_key = std::env::var("DYDX_PRIVATE_KEY")
            .map_err(|_| ClientError::Config("DYDX_PRIVATE_KEY is not set".to_string()))?;
        let api_url =
            std::env::var("DYDX_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let account_number = std::env::var("DYDX_ACCOUNT_NUMBER")
            .ok()
            .map(|s| {
                s.parse::<u64>().map_err(|_| {
                    ClientError::Config(format!("DYDX_ACCOUNT_NUMBER is not a number: {}", s))
                })
            })
            .transpose()?
            .unwrap_or(0);

        Ok(Self {
            api_url,
            private_key,
            account_number,
        })
    }
}

// Keep the key out of debug output.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("private_key", &"<redacted>")
            .field("account_number", &self.account_number)
            .finish()
    }
}
