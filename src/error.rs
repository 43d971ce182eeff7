//! Client error types
//!
//! All client errors are wrapped in the ClientError enum which implements
//! thiserror for consistent error handling. Hashing and signing failures
//! are local and non-retryable; only the HTTP variants can be transient.

use thiserror::Error;

/// Errors produced by order encoding, signing, and the REST client
#[derive(Error, Debug)]
pub enum ClientError {
    /// Numeric value does not fit its unsigned fixed-point slot
    #[error("Invalid amount for {field}: {reason}")]
    InvalidAmount {
        field: &'static str,
        reason: String,
    },

    /// Market id is not served by any known verifying contract
    #[error("Invalid market: {0}")]
    InvalidMarket(String),

    /// Trading pair is not listed
    #[error("Invalid trading pair: {0}")]
    InvalidPair(String),

    /// Private key is malformed or out of curve range
    #[error("Invalid private key: {0}")]
    InvalidKey(String),

    /// A value could not be encoded into its ABI slot
    #[error("Encoding error in {schema}.{field}: {reason}")]
    Encoding {
        schema: &'static str,
        field: &'static str,
        reason: String,
    },

    /// Missing or malformed configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// API responded with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// HTTP transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON (de)serialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for client operations
pub type ClientResult<T> = std::result::Result<T, ClientError>;
