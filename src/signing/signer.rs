//! Signing service
//!
//! Produces the wire signature format: a 65-byte ECDSA signature over
//! the personally-prefixed order hash, followed by one type byte. The
//! verifying contracts run `ecrecover` over the EIP-191 prefixed hash,
//! so the raw 32 digest bytes are prefixed as a personal message before
//! signing; this is a protocol requirement, not a shortcut.

use std::fmt;

use ethers::core::types::{Address, RecoveryMessage, Signature, H256};
use ethers::core::utils::hash_message;
use ethers::signers::{LocalWallet, Signer};

use crate::error::{ClientError, ClientResult};

/// Trailing type byte appended to the 65-byte ECDSA signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SignatureType {
    /// Signature over the raw digest, no message prefix.
    NoPrepend = 0,
    /// Signature over the EIP-191 personally-prefixed digest.
    Typed = 1,
}

/// Packed wire signature: r ‖ s ‖ v ‖ type byte (66 bytes).
#[derive(Clone, PartialEq, Eq)]
pub struct TypedSignature([u8; 66]);

impl TypedSignature {
    pub fn as_bytes(&self) -> &[u8; 66] {
        &self.0
    }

    /// 0x-prefixed lowercase hex, the form embedded in JSON bodies and
    /// bearer headers.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    pub fn from_hex(s: &str) -> ClientResult<Self> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped).map_err(|e| ClientError::Encoding {
            schema: "signature",
            field: "hex",
            reason: e.to_string(),
        })?;
        let packed: [u8; 66] = bytes.try_into().map_err(|v: Vec<u8>| ClientError::Encoding {
            schema: "signature",
            field: "bytes",
            reason: format!("expected 66 bytes, got {}", v.len()),
        })?;
        Ok(Self(packed))
    }
}

impl fmt::Display for TypedSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for TypedSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A normalized signing key, parsed once at the boundary.
///
/// Holds the wallet for the duration of the client's life; the raw key
/// bytes are never exposed, logged, or serialized.
pub struct PrivateKey {
    wallet: LocalWallet,
}

impl PrivateKey {
    /// Parse a hex private key, with or without the 0x prefix.
    pub fn from_hex(s: &str) -> ClientResult<Self> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped).map_err(|e| ClientError::InvalidKey(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(ClientError::InvalidKey(format!(
                "expected 32 bytes, got {}",
                bytes.len()
            )));
        }
        let wallet =
            LocalWallet::from_bytes(&bytes).map_err(|e| ClientError::InvalidKey(e.to_string()))?;
        Ok(Self { wallet })
    }

    /// Address derived from the key.
    pub fn address(&self) -> Address {
        self.wallet.address()
    }

    /// Sign a 32-byte digest as a typed signature: EIP-191 prefix over
    /// the raw digest bytes, then r ‖ s ‖ v ‖ 0x01.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn sign_typed(&self, digest: H256) -> ClientResult<TypedSignature> {
        let message_hash = hash_message(digest.as_bytes());
        let signature = self
            .wallet
            .sign_hash(message_hash)
            .map_err(|e| ClientError::InvalidKey(e.to_string()))?;

        let sig_bytes = signature.to_vec();
        if sig_bytes.len() != 65 {
            return Err(ClientError::Encoding {
                schema: "signature",
                field: "bytes",
                reason: format!("expected 65 bytes, got {}", sig_bytes.len()),
            });
        }

        let mut packed = [0u8; 66];
        packed[..65].copy_from_slice(&sig_bytes);
        // Normalize v: the signer may return 0/1, the wire wants 27/28.
        let v = packed[64];
        if v == 0 || v == 1 {
            packed[64] = v + 27;
        } else if !matches!(v, 27 | 28) {
            return Err(ClientError::Encoding {
                schema: "signature",
                field: "v",
                reason: format!("unexpected recovery id: {}", v),
            });
        }
        packed[65] = SignatureType::Typed as u8;
        Ok(TypedSignature(packed))
    }
}

// Keep key material out of debug output.
impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("address", &self.wallet.address())
            .finish()
    }
}

/// Recover the signing address from a typed signature over `digest`.
/// The inverse of [`PrivateKey::sign_typed`], used by tests.
pub fn recover_address(digest: H256, signature: &TypedSignature) -> ClientResult<Address> {
    let bytes = signature.as_bytes();
    if bytes[65] != SignatureType::Typed as u8 {
        return Err(ClientError::Encoding {
            schema: "signature",
            field: "type",
            reason: format!("unexpected signature type byte: {}", bytes[65]),
        });
    }
    let inner = Signature::try_from(&bytes[..65]).map_err(|e| ClientError::Encoding {
        schema: "signature",
        field: "bytes",
        reason: e.to_string(),
    })?;
    inner
        .recover(RecoveryMessage::Data(digest.as_bytes().to_vec()))
        .map_err(|e| ClientError::Encoding {
            schema: "signature",
            field: "recovery",
            reason: e.to_string(),
        })
}
