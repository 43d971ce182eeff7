//! EIP-712 hashing and signing
//!
//! The byte-exact pipeline from order fields to wire signature: tight
//! packing, domain separators, fixed-point scaling, and the personal
//! message signing scheme the settlement contracts verify.

pub mod codec;
pub mod domain;
pub mod hashing;
pub mod signer;

pub use domain::OrderDomain;
pub use signer::{recover_address, PrivateKey, SignatureType, TypedSignature};
