//! # p256verify
//!
//! ECDSA signature verification over NIST P-256 (secp256r1), with no heap
//! allocation and no dependency on a general-purpose elliptic curve library.
//!
//! ```
//! use p256verify::{verify, VerifyResult};
//!
//! let digest = [0u8; 32];
//! let signature = [0u8; 64];
//! let public_key = [0u8; 64];
//! assert_eq!(verify(&digest, &signature, &public_key), VerifyResult::InvalidKeys);
//! ```
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

pub mod codec;
pub mod constants;
pub mod field;
pub mod interface;
mod limbs;
pub mod packed;
pub mod point;
pub mod scalar;
pub mod verifier;

pub use codec::{PublicKey, Signature};
pub use field::FieldElement;
pub use interface::*;
pub use packed::{encode_output, verify_packed};
pub use point::{AffinePoint, ProjectivePoint};
pub use scalar::Scalar;
pub use verifier::{verify_bytes, verify_prehash};

/// Verifies a P-256 ECDSA signature.
///
/// `digest` is the message hash (at least 32 bytes, leftmost 32 used),
/// `signature` is `r || s` and `public_key` is `x || y`, all big-endian.
#[inline]
pub fn verify(digest: &[u8], signature: &[u8], public_key: &[u8]) -> VerifyResult {
    verify_bytes(digest, signature, public_key).into()
}
