//! # p256verify-ffi
//!
//! C ABI over [`p256verify`]. Every export checks its pointers, never
//! panics on any input and never allocates.
//!
//! ```c
//! typedef enum { P256_SUCCESS = 1, P256_INVALID_SIGNATURE = 2, P256_INVALID_KEYS = 3 } p256_ret_t;
//!
//! p256_ret_t p256_verify(const uint8_t *msg, size_t msg_len, const uint8_t *sig, const uint8_t *pk);
//! bool VerifyBytes(const uint8_t *input, size_t input_len);
//! ```
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

use core::slice;
use p256verify::{
    constants::{PUBKEY_LENGTH, SIGNATURE_LENGTH},
    verify_bytes, verify_packed, VerifyResult,
};

/// Result code returned across the C ABI.
#[allow(non_camel_case_types)]
pub type p256_ret_t = VerifyResult;

/// The signature is valid.
pub const P256_SUCCESS: u32 = VerifyResult::Success.code();
/// The signature is malformed or does not match.
pub const P256_INVALID_SIGNATURE: u32 = VerifyResult::InvalidSignature.code();
/// The public key is not a valid curve point.
pub const P256_INVALID_KEYS: u32 = VerifyResult::InvalidKeys.code();

/// Verifies a P-256 ECDSA signature.
///
/// `msg` is the message digest of `msg_len` bytes, `sig` points at 64 bytes
/// `r || s` and `pk` at 64 bytes `x || y`, all big-endian.
///
/// # Safety
///
/// Non-null pointers must be valid for reads of `msg_len`, 64 and 64 bytes
/// respectively for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn p256_verify(
    msg: *const u8,
    msg_len: usize,
    sig: *const u8,
    pk: *const u8,
) -> p256_ret_t {
    if pk.is_null() {
        tracing::debug!(target: "p256verify::ffi", "null public key pointer");
        return VerifyResult::InvalidKeys;
    }
    if msg.is_null() || sig.is_null() {
        tracing::debug!(target: "p256verify::ffi", "null message or signature pointer");
        return VerifyResult::InvalidSignature;
    }

    // SAFETY: pointers are non-null and the caller guarantees the lengths.
    let (msg, sig, pk) = unsafe {
        (
            slice::from_raw_parts(msg, msg_len),
            slice::from_raw_parts(sig, SIGNATURE_LENGTH),
            slice::from_raw_parts(pk, PUBKEY_LENGTH),
        )
    };

    let result = verify_bytes(msg, sig, pk).into();
    tracing::debug!(target: "p256verify::ffi", %result, "p256_verify");
    result
}

/// Verifies a packed 160-byte `digest || r || s || x || y` input.
///
/// Returns `false` for a null pointer or any length other than 160.
///
/// # Safety
///
/// A non-null `input_ptr` must be valid for reads of `input_len` bytes for
/// the duration of the call.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn VerifyBytes(input_ptr: *const u8, input_len: usize) -> bool {
    if input_ptr.is_null() {
        tracing::debug!(target: "p256verify::ffi", "null input pointer");
        return false;
    }

    // SAFETY: pointer is non-null and the caller guarantees the length.
    let input = unsafe { slice::from_raw_parts(input_ptr, input_len) };
    let result = verify_packed(input);
    tracing::debug!(target: "p256verify::ffi", %result, input_len, "VerifyBytes");
    result.is_success()
}
