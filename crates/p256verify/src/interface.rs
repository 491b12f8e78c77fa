//! Outcome types of a verification: the tri-state [`VerifyResult`] handed to
//! callers and the detailed [`Error`] it is derived from.
use core::fmt;

/// Result of a P-256 signature verification.
///
/// Numeric values are part of the C ABI and never change. Both rejection
/// variants mean "signature not valid"; the split exists for diagnostics only
/// and must not change consensus-visible behaviour.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerifyResult {
    /// The signature is valid for the given key and digest.
    Success = 1,
    /// The signature is malformed or does not match.
    InvalidSignature = 2,
    /// The public key is not a valid curve point.
    InvalidKeys = 3,
}

impl VerifyResult {
    /// Returns `true` if the signature was accepted.
    #[inline]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns the stable numeric code of this result.
    #[inline]
    pub const fn code(self) -> u32 {
        self as u32
    }
}

impl From<Result<(), Error>> for VerifyResult {
    #[inline]
    fn from(result: Result<(), Error>) -> Self {
        match result {
            Ok(()) => Self::Success,
            Err(err) => err.result(),
        }
    }
}

impl fmt::Display for VerifyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Success => "success",
            Self::InvalidSignature => "invalid signature",
            Self::InvalidKeys => "invalid public key",
        })
    }
}

/// Reason a verification was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// Signature is not exactly 64 bytes.
    SignatureLength,
    /// Public key is not exactly 64 bytes.
    PublicKeyLength,
    /// Digest is shorter than 32 bytes.
    DigestLength,
    /// `r` or `s` is zero or not below the curve order.
    ScalarOutOfRange,
    /// A public key coordinate is not below the field modulus.
    CoordinateOutOfRange,
    /// Public key coordinates do not satisfy the curve equation.
    PointNotOnCurve,
    /// Public key is the point at infinity.
    PointAtInfinity,
    /// `u1·G + u2·Q` is the point at infinity.
    ResultAtInfinity,
    /// `R.x mod n` differs from `r`.
    SignatureMismatch,
}

impl Error {
    /// Maps the error onto the rejection code reported at the boundary.
    #[inline]
    pub const fn result(self) -> VerifyResult {
        match self {
            Self::CoordinateOutOfRange | Self::PointNotOnCurve | Self::PointAtInfinity => {
                VerifyResult::InvalidKeys
            }
            Self::SignatureLength
            | Self::PublicKeyLength
            | Self::DigestLength
            | Self::ScalarOutOfRange
            | Self::ResultAtInfinity
            | Self::SignatureMismatch => VerifyResult::InvalidSignature,
        }
    }

    /// Returns `true` if the error is about the public key.
    #[inline]
    pub const fn is_key_error(self) -> bool {
        matches!(self.result(), VerifyResult::InvalidKeys)
    }
}

impl core::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::SignatureLength => "signature must be 64 bytes",
            Self::PublicKeyLength => "public key must be 64 bytes",
            Self::DigestLength => "digest must be at least 32 bytes",
            Self::ScalarOutOfRange => "signature scalar out of range",
            Self::CoordinateOutOfRange => "public key coordinate out of range",
            Self::PointNotOnCurve => "public key is not on the curve",
            Self::PointAtInfinity => "public key is the point at infinity",
            Self::ResultAtInfinity => "verification point is at infinity",
            Self::SignatureMismatch => "signature does not match",
        };
        f.write_str(s)
    }
}
