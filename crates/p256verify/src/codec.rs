//! Fixed-width big-endian encodings of signatures, public keys and digests.
//!
//! | signature     |  r  |  s  |     | public key |  x  |  y  |
//! | :-----------: | :-: | :-: | --- | :--------: | :-: | :-: |
//! | bytes         | 32  | 32  |     | bytes      | 32  | 32  |
//!
//! Decoding never truncates or wraps: every out-of-range value is an [`Error`].
use crate::{
    constants::{FIELD_BYTES_LENGTH, MESSAGE_HASH_LENGTH, PUBKEY_LENGTH, SIGNATURE_LENGTH},
    field::FieldElement,
    point::{AffinePoint, ProjectivePoint},
    scalar::Scalar,
    Error,
};

/// Splits a 64-byte buffer into its two 32-byte halves.
#[inline]
fn split_halves(bytes: &[u8; 64]) -> ([u8; FIELD_BYTES_LENGTH], [u8; FIELD_BYTES_LENGTH]) {
    let mut hi = [0u8; FIELD_BYTES_LENGTH];
    let mut lo = [0u8; FIELD_BYTES_LENGTH];
    hi.copy_from_slice(&bytes[..FIELD_BYTES_LENGTH]);
    lo.copy_from_slice(&bytes[FIELD_BYTES_LENGTH..]);
    (hi, lo)
}

/// An ECDSA signature `(r, s)` with both components in `[1, n - 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature {
    r: Scalar,
    s: Scalar,
}

impl Signature {
    /// Creates a signature from its components, rejecting zero scalars.
    pub fn from_scalars(r: Scalar, s: Scalar) -> Result<Self, Error> {
        if bool::from(r.is_zero() | s.is_zero()) {
            return Err(Error::ScalarOutOfRange);
        }
        Ok(Self { r, s })
    }

    /// Decodes `r || s`.
    pub fn from_bytes(bytes: &[u8; SIGNATURE_LENGTH]) -> Result<Self, Error> {
        let (r, s) = split_halves(bytes);
        let r = Option::<Scalar>::from(Scalar::from_bytes(&r))
            .ok_or(Error::ScalarOutOfRange)?;
        let s = Option::<Scalar>::from(Scalar::from_bytes(&s))
            .ok_or(Error::ScalarOutOfRange)?;
        Self::from_scalars(r, s)
    }

    /// Decodes `r || s` from a slice that must be exactly 64 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let bytes = <&[u8; SIGNATURE_LENGTH]>::try_from(bytes)
            .map_err(|_| Error::SignatureLength)?;
        Self::from_bytes(bytes)
    }

    /// Encodes as `r || s`.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut out = [0u8; SIGNATURE_LENGTH];
        out[..FIELD_BYTES_LENGTH].copy_from_slice(&self.r.to_bytes());
        out[FIELD_BYTES_LENGTH..].copy_from_slice(&self.s.to_bytes());
        out
    }

    /// Returns `r`.
    pub fn r(&self) -> Scalar {
        self.r
    }

    /// Returns `s`.
    pub fn s(&self) -> Scalar {
        self.s
    }

    /// Returns `true` if `s <= (n - 1) / 2`.
    ///
    /// Verification accepts both `s` and `n - s`; this is for callers that
    /// enforce a low-s rule on top.
    pub fn is_low_s(&self) -> bool {
        !bool::from(self.s.is_high())
    }

    /// Returns the equivalent signature with `s` in the lower half of the order.
    pub fn normalize_s(&self) -> Self {
        if self.is_low_s() {
            *self
        } else {
            Self {
                r: self.r,
                s: -self.s,
            }
        }
    }
}

/// A validated public key: on the curve and not the identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey {
    point: AffinePoint,
}

impl PublicKey {
    /// Wraps an already validated affine point, rejecting the identity.
    pub fn from_affine(point: AffinePoint) -> Result<Self, Error> {
        if bool::from(point.is_identity()) {
            return Err(Error::PointAtInfinity);
        }
        Ok(Self { point })
    }

    /// Decodes the untagged uncompressed encoding `x || y`.
    ///
    /// The all-zero encoding is the conventional identity and is rejected as
    /// such. The prime order subgroup is the whole group (cofactor 1), so an
    /// on-curve check is the full validity check.
    pub fn from_bytes(bytes: &[u8; PUBKEY_LENGTH]) -> Result<Self, Error> {
        if bytes.iter().all(|&b| b == 0) {
            return Err(Error::PointAtInfinity);
        }
        let (x, y) = split_halves(bytes);
        let x = Option::<FieldElement>::from(FieldElement::from_bytes(&x))
            .ok_or(Error::CoordinateOutOfRange)?;
        let y = Option::<FieldElement>::from(FieldElement::from_bytes(&y))
            .ok_or(Error::CoordinateOutOfRange)?;
        let point = Option::<AffinePoint>::from(AffinePoint::from_coordinates(x, y))
            .ok_or(Error::PointNotOnCurve)?;
        Self::from_affine(point)
    }

    /// Decodes `x || y` from a slice that must be exactly 64 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let bytes = <&[u8; PUBKEY_LENGTH]>::try_from(bytes)
            .map_err(|_| Error::PublicKeyLength)?;
        Self::from_bytes(bytes)
    }

    /// Encodes as `x || y`.
    pub fn to_bytes(&self) -> [u8; PUBKEY_LENGTH] {
        let mut out = [0u8; PUBKEY_LENGTH];
        out[..FIELD_BYTES_LENGTH].copy_from_slice(&self.point.x().to_bytes());
        out[FIELD_BYTES_LENGTH..].copy_from_slice(&self.point.y().to_bytes());
        out
    }

    /// Returns the underlying point.
    pub fn as_affine(&self) -> &AffinePoint {
        &self.point
    }

    /// Returns the point in projective coordinates.
    pub fn to_projective(&self) -> ProjectivePoint {
        self.point.to_projective()
    }
}

/// Converts a message digest into the scalar `e` of the verification equation.
///
/// Applies the ECDSA `bits2int` rule for a 256-bit order: only the leftmost
/// 32 bytes are used, then the integer is reduced modulo `n`. Digests shorter
/// than 32 bytes are rejected.
pub fn digest_to_scalar(digest: &[u8]) -> Result<Scalar, Error> {
    let digest = digest
        .first_chunk::<MESSAGE_HASH_LENGTH>()
        .ok_or(Error::DigestLength)?;
    Ok(Scalar::reduce_bytes(digest))
}
