//! ECDSA verification over P-256.
//!
//! Given a digest `e`, a signature `(r, s)` and a public key `Q`, the
//! signature is valid iff the x-coordinate of `e·s⁻¹·G + r·s⁻¹·Q`, reduced
//! modulo `n`, equals `r`.
use crate::{
    codec::{digest_to_scalar, PublicKey, Signature},
    point::ProjectivePoint,
    scalar::Scalar,
    Error,
};

/// Verifies `signature` over a prehashed `digest` against `public_key`.
///
/// Both `s` and `n - s` are accepted. The digest is truncated to its leftmost
/// 32 bytes; shorter digests are rejected.
pub fn verify_prehash(
    public_key: &PublicKey,
    digest: &[u8],
    signature: &Signature,
) -> Result<(), Error> {
    let e = digest_to_scalar(digest)?;
    let r = signature.r();

    // `Signature` guarantees s != 0.
    let w = Option::<Scalar>::from(signature.s().invert())
        .ok_or(Error::ScalarOutOfRange)?;
    let u1 = e * w;
    let u2 = r * w;

    let big_r = ProjectivePoint::double_scalar_mul(
        &u1,
        &ProjectivePoint::GENERATOR,
        &u2,
        &public_key.to_projective(),
    )
    .to_affine();

    if bool::from(big_r.is_identity()) {
        return Err(Error::ResultAtInfinity);
    }

    // x < p < 2n, so this is at most one subtraction of n.
    let v = Scalar::reduce_bytes(&big_r.x().to_bytes());
    if v == r {
        Ok(())
    } else {
        Err(Error::SignatureMismatch)
    }
}

/// Verifies raw encodings: `digest`, `r || s` and `x || y`.
///
/// The public key is decoded first, so a bad key is reported even when the
/// signature is malformed as well.
pub fn verify_bytes(digest: &[u8], signature: &[u8], public_key: &[u8]) -> Result<(), Error> {
    let result = PublicKey::from_slice(public_key).and_then(|public_key| {
        let signature = Signature::from_slice(signature)?;
        verify_prehash(&public_key, digest, &signature)
    });
    if let Err(err) = &result {
        tracing::trace!(
            target: "p256verify",
            error = %err,
            code = err.result().code(),
            "signature rejected"
        );
    }
    result
}
