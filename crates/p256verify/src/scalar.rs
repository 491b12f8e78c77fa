//! Scalar arithmetic modulo the group order `n`.
use crate::{
    constants::{CURVE_ORDER, FIELD_BYTES_LENGTH},
    limbs::{self, impl_field_ops, Limbs, Modulus},
};
use subtle::{Choice, CtOption};

const MODULUS: Modulus = Modulus::new(CURVE_ORDER);

/// `(n - 1) / 2`, the largest "low" scalar.
const FRAC_MODULUS_2: Limbs = limbs::shr1(&CURVE_ORDER);

/// An integer modulo the curve order `n`.
///
/// Used for signature components and the multipliers of the verification
/// equation. Held in Montgomery form like [`FieldElement`](crate::field::FieldElement).
#[derive(Clone, Copy)]
pub struct Scalar(Limbs);

impl Scalar {
    /// Zero scalar.
    pub const ZERO: Self = Self([0; 4]);

    /// Multiplicative identity.
    pub const ONE: Self = Self(MODULUS.r);

    /// Creates a scalar from a small integer.
    pub const fn from_u64(w: u64) -> Self {
        Self(MODULUS.montgomery_form(&[w, 0, 0, 0]))
    }

    /// Decodes a big-endian integer, failing if it is not below `n`.
    pub fn from_bytes(bytes: &[u8; FIELD_BYTES_LENGTH]) -> CtOption<Self> {
        let limbs = limbs::from_be_bytes(bytes);
        let in_range = Choice::from(limbs::lt(&limbs, &CURVE_ORDER));
        CtOption::new(Self(MODULUS.montgomery_form(&limbs)), in_range)
    }

    /// Decodes any big-endian 256-bit integer, reducing it modulo `n`.
    pub fn reduce_bytes(bytes: &[u8; FIELD_BYTES_LENGTH]) -> Self {
        // Montgomery conversion reduces any input below 2^256.
        Self(MODULUS.montgomery_form(&limbs::from_be_bytes(bytes)))
    }

    /// Encodes the canonical integer as 32 big-endian bytes.
    pub fn to_bytes(&self) -> [u8; FIELD_BYTES_LENGTH] {
        limbs::to_be_bytes(&self.to_canonical())
    }

    /// Canonical little-endian limbs, used to walk the scalar in windows.
    #[inline]
    pub(crate) const fn to_canonical(self) -> Limbs {
        MODULUS.canonical_form(&self.0)
    }

    /// Returns `self + rhs mod n`.
    #[inline]
    pub const fn add(&self, rhs: &Self) -> Self {
        Self(MODULUS.add(&self.0, &rhs.0))
    }

    /// Returns `self - rhs mod n`.
    #[inline]
    pub const fn sub(&self, rhs: &Self) -> Self {
        Self(MODULUS.sub(&self.0, &rhs.0))
    }

    /// Returns `-self mod n`.
    #[inline]
    pub const fn neg(&self) -> Self {
        Self(MODULUS.sub(&[0; 4], &self.0))
    }

    /// Returns `self · rhs mod n`.
    #[inline]
    pub const fn mul(&self, rhs: &Self) -> Self {
        Self(MODULUS.mul(&self.0, &rhs.0))
    }

    /// Returns the multiplicative inverse, or none if `self` is zero.
    pub fn invert(&self) -> CtOption<Self> {
        CtOption::new(Self(MODULUS.invert(&self.0)), !self.is_zero())
    }

    /// Returns whether this scalar is zero.
    #[inline]
    pub fn is_zero(&self) -> Choice {
        Choice::from(limbs::is_zero(&self.0))
    }

    /// Returns whether this scalar is greater than `(n - 1) / 2`.
    pub fn is_high(&self) -> Choice {
        Choice::from(limbs::lt(&FRAC_MODULUS_2, &self.to_canonical()))
    }
}

impl_field_ops!(Scalar);

#[cfg(test)]
mod tests {
    use super::*;

    const N_HEX: &str = "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551";

    fn bytes(hex: &str) -> [u8; 32] {
        hex::decode(hex).unwrap().try_into().unwrap()
    }

    #[test]
    fn montgomery_constants() {
        assert_eq!(MODULUS.m_inv, 0xccd1_c8aa_ee00_bc4f);
        assert_eq!(
            MODULUS.r2,
            [
                0x8324_4c95_be79_eea2,
                0x4699_799c_49bd_6fa6,
                0x2845_b239_2b6b_ec59,
                0x66e1_2d94_f3d9_5620,
            ]
        );
    }

    #[test]
    fn order_is_out_of_range() {
        assert!(bool::from(Scalar::from_bytes(&bytes(N_HEX)).is_none()));
        assert!(bool::from(Scalar::from_bytes(&[0xff; 32]).is_none()));
        let n_minus_1 = Scalar::from_bytes(&bytes(
            "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632550",
        ))
        .unwrap();
        assert_eq!(n_minus_1, -Scalar::ONE);
    }

    #[test]
    fn reduction_wraps_order() {
        assert_eq!(Scalar::reduce_bytes(&bytes(N_HEX)), Scalar::ZERO);
        let mut n_plus_5 = bytes(N_HEX);
        n_plus_5[31] += 5;
        assert_eq!(Scalar::reduce_bytes(&n_plus_5), Scalar::from_u64(5));
        // 2^256 - 1 mod n
        assert_eq!(
            hex::encode(Scalar::reduce_bytes(&[0xff; 32]).to_bytes()),
            "00000000ffffffff00000000000000004319055258e8617b0c46353d039cdaae"
        );
    }

    #[test]
    fn inversion() {
        let s = Scalar::from_bytes(&bytes(
            "f7cb1c942d657c41d436c7a1b6e29f65f3e900dbb9aff4064dc4ab2f843acda8",
        ))
        .unwrap();
        assert_eq!(s * s.invert().unwrap(), Scalar::ONE);
        assert!(bool::from(Scalar::ZERO.invert().is_none()));
    }

    #[test]
    fn high_and_low_halves() {
        assert!(!bool::from(Scalar::ONE.is_high()));
        assert!(bool::from((-Scalar::ONE).is_high()));
        let half = Scalar::from_bytes(&limbs::to_be_bytes(&FRAC_MODULUS_2)).unwrap();
        assert!(!bool::from(half.is_high()));
        assert!(bool::from((half + Scalar::ONE).is_high()));
    }

    #[test]
    fn ring_identities() {
        let a = Scalar::reduce_bytes(&[0x5a; 32]);
        let b = Scalar::reduce_bytes(&[0xc3; 32]);
        assert_eq!(a + b - b, a);
        assert_eq!(a * b, b * a);
        assert_eq!((a + b) * a, a * a + b * a);
        assert_eq!(a + (-a), Scalar::ZERO);
    }
}
