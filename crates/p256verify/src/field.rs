//! Field arithmetic modulo `p = 2^256 - 2^224 + 2^192 + 2^96 - 1`.
use crate::{
    constants::{FIELD_BYTES_LENGTH, FIELD_MODULUS},
    limbs::{self, impl_field_ops, Limbs, Modulus},
};
use subtle::{Choice, CtOption};

const MODULUS: Modulus = Modulus::new(FIELD_MODULUS);

/// An element of the base field, the domain of point coordinates.
///
/// Held in Montgomery form, which is a unique representative in `[0, p)`:
/// every value that leaves an operation is fully reduced.
#[derive(Clone, Copy)]
pub struct FieldElement(Limbs);

impl FieldElement {
    /// Zero element.
    pub const ZERO: Self = Self([0; 4]);

    /// Multiplicative identity.
    pub const ONE: Self = Self(MODULUS.r);

    /// Creates an element from a small integer.
    pub const fn from_u64(w: u64) -> Self {
        Self(MODULUS.montgomery_form(&[w, 0, 0, 0]))
    }

    /// Creates an element from canonical little-endian limbs.
    ///
    /// Limbs must encode an integer below `p`; used for curve constants.
    pub(crate) const fn from_canonical_limbs(limbs: Limbs) -> Self {
        Self(MODULUS.montgomery_form(&limbs))
    }

    /// Decodes a big-endian integer, failing if it is not below `p`.
    pub fn from_bytes(bytes: &[u8; FIELD_BYTES_LENGTH]) -> CtOption<Self> {
        let limbs = limbs::from_be_bytes(bytes);
        let in_range = Choice::from(limbs::lt(&limbs, &FIELD_MODULUS));
        CtOption::new(Self(MODULUS.montgomery_form(&limbs)), in_range)
    }

    /// Encodes the canonical integer as 32 big-endian bytes.
    pub fn to_bytes(&self) -> [u8; FIELD_BYTES_LENGTH] {
        limbs::to_be_bytes(&MODULUS.canonical_form(&self.0))
    }

    /// Returns `self + rhs mod p`.
    #[inline]
    pub const fn add(&self, rhs: &Self) -> Self {
        Self(MODULUS.add(&self.0, &rhs.0))
    }

    /// Returns `self - rhs mod p`.
    #[inline]
    pub const fn sub(&self, rhs: &Self) -> Self {
        Self(MODULUS.sub(&self.0, &rhs.0))
    }

    /// Returns `-self mod p`.
    #[inline]
    pub const fn neg(&self) -> Self {
        Self(MODULUS.sub(&[0; 4], &self.0))
    }

    /// Returns `2·self mod p`.
    #[inline]
    pub const fn double(&self) -> Self {
        self.add(self)
    }

    /// Returns `self · rhs mod p`.
    #[inline]
    pub const fn mul(&self, rhs: &Self) -> Self {
        Self(MODULUS.mul(&self.0, &rhs.0))
    }

    /// Returns `self^2 mod p`.
    #[inline]
    pub const fn square(&self) -> Self {
        self.mul(self)
    }

    /// Returns the multiplicative inverse, or none if `self` is zero.
    pub fn invert(&self) -> CtOption<Self> {
        CtOption::new(Self(MODULUS.invert(&self.0)), !self.is_zero())
    }

    /// Returns whether this element is zero.
    #[inline]
    pub fn is_zero(&self) -> Choice {
        Choice::from(limbs::is_zero(&self.0))
    }
}

impl_field_ops!(FieldElement);
