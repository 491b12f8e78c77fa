//! 256-bit limb arithmetic shared by the base field and the scalar field.
//!
//! Values are four little-endian 64-bit limbs. Modular operations work on
//! Montgomery representatives (`a·R mod m`, `R = 2^256`) and never branch on
//! limb values; the only loops are over fixed limb counts or over the bits of
//! a public exponent.

/// Four little-endian 64-bit limbs.
pub(crate) type Limbs = [u64; 4];

/// Computes `a + b + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Computes `a - (b + borrow)`, returning the result along with the new borrow.
///
/// The borrow is either `0` or `u64::MAX`.
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Computes `a + (b * c) + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Computes `a - b` over the integers, returning the wrapped difference and a
/// borrow mask that is `u64::MAX` when `a < b` and `0` otherwise.
#[inline]
pub(crate) const fn sub_with_borrow(a: &Limbs, b: &Limbs) -> (Limbs, u64) {
    let (w0, borrow) = sbb(a[0], b[0], 0);
    let (w1, borrow) = sbb(a[1], b[1], borrow);
    let (w2, borrow) = sbb(a[2], b[2], borrow);
    let (w3, borrow) = sbb(a[3], b[3], borrow);
    ([w0, w1, w2, w3], borrow)
}

/// Returns `1` if `a < b` and `0` otherwise.
#[inline]
pub(crate) const fn lt(a: &Limbs, b: &Limbs) -> u8 {
    let (_, borrow) = sub_with_borrow(a, b);
    (borrow & 1) as u8
}

/// Returns `1` if every limb is zero and `0` otherwise.
#[inline]
pub(crate) const fn is_zero(a: &Limbs) -> u8 {
    let acc = a[0] | a[1] | a[2] | a[3];
    // `acc | -acc` has its top bit set iff `acc != 0`.
    (((acc | acc.wrapping_neg()) >> 63) ^ 1) as u8
}

/// Shifts right by one bit.
#[inline]
pub(crate) const fn shr1(a: &Limbs) -> Limbs {
    [
        (a[0] >> 1) | (a[1] << 63),
        (a[1] >> 1) | (a[2] << 63),
        (a[2] >> 1) | (a[3] << 63),
        a[3] >> 1,
    ]
}

/// Decodes a big-endian 32-byte integer.
#[inline]
pub(crate) const fn from_be_bytes(bytes: &[u8; 32]) -> Limbs {
    let mut limbs = [0u64; 4];
    let mut i = 0;
    while i < 4 {
        let mut word = 0u64;
        let mut j = 0;
        while j < 8 {
            word = (word << 8) | bytes[(3 - i) * 8 + j] as u64;
            j += 1;
        }
        limbs[i] = word;
        i += 1;
    }
    limbs
}

/// Encodes as a big-endian 32-byte integer.
#[inline]
pub(crate) const fn to_be_bytes(limbs: &Limbs) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    let mut i = 0;
    while i < 4 {
        let word = limbs[3 - i].to_be_bytes();
        let mut j = 0;
        while j < 8 {
            bytes[i * 8 + j] = word[j];
            j += 1;
        }
        i += 1;
    }
    bytes
}

/// Returns the 4-bit window at position `index` (`0..64`, least significant first).
#[inline(always)]
pub(crate) const fn nibble(limbs: &Limbs, index: usize) -> u8 {
    ((limbs[index / 16] >> ((index % 16) * 4)) & 0xf) as u8
}

/// An odd 256-bit modulus `m` with `2^255 < m < 2^256`, together with the
/// constants needed for Montgomery arithmetic modulo `m`.
///
/// Every constant is derived from `m` at compile time.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Modulus {
    /// The modulus itself.
    pub(crate) m: Limbs,
    /// `-m^-1 mod 2^64`.
    pub(crate) m_inv: u64,
    /// `R mod m`, the Montgomery form of one.
    pub(crate) r: Limbs,
    /// `R^2 mod m`.
    pub(crate) r2: Limbs,
    /// `m - 2`, the Fermat inversion exponent.
    pub(crate) m_minus_2: Limbs,
}

impl Modulus {
    /// Derives the Montgomery constants for `m`.
    pub(crate) const fn new(m: Limbs) -> Self {
        // Newton iteration doubles the number of correct low bits each round:
        // 1 -> 2 -> 4 -> 8 -> 16 -> 32 -> 64.
        let mut inv = 1u64;
        let mut i = 0;
        while i < 6 {
            inv = inv.wrapping_mul(2u64.wrapping_sub(m[0].wrapping_mul(inv)));
            i += 1;
        }

        // m > 2^255, so 2^256 - m is already reduced.
        let (r, _) = sub_with_borrow(&[0; 4], &m);

        let mut this = Self {
            m,
            m_inv: inv.wrapping_neg(),
            r,
            r2: [0; 4],
            m_minus_2: sub_with_borrow(&m, &[2, 0, 0, 0]).0,
        };

        // R^2 = R · 2^256: double R mod m 256 times.
        let mut r2 = r;
        let mut i = 0;
        while i < 256 {
            r2 = this.add(&r2, &r2);
            i += 1;
        }
        this.r2 = r2;
        this
    }

    /// Subtracts `m` from the 257-bit value `(carry, a)` if the value is `>= m`.
    ///
    /// Requires `(carry, a) < 2m`.
    #[inline]
    const fn sub_inner(&self, a: &Limbs, carry: u64) -> Limbs {
        let (w, borrow) = sub_with_borrow(a, &self.m);
        let (_, borrow) = sbb(carry, 0, borrow);

        // borrow is all ones iff the value was below m: add m back in that case.
        let (w0, c) = adc(w[0], self.m[0] & borrow, 0);
        let (w1, c) = adc(w[1], self.m[1] & borrow, c);
        let (w2, c) = adc(w[2], self.m[2] & borrow, c);
        let (w3, _) = adc(w[3], self.m[3] & borrow, c);
        [w0, w1, w2, w3]
    }

    /// `a + b mod m` for `a, b < m`.
    #[inline]
    pub(crate) const fn add(&self, a: &Limbs, b: &Limbs) -> Limbs {
        let (w0, carry) = adc(a[0], b[0], 0);
        let (w1, carry) = adc(a[1], b[1], carry);
        let (w2, carry) = adc(a[2], b[2], carry);
        let (w3, carry) = adc(a[3], b[3], carry);
        self.sub_inner(&[w0, w1, w2, w3], carry)
    }

    /// `a - b mod m` for `a, b < m`.
    #[inline]
    pub(crate) const fn sub(&self, a: &Limbs, b: &Limbs) -> Limbs {
        let (w, borrow) = sub_with_borrow(a, b);
        let (w0, c) = adc(w[0], self.m[0] & borrow, 0);
        let (w1, c) = adc(w[1], self.m[1] & borrow, c);
        let (w2, c) = adc(w[2], self.m[2] & borrow, c);
        let (w3, _) = adc(w[3], self.m[3] & borrow, c);
        [w0, w1, w2, w3]
    }

    /// Montgomery reduction of a 512-bit value `t < m·R`: returns `t·R^-1 mod m`.
    #[inline]
    const fn montgomery_reduce(&self, t: &[u64; 8]) -> Limbs {
        let mut t = *t;
        let mut top = 0u64;
        let mut i = 0;
        while i < 4 {
            let k = t[i].wrapping_mul(self.m_inv);
            let mut carry = 0;
            let mut j = 0;
            while j < 4 {
                let (lo, hi) = mac(t[i + j], k, self.m[j], carry);
                t[i + j] = lo;
                carry = hi;
                j += 1;
            }
            let mut j = i + 4;
            while j < 8 {
                let (lo, hi) = adc(t[j], carry, 0);
                t[j] = lo;
                carry = hi;
                j += 1;
            }
            top += carry;
            i += 1;
        }
        self.sub_inner(&[t[4], t[5], t[6], t[7]], top)
    }

    /// Montgomery product `a·b·R^-1 mod m`.
    ///
    /// Requires `a·b < m·R`, which holds whenever one operand is `< m`.
    #[inline]
    pub(crate) const fn mul(&self, a: &Limbs, b: &Limbs) -> Limbs {
        let mut t = [0u64; 8];
        let mut i = 0;
        while i < 4 {
            let mut carry = 0;
            let mut j = 0;
            while j < 4 {
                let (lo, hi) = mac(t[i + j], a[i], b[j], carry);
                t[i + j] = lo;
                carry = hi;
                j += 1;
            }
            t[i + 4] = carry;
            i += 1;
        }
        self.montgomery_reduce(&t)
    }

    /// Converts any 256-bit integer into Montgomery form, reducing it mod `m`.
    #[inline]
    pub(crate) const fn montgomery_form(&self, a: &Limbs) -> Limbs {
        self.mul(a, &self.r2)
    }

    /// Converts out of Montgomery form into the canonical integer in `[0, m)`.
    #[inline]
    pub(crate) const fn canonical_form(&self, a: &Limbs) -> Limbs {
        self.montgomery_reduce(&[a[0], a[1], a[2], a[3], 0, 0, 0, 0])
    }

    /// Raises the Montgomery element `a` to the public exponent `exp`.
    ///
    /// Branches only on the bits of `exp`.
    pub(crate) const fn pow_vartime(&self, a: &Limbs, exp: &Limbs) -> Limbs {
        let mut acc = self.r;
        let mut i = 256;
        while i > 0 {
            i -= 1;
            acc = self.mul(&acc, &acc);
            if (exp[i / 64] >> (i % 64)) & 1 == 1 {
                acc = self.mul(&acc, a);
            }
        }
        acc
    }

    /// `a^(m-2) mod m`, the inverse of any non-zero Montgomery element `a`.
    ///
    /// Maps zero to zero; callers must gate on [`is_zero`].
    #[inline]
    pub(crate) const fn invert(&self, a: &Limbs) -> Limbs {
        self.pow_vartime(a, &self.m_minus_2)
    }
}

/// Implements the operator and `subtle` traits shared by the prime field types.
///
/// The type must be a tuple struct over [`Limbs`] in Montgomery form with
/// inherent `const fn` methods `add`, `sub`, `mul` and `neg`, plus a `to_bytes`
/// method returning the canonical big-endian encoding.
macro_rules! impl_field_ops {
    ($name:ident) => {
        impl core::ops::Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                $name::add(&self, &rhs)
            }
        }

        impl core::ops::AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = $name::add(self, &rhs);
            }
        }

        impl core::ops::Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                $name::sub(&self, &rhs)
            }
        }

        impl core::ops::SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = $name::sub(self, &rhs);
            }
        }

        impl core::ops::Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                $name::mul(&self, &rhs)
            }
        }

        impl core::ops::MulAssign for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = $name::mul(self, &rhs);
            }
        }

        impl core::ops::Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                $name::neg(&self)
            }
        }

        impl subtle::ConstantTimeEq for $name {
            #[inline]
            fn ct_eq(&self, other: &Self) -> subtle::Choice {
                let limb = |i: usize| subtle::ConstantTimeEq::ct_eq(&self.0[i], &other.0[i]);
                limb(0) & limb(1) & limb(2) & limb(3)
            }
        }

        impl subtle::ConditionallySelectable for $name {
            #[inline]
            fn conditional_select(a: &Self, b: &Self, choice: subtle::Choice) -> Self {
                let limb = |i: usize| {
                    <u64 as subtle::ConditionallySelectable>::conditional_select(
                        &a.0[i],
                        &b.0[i],
                        choice,
                    )
                };
                Self([limb(0), limb(1), limb(2), limb(3)])
            }
        }

        impl PartialEq for $name {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                subtle::ConstantTimeEq::ct_eq(self, other).into()
            }
        }

        impl Eq for $name {}

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::ZERO
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, concat!(stringify!($name), "(0x"))?;
                for byte in self.to_bytes() {
                    write!(f, "{byte:02x}")?;
                }
                write!(f, ")")
            }
        }
    };
}

pub(crate) use impl_field_ops;
