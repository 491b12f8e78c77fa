//! Group operations on secp256r1 points.
//!
//! Arithmetic runs on homogeneous projective coordinates `(X : Y : Z)` using the
//! complete formulas of Renes, Costello and Batina ("Complete addition formulas
//! for prime order elliptic curves", 2015, algorithms 4 and 6, `a = -3`). They
//! are exception-free: identity inputs, doubling and `P + (-P)` all flow
//! through the same straight-line code.
use crate::{
    constants::{self, GENERATOR_X, GENERATOR_Y},
    field::FieldElement,
    limbs,
    scalar::Scalar,
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Curve coefficient `a = -3`.
const EQUATION_A: FieldElement = FieldElement::neg(&FieldElement::from_u64(3));

/// Curve coefficient `b`.
const EQUATION_B: FieldElement = FieldElement::from_canonical_limbs(constants::EQUATION_B);

/// Number of 4-bit windows in a scalar.
const WINDOWS: usize = 64;

/// A point in affine coordinates, or the identity.
#[derive(Clone, Copy, Debug)]
pub struct AffinePoint {
    x: FieldElement,
    y: FieldElement,
    infinity: u8,
}

impl AffinePoint {
    /// The point at infinity.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ZERO,
        infinity: 1,
    };

    /// The base point `G`.
    pub const GENERATOR: Self = Self {
        x: FieldElement::from_canonical_limbs(GENERATOR_X),
        y: FieldElement::from_canonical_limbs(GENERATOR_Y),
        infinity: 0,
    };

    /// Checks the curve equation `y^2 = x^3 - 3x + b`.
    pub fn is_on_curve(x: &FieldElement, y: &FieldElement) -> Choice {
        let rhs = (x.square() + EQUATION_A) * *x + EQUATION_B;
        y.square().ct_eq(&rhs)
    }

    /// Builds a point from untrusted coordinates, failing if they are not on
    /// the curve.
    pub fn from_coordinates(x: FieldElement, y: FieldElement) -> CtOption<Self> {
        let point = Self { x, y, infinity: 0 };
        CtOption::new(point, Self::is_on_curve(&x, &y))
    }

    /// Returns the `x` coordinate. Zero for the identity.
    pub fn x(&self) -> FieldElement {
        self.x
    }

    /// Returns the `y` coordinate. Zero for the identity.
    pub fn y(&self) -> FieldElement {
        self.y
    }

    /// Returns whether this is the point at infinity.
    pub fn is_identity(&self) -> Choice {
        Choice::from(self.infinity)
    }

    /// Converts to projective coordinates.
    pub fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint::conditional_select(
            &ProjectivePoint {
                x: self.x,
                y: self.y,
                z: FieldElement::ONE,
            },
            &ProjectivePoint::IDENTITY,
            self.is_identity(),
        )
    }
}

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            infinity: u8::conditional_select(&a.infinity, &b.infinity, choice),
        }
    }
}

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y) & self.infinity.ct_eq(&other.infinity)
    }
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for AffinePoint {}

impl Default for AffinePoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<ProjectivePoint> for AffinePoint {
    fn from(point: ProjectivePoint) -> Self {
        point.to_affine()
    }
}

/// A point in homogeneous projective coordinates. The identity is `(0 : 1 : 0)`.
#[derive(Clone, Copy, Debug)]
pub struct ProjectivePoint {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
}

impl ProjectivePoint {
    /// The point at infinity.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ZERO,
    };

    /// The base point `G`.
    pub const GENERATOR: Self = Self {
        x: AffinePoint::GENERATOR.x,
        y: AffinePoint::GENERATOR.y,
        z: FieldElement::ONE,
    };

    /// Returns whether this is the point at infinity.
    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    /// Converts to affine coordinates.
    pub fn to_affine(&self) -> AffinePoint {
        self.z
            .invert()
            .map(|z_inv| AffinePoint {
                x: self.x * z_inv,
                y: self.y * z_inv,
                infinity: 0,
            })
            .unwrap_or(AffinePoint::IDENTITY)
    }

    /// Complete point addition.
    pub fn add(&self, rhs: &Self) -> Self {
        let xx = self.x * rhs.x;
        let yy = self.y * rhs.y;
        let zz = self.z * rhs.z;
        let xy_pairs = (self.x + self.y) * (rhs.x + rhs.y) - (xx + yy);
        let yz_pairs = (self.y + self.z) * (rhs.y + rhs.z) - (yy + zz);
        let xz_pairs = (self.x + self.z) * (rhs.x + rhs.z) - (xx + zz);

        let bzz_part = xz_pairs - EQUATION_B * zz;
        let bzz3_part = bzz_part.double() + bzz_part;
        let yy_m_bzz3 = yy - bzz3_part;
        let yy_p_bzz3 = yy + bzz3_part;

        let zz3 = zz.double() + zz;
        let bxz_part = EQUATION_B * xz_pairs - (zz3 + xx);
        let bxz3_part = bxz_part.double() + bxz_part;
        let xx3_m_zz3 = xx.double() + xx - zz3;

        Self {
            x: yy_p_bzz3 * xy_pairs - yz_pairs * bxz3_part,
            y: yy_p_bzz3 * yy_m_bzz3 + xx3_m_zz3 * bxz3_part,
            z: yy_m_bzz3 * yz_pairs + xy_pairs * xx3_m_zz3,
        }
    }

    /// Complete point doubling.
    pub fn double(&self) -> Self {
        let xx = self.x.square();
        let yy = self.y.square();
        let zz = self.z.square();
        let xy2 = (self.x * self.y).double();
        let xz2 = (self.x * self.z).double();

        let bzz_part = EQUATION_B * zz - xz2;
        let bzz3_part = bzz_part.double() + bzz_part;
        let yy_m_bzz3 = yy - bzz3_part;
        let yy_p_bzz3 = yy + bzz3_part;
        let y_frag = yy_p_bzz3 * yy_m_bzz3;
        let x_frag = yy_m_bzz3 * xy2;

        let zz3 = zz.double() + zz;
        let bxz2_part = EQUATION_B * xz2 - (zz3 + xx);
        let bxz6_part = bxz2_part.double() + bxz2_part;
        let xx3_m_zz3 = xx.double() + xx - zz3;

        let yz2 = (self.y * self.z).double();
        Self {
            x: x_frag - bxz6_part * yz2,
            y: y_frag + xx3_m_zz3 * bxz6_part,
            z: (yz2 * yy).double().double(),
        }
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }

    /// Computes `k·self` with a fixed 4-bit window.
    ///
    /// Runs the same sequence of field operations for every `k` and `self`.
    pub fn scalar_mul(&self, k: &Scalar) -> Self {
        let table = LookupTable::new(self);
        let k = k.to_canonical();

        let mut acc = Self::IDENTITY;
        for i in (0..WINDOWS).rev() {
            acc = acc.double().double().double().double();
            acc = acc.add(&table.select(limbs::nibble(&k, i)));
        }
        acc
    }

    /// Computes `u·g + v·q`, interleaving both windowed multiplications over a
    /// single chain of doublings.
    pub fn double_scalar_mul(u: &Scalar, g: &Self, v: &Scalar, q: &Self) -> Self {
        let g_table = LookupTable::new(g);
        let q_table = LookupTable::new(q);
        let u = u.to_canonical();
        let v = v.to_canonical();

        let mut acc = Self::IDENTITY;
        for i in (0..WINDOWS).rev() {
            acc = acc.double().double().double().double();
            acc = acc.add(&g_table.select(limbs::nibble(&u, i)));
            acc = acc.add(&q_table.select(limbs::nibble(&v, i)));
        }
        acc
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl ConstantTimeEq for ProjectivePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        // (X1 / Z1 == X2 / Z2) && (Y1 / Z1 == Y2 / Z2), cross-multiplied.
        let x1 = self.x * other.z;
        let x2 = other.x * self.z;
        let y1 = self.y * other.z;
        let y2 = other.y * self.z;
        x1.ct_eq(&x2) & y1.ct_eq(&y2)
    }
}

impl PartialEq for ProjectivePoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for ProjectivePoint {}

impl Default for ProjectivePoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<AffinePoint> for ProjectivePoint {
    fn from(point: AffinePoint) -> Self {
        point.to_projective()
    }
}

impl core::ops::Add for ProjectivePoint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        ProjectivePoint::add(&self, &rhs)
    }
}

impl core::ops::Sub for ProjectivePoint {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        ProjectivePoint::add(&self, &ProjectivePoint::neg(&rhs))
    }
}

impl core::ops::Neg for ProjectivePoint {
    type Output = Self;

    fn neg(self) -> Self {
        ProjectivePoint::neg(&self)
    }
}

impl core::ops::Mul<Scalar> for ProjectivePoint {
    type Output = Self;

    fn mul(self, k: Scalar) -> Self {
        self.scalar_mul(&k)
    }
}

/// Multiples `0·P ..= 15·P` of a point, read back in constant time.
#[derive(Clone, Copy, Debug)]
struct LookupTable([ProjectivePoint; 16]);

impl LookupTable {
    fn new(point: &ProjectivePoint) -> Self {
        let mut points = [ProjectivePoint::IDENTITY; 16];
        points[1] = *point;
        for i in 2..16 {
            points[i] = points[i - 1].add(point);
        }
        Self(points)
    }

    /// Scans every entry so the memory access pattern is independent of `index`.
    fn select(&self, index: u8) -> ProjectivePoint {
        let mut point = ProjectivePoint::IDENTITY;
        for (i, entry) in self.0.iter().enumerate() {
            point.conditional_assign(entry, (i as u8).ct_eq(&index));
        }
        point
    }
}
