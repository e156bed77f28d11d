//! x-only arithmetic on Montgomery curves
//!
//! A point is `(X : Z)` on the projective line, `x = X/Z`. There is no
//! general addition, only doubling and differential addition, which is all
//! the ladder needs.

use core::fmt;
use core::marker::PhantomData;

use milagro_params::arch::BIGBITS;
use milagro_params::sizes::{MONTGOMERY_POINT_SIZE, TAG_INFINITY, TAG_MONTGOMERY};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::config::{Base, MontgomeryCurve};
use crate::bigint::Big;
use crate::encoding::{self, PointBytes};
use crate::error::{validate, Error, Result};
use crate::field::Fp;

/// Point on `y^2 = x^3 + A x^2 + x`, tracked by its x-coordinate only
#[derive(Clone, Copy)]
pub struct MontgomeryPoint<C: MontgomeryCurve> {
    pub(crate) x: Base<C>,
    pub(crate) z: Base<C>,
    _curve: PhantomData<C>,
}

impl<C: MontgomeryCurve> MontgomeryPoint<C> {
    /// The point at infinity `(1 : 0)`
    pub fn infinity() -> Self {
        MontgomeryPoint {
            x: Fp::one(),
            z: Fp::zero(),
            _curve: PhantomData,
        }
    }

    /// The fixed base point
    pub fn generator() -> Self {
        Self::from_affine_unchecked(Fp::new(&C::GX))
    }

    fn from_affine_unchecked(x: Base<C>) -> Self {
        MontgomeryPoint {
            x,
            z: Fp::one(),
            _curve: PhantomData,
        }
    }

    /// Whether this is the point at infinity
    pub fn is_infinity(&self) -> Choice {
        self.z.is_zero()
    }

    /// `x^3 + A x^2 + x`
    pub fn rhs(x: &Base<C>) -> Base<C> {
        let x2 = x.square();
        let mut r = x2.mul(x).add(&x2.imul(C::CURVE_A as i64)).add(x);
        r.reduce();
        r
    }

    /// Point with the given x-coordinate, none if `x^3 + A x^2 + x` is not
    /// a square
    pub fn from_x(x: &Big) -> CtOption<Self> {
        let x = Fp::new(x);
        let on_curve = Self::rhs(&x).sqrt().is_some();
        CtOption::new(Self::from_affine_unchecked(x), on_curve)
    }

    /// Equivalent point with `Z = 1`
    pub fn to_affine(&self) -> Self {
        if bool::from(self.is_infinity()) {
            return Self::infinity();
        }
        let mut x = self.x.mul(&self.z.inv());
        x.reduce();
        Self::from_affine_unchecked(x)
    }

    /// Affine x-coordinate, none at infinity
    pub fn get_x(&self) -> Option<Big> {
        if bool::from(self.is_infinity()) {
            return None;
        }
        Some(self.to_affine().x.redc())
    }

    fn dbl(&mut self) {
        let a = self.x.add(&self.z);
        let aa = a.square();
        let b = self.x.sub(&self.z);
        let bb = b.square();
        let c = aa.sub(&bb);

        let mut x = aa.mul(&bb);
        let a24 = c.imul(((C::CURVE_A + 2) / 4) as i64);
        let mut z = bb.add(&a24).mul(&c);
        x.norm();
        z.norm();
        self.x = x;
        self.z = z;
    }

    /// `self + q` given `diff = self - q`
    pub fn add_diff(&self, q: &Self, diff: &Self) -> Self {
        let a = self.x.add(&self.z);
        let b = self.x.sub(&self.z);
        let c = q.x.add(&q.z);
        let d = q.x.sub(&q.z);

        let da = d.mul(&a);
        let cb = c.mul(&b);
        let sum = da.add(&cb).square();
        let dif = da.sub(&cb).square();

        let mut x = diff.z.mul(&sum);
        let mut z = diff.x.mul(&dif);
        x.norm();
        z.norm();
        MontgomeryPoint {
            x,
            z,
            _curve: PhantomData,
        }
    }

    /// `2*self`
    pub fn double(&self) -> Self {
        let mut r = *self;
        r.dbl();
        r
    }

    /// `e*self` by the Montgomery ladder
    ///
    /// Starts from `(O, self)` and takes one differential addition, one
    /// doubling and two constant-time swaps for every bit of the `Big`
    /// width, whatever the value of `e`.
    pub fn mul(&self, e: &Big) -> Self {
        if bool::from(self.is_infinity()) {
            return Self::infinity();
        }
        let mut e = *e;
        e.norm();

        let d = self.to_affine();
        let mut r0 = Self::infinity();
        let mut r1 = d;
        for i in (0..BIGBITS).rev() {
            let b = Choice::from(e.bit(i) as u8);
            Self::conditional_swap(&mut r0, &mut r1, b);
            let t = r0.add_diff(&r1, &d);
            r0.dbl();
            r1 = t;
            Self::conditional_swap(&mut r0, &mut r1, b);
        }
        r0.to_affine()
    }

    /// Encoding `0x06 | X`, or a single `0x00` for infinity
    pub fn to_bytes(&self) -> PointBytes {
        match self.get_x() {
            None => PointBytes::from_slice(&[TAG_INFINITY]),
            Some(x) => {
                let mut out = [0u8; MONTGOMERY_POINT_SIZE];
                out[0] = TAG_MONTGOMERY;
                out[1..].copy_from_slice(&x.to_bytes());
                PointBytes::from_slice(&out)
            }
        }
    }

    /// Decode a [`to_bytes`](Self::to_bytes) encoding, rejecting x on the
    /// quadratic twist
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        const CTX: &str = "montgomery point";
        let (tag, body) = encoding::split_tag(bytes, CTX)?;
        match tag {
            TAG_INFINITY => {
                validate::length(CTX, bytes.len(), 1)?;
                Ok(Self::infinity())
            }
            TAG_MONTGOMERY => {
                validate::length(CTX, bytes.len(), MONTGOMERY_POINT_SIZE)?;
                let x = encoding::coordinate::<C::Field>(body, CTX)?;
                let p = Self::from_x(&x.redc());
                validate::point(p.is_some(), CTX, "x on the quadratic twist")?;
                Ok(p.unwrap_or(Self::infinity()))
            }
            _ => Err(Error::Encoding {
                context: CTX,
                reason: "unknown tag",
            }),
        }
    }
}

impl<C: MontgomeryCurve> Default for MontgomeryPoint<C> {
    fn default() -> Self {
        Self::infinity()
    }
}

impl<C: MontgomeryCurve> zeroize::DefaultIsZeroes for MontgomeryPoint<C> {}

impl<C: MontgomeryCurve> ConstantTimeEq for MontgomeryPoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.mul(&other.z).ct_eq(&other.x.mul(&self.z))
    }
}

impl<C: MontgomeryCurve> PartialEq for MontgomeryPoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: MontgomeryCurve> Eq for MontgomeryPoint<C> {}

impl<C: MontgomeryCurve> ConditionallySelectable for MontgomeryPoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        MontgomeryPoint {
            x: Fp::conditional_select(&a.x, &b.x, choice),
            z: Fp::conditional_select(&a.z, &b.z, choice),
            _curve: PhantomData,
        }
    }
}

impl<C: MontgomeryCurve> fmt::Debug for MontgomeryPoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get_x() {
            None => write!(f, "{}::Infinity", C::NAME),
            Some(x) => write!(f, "{}(0x{:x})", C::NAME, x),
        }
    }
}

impl<C: MontgomeryCurve> fmt::Display for MontgomeryPoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get_x() {
            None => write!(f, "Infinity"),
            Some(x) => write!(f, "({:x})", x),
        }
    }
}

impl_point_ops!(@scalar MontgomeryPoint, MontgomeryCurve);
