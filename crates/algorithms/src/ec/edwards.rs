//! Twisted Edwards curves in projective coordinates
//!
//! The addition law is complete, so the identity `(0 : 1 : 1)` needs no
//! special handling and no flag.

use core::fmt;
use core::marker::PhantomData;

use milagro_params::arch::{BIGBITS, MODBYTES};
use milagro_params::sizes::{
    COMPRESSED_POINT_SIZE, TAG_COMPRESSED_EVEN, TAG_COMPRESSED_ODD, TAG_UNCOMPRESSED,
    UNCOMPRESSED_POINT_SIZE,
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::config::{Base, EdwardsCurve};
use super::scalar::{self, ProjectivePoint};
use crate::bigint::Big;
use crate::encoding::{self, PointBytes};
use crate::error::{validate, Error, Result};
use crate::field::Fp;

/// Point on `A x^2 + y^2 = 1 + B x^2 y^2` as `(X : Y : Z)` with `x = X/Z`,
/// `y = Y/Z`
#[derive(Clone, Copy)]
pub struct EdwardsPoint<C: EdwardsCurve> {
    pub(crate) x: Base<C>,
    pub(crate) y: Base<C>,
    pub(crate) z: Base<C>,
    _curve: PhantomData<C>,
}

impl<C: EdwardsCurve> EdwardsPoint<C> {
    /// The neutral element `(0, 1)`
    pub fn identity() -> Self {
        EdwardsPoint {
            x: Fp::zero(),
            y: Fp::one(),
            z: Fp::one(),
            _curve: PhantomData,
        }
    }

    /// The fixed generator of the prime-order group
    pub fn generator() -> Self {
        Self::from_affine_unchecked(Fp::new(&C::GX), Fp::new(&C::GY))
    }

    fn from_affine_unchecked(x: Base<C>, y: Base<C>) -> Self {
        EdwardsPoint {
            x,
            y,
            z: Fp::one(),
            _curve: PhantomData,
        }
    }

    /// Whether this is the neutral element
    pub fn is_identity(&self) -> Choice {
        self.x.is_zero() & self.y.ct_eq(&self.z)
    }

    /// `A x^2` for the two supported values of `A`
    fn times_a(x2: &Base<C>) -> Base<C> {
        debug_assert!(C::CURVE_A == 1 || C::CURVE_A == -1);
        if C::CURVE_A == -1 {
            x2.neg()
        } else {
            *x2
        }
    }

    /// `y^2 = (A x^2 - 1) / (B x^2 - 1)` for a given `x`
    pub fn rhs(x: &Base<C>) -> Base<C> {
        let x2 = x.square();
        let one = Fp::one();
        let num = Self::times_a(&x2).sub(&one);
        let den = x2.mul(&Fp::new(&C::CURVE_B)).sub(&one);
        let mut r = num.mul(&den.inv());
        r.reduce();
        r
    }

    fn on_curve(x: &Base<C>, y: &Base<C>) -> Choice {
        let x2 = x.square();
        let y2 = y.square();
        let lhs = Self::times_a(&x2).add(&y2);
        let rhs = Fp::one().add(&x2.mul(&y2).mul(&Fp::new(&C::CURVE_B)));
        lhs.ct_eq(&rhs)
    }

    /// Point from affine field coordinates, none if not on the curve
    pub fn from_affine(x: Base<C>, y: Base<C>) -> CtOption<Self> {
        CtOption::new(Self::from_affine_unchecked(x, y), Self::on_curve(&x, &y))
    }

    /// Point from plain integer coordinates, none if not on the curve
    pub fn from_coordinates(x: &Big, y: &Big) -> CtOption<Self> {
        Self::from_affine(Fp::new(x), Fp::new(y))
    }

    /// Point with the given x-coordinate and sign of y
    pub fn from_x(x: &Big, sign: Choice) -> CtOption<Self> {
        let x = Fp::new(x);
        Self::rhs(&x).sqrt().and_then(|mut y| {
            let ny = y.neg();
            y.cmove(&ny, y.sign() ^ sign);
            Self::from_affine(x, y)
        })
    }

    /// Negation `(-x, y)`
    pub fn neg(&self) -> Self {
        let mut r = *self;
        r.x = self.x.neg();
        r.x.norm();
        r
    }

    /// Equivalent point with `Z = 1`
    pub fn to_affine(&self) -> Self {
        let mut r = *self;
        if !bool::from(self.z.is_one()) {
            let iz = self.z.inv();
            r.x = self.x.mul(&iz);
            r.y = self.y.mul(&iz);
            r.z = Fp::one();
        }
        r.x.reduce();
        r.y.reduce();
        r
    }

    /// Affine x-coordinate
    pub fn get_x(&self) -> Big {
        self.to_affine().x.redc()
    }

    /// Affine y-coordinate
    pub fn get_y(&self) -> Big {
        self.to_affine().y.redc()
    }

    /// Parity of the affine y-coordinate
    pub fn y_sign(&self) -> Choice {
        self.to_affine().y.sign()
    }

    fn dbl(&mut self) {
        let b = self.x.add(&self.y).square();
        let c = self.x.square();
        let d = self.y.square();
        let h = self.z.square().double();
        let e = Self::times_a(&c);
        let f = e.add(&d);
        let j = f.sub(&h);

        let mut x = b.sub(&c).sub(&d).mul(&j);
        let mut y = e.sub(&d).mul(&f);
        let mut z = f.mul(&j);
        x.norm();
        y.norm();
        z.norm();
        self.x = x;
        self.y = y;
        self.z = z;
    }

    fn add_assign_point(&mut self, q: &Self) {
        let a = self.z.mul(&q.z);
        let b = a.square();
        let c = self.x.mul(&q.x);
        let d = self.y.mul(&q.y);
        let e = c.mul(&d).mul(&Fp::new(&C::CURVE_B));
        let f = b.sub(&e);
        let g = b.add(&e);

        let h = self.x.add(&self.y).mul(&q.x.add(&q.y)).sub(&c).sub(&d);
        let mut x = a.mul(&f).mul(&h);
        let mut y = a.mul(&g).mul(&d.sub(&Self::times_a(&c)));
        let mut z = f.mul(&g);
        x.norm();
        y.norm();
        z.norm();
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// `2*self`
    pub fn double(&self) -> Self {
        let mut r = *self;
        r.dbl();
        r
    }

    /// `self + q`
    pub fn add(&self, q: &Self) -> Self {
        let mut r = *self;
        r.add_assign_point(q);
        r
    }

    /// `self - q`
    pub fn sub(&self, q: &Self) -> Self {
        self.add(&q.neg())
    }

    /// Constant-time `e*self` for a secret `e` of at most `bts` bits
    pub fn pinmul(&self, e: u32, bts: usize) -> Self {
        scalar::ladder(self, e, bts)
    }

    /// `e*self` with a signed 4-bit fixed window
    pub fn mul(&self, e: &Big) -> Self {
        scalar::window_mul(self, e)
    }

    /// `e*p + f*q` with a signed 2-bit joint window
    pub fn mul2(p: &Self, e: &Big, q: &Self, f: &Big) -> Self {
        scalar::joint_mul2(p, e, q, f, BIGBITS)
    }

    /// Encoding: `0x04 | X | Y`, or `0x02/0x03 | X` when compressed
    ///
    /// The identity is an ordinary point here and encodes as `(0, 1)`.
    pub fn to_bytes(&self, compress: bool) -> PointBytes {
        let a = self.to_affine();
        let mut out = [0u8; UNCOMPRESSED_POINT_SIZE];
        out[1..1 + MODBYTES].copy_from_slice(&a.x.to_bytes());
        if compress {
            out[0] = if bool::from(a.y.sign()) {
                TAG_COMPRESSED_ODD
            } else {
                TAG_COMPRESSED_EVEN
            };
            PointBytes::from_slice(&out[..COMPRESSED_POINT_SIZE])
        } else {
            out[0] = TAG_UNCOMPRESSED;
            out[1 + MODBYTES..].copy_from_slice(&a.y.to_bytes());
            PointBytes::from_slice(&out)
        }
    }

    /// Decode either [`to_bytes`](Self::to_bytes) form, checking the curve
    /// equation
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        const CTX: &str = "edwards point";
        let (tag, body) = encoding::split_tag(bytes, CTX)?;
        match tag {
            TAG_UNCOMPRESSED => {
                validate::length(CTX, bytes.len(), UNCOMPRESSED_POINT_SIZE)?;
                let x = encoding::coordinate(&body[..MODBYTES], CTX)?;
                let y = encoding::coordinate(&body[MODBYTES..], CTX)?;
                let p = Self::from_affine(x, y);
                validate::point(p.is_some(), CTX, "not on the curve")?;
                Ok(p.unwrap_or(Self::identity()))
            }
            TAG_COMPRESSED_EVEN | TAG_COMPRESSED_ODD => {
                validate::length(CTX, bytes.len(), COMPRESSED_POINT_SIZE)?;
                let x = encoding::coordinate::<C::Field>(body, CTX)?;
                let p = Self::from_x(&x.redc(), Choice::from(tag & 1));
                validate::point(p.is_some(), CTX, "no curve point with this x")?;
                Ok(p.unwrap_or(Self::identity()))
            }
            _ => Err(Error::Encoding {
                context: CTX,
                reason: "unknown tag",
            }),
        }
    }
}

impl<C: EdwardsCurve> ProjectivePoint for EdwardsPoint<C> {
    const NAME: &'static str = C::NAME;

    fn identity() -> Self {
        EdwardsPoint::identity()
    }

    fn is_identity(&self) -> bool {
        EdwardsPoint::is_identity(self).into()
    }

    fn dbl_assign(&mut self) {
        self.dbl();
    }

    fn add_assign_point(&mut self, q: &Self) {
        EdwardsPoint::add_assign_point(self, q);
    }

    fn negate(&self) -> Self {
        self.neg()
    }

    fn normalize(&self) -> Self {
        self.to_affine()
    }
}

impl<C: EdwardsCurve> Default for EdwardsPoint<C> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<C: EdwardsCurve> zeroize::DefaultIsZeroes for EdwardsPoint<C> {}

impl<C: EdwardsCurve> ConstantTimeEq for EdwardsPoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.mul(&other.z).ct_eq(&other.x.mul(&self.z))
            & self.y.mul(&other.z).ct_eq(&other.y.mul(&self.z))
    }
}

impl<C: EdwardsCurve> PartialEq for EdwardsPoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: EdwardsCurve> Eq for EdwardsPoint<C> {}

impl<C: EdwardsCurve> ConditionallySelectable for EdwardsPoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        EdwardsPoint {
            x: Fp::conditional_select(&a.x, &b.x, choice),
            y: Fp::conditional_select(&a.y, &b.y, choice),
            z: Fp::conditional_select(&a.z, &b.z, choice),
            _curve: PhantomData,
        }
    }
}

impl<C: EdwardsCurve> fmt::Debug for EdwardsPoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{:x}, 0x{:x})", C::NAME, self.get_x(), self.get_y())
    }
}

impl<C: EdwardsCurve> fmt::Display for EdwardsPoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:x},{:x})", self.get_x(), self.get_y())
    }
}

impl_point_ops!(EdwardsPoint, EdwardsCurve);
