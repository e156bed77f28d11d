//! Short Weierstrass curves in Jacobian coordinates

use core::fmt;
use core::marker::PhantomData;

use milagro_params::arch::{BIGBITS, MODBYTES};
use milagro_params::sizes::{
    COMPRESSED_POINT_SIZE, TAG_COMPRESSED_EVEN, TAG_COMPRESSED_ODD, TAG_INFINITY,
    TAG_UNCOMPRESSED, UNCOMPRESSED_POINT_SIZE,
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::config::{Base, WeierstrassCurve};
use super::scalar::{self, ProjectivePoint};
use crate::bigint::Big;
use crate::encoding::{self, PointBytes};
use crate::error::{validate, Error, Result};
use crate::field::Fp;

/// Point on `y^2 = x^3 + A x + B` as `(X : Y : Z)` with `x = X/Z^2`,
/// `y = Y/Z^3`
///
/// The point at infinity carries a flag rather than a special coordinate.
#[derive(Clone, Copy)]
pub struct WeierstrassPoint<C: WeierstrassCurve> {
    pub(crate) x: Base<C>,
    pub(crate) y: Base<C>,
    pub(crate) z: Base<C>,
    pub(crate) inf: Choice,
    _curve: PhantomData<C>,
}

impl<C: WeierstrassCurve> WeierstrassPoint<C> {
    /// The point at infinity
    pub fn infinity() -> Self {
        WeierstrassPoint {
            x: Fp::zero(),
            y: Fp::one(),
            z: Fp::zero(),
            inf: Choice::from(1),
            _curve: PhantomData,
        }
    }

    /// The fixed generator of the prime-order group
    pub fn generator() -> Self {
        Self::from_affine_unchecked(Fp::new(&C::GX), Fp::new(&C::GY))
    }

    pub(crate) fn from_affine_unchecked(x: Base<C>, y: Base<C>) -> Self {
        WeierstrassPoint {
            x,
            y,
            z: Fp::one(),
            inf: Choice::from(0),
            _curve: PhantomData,
        }
    }

    /// Whether this is the point at infinity
    #[inline]
    pub fn is_infinity(&self) -> Choice {
        self.inf
    }

    /// Right-hand side `x^3 + A x + B` of the curve equation
    pub fn rhs(x: &Base<C>) -> Base<C> {
        debug_assert!(C::CURVE_A == 0 || C::CURVE_A == -3);
        let mut r = x.square().mul(x);
        if C::CURVE_A == -3 {
            r = r.sub(&x.imul(3));
        }
        let mut r = r.add(&Fp::new(&C::CURVE_B));
        r.reduce();
        r
    }

    /// Point from affine field coordinates, none if not on the curve
    pub fn from_affine(x: Base<C>, y: Base<C>) -> CtOption<Self> {
        let on_curve = y.square().ct_eq(&Self::rhs(&x));
        CtOption::new(Self::from_affine_unchecked(x, y), on_curve)
    }

    /// Point from plain integer coordinates, none if not on the curve
    pub fn from_coordinates(x: &Big, y: &Big) -> CtOption<Self> {
        Self::from_affine(Fp::new(x), Fp::new(y))
    }

    /// Point with the given x-coordinate and sign of y, none if `x` is not
    /// on the curve
    pub fn from_x(x: &Big, sign: Choice) -> CtOption<Self> {
        let x = Fp::new(x);
        Self::rhs(&x).sqrt().map(|mut y| {
            let ny = y.neg();
            y.cmove(&ny, y.sign() ^ sign);
            Self::from_affine_unchecked(x, y)
        })
    }

    /// Negation
    pub fn neg(&self) -> Self {
        let mut r = *self;
        r.y = self.y.neg();
        r.y.norm();
        r
    }

    /// Equivalent point with `Z = 1`
    pub fn to_affine(&self) -> Self {
        let mut r = *self;
        if bool::from(self.inf) {
            return r;
        }
        if !bool::from(self.z.is_one()) {
            let iz = self.z.inv();
            let iz2 = iz.square();
            r.x = self.x.mul(&iz2);
            r.y = self.y.mul(&iz2.mul(&iz));
            r.z = Fp::one();
        }
        r.x.reduce();
        r.y.reduce();
        r
    }

    /// Affine x-coordinate; zero at infinity
    pub fn get_x(&self) -> Big {
        self.to_affine().x.redc()
    }

    /// Affine y-coordinate; one at infinity
    pub fn get_y(&self) -> Big {
        self.to_affine().y.redc()
    }

    /// Affine coordinates, none at infinity
    pub fn get(&self) -> Option<(Big, Big)> {
        if bool::from(self.inf) {
            return None;
        }
        let a = self.to_affine();
        Some((a.x.redc(), a.y.redc()))
    }

    /// Parity of the affine y-coordinate
    pub fn y_sign(&self) -> Choice {
        self.to_affine().y.sign()
    }

    fn dbl(&mut self) {
        if bool::from(self.inf) {
            return;
        }
        if bool::from(self.y.is_zero()) {
            *self = Self::infinity();
            return;
        }
        let z_is_one = bool::from(self.z.is_one());

        let w8 = if C::CURVE_A == 0 {
            self.x.square().imul(3)
        } else {
            let w6 = if z_is_one { Fp::one() } else { self.z.square() };
            self.x.sub(&w6).mul(&self.x.add(&w6)).imul(3)
        };
        let w2 = self.y.square();
        let w3 = self.x.mul(&w2).imul(4);
        let w1 = w3.neg();

        let mut x = w8.square().add(&w1).add(&w1);
        x.norm();
        let mut z = if z_is_one {
            self.y.double()
        } else {
            self.z.mul(&self.y).double()
        };
        z.norm();
        let w2 = w2.double().square().double();
        let mut y = w8.mul(&w3.sub(&x)).sub(&w2);
        y.norm();

        self.x = x;
        self.y = y;
        self.z = z;
    }

    fn add_assign_point(&mut self, q: &Self) {
        if bool::from(q.inf) {
            return;
        }
        if bool::from(self.inf) {
            *self = *q;
            return;
        }

        let aff = bool::from(q.z.is_one());
        let (a, c) = if aff {
            (self.x, self.y)
        } else {
            let qz2 = q.z.square();
            (self.x.mul(&qz2), self.y.mul(&qz2.mul(&q.z)))
        };
        let pz2 = self.z.square();
        let b = q.x.mul(&pz2).sub(&a);
        let d = q.y.mul(&pz2.mul(&self.z)).sub(&c);

        if bool::from(b.is_zero()) {
            if bool::from(d.is_zero()) {
                self.dbl();
            } else {
                *self = Self::infinity();
            }
            return;
        }

        let mut z = if aff { self.z } else { self.z.mul(&q.z) };
        z = z.mul(&b);
        let e = b.square();
        let b3 = b.mul(&e);
        let a = a.mul(&e);
        let e = a.add(&a).add(&b3);
        let mut x = d.square().sub(&e);
        x.norm();
        let mut y = a.sub(&x).mul(&d).sub(&c.mul(&b3));
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

    /// Bring a table of points to `Z = 1` with a single inversion
    ///
    /// Entries at infinity are left as they are.
    pub(crate) fn multiaffine<const N: usize>(table: &mut [Self; N]) {
        let _span = tracing::debug_span!("multiaffine", curve = C::NAME, n = N).entered();

        let mut prefix = [Fp::one(); N];
        let mut acc = Fp::<C::Field>::one();
        for (pi, p) in prefix.iter_mut().zip(table.iter()) {
            *pi = acc;
            acc = acc.mul(&Fp::conditional_select(&p.z, &Fp::one(), p.inf));
        }

        let mut inv = acc.inv();
        for (p, pi) in table.iter_mut().zip(prefix.iter()).rev() {
            let z = Fp::conditional_select(&p.z, &Fp::one(), p.inf);
            let iz = pi.mul(&inv);
            inv = inv.mul(&z);

            let iz2 = iz.square();
            let mut a = *p;
            a.x = p.x.mul(&iz2);
            a.y = p.y.mul(&iz2.mul(&iz));
            a.z = Fp::one();
            p.conditional_assign(&a, !p.inf);
        }
    }

    /// Constant-time `e*self` for a secret `e` of at most `bts` bits
    pub fn pinmul(&self, e: u32, bts: usize) -> Self {
        scalar::ladder(self, e, bts)
    }

    /// `e*self` with a signed 4-bit fixed window
    ///
    /// The sequence of group operations depends only on the bit length of
    /// `e`.
    pub fn mul(&self, e: &Big) -> Self {
        scalar::window_mul(self, e)
    }

    /// `e*p + f*q` with a signed 2-bit joint window
    pub fn mul2(p: &Self, e: &Big, q: &Self, f: &Big) -> Self {
        scalar::joint_mul2(p, e, q, f, BIGBITS)
    }

    /// [`mul2`](Self::mul2) for scalars known to have at most `bits` bits
    pub(crate) fn mul2_short(p: &Self, e: &Big, q: &Self, f: &Big, bits: usize) -> Self {
        scalar::joint_mul2(p, e, q, f, bits)
    }

    /// Encoding: `0x04 | X | Y`, or `0x02/0x03 | X` when compressed, or a
    /// single `0x00` for infinity
    pub fn to_bytes(&self, compress: bool) -> PointBytes {
        if bool::from(self.inf) {
            return PointBytes::from_slice(&[TAG_INFINITY]);
        }
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

    /// Decode any of the [`to_bytes`](Self::to_bytes) forms, checking the
    /// curve equation
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        const CTX: &str = "weierstrass point";
        let (tag, body) = encoding::split_tag(bytes, CTX)?;
        match tag {
            TAG_INFINITY => {
                validate::length(CTX, bytes.len(), 1)?;
                Ok(Self::infinity())
            }
            TAG_UNCOMPRESSED => {
                validate::length(CTX, bytes.len(), UNCOMPRESSED_POINT_SIZE)?;
                let x = encoding::coordinate(&body[..MODBYTES], CTX)?;
                let y = encoding::coordinate(&body[MODBYTES..], CTX)?;
                let p = Self::from_affine(x, y);
                validate::point(p.is_some(), CTX, "not on the curve")?;
                Ok(p.unwrap_or(Self::infinity()))
            }
            TAG_COMPRESSED_EVEN | TAG_COMPRESSED_ODD => {
                validate::length(CTX, bytes.len(), COMPRESSED_POINT_SIZE)?;
                let x = encoding::coordinate::<C::Field>(body, CTX)?;
                let sign = Choice::from(tag & 1);
                let p = Self::from_x(&x.redc(), sign);
                validate::point(p.is_some(), CTX, "no curve point with this x")?;
                Ok(p.unwrap_or(Self::infinity()))
            }
            _ => Err(Error::Encoding {
                context: CTX,
                reason: "unknown tag",
            }),
        }
    }
}

impl<C: WeierstrassCurve> ProjectivePoint for WeierstrassPoint<C> {
    const NAME: &'static str = C::NAME;

    fn identity() -> Self {
        Self::infinity()
    }

    fn is_identity(&self) -> bool {
        self.inf.into()
    }

    fn dbl_assign(&mut self) {
        self.dbl();
    }

    fn add_assign_point(&mut self, q: &Self) {
        WeierstrassPoint::add_assign_point(self, q);
    }

    fn negate(&self) -> Self {
        self.neg()
    }

    fn normalize(&self) -> Self {
        self.to_affine()
    }

    fn normalize_table<const N: usize>(table: &mut [Self; N]) {
        Self::multiaffine(table);
    }
}

impl<C: WeierstrassCurve> Default for WeierstrassPoint<C> {
    fn default() -> Self {
        Self::infinity()
    }
}

impl<C: WeierstrassCurve> zeroize::DefaultIsZeroes for WeierstrassPoint<C> {}

impl<C: WeierstrassCurve> ConstantTimeEq for WeierstrassPoint<C> {
    fn ct_eq(&self, other: &Self) -> Choice {
        let z1 = self.z.square();
        let z2 = other.z.square();
        let xs = self.x.mul(&z2).ct_eq(&other.x.mul(&z1));
        let ys = self
            .y
            .mul(&z2)
            .mul(&other.z)
            .ct_eq(&other.y.mul(&z1).mul(&self.z));
        (self.inf & other.inf) | (!self.inf & !other.inf & xs & ys)
    }
}

impl<C: WeierstrassCurve> PartialEq for WeierstrassPoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: WeierstrassCurve> Eq for WeierstrassPoint<C> {}

impl<C: WeierstrassCurve> ConditionallySelectable for WeierstrassPoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        WeierstrassPoint {
            x: Fp::conditional_select(&a.x, &b.x, choice),
            y: Fp::conditional_select(&a.y, &b.y, choice),
            z: Fp::conditional_select(&a.z, &b.z, choice),
            inf: Choice::conditional_select(&a.inf, &b.inf, choice),
            _curve: PhantomData,
        }
    }
}

impl<C: WeierstrassCurve> fmt::Debug for WeierstrassPoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            None => write!(f, "{}::Infinity", C::NAME),
            Some((x, y)) => write!(f, "{}(0x{:x}, 0x{:x})", C::NAME, x, y),
        }
    }
}

impl<C: WeierstrassCurve> fmt::Display for WeierstrassPoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            None => write!(f, "Infinity"),
            Some((x, y)) => write!(f, "({:x},{:x})", x, y),
        }
    }
}

impl_point_ops!(WeierstrassPoint, WeierstrassCurve);
