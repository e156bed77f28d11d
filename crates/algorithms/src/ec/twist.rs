//! Points on the D-type sextic twist `y^2 = x^3 + B/(1+i)` over `Fp2`
//!
//! These are the G2 points of the pairing. Arithmetic is Jacobian with
//! `A = 0`; the doubling and addition steps report which formula ran so
//! the Miller loop can evaluate the matching line.

use core::fmt;
use core::marker::PhantomData;

use milagro_params::arch::{BIGBITS, MODBYTES};
use milagro_params::sizes::{FP2_SIZE, TWIST_POINT_SIZE};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::config::PairingCurve;
use super::scalar::{self, ProjectivePoint};
use crate::bigint::Big;
use crate::error::{validate, Error, Result};
use crate::field::Fp2;

/// What a twist doubling or addition step computed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StepKind {
    /// The result is the point at infinity, or an input was
    Infinity,
    /// A genuine addition of distinct points
    Addition,
    /// A doubling, including an addition that met equal inputs
    Doubling,
}

/// Point on the sextic twist in Jacobian coordinates over `Fp2`
#[derive(Clone, Copy)]
pub struct TwistPoint<C: PairingCurve> {
    pub(crate) x: Fp2<C::Field>,
    pub(crate) y: Fp2<C::Field>,
    pub(crate) z: Fp2<C::Field>,
    pub(crate) inf: Choice,
    _curve: PhantomData<C>,
}

impl<C: PairingCurve> TwistPoint<C> {
    /// The point at infinity
    pub fn infinity() -> Self {
        TwistPoint {
            x: Fp2::zero(),
            y: Fp2::one(),
            z: Fp2::zero(),
            inf: Choice::from(1),
            _curve: PhantomData,
        }
    }

    /// The fixed generator of G2
    pub fn generator() -> Self {
        Self::from_affine_unchecked(
            Fp2::from_bigs(&C::PXA, &C::PXB),
            Fp2::from_bigs(&C::PYA, &C::PYB),
        )
    }

    pub(crate) fn from_affine_unchecked(x: Fp2<C::Field>, y: Fp2<C::Field>) -> Self {
        TwistPoint {
            x,
            y,
            z: Fp2::one(),
            inf: Choice::from(0),
            _curve: PhantomData,
        }
    }

    /// Whether this is the point at infinity
    #[inline]
    pub fn is_infinity(&self) -> Choice {
        self.inf
    }

    /// `x^3 + B/(1+i)`
    pub fn rhs(x: &Fp2<C::Field>) -> Fp2<C::Field> {
        let b = Fp2::from_ints(C::CURVE_B_I as i64, 0).div_ip();
        let mut r = x.square().mul(x).add(&b);
        r.reduce();
        r
    }

    /// Point from affine coordinates, none if not on the twist
    pub fn from_affine(x: Fp2<C::Field>, y: Fp2<C::Field>) -> CtOption<Self> {
        let on_curve = y.square().ct_eq(&Self::rhs(&x));
        CtOption::new(Self::from_affine_unchecked(x, y), on_curve)
    }

    /// Point with the given x-coordinate and either square root as y
    pub fn from_x(x: Fp2<C::Field>) -> CtOption<Self> {
        Self::rhs(&x)
            .sqrt()
            .map(|y| Self::from_affine_unchecked(x, y))
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
            r.z = Fp2::one();
        }
        r.x.reduce();
        r.y.reduce();
        r
    }

    /// Affine x-coordinate
    pub fn get_x(&self) -> Fp2<C::Field> {
        self.to_affine().x
    }

    /// Affine y-coordinate
    pub fn get_y(&self) -> Fp2<C::Field> {
        self.to_affine().y
    }

    /// Affine coordinates, none at infinity
    pub fn get(&self) -> Option<(Fp2<C::Field>, Fp2<C::Field>)> {
        if bool::from(self.inf) {
            return None;
        }
        let a = self.to_affine();
        Some((a.x, a.y))
    }

    pub(crate) fn dbl_step(&mut self) -> StepKind {
        if bool::from(self.inf) {
            return StepKind::Infinity;
        }
        if bool::from(self.y.is_zero()) {
            *self = Self::infinity();
            return StepKind::Infinity;
        }

        let w8 = self.x.square().imul(3);
        let w2 = self.y.square();
        let w3 = self.x.mul(&w2).imul(4);
        let w1 = w3.neg();

        let mut x = w8.square().add(&w1).add(&w1);
        x.norm();
        let mut z = if bool::from(self.z.is_one()) {
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
        StepKind::Doubling
    }

    pub(crate) fn add_step(&mut self, q: &Self) -> StepKind {
        if bool::from(q.inf) {
            return StepKind::Infinity;
        }
        if bool::from(self.inf) {
            *self = *q;
            return StepKind::Infinity;
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
                self.dbl_step();
                return StepKind::Doubling;
            }
            *self = Self::infinity();
            return StepKind::Infinity;
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
        StepKind::Addition
    }

    /// `2*self`
    pub fn double(&self) -> Self {
        let mut r = *self;
        r.dbl_step();
        r
    }

    /// `self + q`
    pub fn add(&self, q: &Self) -> Self {
        let mut r = *self;
        r.add_step(q);
        r
    }

    /// `self - q`
    pub fn sub(&self, q: &Self) -> Self {
        self.add(&q.neg())
    }

    /// The `p`-power Frobenius endomorphism untwisted by `f`
    pub fn frob(&self, f: &Fp2<C::Field>) -> Self {
        if bool::from(self.inf) {
            return *self;
        }
        let f2 = f.square();
        let mut r = *self;
        r.x = f2.mul(&self.x.conj());
        r.y = f2.mul(f).mul(&self.y.conj());
        r.z = self.z.conj();
        r.x.reduce();
        r.y.reduce();
        r
    }

    /// Bring a table of points to `Z = 1` with a single inversion
    pub(crate) fn multiaffine<const N: usize>(table: &mut [Self; N]) {
        let _span = tracing::debug_span!("multiaffine", curve = C::NAME, n = N).entered();

        let mut prefix = [Fp2::one(); N];
        let mut acc = Fp2::<C::Field>::one();
        for (pi, p) in prefix.iter_mut().zip(table.iter()) {
            *pi = acc;
            acc = acc.mul(&Fp2::conditional_select(&p.z, &Fp2::one(), p.inf));
        }

        let mut inv = acc.inv();
        for (p, pi) in table.iter_mut().zip(prefix.iter()).rev() {
            let z = Fp2::conditional_select(&p.z, &Fp2::one(), p.inf);
            let iz = pi.mul(&inv);
            inv = inv.mul(&z);

            let iz2 = iz.square();
            let mut a = *p;
            a.x = p.x.mul(&iz2);
            a.y = p.y.mul(&iz2.mul(&iz));
            a.x.reduce();
            a.y.reduce();
            a.z = Fp2::one();
            p.conditional_assign(&a, !p.inf);
        }
    }

    /// `e*self` with a signed 4-bit fixed window
    pub fn mul(&self, e: &Big) -> Self {
        scalar::window_mul(self, e)
    }

    /// `u[0]*q[0] + u[1]*q[1] + u[2]*q[2] + u[3]*q[3]`
    pub fn mul4(q: &[Self; 4], u: &[Big; 4]) -> Self {
        scalar::joint_mul4(q, u, BIGBITS)
    }

    /// [`mul4`](Self::mul4) for scalars known to have at most `bits` bits
    pub(crate) fn mul4_short(q: &[Self; 4], u: &[Big; 4], bits: usize) -> Self {
        scalar::joint_mul4(q, u, bits)
    }

    /// Encoding `Xa | Xb | Ya | Yb`; infinity encodes as all zeros, which
    /// is not on the twist
    pub fn to_bytes(&self) -> [u8; TWIST_POINT_SIZE] {
        let mut out = [0u8; TWIST_POINT_SIZE];
        if let Some((x, y)) = self.get() {
            out[..FP2_SIZE].copy_from_slice(&x.to_bytes());
            out[FP2_SIZE..].copy_from_slice(&y.to_bytes());
        }
        out
    }

    /// Decode a [`to_bytes`](Self::to_bytes) encoding, checking the twist
    /// equation
    pub fn from_bytes(bytes: &[u8; TWIST_POINT_SIZE]) -> Result<Self> {
        const CTX: &str = "twist point";
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::infinity());
        }
        let coordinate = |off: usize| -> Result<Fp2<C::Field>> {
            let mut arr = [0u8; FP2_SIZE];
            arr.copy_from_slice(&bytes[off..off + FP2_SIZE]);
            Option::from(Fp2::from_bytes(&arr)).ok_or(Error::Encoding {
                context: CTX,
                reason: "coordinate not below the modulus",
            })
        };
        let x = coordinate(0)?;
        let y = coordinate(2 * MODBYTES)?;
        let p = Self::from_affine(x, y);
        validate::point(p.is_some(), CTX, "not on the twist")?;
        Ok(p.unwrap_or(Self::infinity()))
    }

    /// Decode from a slice, checking its length first
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("twist point", bytes.len(), TWIST_POINT_SIZE)?;
        let mut arr = [0u8; TWIST_POINT_SIZE];
        arr.copy_from_slice(bytes);
        Self::from_bytes(&arr)
    }
}

impl<C: PairingCurve> ProjectivePoint for TwistPoint<C> {
    const NAME: &'static str = C::NAME;

    fn identity() -> Self {
        Self::infinity()
    }

    fn is_identity(&self) -> bool {
        self.inf.into()
    }

    fn dbl_assign(&mut self) {
        self.dbl_step();
    }

    fn add_assign_point(&mut self, q: &Self) {
        self.add_step(q);
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

impl<C: PairingCurve> Default for TwistPoint<C> {
    fn default() -> Self {
        Self::infinity()
    }
}

impl<C: PairingCurve> zeroize::DefaultIsZeroes for TwistPoint<C> {}

impl<C: PairingCurve> ConstantTimeEq for TwistPoint<C> {
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

impl<C: PairingCurve> PartialEq for TwistPoint<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<C: PairingCurve> Eq for TwistPoint<C> {}

impl<C: PairingCurve> ConditionallySelectable for TwistPoint<C> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        TwistPoint {
            x: Fp2::conditional_select(&a.x, &b.x, choice),
            y: Fp2::conditional_select(&a.y, &b.y, choice),
            z: Fp2::conditional_select(&a.z, &b.z, choice),
            inf: Choice::conditional_select(&a.inf, &b.inf, choice),
            _curve: PhantomData,
        }
    }
}

impl<C: PairingCurve> fmt::Debug for TwistPoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            None => write!(f, "{}::G2::Infinity", C::NAME),
            Some((x, y)) => write!(f, "{}::G2({}, {})", C::NAME, x, y),
        }
    }
}

impl<C: PairingCurve> fmt::Display for TwistPoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            None => write!(f, "Infinity"),
            Some((x, y)) => write!(f, "({},{})", x, y),
        }
    }
}

impl_point_ops!(TwistPoint, PairingCurve);
