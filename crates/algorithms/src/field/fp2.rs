//! Quadratic extension `Fp2 = Fp[i] / (i^2 + 1)`

use core::fmt;

use milagro_params::arch::{Chunk, MODBYTES};
use milagro_params::sizes::FP2_SIZE;
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::config::FieldConfig;
use super::fp::Fp;
use crate::bigint::Big;

/// Element `a + b*i` of the quadratic extension
///
/// Requires `p = 3 mod 4` so that `-1` is a non-residue.
#[derive(Clone, Copy)]
pub struct Fp2<F: FieldConfig> {
    /// Real part
    pub a: Fp<F>,
    /// Imaginary part
    pub b: Fp<F>,
}

impl<F: FieldConfig> Fp2<F> {
    /// Build from two base field elements
    #[inline]
    pub const fn new(a: Fp<F>, b: Fp<F>) -> Self {
        Fp2 { a, b }
    }

    /// Build from two plain integers
    pub fn from_bigs(a: &Big, b: &Big) -> Self {
        Fp2::new(Fp::new(a), Fp::new(b))
    }

    /// Embed a base field element
    pub fn from_fp(a: Fp<F>) -> Self {
        Fp2::new(a, Fp::zero())
    }

    /// Build from two small signed integers
    pub fn from_ints(a: Chunk, b: Chunk) -> Self {
        Fp2::new(Fp::from_int(a), Fp::from_int(b))
    }

    /// Zero
    pub fn zero() -> Self {
        Fp2::new(Fp::zero(), Fp::zero())
    }

    /// One
    pub fn one() -> Self {
        Fp2::from_fp(Fp::one())
    }

    /// Uniformly random element
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Fp2::new(Fp::random(rng), Fp::random(rng))
    }

    /// Constant-time zero test
    pub fn is_zero(&self) -> Choice {
        self.a.is_zero() & self.b.is_zero()
    }

    /// Constant-time test for one
    pub fn is_one(&self) -> Choice {
        self.a.is_one() & self.b.is_zero()
    }

    /// Reduce both parts below `p`
    pub fn reduce(&mut self) {
        self.a.reduce();
        self.b.reduce();
    }

    /// Propagate carries in both parts
    pub fn norm(&mut self) {
        self.a.norm();
        self.b.norm();
    }

    /// Conditionally replace with `g`
    pub fn cmove(&mut self, g: &Self, d: Choice) {
        self.a.cmove(&g.a, d);
        self.b.cmove(&g.b, d);
    }

    /// Negation with a single base field negation
    pub fn neg(&self) -> Self {
        let mut x = *self;
        x.norm();
        let mut m = x.a.add(&x.b).neg();
        m.norm();
        Fp2::new(m.add(&x.b), m.add(&x.a))
    }

    /// Complex conjugate `a - b*i`
    pub fn conj(&self) -> Self {
        Fp2::new(self.a, self.b.neg())
    }

    /// Sum
    pub fn add(&self, y: &Self) -> Self {
        Fp2::new(self.a.add(&y.a), self.b.add(&y.b))
    }

    /// Difference
    pub fn sub(&self, y: &Self) -> Self {
        self.add(&y.neg())
    }

    /// `2*self`
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Multiply by a base field element
    pub fn pmul(&self, s: &Fp<F>) -> Self {
        Fp2::new(self.a.mul(s), self.b.mul(s))
    }

    /// Multiply by a small signed integer
    pub fn imul(&self, s: Chunk) -> Self {
        Fp2::new(self.a.imul(s), self.b.imul(s))
    }

    /// Square via `(a+b)(a-b) + 2ab*i`
    pub fn square(&self) -> Self {
        let w3 = self.a.mul(&self.b);
        let w1 = self.a.add(&self.b);
        let mb = self.b.neg();
        let mut w = Fp2::new(w1.mul(&self.a.add(&mb)), w3.add(&w3));
        w.norm();
        w
    }

    /// Karatsuba product
    pub fn mul(&self, y: &Self) -> Self {
        let w1 = self.a.mul(&y.a);
        let w2 = self.b.mul(&y.b);
        let w5 = self.a.add(&self.b);
        let wb = y.a.add(&y.b).mul(&w5);
        let mw = w1.add(&w2).neg();
        let wb = wb.add(&mw);
        let mw = w1.add(&mw);
        let mut w = Fp2::new(w1.add(&mw), wb);
        w.norm();
        w
    }

    /// Inverse through the norm `a^2 + b^2`; the inverse of zero is zero
    pub fn inv(&self) -> Self {
        let mut x = *self;
        x.norm();
        let w1 = x.a.square().add(&x.b.square()).inv();
        Fp2::new(x.a.mul(&w1), x.b.mul(&w1.neg()))
    }

    /// Inverse, none for zero
    pub fn invert(&self) -> CtOption<Self> {
        CtOption::new(self.inv(), !self.is_zero())
    }

    /// Halve both parts
    pub fn div2(&self) -> Self {
        Fp2::new(self.a.div2(), self.b.div2())
    }

    /// Multiply by `1 + i`
    pub fn mul_ip(&self) -> Self {
        let mut t = *self;
        t.norm();
        let mut w = Fp2::new(t.a.sub(&t.b), t.a.add(&t.b));
        w.norm();
        w
    }

    /// Divide by `1 + i`
    pub fn div_ip(&self) -> Self {
        let mut w = *self;
        w.norm();
        Fp2::new(w.a.add(&w.b), w.b.sub(&w.a)).div2()
    }

    /// Exponentiation by a public exponent
    pub fn pow(&self, e: &Big) -> Self {
        let mut z = *e;
        z.norm();
        let mut w = *self;
        let mut r = Fp2::one();
        loop {
            let bt = z.parity();
            z.fshr(1);
            if bt == 1 {
                r = r.mul(&w);
            }
            if z.is_zero() {
                break;
            }
            w = w.square();
        }
        r.reduce();
        r
    }

    /// Square root, none when `self` is not a square
    ///
    /// Uses `sqrt(a + b*i) = x + b/(2x)*i` with `x^2 = (a +- sqrt(a^2+b^2))/2`.
    /// Runs in variable time.
    pub fn sqrt(&self) -> CtOption<Self> {
        let mut u = *self;
        u.reduce();
        if bool::from(u.is_zero()) {
            return CtOption::new(u, Choice::from(1));
        }

        let n = u.b.square().add(&u.a.square());
        if !n.is_qr() {
            return CtOption::new(Fp2::zero(), Choice::from(0));
        }
        let n = n.sqrt().unwrap_or(Fp::zero());

        if bool::from(u.b.is_zero()) && !u.a.is_qr() {
            // -a is a square and i^2 = -1
            let s = u.a.neg().sqrt().unwrap_or(Fp::zero());
            return CtOption::new(Fp2::new(Fp::zero(), s), Choice::from(1));
        }

        let mut w2 = u.a.add(&n).div2();
        if !w2.is_qr() {
            w2 = u.a.sub(&n).div2();
            if !w2.is_qr() {
                return CtOption::new(Fp2::zero(), Choice::from(0));
            }
        }
        let ra = w2.sqrt().unwrap_or(Fp::zero());
        let rb = u.b.mul(&ra.double().inv());
        let r = Fp2::new(ra, rb);
        let is_root = r.square().ct_eq(&u);
        CtOption::new(r, is_root)
    }

    /// Whether the element has a square root
    pub fn is_qr(&self) -> bool {
        self.sqrt().is_some().into()
    }

    /// Encoding `a | b`, each big-endian
    pub fn to_bytes(&self) -> [u8; FP2_SIZE] {
        let mut out = [0u8; FP2_SIZE];
        out[..MODBYTES].copy_from_slice(&self.a.to_bytes());
        out[MODBYTES..].copy_from_slice(&self.b.to_bytes());
        out
    }

    /// Decode `a | b`, rejecting values not below `p`
    pub fn from_bytes(bytes: &[u8; FP2_SIZE]) -> CtOption<Self> {
        let mut a = [0u8; MODBYTES];
        let mut b = [0u8; MODBYTES];
        a.copy_from_slice(&bytes[..MODBYTES]);
        b.copy_from_slice(&bytes[MODBYTES..]);
        Fp::from_bytes(&a).and_then(|a| Fp::from_bytes(&b).map(|b| Fp2::new(a, b)))
    }
}

impl<F: FieldConfig> Default for Fp2<F> {
    fn default() -> Self {
        Fp2::zero()
    }
}

impl<F: FieldConfig> zeroize::DefaultIsZeroes for Fp2<F> {}

impl<F: FieldConfig> fmt::Debug for Fp2<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + {:?}*i", self.a, self.b)
    }
}

impl<F: FieldConfig> fmt::Display for Fp2<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.a, self.b)
    }
}

impl<F: FieldConfig> ConstantTimeEq for Fp2<F> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.a.ct_eq(&other.a) & self.b.ct_eq(&other.b)
    }
}

impl<F: FieldConfig> PartialEq for Fp2<F> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<F: FieldConfig> Eq for Fp2<F> {}

impl<F: FieldConfig> ConditionallySelectable for Fp2<F> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp2::new(
            Fp::conditional_select(&a.a, &b.a, choice),
            Fp::conditional_select(&a.b, &b.b, choice),
        )
    }
}

impl_field_ops!(Fp2);
