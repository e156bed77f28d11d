//! Degree-12 extension `Fp12 = Fp4[k] / (k^3 - j)`, the pairing target
//! field

use core::fmt;

use milagro_params::arch::{BIGBITS, MODBYTES};
use milagro_params::sizes::FP12_SIZE;
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::config::FieldConfig;
use super::fp::Fp;
use super::fp2::Fp2;
use super::fp4::Fp4;
use crate::bigint::Big;
use crate::window;

/// Element `a + b*k + c*k^2` with `k^3 = j`
#[derive(Clone, Copy)]
pub struct Fp12<F: FieldConfig> {
    /// Constant part
    pub a: Fp4<F>,
    /// Coefficient of `k`
    pub b: Fp4<F>,
    /// Coefficient of `k^2`
    pub c: Fp4<F>,
}

impl<F: FieldConfig> Fp12<F> {
    /// Build from three quartic elements
    #[inline]
    pub const fn new(a: Fp4<F>, b: Fp4<F>, c: Fp4<F>) -> Self {
        Fp12 { a, b, c }
    }

    /// Embed a quartic element
    pub fn from_fp4(a: Fp4<F>) -> Self {
        Fp12::new(a, Fp4::zero(), Fp4::zero())
    }

    /// Zero
    pub fn zero() -> Self {
        Fp12::new(Fp4::zero(), Fp4::zero(), Fp4::zero())
    }

    /// One
    pub fn one() -> Self {
        Fp12::from_fp4(Fp4::one())
    }

    /// Uniformly random element
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Fp12::new(Fp4::random(rng), Fp4::random(rng), Fp4::random(rng))
    }

    /// Constant-time zero test
    pub fn is_zero(&self) -> Choice {
        self.a.is_zero() & self.b.is_zero() & self.c.is_zero()
    }

    /// Constant-time test for one
    pub fn is_one(&self) -> Choice {
        self.a.is_one() & self.b.is_zero() & self.c.is_zero()
    }

    /// Reduce every coefficient below `p`
    pub fn reduce(&mut self) {
        self.a.reduce();
        self.b.reduce();
        self.c.reduce();
    }

    /// Propagate carries in every coefficient
    pub fn norm(&mut self) {
        self.a.norm();
        self.b.norm();
        self.c.norm();
    }

    /// Conditionally replace with `g`
    pub fn cmove(&mut self, g: &Self, d: Choice) {
        self.a.cmove(&g.a, d);
        self.b.cmove(&g.b, d);
        self.c.cmove(&g.c, d);
    }

    /// Conjugate over `Fp6`, the inverse of a unitary element
    pub fn conj(&self) -> Self {
        Fp12::new(self.a.conj(), self.b.nconj(), self.c.conj())
    }

    /// Sum
    pub fn add(&self, y: &Self) -> Self {
        Fp12::new(self.a.add(&y.a), self.b.add(&y.b), self.c.add(&y.c))
    }

    /// Difference
    pub fn sub(&self, y: &Self) -> Self {
        Fp12::new(self.a.sub(&y.a), self.b.sub(&y.b), self.c.sub(&y.c))
    }

    /// Negation
    pub fn neg(&self) -> Self {
        Fp12::new(self.a.neg(), self.b.neg(), self.c.neg())
    }

    /// Granger-Scott squaring, valid only for unitary elements
    pub fn usqr(&self) -> Self {
        let a2 = self.a.square();
        let wa = a2.add(&a2).add(&a2);
        let na = self.a.nconj();
        let wa = wa.add(&na.add(&na));

        let b = self.c.square().times_i();
        let b = b.add(&b.add(&b));

        let c = self.b.square();
        let c = c.add(&c.add(&c));

        let wb = self.b.conj();
        let wb = b.add(&wb.add(&wb));
        let wc = self.c.nconj();
        let wc = c.add(&wc.add(&wc));

        let mut w = Fp12::new(wa, wb, wc);
        w.reduce();
        w
    }

    /// Chung-Hasan squaring
    pub fn square(&self) -> Self {
        let a = self.a.square();
        let b = self.b.mul(&self.c);
        let b = b.add(&b);
        let c = self.c.square();
        let d = self.a.mul(&self.b);
        let d = d.add(&d);

        let wc = self.b.add(&self.a.add(&self.c)).square();
        let s = a.add(&b).add(&c).add(&d).neg();

        let mut w = Fp12::new(a.add(&b.times_i()), c.times_i().add(&d), wc.add(&s));
        w.norm();
        w
    }

    /// Full product
    pub fn mul(&self, y: &Self) -> Self {
        let z0 = self.a.mul(&y.a);
        let z2 = self.b.mul(&y.b);
        let z1 = self.a.add(&self.b).mul(&y.a.add(&y.b));
        let z3 = self.b.add(&self.c).mul(&y.b.add(&y.c));

        let t0 = z0.neg();
        let t1 = z2.neg();
        let z1 = z1.add(&t0);
        let wb = z1.add(&t1);
        let z3 = z3.add(&t1);
        let z2 = z2.add(&t0);

        let t0 = self.a.add(&self.c).mul(&y.a.add(&y.c));
        let z2 = z2.add(&t0);
        let t0 = self.c.mul(&y.c);
        let t1 = t0.neg();

        let wc = z2.add(&t1);
        let z3 = z3.add(&t1);
        let wb = wb.add(&t0.times_i());
        let wa = z0.add(&z3.times_i());

        let mut w = Fp12::new(wa, wb, wc);
        w.norm();
        w
    }

    /// Product with a sparse line value whose `c` part is zero and whose
    /// `b` part has a zero `j` coefficient
    pub fn smul(&self, y: &Self) -> Self {
        let yb = &y.b.a;
        let z0 = self.a.mul(&y.a);
        let z2 = self.b.pmul(yb);

        let mut t1 = y.a;
        t1.a = t1.a.add(yb);
        let wb = self.a.add(&self.b).mul(&t1);
        let z3 = self.b.add(&self.c).pmul(yb);

        let t0 = z0.neg();
        let t1 = z2.neg();
        let wb = wb.add(&t0).add(&t1);
        let z3 = z3.add(&t1);
        let z2 = z2.add(&t0);

        let t0 = y.a.mul(&self.a.add(&self.c));
        let wc = z2.add(&t0);
        let wa = z0.add(&z3.times_i());

        let mut w = Fp12::new(wa, wb, wc);
        w.norm();
        w
    }

    /// Inverse; the inverse of zero is zero
    pub fn inv(&self) -> Self {
        let mut x = *self;
        x.norm();

        let f0 = x.a.square().sub(&x.b.mul(&x.c).times_i());
        let f1 = x.c.square().times_i().sub(&x.a.mul(&x.b));
        let f2 = x.b.square().sub(&x.a.mul(&x.c));

        let f3 = x.b.mul(&f2).times_i();
        let f3 = f0.mul(&x.a).add(&f3);
        let f3 = f1.mul(&x.c).times_i().add(&f3);
        let f3 = f3.inv();

        Fp12::new(f0.mul(&f3), f1.mul(&f3), f2.mul(&f3))
    }

    /// Inverse, none for zero
    pub fn invert(&self) -> CtOption<Self> {
        CtOption::new(self.inv(), !self.is_zero())
    }

    /// Constant-time power of a unitary element by a secret exponent of at
    /// most `bts` bits
    pub fn pinpow(&self, e: u32, bts: usize) -> Self {
        let mut r0 = Fp12::one();
        let mut r1 = *self;
        for i in (0..bts).rev() {
            let b = Choice::from(((e >> i) & 1) as u8);
            Fp12::conditional_swap(&mut r0, &mut r1, b);
            r1 = r1.mul(&r0);
            r0 = r0.usqr();
            Fp12::conditional_swap(&mut r0, &mut r1, b);
        }
        r0
    }

    /// Power of a unitary element by a public exponent
    ///
    /// Squarings use [`Fp12::usqr`], so `self` must lie in the cyclotomic
    /// subgroup, as every pairing output does.
    pub fn pow(&self, e: &Big) -> Self {
        let mut z = *e;
        z.norm();
        let mut w = *self;
        let mut r = Fp12::one();
        loop {
            let bt = z.parity();
            z.fshr(1);
            if bt == 1 {
                r = r.mul(&w);
            }
            if z.is_zero() {
                break;
            }
            w = w.usqr();
        }
        r.reduce();
        r
    }

    /// `q[0]^u[0] * q[1]^u[1] * q[2]^u[2] * q[3]^u[3]` for unitary `q`
    ///
    /// Signed one-bit joint windows with a table lookup that touches every
    /// entry. The number of windows covers the full `Big` width.
    pub fn pow4(q: &[Fp12<F>; 4], u: &[Big; 4]) -> Self {
        Self::pow4_short(q, u, BIGBITS)
    }

    /// [`pow4`](Self::pow4) for exponents known to have at most `bits` bits
    pub(crate) fn pow4_short(q: &[Fp12<F>; 4], u: &[Big; 4], bits: usize) -> Self {
        let mut t = *u;

        let mut g = [Fp12::one(); 8];
        let p_over_q = q[0].mul(&q[1].conj());
        let pq = q[0].mul(&q[1]);
        g[..4].fill(p_over_q);
        g[4..].fill(pq);

        let r_over_s = q[2].mul(&q[3].conj());
        let s0 = r_over_s.conj();
        g[1] = g[1].mul(&s0);
        g[2] = g[2].mul(&r_over_s);
        g[5] = g[5].mul(&s0);
        g[6] = g[6].mul(&r_over_s);

        let rs = q[2].mul(&q[3]);
        let s0 = rs.conj();
        g[0] = g[0].mul(&s0);
        g[3] = g[3].mul(&rs);
        g[4] = g[4].mul(&s0);
        g[7] = g[7].mul(&rs);

        // Even exponents are bumped by one and fixed up at the end
        let mut c = Fp12::one();
        for (ti, qi) in t.iter_mut().zip(q.iter()) {
            ti.norm();
            let even = Choice::from((1 - ti.parity()) as u8);
            let mut bumped = *ti;
            bumped.inc(1);
            bumped.norm();
            ti.cmove(&bumped, even);
            let cq = c.mul(qi);
            c.cmove(&cq, even);
        }
        let c = c.conj();

        let (w, nb) = window::joint4(&t, bits);
        let mut p = window::select(&g, w[nb], Fp12::conj);
        for &d in w[..nb].iter().rev() {
            let s = window::select(&g, d, Fp12::conj);
            p = p.usqr().mul(&s);
        }
        let mut p = p.mul(&c);
        p.reduce();
        p
    }

    /// Frobenius `x -> x^p`, where `f` is the Frobenius constant of `k`
    pub fn frob(&self, f: &Fp2<F>) -> Self {
        let f2 = f.square();
        let f3 = f2.mul(f);
        Fp12::new(
            self.a.frob(&f3),
            self.b.frob(&f3).pmul(f),
            self.c.frob(&f3).pmul(&f2),
        )
    }

    /// Trace over `Fp4`
    pub fn trace(&self) -> Fp4<F> {
        let mut w = self.a.imul(3);
        w.reduce();
        w
    }

    /// The twelve base field coefficients in encoding order
    fn coefficients(&self) -> [&Fp<F>; 12] {
        [
            &self.a.a.a, &self.a.a.b, &self.a.b.a, &self.a.b.b,
            &self.b.a.a, &self.b.a.b, &self.b.b.a, &self.b.b.b,
            &self.c.a.a, &self.c.a.b, &self.c.b.a, &self.c.b.b,
        ]
    }

    /// Encoding of the twelve coefficients, each big-endian
    pub fn to_bytes(&self) -> [u8; FP12_SIZE] {
        let mut out = [0u8; FP12_SIZE];
        for (chunk, x) in out.chunks_exact_mut(MODBYTES).zip(self.coefficients()) {
            chunk.copy_from_slice(&x.to_bytes());
        }
        out
    }

    /// Decode twelve coefficients, rejecting any not below `p`
    pub fn from_bytes(bytes: &[u8; FP12_SIZE]) -> CtOption<Self> {
        let mut ok = Choice::from(1);
        let mut x = [Fp::<F>::zero(); 12];
        for (xi, chunk) in x.iter_mut().zip(bytes.chunks_exact(MODBYTES)) {
            let mut buf = [0u8; MODBYTES];
            buf.copy_from_slice(chunk);
            let v = Fp::from_bytes(&buf);
            ok &= v.is_some();
            *xi = v.unwrap_or(Fp::zero());
        }
        let fp4 = |i: usize| Fp4::new(Fp2::new(x[i], x[i + 1]), Fp2::new(x[i + 2], x[i + 3]));
        CtOption::new(Fp12::new(fp4(0), fp4(4), fp4(8)), ok)
    }
}

impl<F: FieldConfig> Default for Fp12<F> {
    fn default() -> Self {
        Fp12::zero()
    }
}

impl<F: FieldConfig> zeroize::DefaultIsZeroes for Fp12<F> {}

impl<F: FieldConfig> fmt::Debug for Fp12<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp12({:?}, {:?}, {:?})", self.a, self.b, self.c)
    }
}

impl<F: FieldConfig> fmt::Display for Fp12<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{},{}]", self.a, self.b, self.c)
    }
}

impl<F: FieldConfig> ConstantTimeEq for Fp12<F> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.a.ct_eq(&other.a) & self.b.ct_eq(&other.b) & self.c.ct_eq(&other.c)
    }
}

impl<F: FieldConfig> PartialEq for Fp12<F> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<F: FieldConfig> Eq for Fp12<F> {}

impl<F: FieldConfig> ConditionallySelectable for Fp12<F> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp12::new(
            Fp4::conditional_select(&a.a, &b.a, choice),
            Fp4::conditional_select(&a.b, &b.b, choice),
            Fp4::conditional_select(&a.c, &b.c, choice),
        )
    }
}

impl_field_ops!(Fp12);
