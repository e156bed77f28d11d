//! Quartic extension `Fp4 = Fp2[j] / (j^2 - (1 + i))` and XTR trace
//! arithmetic

use core::fmt;

use milagro_params::arch::Chunk;
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::config::FieldConfig;
use super::fp2::Fp2;
use crate::bigint::Big;

/// Element `a + b*j` with `j^2 = 1 + i`
#[derive(Clone, Copy)]
pub struct Fp4<F: FieldConfig> {
    /// Constant part
    pub a: Fp2<F>,
    /// Coefficient of `j`
    pub b: Fp2<F>,
}

impl<F: FieldConfig> Fp4<F> {
    /// Build from two quadratic elements
    #[inline]
    pub const fn new(a: Fp2<F>, b: Fp2<F>) -> Self {
        Fp4 { a, b }
    }

    /// Embed a quadratic element
    pub fn from_fp2(a: Fp2<F>) -> Self {
        Fp4::new(a, Fp2::zero())
    }

    /// Zero
    pub fn zero() -> Self {
        Fp4::new(Fp2::zero(), Fp2::zero())
    }

    /// One
    pub fn one() -> Self {
        Fp4::from_fp2(Fp2::one())
    }

    /// Uniformly random element
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Fp4::new(Fp2::random(rng), Fp2::random(rng))
    }

    /// Constant-time zero test
    pub fn is_zero(&self) -> Choice {
        self.a.is_zero() & self.b.is_zero()
    }

    /// Constant-time test for one
    pub fn is_one(&self) -> Choice {
        self.a.is_one() & self.b.is_zero()
    }

    /// Whether the `j` coefficient vanishes
    pub fn is_real(&self) -> Choice {
        self.b.is_zero()
    }

    /// Reduce every coefficient below `p`
    pub fn reduce(&mut self) {
        self.a.reduce();
        self.b.reduce();
    }

    /// Propagate carries in every coefficient
    pub fn norm(&mut self) {
        self.a.norm();
        self.b.norm();
    }

    /// Conditionally replace with `g`
    pub fn cmove(&mut self, g: &Self, d: Choice) {
        self.a.cmove(&g.a, d);
        self.b.cmove(&g.b, d);
    }

    /// Negation with a single quadratic negation
    pub fn neg(&self) -> Self {
        let mut m = self.a.add(&self.b).neg();
        m.norm();
        Fp4::new(m.add(&self.b), m.add(&self.a))
    }

    /// `a - b*j`
    pub fn conj(&self) -> Self {
        let mut b = self.b.neg();
        b.norm();
        Fp4::new(self.a, b)
    }

    /// `-a + b*j`
    pub fn nconj(&self) -> Self {
        let mut a = self.a.neg();
        a.norm();
        Fp4::new(a, self.b)
    }

    /// Sum
    pub fn add(&self, y: &Self) -> Self {
        Fp4::new(self.a.add(&y.a), self.b.add(&y.b))
    }

    /// Difference
    pub fn sub(&self, y: &Self) -> Self {
        self.add(&y.neg())
    }

    /// Multiply by a quadratic element
    pub fn pmul(&self, s: &Fp2<F>) -> Self {
        Fp4::new(self.a.mul(s), self.b.mul(s))
    }

    /// Multiply by a small signed integer
    pub fn imul(&self, s: Chunk) -> Self {
        Fp4::new(self.a.imul(s), self.b.imul(s))
    }

    /// Square
    pub fn square(&self) -> Self {
        let t3 = self.a.mul(&self.b);
        let t1 = self.a.add(&self.b);
        let t2 = self.a.add(&self.b.mul_ip());
        let wa = t1.mul(&t2);
        let t2 = t3.mul_ip().add(&t3).neg();
        let mut w = Fp4::new(wa.add(&t2), t3.add(&t3));
        w.norm();
        w
    }

    /// Karatsuba product
    pub fn mul(&self, y: &Self) -> Self {
        let t1 = self.a.mul(&y.a);
        let t2 = self.b.mul(&y.b);
        let t3 = y.b.add(&y.a);
        let t4 = self.b.add(&self.a).mul(&t3).sub(&t1);
        let mut w = Fp4::new(t2.mul_ip().add(&t1), t4.sub(&t2));
        w.norm();
        w
    }

    /// Inverse; the inverse of zero is zero
    pub fn inv(&self) -> Self {
        let t1 = self.a.square();
        let t2 = self.b.square().mul_ip();
        let t1 = t1.sub(&t2).inv();
        Fp4::new(t1.mul(&self.a), t1.neg().mul(&self.b))
    }

    /// Multiply by `j`
    pub fn times_i(&self) -> Self {
        Fp4::new(self.b.mul_ip(), self.a)
    }

    /// Frobenius `x -> x^p`, where `f` is the Frobenius constant of `j`
    pub fn frob(&self, f: &Fp2<F>) -> Self {
        Fp4::new(self.a.conj(), f.mul(&self.b.conj()))
    }

    /// Exponentiation by a public exponent
    pub fn pow(&self, e: &Big) -> Self {
        let mut z = *e;
        z.norm();
        let mut w = *self;
        let mut r = Fp4::one();
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

    /// XTR addition step `x.a*(w - y) + j*x.b*(w + y) + z`
    pub fn xtr_a(w: &Self, x: &Self, y: &Self, z: &Self) -> Self {
        let t1 = w.sub(y).pmul(&x.a);
        let t2 = w.add(y).pmul(&x.b).times_i();
        let mut r = t1.add(&t2).add(z);
        r.norm();
        r
    }

    /// XTR doubling step `x^2 - 2*conj(x)`
    pub fn xtr_d(&self) -> Self {
        let w = self.conj();
        let mut r = self.square().sub(&w.add(&w));
        r.reduce();
        r
    }

    /// Trace of `g^n` from the trace `self` of `g`
    pub fn xtr_pow(&self, n: &Big) -> Self {
        let mut x = *self;
        let mut a = Fp4::from_fp2(Fp2::from_ints(3, 0));
        let mut b = x;
        let mut c = x.xtr_d();

        let mut n = *n;
        n.norm();
        let par = n.parity();
        let mut v = n;
        v.shr(1);
        if par == 0 {
            v.dec(1);
            v.norm();
        }

        for i in (0..v.nbits()).rev() {
            if v.bit(i) == 0 {
                let t = b;
                x = x.conj();
                c = c.conj();
                b = Fp4::xtr_a(&a, &b, &x, &c);
                x = x.conj();
                c = t.xtr_d();
                a = a.xtr_d();
            } else {
                let t = a.conj();
                a = b.xtr_d();
                b = Fp4::xtr_a(&c, &b, &x, &t);
                c = c.xtr_d();
            }
        }

        let mut r = if par == 0 { c } else { b };
        r.reduce();
        r
    }

    /// Trace of `g^(b*k + a*l)` from the traces of `g^k`, `g^l`,
    /// `g^(k-l)` and `g^(k-2l)`
    ///
    /// `a` scales the exponent `l` and `b` scales `k`.
    pub fn xtr_pow2(ck: &Self, cl: &Self, ckml: &Self, ckm2l: &Self, a: &Big, b: &Big) -> Self {
        let mut e = *a;
        let mut d = *b;
        e.norm();
        d.norm();
        let mut cu = *ck;
        let mut cv = *cl;
        let mut cumv = *ckml;
        let mut cum2v = *ckm2l;

        let mut f2 = 0;
        while d.parity() == 0 && e.parity() == 0 {
            d.shr(1);
            e.shr(1);
            f2 += 1;
        }

        while Big::comp(&d, &e) != 0 {
            if Big::comp(&d, &e) > 0 {
                let mut w = e;
                w.imul(4);
                w.norm();
                if Big::comp(&d, &w) <= 0 {
                    let w = d;
                    d = e;
                    e = w.minus(&e);
                    e.norm();
                    let t = Fp4::xtr_a(&cu, &cv, &cumv, &cum2v);
                    cum2v = cumv.conj();
                    cumv = cv;
                    cv = cu;
                    cu = t;
                } else if d.parity() == 0 {
                    d.shr(1);
                    let r = cum2v.conj();
                    let t = Fp4::xtr_a(&cu, &cumv, &cv, &r);
                    cum2v = cumv.xtr_d();
                    cumv = t;
                    cu = cu.xtr_d();
                } else if e.parity() == 1 {
                    d.sub(&e);
                    d.norm();
                    d.shr(1);
                    let t = Fp4::xtr_a(&cu, &cv, &cumv, &cum2v);
                    cu = cu.xtr_d();
                    cum2v = cv.xtr_d().conj();
                    cv = t;
                } else {
                    let w = d;
                    d = e;
                    d.shr(1);
                    e = w;
                    let t = cumv.xtr_d();
                    cumv = cum2v.conj();
                    cum2v = t.conj();
                    let t = cv.xtr_d();
                    cv = cu;
                    cu = t;
                }
            }
            if Big::comp(&d, &e) < 0 {
                let mut w = d;
                w.imul(4);
                w.norm();
                if Big::comp(&e, &w) <= 0 {
                    e.sub(&d);
                    e.norm();
                    let t = Fp4::xtr_a(&cu, &cv, &cumv, &cum2v);
                    cum2v = cumv;
                    cumv = cu;
                    cu = t;
                } else if e.parity() == 0 {
                    let w = d;
                    d = e;
                    d.shr(1);
                    e = w;
                    let t = cumv.xtr_d();
                    cumv = cum2v.conj();
                    cum2v = t.conj();
                    let t = cv.xtr_d();
                    cv = cu;
                    cu = t;
                } else if d.parity() == 1 {
                    let mut w = e;
                    e = d;
                    w.sub(&d);
                    w.norm();
                    d = w;
                    d.shr(1);
                    let t = Fp4::xtr_a(&cu, &cv, &cumv, &cum2v);
                    cumv = cumv.conj();
                    cum2v = cu.xtr_d().conj();
                    cu = cv.xtr_d();
                    cv = t;
                } else {
                    d.shr(1);
                    let r = cum2v.conj();
                    let t = Fp4::xtr_a(&cu, &cumv, &cv, &r);
                    cum2v = cumv.xtr_d();
                    cumv = t;
                    cu = cu.xtr_d();
                }
            }
        }

        let mut r = Fp4::xtr_a(&cu, &cv, &cumv, &cum2v);
        for _ in 0..f2 {
            r = r.xtr_d();
        }
        r.xtr_pow(&d)
    }
}

impl<F: FieldConfig> Default for Fp4<F> {
    fn default() -> Self {
        Fp4::zero()
    }
}

impl<F: FieldConfig> zeroize::DefaultIsZeroes for Fp4<F> {}

impl<F: FieldConfig> fmt::Debug for Fp4<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp4({:?}, {:?})", self.a, self.b)
    }
}

impl<F: FieldConfig> fmt::Display for Fp4<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.a, self.b)
    }
}

impl<F: FieldConfig> ConstantTimeEq for Fp4<F> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.a.ct_eq(&other.a) & self.b.ct_eq(&other.b)
    }
}

impl<F: FieldConfig> PartialEq for Fp4<F> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<F: FieldConfig> Eq for Fp4<F> {}

impl<F: FieldConfig> ConditionallySelectable for Fp4<F> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp4::new(
            Fp2::conditional_select(&a.a, &b.a, choice),
            Fp2::conditional_select(&a.b, &b.b, choice),
        )
    }
}

impl_field_ops!(Fp4);
