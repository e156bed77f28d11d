//! Base field `GF(p)` with lazy reduction

use core::fmt;
use core::marker::PhantomData;

use milagro_params::arch::{Chunk, BIGBITS, MODBYTES, NEXCESS};
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::config::FieldConfig;
use super::reduce::ModularReduction;
use crate::bigint::Big;
use crate::error::{validate, Error, Result};

/// Element of the prime field described by `F`
///
/// The wrapped [`Big`] is in the internal representation chosen by
/// `F::Reduction` and may exceed `p` by a tracked excess. Results are only
/// canonical after [`Fp::reduce`] or on the way out through [`Fp::redc`].
#[derive(Clone, Copy)]
pub struct Fp<F: FieldConfig> {
    pub(crate) x: Big,
    _marker: PhantomData<F>,
}

impl<F: FieldConfig> Fp<F> {
    /// Wrap a value already in internal form
    #[inline]
    pub const fn from_raw(x: Big) -> Self {
        Fp {
            x,
            _marker: PhantomData,
        }
    }

    /// Convert a plain integer, reducing it modulo `p` first
    pub fn new(x: &Big) -> Self {
        let mut t = *x;
        t.rmod(&F::MODULUS);
        Fp::from_raw(F::Reduction::nres::<F>(&t))
    }

    /// Small signed integer
    pub fn from_int(c: Chunk) -> Self {
        if c < 0 {
            Fp::new(&Big::new_int(-c)).neg()
        } else {
            Fp::new(&Big::new_int(c))
        }
    }

    /// Parse a big-endian hex string
    pub fn from_hex(s: &str) -> Result<Self> {
        Big::from_hex(s).map(|x| Fp::new(&x))
    }

    /// Additive identity
    #[inline]
    pub fn zero() -> Self {
        Fp::from_raw(Big::new())
    }

    /// Multiplicative identity
    pub fn one() -> Self {
        Fp::new(&Big::one())
    }

    /// Uniformly random element
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Fp::new(&Big::randomnum(&F::MODULUS, rng))
    }

    /// Canonical plain integer in `[0, p)`
    pub fn redc(&self) -> Big {
        let t = canonical::<F>(&self.x);
        canonical::<F>(&F::Reduction::redc::<F>(&t))
    }

    /// Raw internal value
    #[inline]
    pub fn raw(&self) -> &Big {
        &self.x
    }

    /// Multiples of `2^MODBITS` currently carried
    #[inline]
    pub fn excess(&self) -> Chunk {
        F::excess(&self.x)
    }

    /// Reduce fully below `p` in a fixed number of steps
    #[inline]
    pub fn reduce(&mut self) {
        self.x = canonical::<F>(&self.x);
    }

    /// Propagate carries
    #[inline]
    pub fn norm(&mut self) {
        self.x.norm();
    }

    /// Constant-time zero test
    pub fn is_zero(&self) -> Choice {
        canonical::<F>(&self.x).ct_is_zero()
    }

    /// Constant-time test for one
    pub fn is_one(&self) -> Choice {
        self.ct_eq(&Fp::one())
    }

    /// Conditionally replace with `b`
    #[inline]
    pub fn cmove(&mut self, b: &Self, d: Choice) {
        self.x.cmove(&b.x, d);
    }

    /// Field multiplication
    pub fn mul(&self, b: &Self) -> Self {
        let mut a = *self;
        let (ea, eb) = (a.excess(), b.excess());
        if (ea + 1) * (eb + 1) + 1 >= F::FEXCESS {
            a.reduce();
        }
        let mut d = Big::mul(&a.x, &b.x);
        Fp::from_raw(F::Reduction::reduce::<F>(&mut d))
    }

    /// Field squaring
    pub fn square(&self) -> Self {
        let mut a = *self;
        let ea = a.excess();
        if (ea + 1) * (ea + 1) + 1 >= F::FEXCESS {
            a.reduce();
        }
        let mut d = Big::sqr(&a.x);
        Fp::from_raw(F::Reduction::reduce::<F>(&mut d))
    }

    /// Multiply by a small signed integer
    pub fn imul(&self, c: Chunk) -> Self {
        let mut a = self.x;
        a.norm();
        let (c, negate) = if c < 0 { (-c, true) } else { (c, false) };

        let afx = (F::excess(&a) + 1) * (c + 1) + 1;
        let r = if c < NEXCESS && afx < F::FEXCESS {
            a.imul(c);
            a
        } else if afx < F::FEXCESS {
            a.pmul(c);
            a
        } else {
            let mut d = a.pxmul(c);
            d.dmod(&F::MODULUS)
        };

        let mut r = Fp::from_raw(r);
        if negate {
            r = r.neg();
        }
        r.norm();
        r
    }

    /// Field addition, reducing only when the excess grows too large
    pub fn add(&self, b: &Self) -> Self {
        let mut r = Fp::from_raw(self.x.plus(&b.x));
        if r.excess() + 2 >= F::FEXCESS {
            r.reduce();
        }
        r
    }

    /// `2*self`
    #[inline]
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Negation as a multiple of `p` minus `self`
    pub fn neg(&self) -> Self {
        let mut a = self.x;
        a.norm();
        let ov = F::excess(&a);
        debug_assert!(ov >= 0);
        let sb = 1 + (Chunk::BITS - ov.leading_zeros()) as usize;

        let mut m = F::MODULUS;
        m.fshl(sb);
        m.sub(&a);
        let mut r = Fp::from_raw(m);
        if r.excess() >= F::FEXCESS {
            r.reduce();
        }
        r
    }

    /// Field subtraction
    #[inline]
    pub fn sub(&self, b: &Self) -> Self {
        self.add(&b.neg())
    }

    /// Halve, adding `p` first when the value is odd
    pub fn div2(&self) -> Self {
        let mut a = self.x;
        a.norm();
        let mut t = a.plus(&F::MODULUS);
        t.norm();
        a.cmove(&t, Choice::from((a.parity() & 1) as u8));
        a.fshr(1);
        Fp::from_raw(a)
    }

    /// Multiplicative inverse; the inverse of zero is zero
    pub fn inv(&self) -> Self {
        let w = Big::invmodp(&self.redc(), &F::MODULUS);
        Fp::new(&w)
    }

    /// Multiplicative inverse, none for zero
    pub fn invert(&self) -> CtOption<Self> {
        CtOption::new(self.inv(), !self.is_zero())
    }

    /// Exponentiation by a public exponent
    pub fn pow(&self, e: &Big) -> Self {
        let mut z = *e;
        z.norm();
        let mut w = *self;
        let mut r = Fp::one();
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

    /// Jacobi symbol of the element
    pub fn jacobi(&self) -> isize {
        Big::jacobi(&self.redc(), &F::MODULUS)
    }

    /// Whether the element is a non-zero square
    pub fn is_qr(&self) -> bool {
        self.jacobi() == 1
    }

    /// Square root, none when `self` is not a square
    ///
    /// Supports `p = 3 mod 4` and `p = 5 mod 8`.
    pub fn sqrt(&self) -> CtOption<Self> {
        let mut a = *self;
        a.reduce();
        let mut b = F::MODULUS;

        let mut r = match F::MOD8 {
            5 => {
                b.dec(5);
                b.norm();
                b.fshr(3);
                let i = a.double();
                let v = i.pow(&b);
                let i = i.mul(&v).mul(&v).sub(&Fp::one());
                a.mul(&v).mul(&i)
            }
            3 | 7 => {
                b.inc(1);
                b.norm();
                b.fshr(2);
                a.pow(&b)
            }
            _ => return CtOption::new(Fp::zero(), Choice::from(0)),
        };
        r.reduce();
        let is_root = r.square().ct_eq(&a);
        CtOption::new(r, is_root)
    }

    /// [`sqrt`](Self::sqrt) reporting a non-residue as an error
    pub fn sqrt_checked(&self) -> Result<Self> {
        let r = self.sqrt();
        validate::residue(r.is_some(), "Fp::sqrt")?;
        Ok(r.unwrap_or(Fp::zero()))
    }

    /// Parity of the canonical integer, used as the sign of a coordinate
    pub fn sign(&self) -> Choice {
        Choice::from((self.redc().parity() & 1) as u8)
    }

    /// Big-endian encoding of the canonical integer
    pub fn to_bytes(&self) -> [u8; MODBYTES] {
        self.redc().to_bytes()
    }

    /// Decode a big-endian integer, rejecting values not below `p`
    pub fn from_bytes(bytes: &[u8; MODBYTES]) -> CtOption<Self> {
        let x = Big::from_bytes(bytes);
        let canonical = Choice::from((Big::comp(&x, &F::MODULUS) < 0) as u8);
        CtOption::new(Fp::new(&x), canonical)
    }

    /// Decode from a slice, checking length and range
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: &[u8; MODBYTES] = bytes.try_into().map_err(|_| Error::Length {
            context: "field element",
            expected: MODBYTES,
            actual: bytes.len(),
        })?;
        Option::from(Fp::from_bytes(arr)).ok_or(Error::Encoding {
            context: "field element",
            reason: "value not below the modulus",
        })
    }
}

impl<F: FieldConfig> Default for Fp<F> {
    fn default() -> Self {
        Fp::zero()
    }
}

impl<F: FieldConfig> zeroize::DefaultIsZeroes for Fp<F> {}

impl<F: FieldConfig> fmt::Debug for Fp<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp<{}>(0x{:x})", F::NAME, self.redc())
    }
}

impl<F: FieldConfig> fmt::Display for Fp<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.redc())
    }
}

/// Value of `x` in `[0, p)`
///
/// A lazily reduced element stays below `2^BIGBITS <= p * 2^(BIGBITS - MODBITS + 1)`.
fn canonical<F: FieldConfig>(x: &Big) -> Big {
    let mut t = *x;
    t.ct_mod(&F::MODULUS, BIGBITS - F::MODBITS);
    t
}

impl<F: FieldConfig> ConstantTimeEq for Fp<F> {
    fn ct_eq(&self, other: &Self) -> Choice {
        canonical::<F>(&self.x).ct_eq(&canonical::<F>(&other.x))
    }
}

impl<F: FieldConfig> PartialEq for Fp<F> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<F: FieldConfig> Eq for Fp<F> {}

impl<F: FieldConfig> ConditionallySelectable for Fp<F> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp::from_raw(Big::conditional_select(&a.x, &b.x, choice))
    }
}

impl_field_ops!(Fp);
