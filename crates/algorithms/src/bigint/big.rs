//! Single-width integers in signed 56-bit limbs

use core::fmt;

use milagro_internal::constant_time::{ct_assign, ct_swap};
use milagro_params::arch::{Chunk, DChunk, BASEBITS, BMASK, DNLEN, MODBYTES, NLEN};
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use super::arith::muladd;
use super::DBig;
use crate::error::{validate, Error, Result};

/// Right shift that brings the top limb's overflow above `8*MODBYTES` bits
/// down to bit 0
const TOP_SHIFT: usize = (8 * MODBYTES) % BASEBITS;

/// Fixed-width integer of [`NLEN`] limbs with lazy carry propagation
///
/// Limbs are signed and may temporarily exceed `2^BASEBITS` after `add`,
/// `sub` or `imul`; [`Big::norm`] brings every limb but the top one back into
/// `[0, 2^BASEBITS)`.
#[derive(Clone, Copy, Default, Zeroize)]
pub struct Big {
    pub(crate) w: [Chunk; NLEN],
}

impl Big {
    /// Zero
    pub const fn new() -> Big {
        Big { w: [0; NLEN] }
    }

    /// Wrap a limb table from the constant ROM
    pub const fn from_limbs(w: [Chunk; NLEN]) -> Big {
        Big { w }
    }

    /// Small non-negative integer
    pub const fn new_int(x: Chunk) -> Big {
        let mut w = [0; NLEN];
        w[0] = x;
        Big { w }
    }

    /// One
    pub const fn one() -> Big {
        Big::new_int(1)
    }

    /// Raw limbs
    pub fn limbs(&self) -> &[Chunk; NLEN] {
        &self.w
    }

    /// Set to zero
    pub fn zero(&mut self) {
        self.w = [0; NLEN];
    }

    /// Test for zero without normalizing
    pub fn is_zero(&self) -> bool {
        self.w.iter().all(|&x| x == 0)
    }

    /// Test for one without normalizing
    pub fn is_one(&self) -> bool {
        self.w[0] == 1 && self.w[1..].iter().all(|&x| x == 0)
    }

    /// Constant-time zero test of the normalized value
    pub fn ct_is_zero(&self) -> Choice {
        self.ct_eq(&Big::new())
    }

    /// `self += y`, limb-wise, no carry propagation
    pub fn add(&mut self, y: &Big) {
        for i in 0..NLEN {
            self.w[i] += y.w[i];
        }
    }

    /// `self -= y`, limb-wise, no carry propagation
    pub fn sub(&mut self, y: &Big) {
        for i in 0..NLEN {
            self.w[i] -= y.w[i];
        }
    }

    /// `self = y - self`, limb-wise
    pub fn rsub(&mut self, y: &Big) {
        for i in 0..NLEN {
            self.w[i] = y.w[i] - self.w[i];
        }
    }

    /// Sum as a new value
    pub fn plus(&self, y: &Big) -> Big {
        let mut s = *self;
        s.add(y);
        s
    }

    /// Difference as a new value
    pub fn minus(&self, y: &Big) -> Big {
        let mut s = *self;
        s.sub(y);
        s
    }

    /// Add a small integer to the bottom limb
    pub fn inc(&mut self, x: Chunk) {
        self.w[0] += x;
    }

    /// Subtract a small integer from the bottom limb
    pub fn dec(&mut self, x: Chunk) {
        self.w[0] -= x;
    }

    /// Multiply by a small integer below `NEXCESS`, no carry propagation
    pub fn imul(&mut self, c: Chunk) {
        for i in 0..NLEN {
            self.w[i] *= c;
        }
    }

    /// Multiply by a limb-sized integer, returning the carry out of the top
    /// limb
    pub fn pmul(&mut self, c: Chunk) -> Chunk {
        let mut carry = 0;
        for i in 0..NLEN {
            let ak = self.w[i];
            self.w[i] = 0;
            carry = muladd(ak, c, carry, &mut self.w[i]);
        }
        carry
    }

    /// Multiply by a limb-sized integer into a double-width result
    pub fn pxmul(&self, c: Chunk) -> DBig {
        let mut m = DBig::new();
        let mut carry = 0;
        for j in 0..NLEN {
            carry = muladd(self.w[j], c, carry, &mut m.w[j]);
        }
        m.w[NLEN] = carry;
        m
    }

    /// Divide by 3 in place, returning the remainder
    pub fn div3(&mut self) -> Chunk {
        let base = 1 << BASEBITS;
        let mut carry = 0;
        self.norm();
        for i in (0..NLEN).rev() {
            let ak = carry * base + self.w[i];
            self.w[i] = ak / 3;
            carry = ak % 3;
        }
        carry
    }

    /// Propagate carries so every limb but the top one is in `[0, 2^BASEBITS)`
    ///
    /// Returns the bits of the top limb above `8*MODBYTES`.
    pub fn norm(&mut self) -> Chunk {
        let mut carry = 0;
        for i in 0..NLEN - 1 {
            let d = self.w[i] + carry;
            self.w[i] = d & BMASK;
            carry = d >> BASEBITS;
        }
        self.w[NLEN - 1] += carry;
        self.w[NLEN - 1] >> TOP_SHIFT
    }

    /// Shift left by fewer than `BASEBITS` bits, returning the overflow above
    /// `8*MODBYTES`
    pub fn fshl(&mut self, k: usize) -> Chunk {
        debug_assert!(k < BASEBITS);
        self.w[NLEN - 1] = (self.w[NLEN - 1] << k) | (self.w[NLEN - 2] >> (BASEBITS - k));
        for i in (1..NLEN - 1).rev() {
            self.w[i] = ((self.w[i] << k) & BMASK) | (self.w[i - 1] >> (BASEBITS - k));
        }
        self.w[0] = (self.w[0] << k) & BMASK;
        self.w[NLEN - 1] >> TOP_SHIFT
    }

    /// Shift left by any number of bits
    pub fn shl(&mut self, k: usize) {
        let n = k % BASEBITS;
        let m = k / BASEBITS;
        if m >= NLEN {
            self.zero();
            return;
        }

        let mut top = self.w[NLEN - 1 - m] << n;
        if m + 2 <= NLEN {
            top |= self.w[NLEN - m - 2] >> (BASEBITS - n);
        }
        self.w[NLEN - 1] = top;
        for i in (m + 1..NLEN - 1).rev() {
            self.w[i] = ((self.w[i - m] << n) & BMASK) | (self.w[i - m - 1] >> (BASEBITS - n));
        }
        if m < NLEN - 1 {
            self.w[m] = (self.w[0] << n) & BMASK;
        }
        for i in 0..m {
            self.w[i] = 0;
        }
    }

    /// Shift right by fewer than `BASEBITS` bits, returning the bits shifted
    /// out
    pub fn fshr(&mut self, k: usize) -> Chunk {
        debug_assert!(k > 0 && k < BASEBITS);
        let r = self.w[0] & ((1 << k) - 1);
        for i in 0..NLEN - 1 {
            self.w[i] = (self.w[i] >> k) | ((self.w[i + 1] << (BASEBITS - k)) & BMASK);
        }
        self.w[NLEN - 1] >>= k;
        r
    }

    /// Shift right by any number of bits
    pub fn shr(&mut self, k: usize) {
        let n = k % BASEBITS;
        let m = k / BASEBITS;
        if m >= NLEN {
            self.zero();
            return;
        }
        for i in 0..NLEN - m - 1 {
            self.w[i] = (self.w[m + i] >> n) | ((self.w[m + i + 1] << (BASEBITS - n)) & BMASK);
        }
        self.w[NLEN - m - 1] = self.w[NLEN - 1] >> n;
        for i in NLEN - m..NLEN {
            self.w[i] = 0;
        }
    }

    /// Three-way comparison of normalized values: -1, 0 or 1
    ///
    /// Variable time. Only for public values such as moduli and exponents.
    pub fn comp(a: &Big, b: &Big) -> isize {
        for i in (0..NLEN).rev() {
            if a.w[i] == b.w[i] {
                continue;
            }
            return if a.w[i] > b.w[i] { 1 } else { -1 };
        }
        0
    }

    /// Number of significant bits
    pub fn nbits(&self) -> usize {
        let mut t = *self;
        t.norm();
        let mut k = NLEN as isize - 1;
        while k >= 0 && t.w[k as usize] == 0 {
            k -= 1;
        }
        if k < 0 {
            return 0;
        }
        let mut bts = BASEBITS * k as usize;
        let mut c = t.w[k as usize];
        while c != 0 {
            c /= 2;
            bts += 1;
        }
        bts
    }

    /// Lowest bit of a normalized value
    pub fn parity(&self) -> Chunk {
        self.w[0] % 2
    }

    /// Bit `n` of a normalized value
    pub fn bit(&self, n: usize) -> Chunk {
        (self.w[n / BASEBITS] >> (n % BASEBITS)) & 1
    }

    /// Lowest `n` bits of a normalized value
    pub fn lastbits(&self, n: usize) -> Chunk {
        self.w[0] & ((1 << n) - 1)
    }

    /// Full product, Comba schedule with double-width column sums
    pub(crate) fn mul_comba(a: &Big, b: &Big) -> DBig {
        let mut c = DBig::new();
        let mut co: DChunk = 0;
        for j in 0..DNLEN - 1 {
            let lo = j.saturating_sub(NLEN - 1);
            let hi = if j < NLEN - 1 { j } else { NLEN - 1 };
            let mut t = co;
            for i in lo..=hi {
                t += (a.w[j - i] as DChunk) * (b.w[i] as DChunk);
            }
            c.w[j] = (t as Chunk) & BMASK;
            co = t >> BASEBITS;
        }
        c.w[DNLEN - 1] = co as Chunk;
        c
    }

    /// Full product, row by row through [`muladd`]
    pub(crate) fn mul_schoolbook(a: &Big, b: &Big) -> DBig {
        let mut c = DBig::new();
        for i in 0..NLEN {
            let mut carry = 0;
            for j in 0..NLEN {
                carry = muladd(a.w[i], b.w[j], carry, &mut c.w[i + j]);
            }
            c.w[NLEN + i] = carry;
        }
        c
    }

    /// Full square, Comba schedule with doubled cross terms
    pub(crate) fn sqr_comba(a: &Big) -> DBig {
        let mut c = DBig::new();
        let mut co: DChunk = 0;
        for j in 0..DNLEN - 1 {
            let mut i = j.saturating_sub(NLEN - 1);
            let mut t: DChunk = 0;
            while 2 * i < j {
                t += (a.w[j - i] as DChunk) * (a.w[i] as DChunk);
                i += 1;
            }
            t += t;
            if j % 2 == 0 {
                let h = a.w[j / 2] as DChunk;
                t += h * h;
            }
            t += co;
            c.w[j] = (t as Chunk) & BMASK;
            co = t >> BASEBITS;
        }
        c.w[DNLEN - 1] = co as Chunk;
        c
    }

    /// Full square, row by row through [`muladd`]
    pub(crate) fn sqr_schoolbook(a: &Big) -> DBig {
        let mut c = DBig::new();
        for i in 0..NLEN {
            let mut carry = 0;
            for j in i + 1..NLEN {
                carry = muladd(a.w[i], a.w[j], carry, &mut c.w[i + j]);
            }
            c.w[NLEN + i] = carry;
        }
        for x in c.w.iter_mut() {
            *x *= 2;
        }
        for i in 0..NLEN {
            let top = muladd(a.w[i], a.w[i], 0, &mut c.w[2 * i]);
            c.w[2 * i + 1] += top;
        }
        c.norm();
        c
    }

    /// Double-width product of two values, normalized first
    pub fn mul(a: &Big, b: &Big) -> DBig {
        let (mut a, mut b) = (*a, *b);
        a.norm();
        b.norm();
        #[cfg(not(feature = "portable-mul"))]
        {
            Big::mul_comba(&a, &b)
        }
        #[cfg(feature = "portable-mul")]
        {
            Big::mul_schoolbook(&a, &b)
        }
    }

    /// Double-width square, normalized first
    pub fn sqr(a: &Big) -> DBig {
        let mut a = *a;
        a.norm();
        #[cfg(not(feature = "portable-mul"))]
        {
            Big::sqr_comba(&a)
        }
        #[cfg(feature = "portable-mul")]
        {
            Big::sqr_schoolbook(&a)
        }
    }

    /// Product known to fit in a single width
    pub fn smul(a: &Big, b: &Big) -> Big {
        let mut c = Big::new();
        for i in 0..NLEN {
            let mut carry = 0;
            for j in 0..NLEN {
                if i + j < NLEN {
                    carry = muladd(a.w[i], b.w[j], carry, &mut c.w[i + j]);
                }
            }
        }
        c
    }

    /// `self mod m` by `k + 1` shift-and-conditional-subtract steps
    ///
    /// Requires `0 <= self < m * 2^(k+1)`. The sequence of limb operations
    /// depends only on `k`, never on the value.
    pub fn ct_mod(&mut self, m: &Big, k: usize) {
        self.norm();
        let mut c = *m;
        c.norm();
        c.shl(k);
        for _ in 0..=k {
            let mut r = *self;
            r.sub(&c);
            r.norm();
            let negative = Choice::from(((r.w[NLEN - 1] >> (Chunk::BITS - 1)) & 1) as u8);
            self.cmove(&r, !negative);
            c.shr(1);
        }
    }

    /// Reduce modulo `m` by binary shift-and-subtract
    ///
    /// Variable time in the bit-length difference.
    pub fn rmod(&mut self, m: &Big) {
        let mut c = *m;
        c.norm();
        self.norm();
        if Big::comp(self, &c) < 0 {
            return;
        }
        let mut k = 0;
        loop {
            c.fshl(1);
            k += 1;
            if Big::comp(self, &c) < 0 {
                break;
            }
        }
        while k > 0 {
            c.fshr(1);
            if Big::comp(self, &c) >= 0 {
                self.sub(&c);
                self.norm();
            }
            k -= 1;
        }
    }

    /// Floor division by `c` in place
    pub fn div(&mut self, c: &Big) {
        let mut b = *self;
        let mut e = Big::one();
        let mut m = *c;
        let mut k = 0;
        self.zero();
        b.norm();
        m.norm();

        while Big::comp(&b, &m) >= 0 {
            e.fshl(1);
            m.fshl(1);
            k += 1;
        }
        while k > 0 {
            m.fshr(1);
            e.fshr(1);
            if Big::comp(&b, &m) >= 0 {
                self.add(&e);
                self.norm();
                b.sub(&m);
                b.norm();
            }
            k -= 1;
        }
    }

    /// `a*b mod m`
    pub fn modmul(a: &Big, b: &Big, m: &Big) -> Big {
        let (mut a, mut b) = (*a, *b);
        a.rmod(m);
        b.rmod(m);
        let mut d = Big::mul(&a, &b);
        d.dmod(m)
    }

    /// `a^2 mod m`
    pub fn modsqr(a: &Big, m: &Big) -> Big {
        let mut a = *a;
        a.rmod(m);
        let mut d = Big::sqr(&a);
        d.dmod(m)
    }

    /// `-a mod m`
    pub fn modneg(a: &Big, m: &Big) -> Big {
        let mut a = *a;
        a.rmod(m);
        let mut r = *m;
        r.sub(&a);
        r.norm();
        r.rmod(m);
        r
    }

    /// `a/b mod m` for prime `m`
    pub fn moddiv(a: &Big, b: &Big, m: &Big) -> Big {
        let mut a = *a;
        a.rmod(m);
        let z = Big::invmodp(b, m);
        let mut d = Big::mul(&a, &z);
        d.dmod(m)
    }

    /// Jacobi symbol `(a/p)`: 1, -1, or 0 when `a` is not coprime to `p`
    ///
    /// Variable time.
    pub fn jacobi(a: &Big, p: &Big) -> isize {
        let one = Big::one();
        let mut m: isize = 0;

        if p.parity() == 0 || a.is_zero() || Big::comp(p, &one) <= 0 {
            return 0;
        }
        let mut x = *a;
        let mut n = *p;
        x.norm();
        n.norm();
        x.rmod(&n);

        while Big::comp(&n, &one) > 0 {
            if x.is_zero() {
                return 0;
            }
            let n8 = n.lastbits(3) as isize;
            let mut k = 0;
            while x.parity() == 0 {
                k += 1;
                x.fshr(1);
            }
            if k % 2 == 1 {
                m += (n8 * n8 - 1) / 8;
            }
            m += (n8 - 1) * (x.lastbits(2) as isize - 1) / 4;
            let t = n;
            n = x;
            x = t;
            x.rmod(&n);
            m %= 2;
        }
        if m == 0 {
            1
        } else {
            -1
        }
    }

    /// `1/a mod p` by the binary extended Euclidean algorithm
    ///
    /// The inverse of zero is zero. Variable time.
    pub fn invmodp(a: &Big, p: &Big) -> Big {
        let mut u = *a;
        u.rmod(p);
        if u.is_zero() {
            return Big::new();
        }
        let mut v = *p;
        v.norm();
        let mut x1 = Big::one();
        let mut x2 = Big::new();
        let one = Big::one();

        while Big::comp(&u, &one) != 0 && Big::comp(&v, &one) != 0 {
            while u.parity() == 0 {
                u.fshr(1);
                if x1.parity() != 0 {
                    x1.add(p);
                    x1.norm();
                }
                x1.fshr(1);
            }
            while v.parity() == 0 {
                v.fshr(1);
                if x2.parity() != 0 {
                    x2.add(p);
                    x2.norm();
                }
                x2.fshr(1);
            }
            if Big::comp(&u, &v) >= 0 {
                u.sub(&v);
                u.norm();
                if Big::comp(&x1, &x2) >= 0 {
                    x1.sub(&x2);
                } else {
                    let mut t = *p;
                    t.sub(&x2);
                    x1.add(&t);
                }
                x1.norm();
            } else {
                v.sub(&u);
                v.norm();
                if Big::comp(&x2, &x1) >= 0 {
                    x2.sub(&x1);
                } else {
                    let mut t = *p;
                    t.sub(&x1);
                    x2.add(&t);
                }
                x2.norm();
            }
        }
        if Big::comp(&u, &one) == 0 {
            x1
        } else {
            x2
        }
    }

    /// Uniformly random `8*MODBYTES`-bit value
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Big {
        let mut m = Big::new();
        let mut r = 0u8;
        for j in 0..8 * MODBYTES {
            if j % 8 == 0 {
                r = next_byte(rng);
            } else {
                r >>= 1;
            }
            m.shl(1);
            m.w[0] += (r & 1) as Chunk;
        }
        m
    }

    /// Uniformly random value in `[0, q)`
    ///
    /// Draws twice the bit length of `q` and reduces, so the bias is below
    /// `2^-nbits(q)`.
    pub fn randomnum<R: RngCore + ?Sized>(q: &Big, rng: &mut R) -> Big {
        let mut d = DBig::new();
        let mut r = 0u8;
        for j in 0..2 * q.nbits() {
            if j % 8 == 0 {
                r = next_byte(rng);
            } else {
                r >>= 1;
            }
            d.shl(1);
            d.w[0] += (r & 1) as Chunk;
        }
        d.dmod(q)
    }

    /// Big-endian encoding of the normalized value
    pub fn to_bytes(&self) -> [u8; MODBYTES] {
        let mut c = *self;
        c.norm();
        let mut b = [0u8; MODBYTES];
        for i in (0..MODBYTES).rev() {
            b[i] = (c.w[0] & 0xff) as u8;
            c.fshr(8);
        }
        b
    }

    /// Decode up to [`MODBYTES`] big-endian bytes
    pub fn from_bytes(b: &[u8]) -> Big {
        debug_assert!(b.len() <= MODBYTES);
        let mut m = Big::new();
        for &byte in b {
            m.fshl(8);
            m.w[0] += byte as Chunk;
        }
        m
    }

    /// Parse big-endian hex of at most `2*MODBYTES` digits
    pub fn from_hex(s: &str) -> Result<Big> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        validate::parameter(s.len() <= 2 * MODBYTES, "hex", "more than 2*MODBYTES digits")?;

        let mut padded = [b'0'; 2 * MODBYTES];
        padded[2 * MODBYTES - s.len()..].copy_from_slice(s.as_bytes());
        let mut bytes = [0u8; MODBYTES];
        hex::decode_to_slice(padded, &mut bytes).map_err(|_| Error::Encoding {
            context: "hex",
            reason: "invalid hex digit",
        })?;
        Ok(Big::from_bytes(&bytes))
    }

    /// Conditionally swap with `b`
    pub fn cswap(&mut self, b: &mut Big, d: Choice) {
        ct_swap(&mut self.w, &mut b.w, d);
    }

    /// Conditionally replace with `g`
    pub fn cmove(&mut self, g: &Big, d: Choice) {
        ct_assign(&mut self.w, &g.w, d);
    }
}

fn next_byte<R: RngCore + ?Sized>(rng: &mut R) -> u8 {
    let mut b = [0u8; 1];
    rng.fill_bytes(&mut b);
    b[0]
}

impl ConstantTimeEq for Big {
    fn ct_eq(&self, other: &Self) -> Choice {
        let (mut a, mut b) = (*self, *other);
        a.norm();
        b.norm();
        a.w.ct_eq(&b.w)
    }
}

impl ConditionallySelectable for Big {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut r = *a;
        r.cmove(b, choice);
        r
    }
}

impl PartialEq for Big {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Big {}

impl fmt::LowerHex for Big {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.to_bytes() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Display for Big {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Big {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Big(0x{:x})", self)
    }
}
