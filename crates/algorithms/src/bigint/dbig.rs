//! Double-width integers holding unreduced products

use milagro_params::arch::{Chunk, BASEBITS, BMASK, DNLEN, NLEN};
use zeroize::Zeroize;

use super::Big;

/// Integer of [`DNLEN`] limbs, the output of [`Big::mul`] and [`Big::sqr`]
#[derive(Clone, Copy, Default, Zeroize)]
pub struct DBig {
    pub(crate) w: [Chunk; DNLEN],
}

impl DBig {
    /// Zero
    pub const fn new() -> DBig {
        DBig { w: [0; DNLEN] }
    }

    /// Widen a single-width value
    pub fn from_big(x: &Big) -> DBig {
        let mut b = DBig::new();
        b.w[..NLEN].copy_from_slice(&x.w);
        b
    }

    /// Raw limbs
    pub fn limbs(&self) -> &[Chunk; DNLEN] {
        &self.w
    }

    /// Propagate carries through all but the top limb
    pub fn norm(&mut self) {
        let mut carry = 0;
        for i in 0..DNLEN - 1 {
            let d = self.w[i] + carry;
            self.w[i] = d & BMASK;
            carry = d >> BASEBITS;
        }
        self.w[DNLEN - 1] += carry;
    }

    /// Three-way comparison of normalized values
    pub fn comp(a: &DBig, b: &DBig) -> isize {
        for i in (0..DNLEN).rev() {
            if a.w[i] == b.w[i] {
                continue;
            }
            return if a.w[i] > b.w[i] { 1 } else { -1 };
        }
        0
    }

    /// `self -= x`, limb-wise
    pub fn sub(&mut self, x: &DBig) {
        for i in 0..DNLEN {
            self.w[i] -= x.w[i];
        }
    }

    /// `self += x`, limb-wise
    pub fn add(&mut self, x: &DBig) {
        for i in 0..DNLEN {
            self.w[i] += x.w[i];
        }
    }

    /// Shift left by `k` bits
    pub fn shl(&mut self, k: usize) {
        let n = k % BASEBITS;
        let m = k / BASEBITS;
        debug_assert!(m + 2 <= DNLEN);

        self.w[DNLEN - 1] =
            (self.w[DNLEN - 1 - m] << n) | (self.w[DNLEN - m - 2] >> (BASEBITS - n));
        for i in (m + 1..DNLEN - 1).rev() {
            self.w[i] = ((self.w[i - m] << n) & BMASK) | (self.w[i - m - 1] >> (BASEBITS - n));
        }
        self.w[m] = (self.w[0] << n) & BMASK;
        for i in 0..m {
            self.w[i] = 0;
        }
    }

    /// Shift right by `k` bits
    pub fn shr(&mut self, k: usize) {
        let n = k % BASEBITS;
        let m = k / BASEBITS;
        if m >= DNLEN {
            self.w = [0; DNLEN];
            return;
        }
        for i in 0..DNLEN - m - 1 {
            self.w[i] = (self.w[m + i] >> n) | ((self.w[m + i + 1] << (BASEBITS - n)) & BMASK);
        }
        self.w[DNLEN - m - 1] = self.w[DNLEN - 1] >> n;
        for i in DNLEN - m..DNLEN {
            self.w[i] = 0;
        }
    }

    /// Split at bit `n`, returning `(self >> n, self mod 2^n)`
    ///
    /// `n` must fall within the top limb of a single-width value, which
    /// holds for every bundled modulus, and `self >> n` must fit in a
    /// [`Big`].
    pub fn split(&self, n: usize) -> (Big, Big) {
        debug_assert!(n / BASEBITS == NLEN - 1);
        let m = n % BASEBITS;
        let mut t = Big::new();
        let mut b = Big::new();

        if m == 0 {
            debug_assert!(self.w[DNLEN - 1] == 0);
            b.w[..NLEN - 1].copy_from_slice(&self.w[..NLEN - 1]);
            t.w.copy_from_slice(&self.w[NLEN - 1..DNLEN - 1]);
            return (t, b);
        }

        b.w[..NLEN - 1].copy_from_slice(&self.w[..NLEN - 1]);
        b.w[NLEN - 1] = self.w[NLEN - 1] & ((1 << m) - 1);

        let mut carry = self.w[DNLEN - 1] << (BASEBITS - m);
        for i in (NLEN - 1..DNLEN - 1).rev() {
            let nw = (self.w[i] >> m) | carry;
            carry = (self.w[i] << (BASEBITS - m)) & BMASK;
            t.w[i + 1 - NLEN] = nw;
        }
        (t, b)
    }

    /// Upper [`NLEN`] limbs
    pub fn top_half(&self) -> Big {
        let mut b = Big::new();
        b.w.copy_from_slice(&self.w[NLEN..]);
        b
    }

    /// Lower [`NLEN`] limbs
    pub fn bottom_half(&self) -> Big {
        let mut b = Big::new();
        b.w.copy_from_slice(&self.w[..NLEN]);
        b
    }

    /// Number of significant bits
    pub fn nbits(&self) -> usize {
        let mut t = *self;
        t.norm();
        let Some(k) = (0..DNLEN).rev().find(|&i| t.w[i] != 0) else {
            return 0;
        };
        let mut bts = BASEBITS * k;
        let mut c = t.w[k];
        while c != 0 {
            c /= 2;
            bts += 1;
        }
        bts
    }

    /// Reduce modulo `c` by shift-and-subtract, consuming the value
    pub fn dmod(&mut self, c: &Big) -> Big {
        let mut m = DBig::from_big(c);
        m.norm();
        self.norm();

        if DBig::comp(self, &m) < 0 {
            return self.bottom_half();
        }
        let mut k = 0;
        loop {
            m.shl(1);
            k += 1;
            if DBig::comp(self, &m) < 0 {
                break;
            }
        }
        while k > 0 {
            m.shr(1);
            if DBig::comp(self, &m) >= 0 {
                self.sub(&m);
                self.norm();
            }
            k -= 1;
        }
        self.bottom_half()
    }

    /// Floor division by `c`, for quotients that fit in a single width
    pub fn div(&mut self, c: &Big) -> Big {
        let mut m = DBig::from_big(c);
        let mut a = Big::new();
        let mut e = Big::one();
        self.norm();
        m.norm();

        let mut k = 0;
        while DBig::comp(self, &m) >= 0 {
            e.fshl(1);
            m.shl(1);
            k += 1;
        }
        while k > 0 {
            m.shr(1);
            e.shr(1);
            if DBig::comp(self, &m) >= 0 {
                a.add(&e);
                a.norm();
                self.sub(&m);
                self.norm();
            }
            k -= 1;
        }
        a
    }
}

impl PartialEq for DBig {
    fn eq(&self, other: &Self) -> bool {
        let (mut a, mut b) = (*self, *other);
        a.norm();
        b.norm();
        a.w == b.w
    }
}

impl Eq for DBig {}

impl core::fmt::Debug for DBig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut t = *self;
        t.norm();
        write!(f, "DBig(0x")?;
        for x in t.w.iter().rev() {
            write!(f, "{:014x}", x)?;
        }
        write!(f, ")")
    }
}
