//! Signed fixed-window recoding of scalars and table selection shared by
//! every scalar multiplication and multi-exponentiation

use milagro_internal::constant_time::{ct_is_negative, ct_lookup};
use milagro_params::arch::{Chunk, BIGBITS};
use subtle::{Choice, ConditionallySelectable};

use crate::bigint::Big;

/// Digits of a signed 4-bit window over a full-width scalar, plus the top
pub(crate) const FIXED_DIGITS: usize = 2 + (BIGBITS + 3) / 4;

/// Digits of a signed 2-bit joint window over two scalars, plus the top
pub(crate) const JOINT2_DIGITS: usize = 2 + (BIGBITS + 1) / 2;

/// Digits of a signed 1-bit joint window over four scalars, plus the top
pub(crate) const JOINT4_DIGITS: usize = BIGBITS + 2;

/// Make a scalar odd without branching
///
/// The result has at most one bit more than `e`.
///
/// Returns `t` and `c` with `t` odd and `t - (c ? 1 : 2) = e`: an even `e`
/// becomes `e + 1` with a correction of one base, an odd `e` becomes
/// `e + 2` with a correction of twice the base.
pub(crate) fn make_odd(e: &Big) -> (Big, Choice) {
    let mut t = *e;
    t.norm();
    let s = Choice::from((t.parity() & 1) as u8);
    t.inc(1);
    t.norm();
    let ns = Choice::from((t.parity() & 1) as u8);
    let mut mt = t;
    mt.inc(1);
    mt.norm();
    t.cmove(&mt, s);
    (t, ns)
}

/// Recode an odd scalar below `2^(bits+1)` into signed odd digits in
/// `[-15, 15]`
///
/// The digit count is fixed by `bits`, which must be public. Once the
/// scalar is used up the recoding settles on `1 = 16 - 15`, so short
/// scalars are padded with the same digit pattern as long ones. Returns
/// the digits, least significant first, and the index of the top digit,
/// which is `1`.
pub(crate) fn fixed_window(t: &Big, bits: usize) -> ([i8; FIXED_DIGITS], usize) {
    let nb = 1 + (bits + 3) / 4;
    debug_assert!(nb < FIXED_DIGITS);
    let mut t = *t;
    t.norm();
    let mut w = [0i8; FIXED_DIGITS];
    for wi in w.iter_mut().take(nb) {
        *wi = take_digit(&mut t, 5, 16, 4) as i8;
    }
    debug_assert!(t.nbits() <= 4);
    w[nb] = t.lastbits(5) as i8;
    (w, nb)
}

/// Joint recoding of two odd scalars below `2^(bits+1)` into digits
/// `4a + b` with `a, b` in `{-3, -1, 1, 3}`
///
/// The digit count is fixed by the public `bits`.
pub(crate) fn joint2(te: &Big, tf: &Big, bits: usize) -> ([i8; JOINT2_DIGITS], usize) {
    let nb = 1 + (bits + 1) / 2;
    debug_assert!(nb < JOINT2_DIGITS);
    let (mut te, mut tf) = (*te, *tf);
    te.norm();
    tf.norm();

    let mut w = [0i8; JOINT2_DIGITS];
    for wi in w.iter_mut().take(nb) {
        let a = take_digit(&mut te, 3, 4, 2);
        let b = take_digit(&mut tf, 3, 4, 2);
        *wi = (4 * a + b) as i8;
    }
    debug_assert!(te.nbits() <= 2 && tf.nbits() <= 2);
    w[nb] = (4 * te.lastbits(3) + tf.lastbits(3)) as i8;
    (w, nb)
}

/// Joint recoding of four odd scalars below `2^(bits+1)` into digits
/// `8a + 4b + 2c + d` with every coefficient in `{-1, 1}`
///
/// The digit count is fixed by the public `bits`.
pub(crate) fn joint4(t: &[Big; 4], bits: usize) -> ([i8; JOINT4_DIGITS], usize) {
    let nb = 1 + bits;
    debug_assert!(nb < JOINT4_DIGITS);
    let mut t = *t;
    for ti in t.iter_mut() {
        ti.norm();
    }

    let mut w = [0i8; JOINT4_DIGITS];
    for wi in w.iter_mut().take(nb) {
        let mut digit = 0;
        for (k, ti) in t.iter_mut().enumerate() {
            digit += take_digit(ti, 2, 2, 1) << (3 - k);
        }
        *wi = digit as i8;
    }
    debug_assert!(t.iter().all(|ti| ti.nbits() <= 1));
    w[nb] = t
        .iter()
        .enumerate()
        .map(|(k, ti)| (ti.lastbits(2) << (3 - k)) as i8)
        .sum();
    (w, nb)
}

/// Strip one signed digit `lastbits(bits) - offset` and shift it out
fn take_digit(t: &mut Big, bits: usize, offset: Chunk, shift: usize) -> Chunk {
    let d = t.lastbits(bits) - offset;
    t.dec(d);
    t.norm();
    t.fshr(shift);
    d
}

/// Constant-time read of `sign(d) * table[(|d| - 1) / 2]` for an odd digit
///
/// `neg` is the group inverse of a table entry.
pub(crate) fn select<T, N>(table: &[T], digit: i8, neg: N) -> T
where
    T: ConditionallySelectable,
    N: Fn(&T) -> T,
{
    let d = digit as i32;
    let m = d >> 31;
    let babs = ((d ^ m) - m - 1) / 2;
    let mut p = ct_lookup(table, babs as usize);
    let np = neg(&p);
    p.conditional_assign(&np, ct_is_negative(d));
    p
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn value(b: &Big) -> BigInt {
        BigInt::parse_bytes(format!("{:x}", b).as_bytes(), 16).unwrap_or_default()
    }

    #[test]
    fn test_make_odd() {
        for e in [0, 1, 2, 7, 8, 1000] {
            let (t, ns) = make_odd(&Big::new_int(e));
            assert_eq!(t.parity(), 1);
            let correction = if bool::from(ns) { 1 } else { 2 };
            assert_eq!(t, Big::new_int(e + correction));
        }
    }

    /// Sum of `digit(w[i]) * base^i` over all digits including the top
    fn recombine(w: &[i8], nb: usize, base: u32, digit: impl Fn(i8, bool) -> i32) -> BigInt {
        (0..=nb)
            .rev()
            .fold(BigInt::from(0), |acc, i| (acc << base) + BigInt::from(digit(w[i], i == nb)))
    }

    #[test]
    fn test_fixed_window_reconstructs() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let scalars = (0..20)
            .map(|_| Big::random(&mut rng))
            .chain([Big::new(), Big::new_int(3), Big::new_int(1 << 20)]);
        for e in scalars {
            let (t, _) = make_odd(&e);
            let (w, nb) = fixed_window(&t, BIGBITS);
            assert_eq!(nb, FIXED_DIGITS - 1);
            assert!(w[..nb].iter().all(|d| d % 2 != 0 && (-15..=15).contains(d)));
            assert_eq!(w[nb], 1);
            assert_eq!(recombine(&w, nb, 4, |d, _| d as i32), value(&t));
        }
    }

    #[test]
    fn test_digit_count_is_fixed_by_bound() {
        let (short, _) = make_odd(&Big::new_int(5));
        let (mid, _) = make_odd(&Big::new_int(1 << 40));
        let (long, _) = make_odd(&Big::random(&mut ChaCha8Rng::seed_from_u64(13)));
        assert_eq!(fixed_window(&short, 256).1, fixed_window(&long, 256).1);
        assert_eq!(fixed_window(&short, 128).1, 33);
        assert_eq!(joint2(&short, &short, 128).1, joint2(&short, &mid, 128).1);
        assert_eq!(joint4(&[short; 4], 66).1, 67);
        assert_eq!(joint4(&[long; 4], BIGBITS).1, JOINT4_DIGITS - 1);
    }

    #[test]
    fn test_joint_windows_reconstruct() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let (te, _) = make_odd(&Big::random(&mut rng));
        let (tf, _) = make_odd(&Big::random(&mut rng));
        let (w, nb) = joint2(&te, &tf, BIGBITS);
        let split = |d: i8, top: bool| -> (i32, i32) {
            if top {
                return ((d / 4) as i32, (d % 4) as i32);
            }
            let lo = [-3i8, -1, 1, 3]
                .into_iter()
                .find(|l| (d - l) % 4 == 0 && ((d - l) / 4) % 2 != 0)
                .unwrap_or(0);
            (((d - lo) / 4) as i32, lo as i32)
        };
        assert_eq!(recombine(&w, nb, 2, |d, top| split(d, top).0), value(&te));
        assert_eq!(recombine(&w, nb, 2, |d, top| split(d, top).1), value(&tf));

        let t: [Big; 4] = core::array::from_fn(|_| make_odd(&Big::new_int(12345)).0);
        let (w, nb) = joint4(&t, 14);
        let lead = |d: i8, top: bool| if top { (d >> 3) as i32 } else if d > 0 { 1 } else { -1 };
        assert_eq!(recombine(&w, nb, 1, lead), BigInt::from(12347));
    }

    #[test]
    fn test_select_negates() {
        let table: [u64; 8] = [1, 3, 5, 7, 9, 11, 13, 15];
        let neg = |x: &u64| x.wrapping_neg();
        for d in [1i8, 3, 5, 7, 9, 11, 13, 15] {
            assert_eq!(select(&table, d, neg), d as u64);
            assert_eq!(select(&table, -d, neg), (d as u64).wrapping_neg());
        }
    }
}
