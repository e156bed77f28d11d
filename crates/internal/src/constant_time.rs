//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Only the length
/// check may exit early; lengths are public.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Constant-time conditional assignment of a whole array
///
/// Sets `dst` to `src` if `choice` is 1, otherwise leaves `dst` unchanged.
#[inline]
pub fn ct_assign<T, const N: usize>(dst: &mut [T; N], src: &[T; N], choice: Choice)
where
    T: ConditionallySelectable,
{
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        d.conditional_assign(s, choice);
    }
}

/// Constant-time conditional swap of two arrays
#[inline]
pub fn ct_swap<T, const N: usize>(a: &mut [T; N], b: &mut [T; N], choice: Choice)
where
    T: ConditionallySelectable,
{
    for (x, y) in a.iter_mut().zip(b.iter_mut()) {
        T::conditional_swap(x, y, choice);
    }
}

/// Equality of two small table indices as a [`Choice`]
#[inline]
pub fn ct_index_eq(a: u32, b: u32) -> Choice {
    a.ct_eq(&b)
}

/// Sign bit of a signed window digit as a [`Choice`]
#[inline]
pub fn ct_is_negative(v: i32) -> Choice {
    Choice::from(((v >> 31) & 1) as u8)
}

/// Read `table[index]` touching every entry
///
/// The memory access pattern is independent of `index`. An out-of-range
/// index yields `table[0]`.
pub fn ct_lookup<T>(table: &[T], index: usize) -> T
where
    T: ConditionallySelectable,
{
    let mut out = table[0];
    for (i, entry) in table.iter().enumerate().skip(1) {
        out.conditional_assign(entry, ct_index_eq(i as u32, index as u32));
    }
    out
}
