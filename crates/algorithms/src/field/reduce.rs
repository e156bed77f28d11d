//! Modular reduction strategies
//!
//! Each modulus shape gets its own reduction from a double-width product
//! back to a single-width residue. Outputs may exceed `p` by a small
//! multiple; callers track that through [`FieldConfig::excess`].

use core::fmt::Debug;

use milagro_params::arch::{Chunk, DChunk, BASEBITS, BMASK, DNLEN, NEXCESS, NLEN};

use super::config::FieldConfig;
use crate::bigint::{muladd, Big, DBig};

/// Reduction of double-width products modulo a [`FieldConfig`] prime
pub trait ModularReduction:
    'static + Copy + Clone + Debug + Default + Send + Sync + PartialEq + Eq
{
    /// Short name for logs
    const KIND: &'static str;

    /// Reduce a product below `p * 2^BIGBITS` to a single width
    fn reduce<F: FieldConfig>(d: &mut DBig) -> Big;

    /// Map a plain integer below `p` into the internal representation
    fn nres<F: FieldConfig>(a: &Big) -> Big;

    /// Map an internal residue back to a plain integer
    fn redc<F: FieldConfig>(a: &Big) -> Big;
}

/// `p = 2^MODBITS - c` for small `c`
///
/// Elements are stored as plain integers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PseudoMersenne;

/// `p = c * 2^(BASEBITS*(NLEN-1)) - 1`, so `-1/p = 1 mod 2^BASEBITS`
///
/// Elements are stored in Montgomery form with `R = 2^BIGBITS`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MontgomeryFriendly;

/// Arbitrary odd `p`, reduced with Montgomery's REDC
///
/// Elements are stored in Montgomery form with `R = 2^BIGBITS`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenericMontgomery;

impl ModularReduction for PseudoMersenne {
    const KIND: &'static str = "pseudo-mersenne";

    fn reduce<F: FieldConfig>(d: &mut DBig) -> Big {
        let (mut t, b) = d.split(F::MODBITS);

        if F::MCONST < NEXCESS {
            t.imul(F::MCONST);
            t.norm();
            let tw = t.w[NLEN - 1];
            t.w[NLEN - 1] &= F::TMASK;
            t.w[0] += F::MCONST * (tw >> F::TBITS);
        } else {
            let v = t.pmul(F::MCONST);
            let tw = t.w[NLEN - 1];
            t.w[NLEN - 1] &= F::TMASK;
            t.w[0] += F::MCONST * ((tw >> F::TBITS) + (v << (BASEBITS - F::TBITS)));
        }
        t.add(&b);
        t.norm();
        t
    }

    #[inline]
    fn nres<F: FieldConfig>(a: &Big) -> Big {
        *a
    }

    #[inline]
    fn redc<F: FieldConfig>(a: &Big) -> Big {
        *a
    }
}

impl ModularReduction for MontgomeryFriendly {
    const KIND: &'static str = "montgomery-friendly";

    fn reduce<F: FieldConfig>(d: &mut DBig) -> Big {
        for i in 0..NLEN {
            let di = d.w[i];
            let top = muladd(di, F::MCONST - 1, di, &mut d.w[NLEN + i - 1]);
            d.w[NLEN + i] += top;
        }
        let mut a = d.top_half();
        a.norm();
        a
    }

    fn nres<F: FieldConfig>(a: &Big) -> Big {
        let mut d = Big::mul(a, &F::R2MODP);
        Self::reduce::<F>(&mut d)
    }

    fn redc<F: FieldConfig>(a: &Big) -> Big {
        let mut d = DBig::from_big(a);
        Self::reduce::<F>(&mut d)
    }
}

impl GenericMontgomery {
    /// Column-wise REDC over double-width accumulators
    pub(crate) fn reduce_comba<F: FieldConfig>(d: &mut DBig) -> Big {
        let md = F::MODULUS.w;
        let d = &mut d.w;

        let mut sum = d[0] as DChunk;
        for j in 0..NLEN {
            for i in 0..j {
                sum += (d[i] as DChunk) * (md[j - i] as DChunk);
            }
            let sp = (sum as Chunk).wrapping_mul(F::MCONST) & BMASK;
            d[j] = sp;
            sum += (sp as DChunk) * (md[0] as DChunk);
            sum = (d[j + 1] as DChunk) + (sum >> BASEBITS);
        }

        for j in NLEN..DNLEN - 2 {
            for i in j - NLEN + 1..NLEN {
                sum += (d[i] as DChunk) * (md[j - i] as DChunk);
            }
            d[j] = (sum as Chunk) & BMASK;
            sum = (d[j + 1] as DChunk) + (sum >> BASEBITS);
        }

        sum += (d[NLEN - 1] as DChunk) * (md[NLEN - 1] as DChunk);
        d[DNLEN - 2] = (sum as Chunk) & BMASK;
        sum = (d[DNLEN - 1] as DChunk) + (sum >> BASEBITS);
        d[DNLEN - 1] = (sum as Chunk) & BMASK;

        let mut a = Big::new();
        a.w.copy_from_slice(&d[NLEN..]);
        a.norm();
        a
    }

    /// Row-wise REDC through [`muladd`]
    pub(crate) fn reduce_rows<F: FieldConfig>(d: &mut DBig) -> Big {
        let md = F::MODULUS.w;
        for i in 0..NLEN {
            let m = F::MCONST.wrapping_mul(d.w[i]) & BMASK;
            let mut carry = 0;
            for j in 0..NLEN {
                carry = muladd(m, md[j], carry, &mut d.w[i + j]);
            }
            d.w[NLEN + i] += carry;
        }
        let mut a = d.top_half();
        a.norm();
        a
    }
}

impl ModularReduction for GenericMontgomery {
    const KIND: &'static str = "montgomery";

    #[inline]
    fn reduce<F: FieldConfig>(d: &mut DBig) -> Big {
        #[cfg(not(feature = "portable-mul"))]
        {
            Self::reduce_comba::<F>(d)
        }
        #[cfg(feature = "portable-mul")]
        {
            Self::reduce_rows::<F>(d)
        }
    }

    fn nres<F: FieldConfig>(a: &Big) -> Big {
        let mut d = Big::mul(a, &F::R2MODP);
        Self::reduce::<F>(&mut d)
    }

    fn redc<F: FieldConfig>(a: &Big) -> Big {
        let mut d = DBig::from_big(a);
        Self::reduce::<F>(&mut d)
    }
}
