//! Compile-time description of a prime field

use core::fmt::Debug;

use milagro_params::arch::{Chunk, BASEBITS, BIGBITS, NLEN};

use super::reduce::ModularReduction;
use crate::bigint::Big;

/// Constants of a prime field `GF(p)` and the reduction strategy its modulus
/// admits
///
/// Implemented by zero-sized marker types. Every field shares the limb
/// geometry in [`milagro_params::arch`], so a modulus must fit in
/// `8*MODBYTES` bits with room for at least one bit of excess in the top
/// limb.
pub trait FieldConfig:
    'static + Copy + Clone + Debug + Default + Send + Sync + PartialEq + Eq
{
    /// How double-width products are brought back below the modulus
    type Reduction: ModularReduction;

    /// Display name used in tracing spans and errors
    const NAME: &'static str;

    /// The prime `p`
    const MODULUS: Big;

    /// `2^(2*NLEN*BASEBITS) mod p`, used to enter Montgomery form
    ///
    /// Unused for pseudo-Mersenne moduli.
    const R2MODP: Big = Big::new();

    /// Reduction constant: `c` for `p = 2^MODBITS - c`, `-1/p mod 2^BASEBITS`
    /// for Montgomery moduli, or the top-limb multiplier of a
    /// Montgomery-friendly modulus
    const MCONST: Chunk;

    /// Bit length of `p`
    const MODBITS: usize;

    /// `p mod 8`, selects the square-root formula
    const MOD8: usize;

    /// Active bits in the top limb of a reduced element
    const TBITS: usize = Self::MODBITS % BASEBITS;

    /// Mask for the active bits of the top limb
    const TMASK: Chunk = (1 << Self::TBITS) - 1;

    /// Mask for the overflow bits of the top limb
    const OMASK: Chunk = -1 << Self::TBITS;

    /// Excess bound: a reduced element may be scaled by up to this factor
    /// before a product overflows `p * 2^BIGBITS`
    const FEXCESS: Chunk = 1 << (BIGBITS - Self::MODBITS);

    /// How many multiples of `2^MODBITS` an element carries in its top limb
    #[inline(always)]
    fn excess(a: &Big) -> Chunk {
        (a.w[NLEN - 1] & Self::OMASK) >> Self::TBITS
    }
}
