//! Single-limb multiply-accumulate

use milagro_params::arch::{Chunk, DChunk, BASEBITS, BMASK, HBITS, HMASK};

/// Compute `x*y + c + *r`, store the low `BASEBITS` bits in `r` and return
/// the rest
#[inline(always)]
pub(crate) fn muladd(x: Chunk, y: Chunk, c: Chunk, r: &mut Chunk) -> Chunk {
    #[cfg(not(feature = "portable-mul"))]
    {
        muladd_wide(x, y, c, r)
    }
    #[cfg(feature = "portable-mul")]
    {
        muladd_split(x, y, c, r)
    }
}

/// Double-width product
#[inline(always)]
pub(crate) fn muladd_wide(x: Chunk, y: Chunk, c: Chunk, r: &mut Chunk) -> Chunk {
    let prod = (x as DChunk) * (y as DChunk) + (c as DChunk) + (*r as DChunk);
    *r = (prod as Chunk) & BMASK;
    (prod >> BASEBITS) as Chunk
}

/// Split-halves product that never leaves the single-width type
///
/// Inputs are below `2^BASEBITS`, so every partial product of two
/// `HBITS`-bit halves fits with room for the carries.
#[inline(always)]
pub(crate) fn muladd_split(x: Chunk, y: Chunk, c: Chunk, r: &mut Chunk) -> Chunk {
    let (x0, x1) = (x & HMASK, x >> HBITS);
    let (y0, y1) = (y & HMASK, y >> HBITS);

    let mut bot = x0 * y0;
    let mut top = x1 * y1;
    let mid = x0 * y1 + x1 * y0;

    bot += (mid & HMASK) << HBITS;
    bot += *r;
    bot += c;
    top += mid >> HBITS;

    let carry = bot >> BASEBITS;
    *r = bot & BMASK;
    top + carry
}
