//! Limb geometry
//!
//! Every field in the workspace is held in five signed 64-bit limbs carrying
//! 56 bits each, which leaves 7 bits of headroom per limb for lazy carries.

/// Machine word holding one limb
pub type Chunk = i64;

/// Double-width accumulator for products of two limbs
pub type DChunk = i128;

/// Bits in a [`Chunk`]
pub const CHUNK: usize = 64;

/// Bits carried by a normalized limb
pub const BASEBITS: usize = 56;

/// Limbs in a single-width integer
pub const NLEN: usize = 5;

/// Limbs in a double-width integer
pub const DNLEN: usize = 2 * NLEN;

/// Bytes in a serialized field element or scalar
pub const MODBYTES: usize = 32;

/// Mask selecting the [`BASEBITS`] payload of a limb
pub const BMASK: Chunk = (1 << BASEBITS) - 1;

/// Half of [`BASEBITS`], used by the split-halves multiplier
pub const HBITS: usize = BASEBITS / 2;

/// Mask selecting [`HBITS`] bits
pub const HMASK: Chunk = (1 << HBITS) - 1;

/// A limb may be multiplied by at most this before it must be normalized
pub const NEXCESS: Chunk = 1 << (CHUNK - BASEBITS - 1);

/// Number of bits a [`NLEN`]-limb integer can represent
pub const BIGBITS: usize = BASEBITS * NLEN;
