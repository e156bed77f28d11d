//! Curve25519, Montgomery `y^2 = x^3 + 486662 x^2 + x` over `2^255 - 19`

use crate::arch::{Chunk, NLEN};

/// Bits in the modulus
pub const MODBITS: usize = 255;
/// Modulus mod 8
pub const MOD8: usize = 5;
/// Montgomery coefficient A
pub const CURVE_A: isize = 486662;

/// Field modulus p
pub const MODULUS: [Chunk; NLEN] = [0xFFFFFFFFFFFFED, 0xFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFF, 0x7FFFFFFF];

/// c in p = 2^255 - c
pub const MCONST: Chunk = 0x13;

/// Prime order of the base point subgroup
pub const CURVE_ORDER: [Chunk; NLEN] = [0x12631A5CF5D3ED, 0xF9DEA2F79CD658, 0x14DE, 0x0, 0x10000000];

/// Base point u coordinate
pub const CURVE_GX: [Chunk; NLEN] = [0x9, 0x0, 0x0, 0x0, 0x0];
