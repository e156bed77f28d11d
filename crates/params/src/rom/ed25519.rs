//! Ed25519, twisted Edwards `-x^2 + y^2 = 1 + d x^2 y^2` over `2^255 - 19`

use crate::arch::{Chunk, NLEN};

/// Bits in the modulus
pub const MODBITS: usize = 255;
/// Modulus mod 8
pub const MOD8: usize = 5;
/// Edwards coefficient a
pub const CURVE_A: isize = -1;

/// Field modulus p
pub const MODULUS: [Chunk; NLEN] = [0xFFFFFFFFFFFFED, 0xFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFF, 0x7FFFFFFF];

/// c in p = 2^255 - c
pub const MCONST: Chunk = 0x13;

/// Prime order of the generator
pub const CURVE_ORDER: [Chunk; NLEN] = [0x12631A5CF5D3ED, 0xF9DEA2F79CD658, 0x14DE, 0x0, 0x10000000];

/// Edwards coefficient d = -121665/121666
pub const CURVE_B: [Chunk; NLEN] = [0xEB4DCA135978A3, 0xA4D4141D8AB75, 0x797779E8980070, 0x2B6FFE738CC740, 0x52036CEE];

/// Generator x coordinate
pub const CURVE_GX: [Chunk; NLEN] = [0x562D608F25D51A, 0xC7609525A7B2C9, 0x31FDD6DC5C692C, 0xCD6E53FEC0A4E2, 0x216936D3];

/// Generator y coordinate
pub const CURVE_GY: [Chunk; NLEN] = [0x66666666666658, 0x66666666666666, 0x66666666666666, 0x66666666666666, 0x66666666];
