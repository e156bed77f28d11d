//! NIST P-256, `y^2 = x^3 - 3x + b`

use crate::arch::{Chunk, NLEN};

/// Bits in the modulus
pub const MODBITS: usize = 256;
/// Modulus mod 8
pub const MOD8: usize = 7;
/// Curve coefficient A
pub const CURVE_A: isize = -3;

/// Field modulus p
pub const MODULUS: [Chunk; NLEN] = [0xFFFFFFFFFFFFFF, 0xFFFFFFFFFF, 0x0, 0x1000000, 0xFFFFFFFF];

/// R^2 mod p with R = 2^280
pub const R2MODP: [Chunk; NLEN] = [0x3000000050000, 0x0, 0xFFFFFBFFFFFFFA, 0xFFFAFFFFFFFEFF, 0x2FFFF];

/// Reduction constant for the modulus
pub const MCONST: Chunk = 0x1;

/// Prime order of the generator
pub const CURVE_ORDER: [Chunk; NLEN] = [0xB9CAC2FC632551, 0xFAADA7179E84F3, 0xFFFFFFFFFFBCE6, 0xFFFFFF, 0xFFFFFFFF];

/// Curve coefficient B
pub const CURVE_B: [Chunk; NLEN] = [0xCE3C3E27D2604B, 0x6B0CC53B0F63B, 0x55769886BC651D, 0xAA3A93E7B3EBBD, 0x5AC635D8];

/// Generator x coordinate
pub const CURVE_GX: [Chunk; NLEN] = [0xA13945D898C296, 0x7D812DEB33A0F4, 0xE563A440F27703, 0xE12C4247F8BCE6, 0x6B17D1F2];

/// Generator y coordinate
pub const CURVE_GY: [Chunk; NLEN] = [0xB6406837BF51F5, 0x33576B315ECECB, 0x4A7C0F9E162BCE, 0xFE1A7F9B8EE7EB, 0x4FE342E2];
