//! BN254 (Nogami), u = -0x4080000000000001
//!
//! `p = 36u^4 + 36u^3 + 24u^2 + 6u + 1`, `r = 36u^4 + 36u^3 + 18u^2 + 6u + 1`,
//! `E: y^2 = x^3 + 2`, D-type sextic twist `y^2 = x^3 + 2/(1+i)` over Fp2.

use crate::arch::{Chunk, NLEN};

/// Bits in the modulus
pub const MODBITS: usize = 254;
/// Modulus mod 8
pub const MOD8: usize = 3;
/// Curve coefficient A
pub const CURVE_A: isize = 0;
/// Curve coefficient B as a small integer
pub const CURVE_B_I: isize = 2;

/// Field modulus p
pub const MODULUS: [Chunk; NLEN] = [0x13, 0x13A7, 0x80000000086121, 0x40000001BA344D, 0x25236482];

/// R^2 mod p with R = 2^280
pub const R2MODP: [Chunk; NLEN] = [0x2F2A96FF5E7E39, 0x64E8642B96F13C, 0x9926F7B00C7146, 0x8321E7B4DACD24, 0x1D127A2E];

/// Reduction constant for the modulus
pub const MCONST: Chunk = 0x435E50D79435E5;

/// Prime order of the generator
pub const CURVE_ORDER: [Chunk; NLEN] = [0xD, 0x800000000010A1, 0x8000000007FF9F, 0x40000001BA344D, 0x25236482];

/// Curve coefficient B
pub const CURVE_B: [Chunk; NLEN] = [0x2, 0x0, 0x0, 0x0, 0x0];

/// Generator x coordinate
pub const CURVE_GX: [Chunk; NLEN] = [0x12, 0x13A7, 0x80000000086121, 0x40000001BA344D, 0x25236482];

/// Generator y coordinate
pub const CURVE_GY: [Chunk; NLEN] = [0x1, 0x0, 0x0, 0x0, 0x0];

/// Absolute value of the BN parameter, u = -CURVE_BNX
pub const CURVE_BNX: [Chunk; NLEN] = [0x80000000000001, 0x40, 0x0, 0x0, 0x0];

/// Cube root of unity in Fp acting as the G1 endomorphism
pub const CURVE_CRU: [Chunk; NLEN] = [0x80000000000007, 0x6CD, 0x40000000024909, 0x49B362, 0x0];

/// Real part of the Frobenius constant (1+i)^((p-1)/6)
pub const FRA: [Chunk; NLEN] = [0x7DE6C06F2A6DE9, 0x74924D3F77C2E1, 0x50A846953F8509, 0x212E7C8CB6499B, 0x1B377619];

/// Imaginary part of the Frobenius constant
pub const FRB: [Chunk; NLEN] = [0x82193F90D5922A, 0x8B6DB2C08850C5, 0x2F57B96AC8DC17, 0x1ED1837503EAB2, 0x9EBEE69];

/// G2 generator x, real part
pub const CURVE_PXA: [Chunk; NLEN] = [0xEE4224C803FB2B, 0x8BBB4898BF0D91, 0x7E8C61EDB6A464, 0x519EB62FEB8D8C, 0x61A10BB];

/// G2 generator x, imaginary part
pub const CURVE_PXB: [Chunk; NLEN] = [0x8C34C1E7D54CF3, 0x746BAE3784B70D, 0x8C5982AA5B1F4D, 0xBA737833310AA7, 0x516AAF9];

/// G2 generator y, real part
pub const CURVE_PYA: [Chunk; NLEN] = [0xF0E07891CD2B9A, 0xAE6BDBE09BD19, 0x96698C822329BD, 0x6BAF93439A90E0, 0x21897A0];

/// G2 generator y, imaginary part
pub const CURVE_PYB: [Chunk; NLEN] = [0x2D1AEC6B3ACE9B, 0x6FFD739C9578A, 0x56F5F38D37B090, 0x7C8B15268F6D44, 0xEBB2B0E];

/// GLV lattice row weights
pub const CURVE_W: [[Chunk; NLEN]; 2] = [
    [0x1, 0x81, 0x0, 0x0, 0x0],
    [0x3, 0x80000000000204, 0x6181, 0x0, 0x0],
];

/// GLV short basis, negative entries stored mod r
pub const CURVE_SB: [[[Chunk; NLEN]; 2]; 2] = [
    [
        [0x1, 0x81, 0x0, 0x0, 0x0],
        [0xA, 0xE9D, 0x80000000079E1E, 0x40000001BA344D, 0x25236482],
    ],
    [
        [0x4, 0x80000000000285, 0x6181, 0x0, 0x0],
        [0x1, 0x81, 0x0, 0x0, 0x0],
    ],
];

/// GS lattice row weights
pub const CURVE_WB: [[Chunk; NLEN]; 4] = [
    [0x3, 0x285, 0xC000000000C303, 0x189120, 0x0],
    [0x80000000000001, 0x1C3, 0xC000000000C303, 0x189120, 0x0],
    [0x1, 0x81, 0x0, 0x0, 0x0],
    [0x80000000000005, 0x80000000000448, 0xC0000000012484, 0x189120, 0x0],
];

/// GS short basis, negative entries stored mod r
pub const CURVE_BB: [[[Chunk; NLEN]; 4]; 4] = [
    [
        [0x1, 0x81, 0x0, 0x0, 0x0],
        [0x0, 0x0, 0x0, 0x0, 0x0],
        [0x2, 0x81, 0x0, 0x0, 0x0],
        [0xC, 0x800000000010A1, 0x8000000007FF9F, 0x40000001BA344D, 0x25236482],
    ],
    [
        [0x1, 0x81, 0x0, 0x0, 0x0],
        [0x8000000000000C, 0x80000000001060, 0x8000000007FF9F, 0x40000001BA344D, 0x25236482],
        [0x8000000000000D, 0x80000000001060, 0x8000000007FF9F, 0x40000001BA344D, 0x25236482],
        [0x8000000000000C, 0x80000000001060, 0x8000000007FF9F, 0x40000001BA344D, 0x25236482],
    ],
    [
        [0x8000000000000C, 0x80000000001060, 0x8000000007FF9F, 0x40000001BA344D, 0x25236482],
        [0x80000000000001, 0x40, 0x0, 0x0, 0x0],
        [0x8000000000000C, 0x80000000001060, 0x8000000007FF9F, 0x40000001BA344D, 0x25236482],
        [0xC, 0x80000000001020, 0x8000000007FF9F, 0x40000001BA344D, 0x25236482],
    ],
    [
        [0x2, 0x81, 0x0, 0x0, 0x0],
        [0x80000000000000, 0x40, 0x0, 0x0, 0x0],
        [0x8000000000000C, 0x80000000001060, 0x8000000007FF9F, 0x40000001BA344D, 0x25236482],
        [0x80000000000001, 0x40, 0x0, 0x0, 0x0],
    ],
];
