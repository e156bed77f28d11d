//! MF254, `y^2 = x^3 + 6` over the Montgomery-friendly prime `0x3fffe111.2^224 - 1`

use crate::arch::{Chunk, NLEN};

/// Bits in the modulus
pub const MODBITS: usize = 254;
/// Modulus mod 8
pub const MOD8: usize = 7;
/// Curve coefficient A
pub const CURVE_A: isize = 0;

/// Field modulus p
pub const MODULUS: [Chunk; NLEN] = [0xFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFF, 0x3FFFE110];

/// R^2 mod p with R = 2^280
pub const R2MODP: [Chunk; NLEN] = [0xC17364BC45E154, 0x6DFBF818D53E20, 0xB721458F78DB04, 0xAEA2FA388DE8ED, 0x31856338];

/// c in p = c.2^224 - 1
pub const MCONST: Chunk = 0x3FFFE111;

/// Prime order of the generator
pub const CURVE_ORDER: [Chunk; NLEN] = [0x375EAFDDD831DB, 0x707D23F4FD5294, 0xE1EF, 0x0, 0x3FFFE111];

/// Curve coefficient B
pub const CURVE_B: [Chunk; NLEN] = [0x6, 0x0, 0x0, 0x0, 0x0];

/// Generator x coordinate
pub const CURVE_GX: [Chunk; NLEN] = [0x3, 0x0, 0x0, 0x0, 0x0];

/// Generator y coordinate
pub const CURVE_GY: [Chunk; NLEN] = [0x4EC136D4C5CBB8, 0xC0B829007C0EAB, 0xE8079C5A7C0012, 0x507F6FB154DFA, 0xD316DDA];
