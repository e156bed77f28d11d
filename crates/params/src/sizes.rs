//! Encoded sizes of field elements and points

use crate::arch::MODBYTES;

/// Size of an encoded base field element or scalar in bytes
pub const FIELD_ELEMENT_SIZE: usize = MODBYTES;

/// Size of an uncompressed `0x04 | X | Y` point in bytes
pub const UNCOMPRESSED_POINT_SIZE: usize = 2 * MODBYTES + 1;

/// Size of a compressed `0x02/0x03 | X` point in bytes
pub const COMPRESSED_POINT_SIZE: usize = MODBYTES + 1;

/// Size of a Montgomery `0x06 | X` point in bytes
pub const MONTGOMERY_POINT_SIZE: usize = MODBYTES + 1;

/// Size of the encoding of the Weierstrass point at infinity
pub const INFINITY_POINT_SIZE: usize = 1;

/// Size of an encoded quadratic extension element `a | b`
pub const FP2_SIZE: usize = 2 * MODBYTES;

/// Size of an encoded twist point `Xa | Xb | Ya | Yb`
pub const TWIST_POINT_SIZE: usize = 4 * MODBYTES;

/// Size of an encoded degree-12 extension element
pub const FP12_SIZE: usize = 12 * MODBYTES;

/// Tag byte of an uncompressed point
pub const TAG_UNCOMPRESSED: u8 = 0x04;

/// Tag byte of a compressed point with even y
pub const TAG_COMPRESSED_EVEN: u8 = 0x02;

/// Tag byte of a compressed point with odd y
pub const TAG_COMPRESSED_ODD: u8 = 0x03;

/// Tag byte of a Montgomery x-only point
pub const TAG_MONTGOMERY: u8 = 0x06;

/// Tag byte (and whole encoding) of the Weierstrass point at infinity
pub const TAG_INFINITY: u8 = 0x00;
