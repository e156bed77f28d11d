//! Per-curve constant tables
//!
//! Values are little-endian arrays of [`Chunk`](crate::arch::Chunk) limbs in
//! radix `2^56`, holding plain (non-residue) integers. Negative lattice
//! entries are stored reduced modulo the group order.

pub mod bn254;
pub mod c25519;
pub mod ed25519;
pub mod mf254;
pub mod nist256;
