//! Multi-precision arithmetic, prime fields, elliptic curves and the BN
//! optimal-ate pairing
//!
//! Everything is parameterized at compile time: a field is a
//! [`FieldConfig`] marker, a curve is a [`CurveConfig`] marker plus one of
//! the shape traits, and the bundled markers live in [`curves`]. The crate
//! is usable in both `std` and `no_std` environments.
//!
//! # Layout
//!
//! - [`bigint`]: fixed-width limb integers [`Big`] and [`DBig`]
//! - [`field`]: `Fp` with three reduction strategies and the
//!   `Fp2 / Fp4 / Fp12` tower
//! - [`ec`]: Weierstrass, Edwards and Montgomery points and the G2 twist
//! - [`pairing`]: Miller loop, final exponentiation and GLV / GS scalar
//!   multiplication in G1, G2 and GT
//! - [`encoding`]: byte formats of points and tower elements
//!
//! # Constant time
//!
//! Scalar multiplication by [`Big`] scalars, the fixed-width ladders
//! (`pinmul`, `pinpow`), conditional moves and point equality do not branch
//! on secret data. Decoding, square roots and the `pow` functions of the
//! tower run in variable time and are meant for public inputs.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Limb integers
pub mod bigint;
pub use bigint::{Big, DBig};

// Prime fields and the extension tower
pub mod field;
pub use field::{
    FieldConfig, Fp, Fp12, Fp2, Fp4, GenericMontgomery, ModularReduction, MontgomeryFriendly,
    PseudoMersenne,
};

// Signed window recoding shared by scalar multiplication and pow4
pub(crate) mod window;

// Curve points
pub mod ec;
pub use ec::{
    CurveConfig, EdwardsCurve, EdwardsPoint, MontgomeryCurve, MontgomeryPoint, PairingCurve,
    TwistPoint, WeierstrassCurve, WeierstrassPoint,
};

// Pairing
pub mod pairing;
pub use pairing::{
    ate, double_ate, double_pairing, final_exp, g1_mul, g2_mul, gt_member, gt_pow, Pairing,
};

// Bundled parameter sets
pub mod curves;
pub use curves::{
    Bn254, Bn254Fp, Bn254G1, Bn254G2, Bn254Gt, Bn254Pairing, Curve25519, Curve25519Point,
    Ed25519, Ed25519Point, Fp25519, Mf254, Mf254Fp, Mf254Point, Nist256, Nist256Fp,
    Nist256Point,
};

// Byte formats
pub mod encoding;
pub use encoding::PointBytes;
