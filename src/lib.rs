//! # milagro
//!
//! Multi-precision integers, prime fields, elliptic curves in three shapes
//! and the BN optimal-ate pairing, with every curve chosen at compile time.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! milagro = "0.4"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support, implies `alloc`
//! - `alloc`: `Vec`-returning [`Serialize`](api::Serialize) impls
//! - `portable-mul`: split-halves limb multiplication without 128-bit
//!   integers
//! - `full`: everything above plus a re-export of `rand`
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`milagro-api`]: error type and the pairing and serialization traits
//! - [`milagro-internal`]: constant-time selection helpers
//! - [`milagro-params`]: limb geometry, encoding sizes and curve constants
//! - [`milagro-algorithms`]: the arithmetic itself
//!
//! ## Example
//!
//! ```
//! use milagro::prelude::*;
//!
//! let g1 = Bn254G1::generator();
//! let g2 = Bn254G2::generator();
//! let e = Bn254Pairing::pairing(&g2, &g1).unwrap();
//! assert!(Bn254Pairing::gt_member(&e));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports
pub use milagro_algorithms as algorithms;
pub use milagro_api as api;
pub use milagro_internal as internal;
pub use milagro_params as params;

#[cfg(feature = "full")]
pub use rand;

/// Common imports for milagro users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::PairingEngine;
    #[cfg(feature = "alloc")]
    pub use crate::api::Serialize;

    // Arithmetic building blocks
    pub use crate::algorithms::{Big, FieldConfig, Fp, Fp12, Fp2, Fp4};

    // Curve shapes and their configuration traits
    pub use crate::algorithms::{
        CurveConfig, EdwardsCurve, EdwardsPoint, MontgomeryCurve, MontgomeryPoint, PairingCurve,
        TwistPoint, WeierstrassCurve, WeierstrassPoint,
    };

    // Bundled curves
    pub use crate::algorithms::curves::{
        Bn254, Bn254G1, Bn254G2, Bn254Gt, Bn254Pairing, Curve25519, Curve25519Point, Ed25519,
        Ed25519Point, Mf254, Mf254Point, Nist256, Nist256Point,
    };

    // Constant-time primitives used throughout the API
    pub use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
}
