//! Constant tables for the milagro engine
//!
//! Everything here is a literal `const`: the limb geometry shared by every
//! field in the workspace ([`arch`]), encoded sizes ([`sizes`]) and one
//! module per bundled curve under [`rom`], holding the modulus, reduction
//! constant, curve coefficients, generators and, for the pairing curve,
//! the Frobenius and endomorphism decomposition tables.

#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod arch;
pub mod rom;
pub mod sizes;
