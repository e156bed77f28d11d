//! Public API traits and types for the milagro engine
//!
//! This crate holds the error taxonomy returned by every fallible operation
//! in the workspace and the traits through which protocol code consumes the
//! arithmetic: byte serialization of group elements and the pairing engine
//! interface.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::PairingEngine;
#[cfg(feature = "alloc")]
pub use traits::Serialize;

// Re-export trait modules for direct access
pub use traits::pairing;
#[cfg(feature = "alloc")]
pub use traits::serialize;
