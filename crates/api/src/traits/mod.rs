//! Traits through which protocol code consumes the engine

pub mod pairing;
#[cfg(feature = "alloc")]
pub mod serialize;

pub use pairing::PairingEngine;
#[cfg(feature = "alloc")]
pub use serialize::Serialize;
