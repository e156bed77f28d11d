//! Error handling for the milagro engine

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

impl From<core::array::TryFromSliceError> for Error {
    fn from(_: core::array::TryFromSliceError) -> Self {
        Self::InvalidLength {
            context: "array conversion",
            expected: 0,
            actual: 0,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result of decoding a point or field element
pub type DecodeResult<T> = Result<T>;

/// Result of a pairing evaluation
pub type PairingResult<T> = Result<T>;

#[cfg(test)]
mod tests;
