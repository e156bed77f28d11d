//! Traits for byte serialization of field elements and group elements.

use crate::Result;

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

/// A trait for public types that can be serialized to and from bytes.
///
/// Decoding validates what it reads: a point must lie on its curve and a
/// field element must be canonical. Failures are reported as
/// [`Error::InvalidPoint`](crate::Error::InvalidPoint),
/// [`Error::InvalidEncoding`](crate::Error::InvalidEncoding) or
/// [`Error::InvalidLength`](crate::Error::InvalidLength).
pub trait Serialize: Sized {
    /// Creates an object from a byte slice.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Converts the object to a byte vector.
    fn to_bytes(&self) -> Vec<u8>;
}
