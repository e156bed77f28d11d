//! Error handling for the arithmetic, curve and pairing layers

use core::fmt;

use milagro_api::{Error as CoreError, Result as CoreResult};

/// The error type for field, curve and pairing operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Coordinates that do not satisfy the curve equation
    Point {
        /// Where the point was rejected
        context: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Square root of a quadratic non-residue
    NonResidue {
        /// Where the root was requested
        context: &'static str,
    },

    /// Pairing input at infinity
    DegeneratePairing {
        /// Which pairing entry point saw the input
        context: &'static str,
    },

    /// Malformed encoding (unknown tag, coordinate not below the modulus)
    Encoding {
        /// What was being decoded
        context: &'static str,
        /// What was wrong with it
        reason: &'static str,
    },

    /// Feature not implemented
    NotImplemented {
        /// Name of the unimplemented feature
        feature: &'static str,
    },

    /// Fallback for other errors
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }

    /// Shorthand to create a Point error
    pub fn point(context: &'static str, reason: &'static str) -> Self {
        Error::Point { context, reason }
    }
}

/// Result type for algorithm-level operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type for byte decoding
pub type DecodeResult<T> = Result<T>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length { context, expected, actual } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Point { context, reason } => {
                write!(f, "Invalid point in {}: {}", context, reason)
            }
            Error::NonResidue { context } => {
                write!(f, "Quadratic non-residue in {}", context)
            }
            Error::DegeneratePairing { context } => {
                write!(f, "Degenerate pairing input in {}", context)
            }
            Error::Encoding { context, reason } => {
                write!(f, "Malformed encoding for {}: {}", context, reason)
            }
            Error::NotImplemented { feature } => {
                write!(f, "Feature not implemented: {}", feature)
            }
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Point { context, reason } => CoreError::InvalidPoint {
                context,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
            Error::NonResidue { context } => CoreError::NonResidue { context },
            Error::DegeneratePairing { context } => CoreError::DegeneratePairing { context },
            Error::Encoding { context, reason } => CoreError::InvalidEncoding {
                context,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
            Error::NotImplemented { feature } => CoreError::NotImplemented { feature },
            Error::Other(msg) => CoreError::Other {
                context: "algorithms",
                #[cfg(feature = "std")]
                message: msg.to_string(),
            },
        }
    }
}

/// Convert an algorithm result to an API result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Re-export the API extension trait for convenience
pub use milagro_api::error::ResultExt;

pub mod validate;
