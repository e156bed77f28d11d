//! Error type definitions for the milagro engine

/// Primary error type for field, curve and pairing operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Bytes or coordinates do not describe a point on the curve
    InvalidPoint {
        /// Where the point was rejected
        context: &'static str,
        /// Detail about the rejection
        #[cfg(feature = "std")]
        message: String,
    },

    /// Square root requested of a quadratic non-residue
    NonResidue {
        /// Where the root was requested
        context: &'static str,
    },

    /// Pairing evaluated with the point at infinity as an input
    DegeneratePairing {
        /// Which pairing entry point saw the input
        context: &'static str,
    },

    /// Invalid length error with context
    InvalidLength {
        /// What was being decoded
        context: &'static str,
        /// Length that was required
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Encoding is malformed (unknown tag, non-canonical coordinate)
    InvalidEncoding {
        /// What was being decoded
        context: &'static str,
        /// Detail about the malformation
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid parameter error
    InvalidParameter {
        /// Which parameter was rejected
        context: &'static str,
        /// Why it was rejected
        #[cfg(feature = "std")]
        message: String,
    },

    /// Not implemented error
    NotImplemented {
        /// The missing feature
        feature: &'static str,
    },

    /// Other error
    Other {
        /// Where the error occurred
        context: &'static str,
        /// Detail about the error
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for milagro operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidPoint { .. } => Self::InvalidPoint {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::NonResidue { .. } => Self::NonResidue { context },
            Self::DegeneratePairing { .. } => Self::DegeneratePairing { context },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidEncoding { .. } => Self::InvalidEncoding {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::InvalidParameter { .. } => Self::InvalidParameter {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
            Self::NotImplemented { feature } => Self::NotImplemented { feature },
            Self::Other { .. } => Self::Other {
                context,
                #[cfg(feature = "std")]
                message: String::new(),
            },
        }
    }

    /// Add a message to an existing error (when std is available)
    #[cfg(feature = "std")]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidPoint { context, .. } => Self::InvalidPoint { context, message },
            Self::InvalidEncoding { context, .. } => Self::InvalidEncoding { context, message },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::Other { context, .. } => Self::Other { context, message },
            other => other,
        }
    }

    /// Whether this error reports input that failed a curve or encoding check
    pub fn is_rejected_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidPoint { .. } | Self::InvalidEncoding { .. } | Self::InvalidLength { .. }
        )
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Self::InvalidPoint { context, message } => {
                write!(f, "Invalid point: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidPoint { context } => {
                write!(f, "Invalid point: {}", context)
            }
            Self::NonResidue { context } => {
                write!(f, "{}: not a quadratic residue", context)
            }
            Self::DegeneratePairing { context } => {
                write!(f, "{}: pairing input is the point at infinity", context)
            }
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})", context, expected, actual)
            }
            #[cfg(feature = "std")]
            Self::InvalidEncoding { context, message } => {
                write!(f, "Invalid encoding: {}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidEncoding { context } => {
                write!(f, "Invalid encoding: {}", context)
            }
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => {
                write!(f, "Invalid parameter: {}", context)
            }
            Self::NotImplemented { feature } => {
                write!(f, "{} is not implemented", feature)
            }
            #[cfg(feature = "std")]
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::Other { context } => {
                write!(f, "Error: {}", context)
            }
        }
    }
}
