//! Error handling for the decoding primitives

use alloc::borrow::Cow;
use core::fmt;

/// The error type for field, polynomial and decoding operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// The error-locator polynomial does not split into distinct roots over
    /// the field. This is the normal way "more errors than the code corrects"
    /// manifests; callers should treat it as a recoverable outcome.
    DecodeFailure,

    /// A bounded random search ran out of attempts
    Exhausted {
        /// Operation that hit its retry cap
        operation: &'static str,
    },

    /// Processing error during an algebraic operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for field, polynomial and decoding operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::DecodeFailure => {
                write!(f, "Decoding failed: error locator does not split over the field")
            }
            Error::Exhausted { operation } => {
                write!(f, "Retry cap exhausted in {}", operation)
            }
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;
