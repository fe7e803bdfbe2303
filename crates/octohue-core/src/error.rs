//! Error types for colour conversion.
//!
//! Every failure in the conversion stack is local and synchronous: the
//! computation is pure, so retrying reproduces the same error. Callers
//! match on [`ColorError`] and surface it.
//!
//! # Usage
//!
//! ```rust
//! use octohue_core::{ColorError, ColorSpaceId};
//!
//! let err = ColorError::UndefinedConversion {
//!     from: ColorSpaceId::Lab,
//!     to: ColorSpaceId::Cmyk,
//! };
//! assert_eq!(err.to_string(), "conversion from Lab to CMYK is not defined");
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - derive macro for `Error` and `Display`

use thiserror::Error;

use crate::ColorSpaceId;

/// Result type alias using [`ColorError`].
pub type ColorResult<T> = Result<T, ColorError>;

/// Errors raised while building colour values or converting between spaces.
///
/// # Categories
///
/// - **Graph errors**: [`UndefinedConversion`](ColorError::UndefinedConversion)
/// - **Reference white errors**: [`InvalidIlluminant`](ColorError::InvalidIlluminant),
///   [`InvalidObserver`](ColorError::InvalidObserver)
/// - **Argument errors**: [`InvalidTarget`](ColorError::InvalidTarget),
///   [`InvalidArgument`](ColorError::InvalidArgument),
///   [`UnknownColorSpace`](ColorError::UnknownColorSpace),
///   [`InvalidHex`](ColorError::InvalidHex),
///   [`ChannelCount`](ColorError::ChannelCount)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// No chain of registered conversions connects the two spaces.
    ///
    /// Carries the spaces as requested by the caller, before RGB
    /// canonicalization.
    #[error("conversion from {from} to {to} is not defined")]
    UndefinedConversion {
        /// Source space.
        from: ColorSpaceId,
        /// Target space.
        to: ColorSpaceId,
    },

    /// The illuminant has no white point under the given observer.
    #[error("invalid illuminant '{illuminant}' for observer {observer}")]
    InvalidIlluminant {
        /// Illuminant key as given.
        illuminant: String,
        /// Observer angle as given.
        observer: String,
    },

    /// The observer angle is not one of the supported values (2, 10).
    #[error("invalid observer angle '{0}' (expected 2 or 10)")]
    InvalidObserver(String),

    /// The conversion target is not a concrete colour space.
    #[error("invalid conversion target '{0}': expected a concrete color space")]
    InvalidTarget(String),

    /// An argument does not apply to the value or space it was used with.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A colour space name could not be resolved.
    #[error("unknown color space '{0}'")]
    UnknownColorSpace(String),

    /// A hex string is not in `#RRGGBB` form.
    #[error("'{0}' is not in #RRGGBB format")]
    InvalidHex(String),

    /// Wrong number of coordinates for the space.
    #[error("{space} expects {expected} channels, got {got}")]
    ChannelCount {
        /// Space being constructed.
        space: ColorSpaceId,
        /// Channels the space defines.
        expected: usize,
        /// Channels supplied.
        got: usize,
    },
}

impl ColorError {
    /// Creates an [`ColorError::InvalidArgument`] error.
    #[inline]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Returns true for errors caused by a missing conversion path.
    #[inline]
    pub fn is_undefined_conversion(&self) -> bool {
        matches!(self, Self::UndefinedConversion { .. })
    }
}
