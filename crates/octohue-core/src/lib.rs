//! # octohue-core
//!
//! Core types for colour conversion:
//!
//! - [`ColorSpaceId`] - Colour space tags and RGB-family canonicalization
//! - [`Illuminant`], [`Observer`], [`IlluminantInfo`] - Reference whites
//! - [`ColorValue`] - Immutable colour values with optional through-RGB memory
//! - [`ColorError`] - Every failure the conversion stack can report
//!
//! ## Crate Structure
//!
//! ```text
//! octohue-core (this crate)
//!    ^
//!    |
//!    +-- octohue-primaries (RGB profiles)
//!    +-- octohue-color (registry, resolver, engine)
//!    +-- octohue-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod illuminant;
pub mod space;
pub mod value;

pub use error::{ColorError, ColorResult};
pub use illuminant::{white_point, white_point_xy, Illuminant, IlluminantInfo, Observer};
pub use space::ColorSpaceId;
pub use value::ColorValue;

/// Prelude module for convenient imports.
///
/// ```
/// use octohue_core::prelude::*;
///
/// let c = ColorValue::lab(50.0, 0.0, 0.0);
/// assert_eq!(c.space(), ColorSpaceId::Lab);
/// ```
pub mod prelude {
    pub use crate::error::{ColorError, ColorResult};
    pub use crate::illuminant::{Illuminant, IlluminantInfo, Observer};
    pub use crate::space::ColorSpaceId;
    pub use crate::value::ColorValue;
}
