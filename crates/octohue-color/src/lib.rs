//! # octohue-color
//!
//! Graph-routed colour space conversion.
//!
//! - [`ConversionRegistry`] - directed edges between colour spaces
//! - [`PathResolver`] - fewest-edge chains between two spaces
//! - [`ConversionEngine`] - applies chains, tracks the through-RGB variant
//! - [`adaptation`] - chromatic adaptation between illuminants
//! - [`device`] - xy chromaticity for lighting bridges
//! - [`light`] - bridge state payloads
//!
//! # Architecture
//!
//! ```text
//!                  octohue-color
//!                        |
//!        +---------------+---------------+
//!        |               |               |
//! octohue-transfer  octohue-primaries    |
//!        |               |               |
//!        +-------+-------+               |
//!                |                       |
//!          octohue-math            octohue-core
//! ```
//!
//! # Graph
//!
//! ```text
//!   xyY     LCHab    LCHuv
//!    |        |        |
//!    +------ XYZ -- Lab, Luv
//!             |
//!            RGB (sRGB, Adobe RGB, Apple RGB, BT.2020)
//!             |
//!     +-------+-------+
//!    HSL     HSV     CMY -- CMYK
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use octohue_color::{hex_to_xy, ConversionEngine};
//!
//! let engine = ConversionEngine::default();
//! let xy = hex_to_xy(&engine, "#FFFFFF").unwrap();
//! assert!((xy.x - 0.3127).abs() < 1e-4);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod adaptation;
pub mod conversions;
pub mod device;
pub mod engine;
pub mod light;
pub mod registry;
pub mod resolver;

pub use adaptation::{adapt, adapt_by_name, adapt_color, AdaptationMethod};
pub use device::{hex_to_xy, xy_from_xyz, Chromaticity};
pub use engine::{ConversionEngine, ConvertOptions};
pub use light::{build_state, toggle_state, LightState, StateRequest};
pub use registry::{ConversionContext, ConversionEdge, ConversionFn, ConversionRegistry, Step};
pub use resolver::{ConversionPath, PathResolver};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::engine::{ConversionEngine, ConvertOptions};
    pub use crate::registry::{ConversionRegistry, Step};
    pub use octohue_core::prelude::*;
}
