//! # octohue-math
//!
//! Math primitives for colour-space conversion:
//!
//! - [`Vec3`] - 3D vectors for XYZ/RGB triplets
//! - [`Mat3`] - 3x3 matrices for RGB/XYZ transforms
//! - Chromatic adaptation transforms (Bradford, Von Kries, CAT02, XYZ scaling)
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Values are `f64` throughout. Matrix products and inversion are computed
//! with [`glam`] `DMat3`/`DVec3`.
//!
//! # Used By
//!
//! - `octohue-primaries` - RGB/XYZ matrix derivation
//! - `octohue-color` - conversion edges and chromatic adaptation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod mat3;
mod vec3;

pub use adapt::*;
pub use mat3::*;
pub use vec3::*;
