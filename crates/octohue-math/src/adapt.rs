//! Chromatic Adaptation Transforms (CAT).
//!
//! Matrices and functions for re-referencing XYZ values from one white
//! point to another.
//!
//! # Supported Methods
//!
//! - [`BRADFORD`] - Best overall accuracy (default choice)
//! - [`VON_KRIES`] - Classic cone response model
//! - [`CAT02`] - From CIECAM02 color appearance model
//! - [`XYZ_SCALING`] - Simple but less accurate
//!
//! # Usage
//!
//! ```rust
//! use octohue_math::{adapt_matrix, BRADFORD, Vec3};
//!
//! let d65 = Vec3::new(0.95047, 1.0, 1.08883);
//! let d50 = Vec3::new(0.96422, 1.0, 0.82521);
//!
//! let d65_to_d50 = adapt_matrix(BRADFORD, d65, d50);
//! let white = d65_to_d50 * d65;
//! assert!((white.z - d50.z).abs() < 1e-9);
//! ```

use crate::{Mat3, Vec3};

/// Bradford chromatic adaptation matrix.
///
/// Transforms XYZ to a "sharpened" cone response space.
///
/// # Reference
///
/// Lam, K.M. (1985). Metamerism and Colour Constancy.
pub const BRADFORD: Mat3 = Mat3::from_rows([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Von Kries chromatic adaptation matrix.
///
/// Hunt-Pointer-Estevez cone response transformation.
pub const VON_KRIES: Mat3 = Mat3::from_rows([
    [0.40024, 0.70760, -0.08081],
    [-0.22630, 1.16532, 0.04570],
    [0.00000, 0.00000, 0.91822],
]);

/// CAT02 chromatic adaptation matrix.
///
/// From the CIECAM02 color appearance model.
pub const CAT02: Mat3 = Mat3::from_rows([
    [0.7328, 0.4296, -0.1624],
    [-0.7036, 1.6975, 0.0061],
    [0.0030, 0.0136, 0.9834],
]);

/// XYZ Scaling (simple diagonal adaptation).
pub const XYZ_SCALING: Mat3 = Mat3::IDENTITY;

/// Computes a chromatic adaptation matrix between two white points.
///
/// The resulting matrix transforms XYZ values referenced to `src_white`
/// into XYZ values referenced to `dst_white`: `M^-1 * S * M`, where `S`
/// scales the cone responses of the source white onto the destination.
///
/// Identical white points yield the identity matrix (up to rounding).
pub fn adapt_matrix(method: Mat3, src_white: Vec3, dst_white: Vec3) -> Mat3 {
    let method_inv = method.inverse().unwrap_or(Mat3::IDENTITY);

    let src_cone = method * src_white;
    let dst_cone = method * dst_white;

    let scale = Mat3::diagonal(
        dst_cone.x / src_cone.x,
        dst_cone.y / src_cone.y,
        dst_cone.z / src_cone.z,
    );

    method_inv * scale * method
}
