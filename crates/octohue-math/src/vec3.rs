//! 3-component vector for tristimulus and RGB triplets.
//!
//! [`Vec3`] carries XYZ, linear RGB, cone responses and white points
//! through the conversion graph. All arithmetic is `f64` so that
//! RGB -> XYZ -> RGB round-trips stay well inside `1e-6`.
//!
//! ```rust
//! use octohue_math::Vec3;
//!
//! let v = Vec3::new(-0.25, 0.5, 1.75).clamp01();
//! assert_eq!(v.to_array(), [0.0, 0.5, 1.0]);
//! ```

use std::ops::Mul;

/// A 3D vector for color triplets (RGB, XYZ, LMS).
///
/// For RGB: x=R, y=G, z=B. For XYZ: x=X, y=Y, z=Z.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    /// X component (R for RGB, X for XYZ)
    pub x: f64,
    /// Y component (G for RGB, Y for XYZ)
    pub y: f64,
    /// Z component (B for RGB, Z for XYZ)
    pub z: f64,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Clamps each component to [0, 1].
    #[inline]
    pub fn clamp01(self) -> Self {
        Self::new(
            self.x.clamp(0.0, 1.0),
            self.y.clamp(0.0, 1.0),
            self.z.clamp(0.0, 1.0),
        )
    }

    #[inline]
    pub(crate) fn to_glam(self) -> glam::DVec3 {
        glam::DVec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub(crate) fn from_glam(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_clamp01() {
        let v = Vec3::new(-0.5, 0.5, 1.5);
        assert_eq!(v.clamp01(), Vec3::new(0.0, 0.5, 1.0));
        assert_eq!(Vec3::ONE.clamp01(), Vec3::ONE);
    }

    #[test]
    fn test_vec3_scale() {
        assert_eq!(Vec3::new(1.0, 2.0, 3.0) * 2.0, Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_vec3_array_roundtrip() {
        let a = [0.1, 0.2, 0.3];
        assert_eq!(Vec3::from_array(a).to_array(), a);
        assert_eq!(Vec3::from_glam(Vec3::from_array(a).to_glam()).to_array(), a);
    }
}
