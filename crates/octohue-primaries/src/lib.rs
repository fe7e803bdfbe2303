//! # octohue-primaries
//!
//! RGB primaries and RGB <-> XYZ matrix generation for the concrete RGB
//! variants of [`octohue_core::ColorSpaceId`].
//!
//! Primaries are CIE xy chromaticities. The white point is taken from the
//! illuminant table in `octohue-core`, so `RGB(1, 1, 1)` maps exactly onto
//! the tabulated XYZ of the variant's native illuminant.
//!
//! # Included Color Spaces
//!
//! | Color Space | Transfer | Native white |
//! |-------------|----------|--------------|
//! | sRGB | sRGB piecewise | D65 |
//! | Adobe RGB (1998) | gamma 2.2 | D65 |
//! | Apple RGB | gamma 1.8 | D65 |
//! | BT.2020 | BT.2020 | D65 |
//!
//! # Usage
//!
//! ```rust
//! use octohue_core::ColorSpaceId;
//! use octohue_math::Vec3;
//! use octohue_primaries::profile;
//!
//! let srgb = profile(ColorSpaceId::Srgb).unwrap();
//! let white = srgb.to_xyz() * Vec3::ONE;
//! assert!((white.y - 1.0).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `octohue-color` - RGB <-> XYZ conversion edges

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use octohue_core::{ColorSpaceId, Illuminant};
use octohue_math::{Mat3, Vec3};
use octohue_transfer::TransferCurve;

/// RGB primaries definition.
///
/// # Example
///
/// ```rust
/// use octohue_primaries::{Primaries, D65_XYZ};
///
/// let custom = Primaries {
///     r: (0.64, 0.33),
///     g: (0.30, 0.60),
///     b: (0.15, 0.06),
///     white: D65_XYZ,
///     name: "Custom",
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f64, f64),
    /// Green primary (x, y) chromaticity
    pub g: (f64, f64),
    /// Blue primary (x, y) chromaticity
    pub b: (f64, f64),
    /// White point as XYZ (Y=1)
    pub white: [f64; 3],
    /// Color space name
    pub name: &'static str,
}

/// D65 / 2° white point XYZ, as tabulated in `octohue-core`.
pub const D65_XYZ: [f64; 3] = [0.95047, 1.0, 1.08883];

/// sRGB primaries.
pub const SRGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    white: D65_XYZ,
    name: "sRGB",
};

/// Adobe RGB (1998) primaries.
pub const ADOBE_RGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.2100, 0.7100),
    b: (0.1500, 0.0600),
    white: D65_XYZ,
    name: "Adobe RGB",
};

/// Apple RGB primaries.
pub const APPLE_RGB: Primaries = Primaries {
    r: (0.6250, 0.3400),
    g: (0.2800, 0.5950),
    b: (0.1550, 0.0700),
    white: D65_XYZ,
    name: "Apple RGB",
};

/// ITU-R BT.2020 primaries.
pub const BT2020: Primaries = Primaries {
    r: (0.7080, 0.2920),
    g: (0.1700, 0.7970),
    b: (0.1310, 0.0460),
    white: D65_XYZ,
    name: "BT.2020",
};

/// Converts xy chromaticity to XYZ with Y=1.
#[inline]
fn xy_to_xyz(x: f64, y: f64) -> Vec3 {
    if y.abs() < 1e-10 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// Computes the RGB to XYZ matrix for a set of primaries.
///
/// # Algorithm
///
/// 1. Convert xy chromaticities to XYZ (with Y=1)
/// 2. Solve `M * S = W` for the per-primary scale `S`
/// 3. Scale each primary column by its factor
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Mat3 {
    let r_xyz = xy_to_xyz(primaries.r.0, primaries.r.1);
    let g_xyz = xy_to_xyz(primaries.g.0, primaries.g.1);
    let b_xyz = xy_to_xyz(primaries.b.0, primaries.b.1);
    let w_xyz = Vec3::from_array(primaries.white);

    let m = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);
    let m_inv = m.inverse().unwrap_or(Mat3::IDENTITY);
    let s = m_inv * w_xyz;

    Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z)
}

/// Computes the XYZ to RGB matrix, the inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Mat3 {
    rgb_to_xyz_matrix(primaries)
        .inverse()
        .unwrap_or(Mat3::IDENTITY)
}

/// Everything the conversion edges need to know about one RGB variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbProfile {
    /// Space this profile describes.
    pub id: ColorSpaceId,
    /// Chromaticities of the primaries.
    pub primaries: Primaries,
    /// Companding curve.
    pub transfer: TransferCurve,
    /// Native illuminant; RGB -> XYZ results are tagged with it.
    pub native_illuminant: Illuminant,
}

impl RgbProfile {
    /// Linear RGB to XYZ.
    #[inline]
    pub fn to_xyz(&self) -> Mat3 {
        rgb_to_xyz_matrix(&self.primaries)
    }

    /// XYZ to linear RGB.
    #[inline]
    pub fn from_xyz(&self) -> Mat3 {
        xyz_to_rgb_matrix(&self.primaries)
    }
}

static PROFILES: [RgbProfile; 4] = [
    RgbProfile {
        id: ColorSpaceId::Srgb,
        primaries: SRGB,
        transfer: TransferCurve::Srgb,
        native_illuminant: Illuminant::D65,
    },
    RgbProfile {
        id: ColorSpaceId::AdobeRgb,
        primaries: ADOBE_RGB,
        transfer: TransferCurve::Gamma(2.2),
        native_illuminant: Illuminant::D65,
    },
    RgbProfile {
        id: ColorSpaceId::AppleRgb,
        primaries: APPLE_RGB,
        transfer: TransferCurve::Gamma(1.8),
        native_illuminant: Illuminant::D65,
    },
    RgbProfile {
        id: ColorSpaceId::Bt2020,
        primaries: BT2020,
        transfer: TransferCurve::Bt2020,
        native_illuminant: Illuminant::D65,
    },
];

/// Profile of a concrete RGB variant; `None` for every other space.
pub fn profile(id: ColorSpaceId) -> Option<&'static RgbProfile> {
    PROFILES.iter().find(|p| p.id == id)
}

/// All known RGB profiles.
pub fn profiles() -> &'static [RgbProfile] {
    &PROFILES
}
