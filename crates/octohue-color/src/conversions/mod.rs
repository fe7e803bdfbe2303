//! Built-in conversion edges.
//!
//! | Module | Edges |
//! |--------|-------|
//! | [`xyy`] | XYZ <-> xyY |
//! | [`lab`] | XYZ <-> Lab, Lab <-> LCHab |
//! | [`luv`] | XYZ <-> Luv, Luv <-> LCHuv |
//! | [`rgb`] | XYZ <-> RGB |
//! | [`hsx`] | RGB <-> HSL, RGB <-> HSV |
//! | [`cmyk`] | RGB <-> CMY, CMY <-> CMYK |
//!
//! Values with a reference white keep their illuminant and observer across
//! every edge except RGB -> XYZ, which tags the variant's native white.

pub mod cmyk;
pub mod hsx;
pub mod lab;
pub mod luv;
pub mod rgb;
pub mod xyy;

use octohue_core::{ColorResult, ColorSpaceId, ColorValue, IlluminantInfo};

use crate::registry::ConversionRegistry;

/// Builds a three-channel value carrying `info` when the space models a white.
pub(crate) fn derived(
    space: ColorSpaceId,
    values: [f64; 3],
    info: Option<IlluminantInfo>,
) -> ColorResult<ColorValue> {
    let value = ColorValue::new(space, &values)?;
    match info {
        Some(info) if space.has_reference_white() => value.with_illuminant(info),
        _ => Ok(value),
    }
}

/// Illuminant of a value, falling back to the D50 / 2° default.
#[inline]
pub(crate) fn reference_white(color: &ColorValue) -> IlluminantInfo {
    color.illuminant().unwrap_or_default()
}

/// Registers every built-in edge, in graph order.
pub fn register_defaults(registry: &mut ConversionRegistry) {
    use ColorSpaceId as S;

    registry.register_fn(S::Xyz, S::XyY, xyy::xyz_to_xyy);
    registry.register_fn(S::XyY, S::Xyz, xyy::xyy_to_xyz);
    registry.register_fn(S::Xyz, S::Lab, lab::xyz_to_lab);
    registry.register_fn(S::Lab, S::Xyz, lab::lab_to_xyz);
    registry.register_fn(S::Lab, S::LchAb, lab::lab_to_lch);
    registry.register_fn(S::LchAb, S::Lab, lab::lch_to_lab);
    registry.register_fn(S::Xyz, S::Luv, luv::xyz_to_luv);
    registry.register_fn(S::Luv, S::Xyz, luv::luv_to_xyz);
    registry.register_fn(S::Luv, S::LchUv, luv::luv_to_lch);
    registry.register_fn(S::LchUv, S::Luv, luv::lch_to_luv);
    registry.register_fn(S::Xyz, S::Rgb, rgb::xyz_to_rgb);
    registry.register_fn(S::Rgb, S::Xyz, rgb::rgb_to_xyz);
    registry.register_fn(S::Rgb, S::Hsl, hsx::rgb_to_hsl);
    registry.register_fn(S::Hsl, S::Rgb, hsx::hsl_to_rgb);
    registry.register_fn(S::Rgb, S::Hsv, hsx::rgb_to_hsv);
    registry.register_fn(S::Hsv, S::Rgb, hsx::hsv_to_rgb);
    registry.register_fn(S::Rgb, S::Cmy, cmyk::rgb_to_cmy);
    registry.register_fn(S::Cmy, S::Rgb, cmyk::cmy_to_rgb);
    registry.register_fn(S::Cmy, S::Cmyk, cmyk::cmy_to_cmyk);
    registry.register_fn(S::Cmyk, S::Cmy, cmyk::cmyk_to_cmy);
}

/// Polar form of a rectangular (a, b) pair: chroma and hue in [0, 360).
#[inline]
pub(crate) fn to_polar(a: f64, b: f64) -> (f64, f64) {
    let c = a.hypot(b);
    let h = b.atan2(a).to_degrees().rem_euclid(360.0);
    (c, h)
}

/// Rectangular form of a (chroma, hue in degrees) pair.
#[inline]
pub(crate) fn from_polar(c: f64, h: f64) -> (f64, f64) {
    let (sin, cos) = h.to_radians().sin_cos();
    (c * cos, c * sin)
}
