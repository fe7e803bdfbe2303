//! CIE L*a*b* and its cylindrical form.

use octohue_core::{ColorResult, ColorSpaceId, ColorValue};

use super::{derived, from_polar, reference_white, to_polar};
use crate::registry::ConversionContext;

/// CIE epsilon, 216/24389.
pub const EPSILON: f64 = 216.0 / 24389.0;
/// CIE kappa, 24389/27.
pub const KAPPA: f64 = 24389.0 / 27.0;

#[inline]
fn f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn f_inv(ft: f64) -> f64 {
    let cube = ft * ft * ft;
    if cube > EPSILON {
        cube
    } else {
        (116.0 * ft - 16.0) / KAPPA
    }
}

/// XYZ to Lab against the value's own white point.
pub fn xyz_to_lab(color: &ColorValue, _ctx: &ConversionContext) -> ColorResult<ColorValue> {
    let info = reference_white(color);
    let [wx, wy, wz] = info.white_point()?;
    let [x, y, z] = color.triple_values();

    let fx = f(x / wx);
    let fy = f(y / wy);
    let fz = f(z / wz);

    let lab = [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)];
    derived(ColorSpaceId::Lab, lab, Some(info))
}

/// Lab to XYZ against the value's own white point.
pub fn lab_to_xyz(color: &ColorValue, _ctx: &ConversionContext) -> ColorResult<ColorValue> {
    let info = reference_white(color);
    let [wx, wy, wz] = info.white_point()?;
    let [l, a, b] = color.triple_values();

    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    let xyz = [wx * f_inv(fx), wy * f_inv(fy), wz * f_inv(fz)];
    derived(ColorSpaceId::Xyz, xyz, Some(info))
}

/// Lab to LCHab.
pub fn lab_to_lch(color: &ColorValue, _ctx: &ConversionContext) -> ColorResult<ColorValue> {
    let [l, a, b] = color.triple_values();
    let (c, h) = to_polar(a, b);
    derived(ColorSpaceId::LchAb, [l, c, h], color.illuminant())
}

/// LCHab to Lab.
pub fn lch_to_lab(color: &ColorValue, _ctx: &ConversionContext) -> ColorResult<ColorValue> {
    let [l, c, h] = color.triple_values();
    let (a, b) = from_polar(c, h);
    derived(ColorSpaceId::Lab, [l, a, b], color.illuminant())
}
