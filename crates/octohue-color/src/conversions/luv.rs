//! CIE L*u*v* and its cylindrical form.

use octohue_core::{ColorResult, ColorSpaceId, ColorValue};

use super::lab::{EPSILON, KAPPA};
use super::{derived, from_polar, reference_white, to_polar};
use crate::registry::ConversionContext;

/// u'v' chromaticity; a zero denominator gives (0, 0).
#[inline]
fn uv_prime(x: f64, y: f64, z: f64) -> (f64, f64) {
    let denom = x + 15.0 * y + 3.0 * z;
    if denom == 0.0 {
        (0.0, 0.0)
    } else {
        (4.0 * x / denom, 9.0 * y / denom)
    }
}

/// XYZ to Luv against the value's own white point.
pub fn xyz_to_luv(color: &ColorValue, _ctx: &ConversionContext) -> ColorResult<ColorValue> {
    let info = reference_white(color);
    let [wx, wy, wz] = info.white_point()?;
    let [x, y, z] = color.triple_values();

    let (u, v) = uv_prime(x, y, z);
    let (un, vn) = uv_prime(wx, wy, wz);

    let yr = y / wy;
    let fy = if yr > EPSILON {
        yr.cbrt()
    } else {
        (KAPPA * yr + 16.0) / 116.0
    };
    let l = 116.0 * fy - 16.0;

    let luv = [l, 13.0 * l * (u - un), 13.0 * l * (v - vn)];
    derived(ColorSpaceId::Luv, luv, Some(info))
}

/// Luv to XYZ against the value's own white point. L <= 0 gives black.
pub fn luv_to_xyz(color: &ColorValue, _ctx: &ConversionContext) -> ColorResult<ColorValue> {
    let info = reference_white(color);
    let [l, u, v] = color.triple_values();
    if l <= 0.0 {
        return derived(ColorSpaceId::Xyz, [0.0; 3], Some(info));
    }

    let [wx, wy, wz] = info.white_point()?;
    let (un, vn) = uv_prime(wx, wy, wz);

    let y = if l > KAPPA * EPSILON {
        ((l + 16.0) / 116.0).powi(3)
    } else {
        l / KAPPA
    } * wy;

    let up = u / (13.0 * l) + un;
    let vp = v / (13.0 * l) + vn;
    let x = y * 9.0 * up / (4.0 * vp);
    let z = y * (12.0 - 3.0 * up - 20.0 * vp) / (4.0 * vp);

    derived(ColorSpaceId::Xyz, [x, y, z], Some(info))
}

/// Luv to LCHuv.
pub fn luv_to_lch(color: &ColorValue, _ctx: &ConversionContext) -> ColorResult<ColorValue> {
    let [l, u, v] = color.triple_values();
    let (c, h) = to_polar(u, v);
    derived(ColorSpaceId::LchUv, [l, c, h], color.illuminant())
}

/// LCHuv to Luv.
pub fn lch_to_luv(color: &ColorValue, _ctx: &ConversionContext) -> ColorResult<ColorValue> {
    let [l, c, h] = color.triple_values();
    let (u, v) = from_polar(c, h);
    derived(ColorSpaceId::Luv, [l, u, v], color.illuminant())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use octohue_core::{Illuminant, IlluminantInfo, Observer};

    #[test]
    fn test_green_under_d65() {
        let ctx = ConversionContext::default();
        let xyz = ColorValue::xyz(0.377886591, 0.724855136, 0.154888265)
            .with_illuminant(IlluminantInfo::new(Illuminant::D65, Observer::Two))
            .unwrap();
        let luv = xyz_to_luv(&xyz, &ctx).unwrap();
        let [l, u, v] = luv.triple_values();
        assert_abs_diff_eq!(l, 88.20176, epsilon = 1e-4);
        assert_abs_diff_eq!(u, -78.90762, epsilon = 1e-4);
        assert_abs_diff_eq!(v, 101.49063, epsilon = 1e-4);
    }

    #[test]
    fn test_roundtrip() {
        let ctx = ConversionContext::default();
        for xyz in [[0.002, 0.003, 0.001], [0.2, 0.3, 0.4], [0.8, 0.9, 0.7]] {
            let start = ColorValue::xyz(xyz[0], xyz[1], xyz[2]);
            let back = luv_to_xyz(&xyz_to_luv(&start, &ctx).unwrap(), &ctx).unwrap();
            for (a, b) in back.values().iter().zip(start.values()) {
                assert_abs_diff_eq!(a, b, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_black_both_ways() {
        let ctx = ConversionContext::default();
        let luv = xyz_to_luv(&ColorValue::xyz(0.0, 0.0, 0.0), &ctx).unwrap();
        assert_abs_diff_eq!(luv.values()[0], 0.0, epsilon = 1e-12);
        let xyz = luv_to_xyz(&ColorValue::luv(0.0, 10.0, 10.0), &ctx).unwrap();
        assert_eq!(xyz.values(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_lch_roundtrip() {
        let ctx = ConversionContext::default();
        let luv = ColorValue::luv(60.0, -30.0, 40.0);
        let back = lch_to_luv(&luv_to_lch(&luv, &ctx).unwrap(), &ctx).unwrap();
        for (a, b) in back.values().iter().zip(luv.values()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-12);
        }
    }
}
