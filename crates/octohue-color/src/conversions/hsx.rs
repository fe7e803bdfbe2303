//! RGB <-> HSL and RGB <-> HSV (hexcone models, hue in degrees).
//!
//! Both directions work on encoded RGB channels. The RGB side of the
//! inverse edges is the context's target variant.

use octohue_core::{ColorResult, ColorSpaceId, ColorValue};

use super::derived;
use crate::registry::ConversionContext;

/// Hexcone hue of an RGB triple; 0 for greys.
fn hue(r: f64, g: f64, b: f64, min: f64, max: f64) -> f64 {
    let d = max - min;
    if d == 0.0 {
        0.0
    } else if max == r {
        (60.0 * ((g - b) / d) + 360.0) % 360.0
    } else if max == g {
        60.0 * ((b - r) / d) + 120.0
    } else {
        60.0 * ((r - g) / d) + 240.0
    }
}

/// RGB to HSL.
pub fn rgb_to_hsl(color: &ColorValue, _ctx: &ConversionContext) -> ColorResult<ColorValue> {
    let [r, g, b] = color.triple_values();
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);

    let h = hue(r, g, b, min, max);
    let l = 0.5 * (max + min);
    let s = if max == min {
        0.0
    } else if l <= 0.5 {
        (max - min) / (2.0 * l)
    } else {
        (max - min) / (2.0 - 2.0 * l)
    };
    derived(ColorSpaceId::Hsl, [h, s, l], None)
}

fn hsl_component(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

/// HSL to the context's target RGB variant.
pub fn hsl_to_rgb(color: &ColorValue, ctx: &ConversionContext) -> ColorResult<ColorValue> {
    let [h, s, l] = color.triple_values();
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let h = h / 360.0;

    let rgb = [
        hsl_component(p, q, h + 1.0 / 3.0),
        hsl_component(p, q, h),
        hsl_component(p, q, h - 1.0 / 3.0),
    ];
    derived(ctx.target_rgb, rgb, None)
}

/// RGB to HSV.
pub fn rgb_to_hsv(color: &ColorValue, _ctx: &ConversionContext) -> ColorResult<ColorValue> {
    let [r, g, b] = color.triple_values();
    let min = r.min(g).min(b);
    let max = r.max(g).max(b);

    let h = hue(r, g, b, min, max);
    let s = if max == 0.0 { 0.0 } else { 1.0 - min / max };
    derived(ColorSpaceId::Hsv, [h, s, max], None)
}

/// HSV to the context's target RGB variant.
pub fn hsv_to_rgb(color: &ColorValue, ctx: &ConversionContext) -> ColorResult<ColorValue> {
    let [h, s, v] = color.triple_values();
    let sector = (h / 60.0).floor();
    let f = h / 60.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let rgb = match (sector as i64).rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    };
    derived(ctx.target_rgb, rgb, None)
}
