//! RGB <-> CMY <-> CMYK.

use octohue_core::{ColorError, ColorResult, ColorSpaceId, ColorValue};

use super::derived;
use crate::registry::ConversionContext;

/// RGB to CMY (channel complement).
pub fn rgb_to_cmy(color: &ColorValue, _ctx: &ConversionContext) -> ColorResult<ColorValue> {
    derived(ColorSpaceId::Cmy, color.triple_values().map(|v| 1.0 - v), None)
}

/// CMY to the context's target RGB variant.
pub fn cmy_to_rgb(color: &ColorValue, ctx: &ConversionContext) -> ColorResult<ColorValue> {
    derived(ctx.target_rgb, color.triple_values().map(|v| 1.0 - v), None)
}

/// CMY to CMYK. Pure black gives c = m = y = 0, k = 1.
pub fn cmy_to_cmyk(color: &ColorValue, _ctx: &ConversionContext) -> ColorResult<ColorValue> {
    let [c, m, y] = color.triple_values();
    let k = c.min(m).min(y).min(1.0);
    let [c, m, y] = if k == 1.0 {
        [0.0; 3]
    } else {
        [c, m, y].map(|v| (v - k) / (1.0 - k))
    };
    ColorValue::new(ColorSpaceId::Cmyk, &[c, m, y, k])
}

/// CMYK to CMY. Fails unless `color` is a four-channel CMYK value.
pub fn cmyk_to_cmy(color: &ColorValue, _ctx: &ConversionContext) -> ColorResult<ColorValue> {
    if color.space() != ColorSpaceId::Cmyk {
        return Err(ColorError::invalid_argument(format!(
            "CMYK to CMY needs a CMYK value, got {}",
            color.space()
        )));
    }
    let k = color.values()[3];
    let cmy = color.triple_values().map(|v| v * (1.0 - k) + k);
    derived(ColorSpaceId::Cmy, cmy, None)
}
