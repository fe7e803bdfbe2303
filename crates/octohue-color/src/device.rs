//! Projection to the xy chromaticity a lighting bridge accepts.
//!
//! Black has no chromaticity: X + Y + Z = 0 leaves x and y undefined. The
//! projection returns the chromaticity of the value's own reference white
//! in that case, so a black input still yields a neutral, valid point.

use std::fmt;

use octohue_core::{white_point_xy, ColorError, ColorResult, ColorSpaceId, ColorValue};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::ConversionEngine;

/// CIE 1931 xy chromaticity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Chromaticity {
    /// x coordinate.
    pub x: f64,
    /// y coordinate.
    pub y: f64,
}

impl Chromaticity {
    /// Creates a chromaticity.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `[x, y]`, the bridge's wire order.
    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl fmt::Display for Chromaticity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

/// xy chromaticity of an XYZ value.
///
/// # Errors
///
/// - [`ColorError::InvalidArgument`] for non-XYZ input
/// - [`ColorError::InvalidIlluminant`] when a black value's reference white
///   is not tabulated
pub fn xy_from_xyz(color: &ColorValue) -> ColorResult<Chromaticity> {
    if color.space() != ColorSpaceId::Xyz {
        return Err(ColorError::invalid_argument(format!(
            "xy projection needs an XYZ value, got {}",
            color.space()
        )));
    }
    let [x, y, z] = color.triple_values();
    let sum = x + y + z;
    if sum == 0.0 {
        let info = color.illuminant().unwrap_or_default();
        let (wx, wy) = white_point_xy(info.illuminant, info.observer)?;
        debug!(illuminant = %info.illuminant, "Zero luminance, using white point chromaticity");
        return Ok(Chromaticity::new(wx, wy));
    }
    Ok(Chromaticity::new(x / sum, y / sum))
}

/// Parses an sRGB `#RRGGBB` string and projects it to xy.
pub fn hex_to_xy(engine: &ConversionEngine, hex: &str) -> ColorResult<Chromaticity> {
    let rgb = ColorValue::from_hex(ColorSpaceId::Srgb, hex)?;
    let xyz = engine.convert(&rgb, ColorSpaceId::Xyz)?;
    let xy = xy_from_xyz(&xyz)?;
    debug!(hex, %xy, "Projected colour");
    Ok(xy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use octohue_core::{Illuminant, IlluminantInfo, Observer};

    #[test]
    fn test_golden_colours() {
        let engine = ConversionEngine::default();

        let green = hex_to_xy(&engine, "#33FF36").unwrap();
        assert_abs_diff_eq!(green.x, 0.300475174, epsilon = 1e-8);
        assert_abs_diff_eq!(green.y, 0.576365974, epsilon = 1e-8);

        let red = hex_to_xy(&engine, "#FF0000").unwrap();
        assert_abs_diff_eq!(red.x, 0.64, epsilon = 1e-9);
        assert_abs_diff_eq!(red.y, 0.33, epsilon = 1e-9);
    }

    #[test]
    fn test_black_uses_reference_white() {
        let engine = ConversionEngine::default();
        let black = hex_to_xy(&engine, "#000000").unwrap();
        let (wx, wy) = white_point_xy(Illuminant::D65, Observer::Two).unwrap();
        assert_eq!(black, Chromaticity::new(wx, wy));

        let d50_black = ColorValue::xyz(0.0, 0.0, 0.0);
        let xy = xy_from_xyz(&d50_black).unwrap();
        assert_abs_diff_eq!(xy.x, 0.345669, epsilon = 1e-6);
    }

    #[test]
    fn test_rejects_non_xyz() {
        assert!(xy_from_xyz(&ColorValue::lab(50.0, 0.0, 0.0)).is_err());
        let engine = ConversionEngine::default();
        assert!(matches!(
            hex_to_xy(&engine, "33FF3"),
            Err(ColorError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_ten_degree_black() {
        let info = IlluminantInfo::new(Illuminant::D65, Observer::Ten);
        let black = ColorValue::xyz(0.0, 0.0, 0.0).with_illuminant(info).unwrap();
        let xy = xy_from_xyz(&black).unwrap();
        let (wx, wy) = white_point_xy(Illuminant::D65, Observer::Ten).unwrap();
        assert_eq!(xy.to_array(), [wx, wy]);
    }
}
