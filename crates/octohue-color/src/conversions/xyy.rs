//! XYZ <-> xyY.

use octohue_core::{ColorResult, ColorSpaceId, ColorValue};

use super::derived;
use crate::registry::ConversionContext;

/// XYZ to xyY. A zero tristimulus sum gives x = y = 0.
pub fn xyz_to_xyy(color: &ColorValue, _ctx: &ConversionContext) -> ColorResult<ColorValue> {
    let [x, y, z] = color.triple_values();
    let sum = x + y + z;
    let (cx, cy) = if sum == 0.0 { (0.0, 0.0) } else { (x / sum, y / sum) };
    derived(ColorSpaceId::XyY, [cx, cy, y], color.illuminant())
}

/// xyY to XYZ. y = 0 gives black.
pub fn xyy_to_xyz(color: &ColorValue, _ctx: &ConversionContext) -> ColorResult<ColorValue> {
    let [x, y, big_y] = color.triple_values();
    let xyz = if y == 0.0 {
        [0.0; 3]
    } else {
        [x * big_y / y, big_y, (1.0 - x - y) * big_y / y]
    };
    derived(ColorSpaceId::Xyz, xyz, color.illuminant())
}
