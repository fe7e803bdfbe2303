//! ITU-R BT.2020 transfer function.
//!
//! Same shape as Rec.709. The constants are the unrounded pair that makes
//! both segments meet at `B` with equal slope, so encode and decode switch
//! branches at the same point.
//!
//! # Reference
//!
//! ITU-R BT.2020-2

/// Curve offset (alpha).
pub const A: f64 = 1.09929682680944;
/// Linear-segment breakpoint (beta).
pub const B: f64 = 0.018053968510807;

/// Encoded value at the breakpoint.
const V_BREAK: f64 = 4.5 * B;

/// Encodes linear light.
///
/// # Formula
///
/// ```text
/// if L < B:
///     V = 4.5 * L
/// else:
///     V = A * L^0.45 - (A - 1)
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l < B {
        4.5 * l
    } else {
        A * l.powf(0.45) - (A - 1.0)
    }
}

/// Decodes to linear light.
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v < V_BREAK {
        v / 4.5
    } else {
        ((v + A - 1.0) / A).powf(1.0 / 0.45)
    }
}
