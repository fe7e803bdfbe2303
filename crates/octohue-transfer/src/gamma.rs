//! Pure power-law transfer functions.
//!
//! - 2.2: Adobe RGB (1998)
//! - 1.8: Apple RGB
//!
//! Non-positive input maps to 0.

/// Decodes with `v^gamma`.
///
/// ```rust
/// use octohue_transfer::gamma::eotf;
///
/// assert!((eotf(0.5, 2.2) - 0.2176).abs() < 1e-4);
/// ```
#[inline]
pub fn eotf(v: f64, gamma: f64) -> f64 {
    if v <= 0.0 { 0.0 } else { v.powf(gamma) }
}

/// Encodes with `l^(1/gamma)`.
#[inline]
pub fn oetf(l: f64, gamma: f64) -> f64 {
    if l <= 0.0 { 0.0 } else { l.powf(1.0 / gamma) }
}
