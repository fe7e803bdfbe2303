//! # octohue-transfer
//!
//! Companding curves for the RGB spaces octohue understands.
//!
//! Each curve has a decode direction (encoded RGB to linear light, the EOTF)
//! and an encode direction (linear light to encoded RGB, the OETF).
//!
//! | Function | Used by | Range |
//! |----------|---------|-------|
//! | [`srgb`] | sRGB | [0, 1] |
//! | [`gamma`] | Adobe RGB (2.2), Apple RGB (1.8) | [0, 1] |
//! | [`bt2020`] | BT.2020 | [0, 1] |
//!
//! # Usage
//!
//! ```rust
//! use octohue_transfer::TransferCurve;
//!
//! let curve = TransferCurve::Gamma(2.2);
//! let linear = curve.decode(0.5);
//! assert!((curve.encode(linear) - 0.5).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `octohue-primaries` - per-variant RGB profiles
//! - `octohue-color` - RGB <-> XYZ edges

#![warn(missing_docs)]

pub mod bt2020;
pub mod gamma;
pub mod srgb;

/// Transfer curve of an RGB space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransferCurve {
    /// IEC 61966-2-1 piecewise curve.
    Srgb,
    /// Pure power law with the given exponent.
    Gamma(f64),
    /// ITU-R BT.2020 curve.
    Bt2020,
}

impl TransferCurve {
    /// Encoded value to linear light.
    #[inline]
    pub fn decode(self, v: f64) -> f64 {
        match self {
            Self::Srgb => srgb::eotf(v),
            Self::Gamma(g) => gamma::eotf(v, g),
            Self::Bt2020 => bt2020::eotf(v),
        }
    }

    /// Linear light to encoded value.
    #[inline]
    pub fn encode(self, l: f64) -> f64 {
        match self {
            Self::Srgb => srgb::oetf(l),
            Self::Gamma(g) => gamma::oetf(l, g),
            Self::Bt2020 => bt2020::oetf(l),
        }
    }

    /// Applies [`decode`](Self::decode) to an RGB triplet.
    #[inline]
    pub fn decode_rgb(self, rgb: [f64; 3]) -> [f64; 3] {
        rgb.map(|v| self.decode(v))
    }

    /// Applies [`encode`](Self::encode) to an RGB triplet.
    #[inline]
    pub fn encode_rgb(self, rgb: [f64; 3]) -> [f64; 3] {
        rgb.map(|l| self.encode(l))
    }
}
