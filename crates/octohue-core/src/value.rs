//! Immutable colour values.
//!
//! A [`ColorValue`] is a point in one concrete colour space: up to four
//! coordinates, an optional [`IlluminantInfo`] for spaces that model a
//! reference white, and an optional through-RGB memory recording which RGB
//! variant a previous conversion passed through.
//!
//! Values are never mutated after construction; builder methods consume
//! `self` and return a new value.
//!
//! ```
//! use octohue_core::{ColorSpaceId, ColorValue};
//!
//! let c = ColorValue::from_hex(ColorSpaceId::Srgb, "#33FF36").unwrap();
//! assert_eq!(c.upscaled_values(), Some([51, 255, 54]));
//! assert_eq!(c.to_hex().unwrap(), "#33ff36");
//! ```

use std::fmt;

use crate::{ColorError, ColorResult, ColorSpaceId, IlluminantInfo};

/// A colour in a concrete space.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorValue {
    space: ColorSpaceId,
    values: [f64; 4],
    illuminant: Option<IlluminantInfo>,
    upscaled: bool,
    through_rgb: Option<ColorSpaceId>,
}

impl ColorValue {
    /// Creates a value from raw coordinates.
    ///
    /// Spaces with a reference white get the default D50 / 2° pair; use
    /// [`with_illuminant`](Self::with_illuminant) to pick another.
    ///
    /// # Errors
    ///
    /// - [`ColorError::InvalidTarget`] for the abstract RGB node
    /// - [`ColorError::ChannelCount`] when `values` has the wrong length
    pub fn new(space: ColorSpaceId, values: &[f64]) -> ColorResult<Self> {
        if space.is_abstract() {
            return Err(ColorError::InvalidTarget(space.to_string()));
        }
        let expected = space.channel_count();
        if values.len() != expected {
            return Err(ColorError::ChannelCount {
                space,
                expected,
                got: values.len(),
            });
        }
        let mut buf = [0.0; 4];
        buf[..expected].copy_from_slice(values);
        Ok(Self::from_parts(space, buf))
    }

    fn from_parts(space: ColorSpaceId, values: [f64; 4]) -> Self {
        Self {
            space,
            values,
            illuminant: space
                .has_reference_white()
                .then(IlluminantInfo::default),
            upscaled: false,
            through_rgb: None,
        }
    }

    /// Three-channel constructor for internal use by the typed helpers.
    ///
    /// `space` must be concrete and three-channel.
    fn triple(space: ColorSpaceId, a: f64, b: f64, c: f64) -> Self {
        debug_assert!(!space.is_abstract() && space.channel_count() == 3);
        Self::from_parts(space, [a, b, c, 0.0])
    }

    /// XYZ value under D50 / 2°.
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self::triple(ColorSpaceId::Xyz, x, y, z)
    }

    /// xyY value under D50 / 2°.
    pub fn xyy(x: f64, y: f64, big_y: f64) -> Self {
        Self::triple(ColorSpaceId::XyY, x, y, big_y)
    }

    /// Lab value under D50 / 2°.
    pub fn lab(l: f64, a: f64, b: f64) -> Self {
        Self::triple(ColorSpaceId::Lab, l, a, b)
    }

    /// LCHab value under D50 / 2°.
    pub fn lch_ab(l: f64, c: f64, h: f64) -> Self {
        Self::triple(ColorSpaceId::LchAb, l, c, h)
    }

    /// Luv value under D50 / 2°.
    pub fn luv(l: f64, u: f64, v: f64) -> Self {
        Self::triple(ColorSpaceId::Luv, l, u, v)
    }

    /// LCHuv value under D50 / 2°.
    pub fn lch_uv(l: f64, c: f64, h: f64) -> Self {
        Self::triple(ColorSpaceId::LchUv, l, c, h)
    }

    /// HSL value; hue in degrees, saturation and lightness in 0.0-1.0.
    pub fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self::triple(ColorSpaceId::Hsl, h, s, l)
    }

    /// HSV value; hue in degrees, saturation and value in 0.0-1.0.
    pub fn hsv(h: f64, s: f64, v: f64) -> Self {
        Self::triple(ColorSpaceId::Hsv, h, s, v)
    }

    /// CMY value in 0.0-1.0.
    pub fn cmy(c: f64, m: f64, y: f64) -> Self {
        Self::triple(ColorSpaceId::Cmy, c, m, y)
    }

    /// CMYK value in 0.0-1.0.
    pub fn cmyk(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self::from_parts(ColorSpaceId::Cmyk, [c, m, y, k])
    }

    /// RGB value with channels in 0.0-1.0.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidArgument`] unless `space` is a concrete RGB variant.
    pub fn rgb(space: ColorSpaceId, r: f64, g: f64, b: f64) -> ColorResult<Self> {
        if !space.is_rgb() || space.is_abstract() {
            return Err(ColorError::invalid_argument(format!(
                "{space} is not a concrete RGB space"
            )));
        }
        Ok(Self::triple(space, r, g, b))
    }

    /// RGB value with channels in 0-255.
    ///
    /// Channels are scaled down to 0.0-1.0 on construction and the value is
    /// flagged as upscaled.
    pub fn rgb_upscaled(space: ColorSpaceId, r: f64, g: f64, b: f64) -> ColorResult<Self> {
        let mut value = Self::rgb(space, r / 255.0, g / 255.0, b / 255.0)?;
        value.upscaled = true;
        Ok(value)
    }

    /// sRGB value with channels in 0.0-1.0.
    pub fn srgb(r: f64, g: f64, b: f64) -> Self {
        Self::triple(ColorSpaceId::Srgb, r, g, b)
    }

    /// Parses `#RRGGBB` (leading `#` optional) into an upscaled RGB value.
    pub fn from_hex(space: ColorSpaceId, hex: &str) -> ColorResult<Self> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorError::InvalidHex(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(f64::from)
                .map_err(|_| ColorError::InvalidHex(hex.to_string()))
        };
        Self::rgb_upscaled(space, channel(0..2)?, channel(2..4)?, channel(4..6)?)
    }

    /// Returns this value re-tagged with `info`.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidArgument`] when the space has no reference white.
    pub fn with_illuminant(mut self, info: IlluminantInfo) -> ColorResult<Self> {
        if !self.space.has_reference_white() {
            return Err(ColorError::invalid_argument(format!(
                "{} does not carry an illuminant",
                self.space
            )));
        }
        self.illuminant = Some(info);
        Ok(self)
    }

    /// Returns this value remembering `rgb` as the variant it passed through.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidArgument`] unless `rgb` is a concrete RGB variant.
    pub fn with_through_rgb(mut self, rgb: ColorSpaceId) -> ColorResult<Self> {
        if !rgb.is_rgb() || rgb.is_abstract() {
            return Err(ColorError::invalid_argument(format!(
                "{rgb} is not a concrete RGB space"
            )));
        }
        self.through_rgb = Some(rgb);
        Ok(self)
    }

    /// Space of this value.
    #[inline]
    pub fn space(&self) -> ColorSpaceId {
        self.space
    }

    /// Coordinates, one per channel.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values[..self.space.channel_count()]
    }

    /// First three coordinates as an array.
    #[inline]
    pub fn triple_values(&self) -> [f64; 3] {
        [self.values[0], self.values[1], self.values[2]]
    }

    /// Coordinate by channel name (`"l"`, `"a"`, ...).
    pub fn channel(&self, name: &str) -> Option<f64> {
        self.space
            .channel_names()
            .iter()
            .position(|n| *n == name)
            .map(|i| self.values[i])
    }

    /// Illuminant and observer, for spaces with a reference white.
    #[inline]
    pub fn illuminant(&self) -> Option<IlluminantInfo> {
        self.illuminant
    }

    /// True when this RGB value was built from 0-255 input.
    #[inline]
    pub fn is_upscaled(&self) -> bool {
        self.upscaled
    }

    /// RGB variant remembered from an earlier conversion.
    #[inline]
    pub fn through_rgb(&self) -> Option<ColorSpaceId> {
        self.through_rgb
    }

    /// RGB channels clamped to 0.0-1.0. `None` for non-RGB values.
    pub fn clamped_rgb(&self) -> Option<[f64; 3]> {
        self.space
            .is_rgb()
            .then(|| self.triple_values().map(|v| v.clamp(0.0, 1.0)))
    }

    /// RGB channels as 0-255 integers, rounding half up after clamping.
    pub fn upscaled_values(&self) -> Option<[u8; 3]> {
        self.clamped_rgb()
            .map(|rgb| rgb.map(|v| (0.5 + v * 255.0).floor() as u8))
    }

    /// Lowercase `#rrggbb`. `None` for non-RGB values.
    pub fn to_hex(&self) -> Option<String> {
        self.upscaled_values()
            .map(|[r, g, b]| format!("#{r:02x}{g:02x}{b:02x}"))
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.space)?;
        let names = self.space.channel_names();
        for (i, (name, value)) in names.iter().zip(self.values()).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}:{value:.4}")?;
        }
        if let Some(info) = self.illuminant {
            write!(f, " observer:{} illuminant:{}", info.observer, info.illuminant)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Illuminant, Observer};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_hex_parsing() {
        let c = ColorValue::from_hex(ColorSpaceId::Srgb, "#33FF36").unwrap();
        assert!(c.is_upscaled());
        let [r, g, b] = c.triple_values();
        assert_abs_diff_eq!(r, 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(g, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(b, 54.0 / 255.0, epsilon = 1e-12);

        let bare = ColorValue::from_hex(ColorSpaceId::Srgb, "  ff0000 ").unwrap();
        assert_eq!(bare.to_hex().unwrap(), "#ff0000");
    }

    #[test]
    fn test_hex_rejects_malformed() {
        for bad in ["#FFF", "#GG0000", "", "#ff00001", "#ÿÿÿ"] {
            assert!(
                matches!(
                    ColorValue::from_hex(ColorSpaceId::Srgb, bad),
                    Err(ColorError::InvalidHex(_))
                ),
                "{bad:?}"
            );
        }
        assert!(matches!(
            ColorValue::from_hex(ColorSpaceId::Lab, "#ffffff"),
            Err(ColorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_new_validates() {
        assert!(matches!(
            ColorValue::new(ColorSpaceId::Cmyk, &[0.1, 0.2, 0.3]),
            Err(ColorError::ChannelCount { expected: 4, got: 3, .. })
        ));
        assert!(matches!(
            ColorValue::new(ColorSpaceId::Rgb, &[0.1, 0.2, 0.3]),
            Err(ColorError::InvalidTarget(_))
        ));
        let v = ColorValue::new(ColorSpaceId::Cmyk, &[0.1, 0.2, 0.3, 0.4]).unwrap();
        assert_eq!(v.values(), &[0.1, 0.2, 0.3, 0.4]);
        assert_eq!(v.channel("k"), Some(0.4));
    }

    #[test]
    fn test_illuminant_only_on_reference_white_spaces() {
        let lab = ColorValue::lab(50.0, 10.0, -10.0);
        assert_eq!(lab.illuminant(), Some(IlluminantInfo::default()));

        let hsl = ColorValue::hsl(120.0, 0.5, 0.5);
        assert_eq!(hsl.illuminant(), None);
        assert!(hsl
            .with_illuminant(IlluminantInfo::new(Illuminant::D65, Observer::Two))
            .is_err());
    }

    #[test]
    fn test_through_rgb_is_set_once_on_a_new_value() {
        let hsl = ColorValue::hsl(10.0, 0.5, 0.5);
        let remembered = hsl.clone().with_through_rgb(ColorSpaceId::AdobeRgb).unwrap();
        assert_eq!(hsl.through_rgb(), None);
        assert_eq!(remembered.through_rgb(), Some(ColorSpaceId::AdobeRgb));
        assert!(hsl.with_through_rgb(ColorSpaceId::Rgb).is_err());
    }

    #[test]
    fn test_clamped_and_upscaled() {
        let c = ColorValue::srgb(-0.2, 0.5, 1.3);
        assert_eq!(c.clamped_rgb(), Some([0.0, 0.5, 1.0]));
        assert_eq!(c.upscaled_values(), Some([0, 128, 255]));
        assert_eq!(ColorValue::xyz(0.1, 0.1, 0.1).clamped_rgb(), None);
    }

    #[test]
    fn test_display() {
        let xyz = ColorValue::xyz(0.5, 0.25, 0.125);
        assert_eq!(
            xyz.to_string(),
            "XYZ (x:0.5000 y:0.2500 z:0.1250 observer:2 illuminant:d50)"
        );
        assert_eq!(
            ColorValue::hsv(90.0, 1.0, 0.5).to_string(),
            "HSV (h:90.0000 s:1.0000 v:0.5000)"
        );
    }
}
