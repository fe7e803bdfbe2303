//! Colour space identifiers and RGB-family canonicalization.
//!
//! A [`ColorSpaceId`] tags every [`ColorValue`](crate::ColorValue) and every
//! node of the conversion graph. Concrete RGB variants (sRGB, Adobe RGB, ...)
//! all collapse onto the abstract [`ColorSpaceId::Rgb`] node for routing, so
//! a single RGB <-> XYZ edge pair serves every variant.
//!
//! # Supported Spaces
//!
//! | Id | Channels | Reference white |
//! |----|----------|-----------------|
//! | [`Srgb`](ColorSpaceId::Srgb), [`AdobeRgb`](ColorSpaceId::AdobeRgb), [`AppleRgb`](ColorSpaceId::AppleRgb), [`Bt2020`](ColorSpaceId::Bt2020) | r g b | native (D65) |
//! | [`Xyz`](ColorSpaceId::Xyz) | x y z | yes |
//! | [`XyY`](ColorSpaceId::XyY) | x y Y | yes |
//! | [`Lab`](ColorSpaceId::Lab), [`LchAb`](ColorSpaceId::LchAb) | l a b / l c h | yes |
//! | [`Luv`](ColorSpaceId::Luv), [`LchUv`](ColorSpaceId::LchUv) | l u v / l c h | yes |
//! | [`Hsl`](ColorSpaceId::Hsl), [`Hsv`](ColorSpaceId::Hsv) | h s l / h s v | no |
//! | [`Cmy`](ColorSpaceId::Cmy), [`Cmyk`](ColorSpaceId::Cmyk) | c m y (k) | no |
//!
//! # Usage
//!
//! ```
//! use octohue_core::ColorSpaceId;
//!
//! let adobe: ColorSpaceId = "adobe_rgb".parse().unwrap();
//! assert!(adobe.is_rgb());
//! assert_eq!(adobe.canonical(), ColorSpaceId::Rgb);
//! assert_eq!(ColorSpaceId::Lab.canonical(), ColorSpaceId::Lab);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::{ColorError, ColorResult};

/// Identifies a colour space or, for [`ColorSpaceId::Rgb`], the RGB family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorSpaceId {
    /// Abstract RGB family node. Routing only; never a value's space.
    Rgb,
    /// sRGB (IEC 61966-2-1), D65.
    Srgb,
    /// Adobe RGB (1998), gamma 2.2, D65.
    AdobeRgb,
    /// Apple RGB, gamma 1.8, D65.
    AppleRgb,
    /// ITU-R BT.2020, D65.
    Bt2020,
    /// CIE 1931 XYZ.
    Xyz,
    /// CIE xyY.
    XyY,
    /// CIE L*a*b*.
    Lab,
    /// Cylindrical L*a*b* (L, C, h).
    LchAb,
    /// CIE L*u*v*.
    Luv,
    /// Cylindrical L*u*v* (L, C, h).
    LchUv,
    /// Hue, saturation, lightness.
    Hsl,
    /// Hue, saturation, value.
    Hsv,
    /// Cyan, magenta, yellow.
    Cmy,
    /// Cyan, magenta, yellow, key.
    Cmyk,
}

impl ColorSpaceId {
    /// All concrete spaces, in graph registration order.
    pub const CONCRETE: [ColorSpaceId; 14] = [
        Self::Xyz,
        Self::XyY,
        Self::Lab,
        Self::LchAb,
        Self::Luv,
        Self::LchUv,
        Self::Srgb,
        Self::AdobeRgb,
        Self::AppleRgb,
        Self::Bt2020,
        Self::Hsl,
        Self::Hsv,
        Self::Cmy,
        Self::Cmyk,
    ];

    /// Concrete RGB variants.
    pub const RGB_VARIANTS: [ColorSpaceId; 4] =
        [Self::Srgb, Self::AdobeRgb, Self::AppleRgb, Self::Bt2020];

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "RGB",
            Self::Srgb => "sRGB",
            Self::AdobeRgb => "Adobe RGB",
            Self::AppleRgb => "Apple RGB",
            Self::Bt2020 => "BT.2020",
            Self::Xyz => "XYZ",
            Self::XyY => "xyY",
            Self::Lab => "Lab",
            Self::LchAb => "LCHab",
            Self::Luv => "Luv",
            Self::LchUv => "LCHuv",
            Self::Hsl => "HSL",
            Self::Hsv => "HSV",
            Self::Cmy => "CMY",
            Self::Cmyk => "CMYK",
        }
    }

    /// True for the RGB family, including the abstract node.
    #[inline]
    pub const fn is_rgb(self) -> bool {
        matches!(
            self,
            Self::Rgb | Self::Srgb | Self::AdobeRgb | Self::AppleRgb | Self::Bt2020
        )
    }

    /// True for the abstract RGB node, which no value may carry.
    #[inline]
    pub const fn is_abstract(self) -> bool {
        matches!(self, Self::Rgb)
    }

    /// Graph node for this space: RGB variants map to [`ColorSpaceId::Rgb`].
    #[inline]
    pub const fn canonical(self) -> Self {
        if self.is_rgb() { Self::Rgb } else { self }
    }

    /// True when values in this space carry an illuminant and observer.
    #[inline]
    pub const fn has_reference_white(self) -> bool {
        matches!(
            self,
            Self::Xyz | Self::XyY | Self::Lab | Self::LchAb | Self::Luv | Self::LchUv
        )
    }

    /// Channel names, in coordinate order.
    pub const fn channel_names(self) -> &'static [&'static str] {
        match self {
            Self::Rgb | Self::Srgb | Self::AdobeRgb | Self::AppleRgb | Self::Bt2020 => {
                &["r", "g", "b"]
            }
            Self::Xyz => &["x", "y", "z"],
            Self::XyY => &["x", "y", "Y"],
            Self::Lab => &["l", "a", "b"],
            Self::LchAb | Self::LchUv => &["l", "c", "h"],
            Self::Luv => &["l", "u", "v"],
            Self::Hsl => &["h", "s", "l"],
            Self::Hsv => &["h", "s", "v"],
            Self::Cmy => &["c", "m", "y"],
            Self::Cmyk => &["c", "m", "y", "k"],
        }
    }

    /// Number of coordinates.
    #[inline]
    pub const fn channel_count(self) -> usize {
        self.channel_names().len()
    }
}

impl fmt::Display for ColorSpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpaceId {
    type Err = ColorError;

    /// Parses a space name, ignoring case and `-`, `_`, `.`, space separators.
    fn from_str(s: &str) -> ColorResult<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | '.' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        let id = match key.as_str() {
            "rgb" => Self::Rgb,
            "srgb" => Self::Srgb,
            "adobergb" | "adobergb1998" => Self::AdobeRgb,
            "applergb" => Self::AppleRgb,
            "bt2020" | "rec2020" => Self::Bt2020,
            "xyz" | "ciexyz" => Self::Xyz,
            "xyy" => Self::XyY,
            "lab" | "cielab" => Self::Lab,
            "lch" | "lchab" => Self::LchAb,
            "luv" | "cieluv" => Self::Luv,
            "lchuv" => Self::LchUv,
            "hsl" => Self::Hsl,
            "hsv" => Self::Hsv,
            "cmy" => Self::Cmy,
            "cmyk" => Self::Cmyk,
            _ => return Err(ColorError::UnknownColorSpace(s.to_string())),
        };
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize_rgb_family() {
        for v in ColorSpaceId::RGB_VARIANTS {
            assert_eq!(v.canonical(), ColorSpaceId::Rgb, "{v}");
        }
        assert_eq!(ColorSpaceId::Rgb.canonical(), ColorSpaceId::Rgb);
        assert_eq!(ColorSpaceId::Hsl.canonical(), ColorSpaceId::Hsl);
        assert_eq!(ColorSpaceId::Xyz.canonical(), ColorSpaceId::Xyz);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("sRGB".parse::<ColorSpaceId>().unwrap(), ColorSpaceId::Srgb);
        assert_eq!("Adobe-RGB".parse::<ColorSpaceId>().unwrap(), ColorSpaceId::AdobeRgb);
        assert_eq!("BT.2020".parse::<ColorSpaceId>().unwrap(), ColorSpaceId::Bt2020);
        assert_eq!("xyY".parse::<ColorSpaceId>().unwrap(), ColorSpaceId::XyY);
        assert_eq!("lch_uv".parse::<ColorSpaceId>().unwrap(), ColorSpaceId::LchUv);
        assert_eq!(
            "bogus".parse::<ColorSpaceId>(),
            Err(ColorError::UnknownColorSpace("bogus".into()))
        );
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for id in ColorSpaceId::CONCRETE {
            assert_eq!(id.to_string().parse::<ColorSpaceId>().unwrap(), id);
        }
    }

    #[test]
    fn test_channel_counts() {
        assert_eq!(ColorSpaceId::Cmyk.channel_count(), 4);
        assert_eq!(ColorSpaceId::Lab.channel_count(), 3);
        assert!(ColorSpaceId::Luv.has_reference_white());
        assert!(!ColorSpaceId::Hsv.has_reference_white());
        assert!(!ColorSpaceId::Srgb.has_reference_white());
    }
}
