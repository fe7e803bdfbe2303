//! Standard illuminants, observer angles and the white-point table.
//!
//! White points are XYZ tristimulus values normalized to Y = 1. The 2°
//! observer covers the full set of CIE illuminants; the 10° observer only
//! the daylight series.
//!
//! ```
//! use octohue_core::{white_point, Illuminant, Observer};
//!
//! let d65 = white_point(Illuminant::D65, Observer::Two).unwrap();
//! assert_eq!(d65, [0.95047, 1.0, 1.08883]);
//! assert!(white_point(Illuminant::A, Observer::Ten).is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::{ColorError, ColorResult};

/// CIE standard illuminants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Illuminant {
    /// Incandescent / tungsten (~2856K).
    A,
    /// Direct sunlight at noon (obsolete).
    B,
    /// Average daylight (obsolete).
    C,
    /// Horizon light (~5000K). ICC profile connection space.
    D50,
    /// Mid-morning daylight (~5500K).
    D55,
    /// Noon daylight (~6500K). sRGB, Adobe RGB, BT.2020.
    D65,
    /// North sky daylight (~7500K).
    D75,
    /// Equal energy.
    E,
    /// Cool white fluorescent.
    F2,
    /// Broad-band daylight fluorescent.
    F7,
    /// Narrow tri-band fluorescent.
    F11,
}

impl Illuminant {
    /// Every illuminant, in table order.
    pub const ALL: [Illuminant; 11] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D50,
        Self::D55,
        Self::D65,
        Self::D75,
        Self::E,
        Self::F2,
        Self::F7,
        Self::F11,
    ];

    /// Lowercase table key (`"d65"`).
    pub const fn key(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D50 => "d50",
            Self::D55 => "d55",
            Self::D65 => "d65",
            Self::D75 => "d75",
            Self::E => "e",
            Self::F2 => "f2",
            Self::F7 => "f7",
            Self::F11 => "f11",
        }
    }
}

impl fmt::Display for Illuminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Illuminant {
    type Err = ColorError;

    fn from_str(s: &str) -> ColorResult<Self> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|i| i.key() == key)
            .ok_or_else(|| ColorError::InvalidIlluminant {
                illuminant: s.to_string(),
                observer: "any".to_string(),
            })
    }
}

/// CIE standard observer angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Observer {
    /// CIE 1931 2° observer.
    #[default]
    Two,
    /// CIE 1964 10° observer.
    Ten,
}

impl Observer {
    /// Angle in degrees.
    pub const fn degrees(self) -> u32 {
        match self {
            Self::Two => 2,
            Self::Ten => 10,
        }
    }
}

impl fmt::Display for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

impl TryFrom<u32> for Observer {
    type Error = ColorError;

    fn try_from(degrees: u32) -> ColorResult<Self> {
        match degrees {
            2 => Ok(Self::Two),
            10 => Ok(Self::Ten),
            other => Err(ColorError::InvalidObserver(other.to_string())),
        }
    }
}

impl FromStr for Observer {
    type Err = ColorError;

    /// Accepts `"2"`, `"10"`, optionally suffixed with `°` or `deg`.
    fn from_str(s: &str) -> ColorResult<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .trim_end_matches('°')
            .trim_end_matches("deg")
            .trim();
        digits
            .parse::<u32>()
            .map_err(|_| ColorError::InvalidObserver(trimmed.to_string()))
            .and_then(Observer::try_from)
    }
}

/// Illuminant and observer pair carried by spaces that model a reference white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IlluminantInfo {
    /// Reference illuminant.
    pub illuminant: Illuminant,
    /// Observer angle.
    pub observer: Observer,
}

impl IlluminantInfo {
    /// Creates a new pair.
    #[inline]
    pub const fn new(illuminant: Illuminant, observer: Observer) -> Self {
        Self {
            illuminant,
            observer,
        }
    }

    /// Parses string keys, e.g. `("d65", "2")`.
    pub fn parse(illuminant: &str, observer: &str) -> ColorResult<Self> {
        let observer: Observer = observer.parse()?;
        let illuminant: Illuminant =
            illuminant
                .parse()
                .map_err(|_| ColorError::InvalidIlluminant {
                    illuminant: illuminant.to_string(),
                    observer: observer.to_string(),
                })?;
        let info = Self::new(illuminant, observer);
        info.white_point()?;
        Ok(info)
    }

    /// White point XYZ for this pair.
    #[inline]
    pub fn white_point(&self) -> ColorResult<[f64; 3]> {
        white_point(self.illuminant, self.observer)
    }
}

impl Default for IlluminantInfo {
    /// D50 under the 2° observer.
    fn default() -> Self {
        Self::new(Illuminant::D50, Observer::Two)
    }
}

/// Looks up the XYZ white point of `illuminant` under `observer`.
///
/// Fails with [`ColorError::InvalidIlluminant`] when the table has no entry
/// for the pair.
pub fn white_point(illuminant: Illuminant, observer: Observer) -> ColorResult<[f64; 3]> {
    use Illuminant as I;

    let xyz = match (observer, illuminant) {
        (Observer::Two, I::A) => [1.09850, 1.00000, 0.35585],
        (Observer::Two, I::B) => [0.99072, 1.00000, 0.85223],
        (Observer::Two, I::C) => [0.98074, 1.00000, 1.18232],
        (Observer::Two, I::D50) => [0.96422, 1.00000, 0.82521],
        (Observer::Two, I::D55) => [0.95682, 1.00000, 0.92149],
        (Observer::Two, I::D65) => [0.95047, 1.00000, 1.08883],
        (Observer::Two, I::D75) => [0.94972, 1.00000, 1.22638],
        (Observer::Two, I::E) => [1.00000, 1.00000, 1.00000],
        (Observer::Two, I::F2) => [0.99186, 1.00000, 0.67393],
        (Observer::Two, I::F7) => [0.95041, 1.00000, 1.08747],
        (Observer::Two, I::F11) => [1.00962, 1.00000, 0.64350],
        (Observer::Ten, I::D50) => [0.96720, 1.00000, 0.81430],
        (Observer::Ten, I::D55) => [0.95800, 1.00000, 0.90930],
        (Observer::Ten, I::D65) => [0.94810, 1.00000, 1.07300],
        (Observer::Ten, I::D75) => [0.94416, 1.00000, 1.20640],
        (observer, illuminant) => {
            return Err(ColorError::InvalidIlluminant {
                illuminant: illuminant.to_string(),
                observer: observer.to_string(),
            });
        }
    };
    Ok(xyz)
}

/// xy chromaticity of a white point.
pub fn white_point_xy(illuminant: Illuminant, observer: Observer) -> ColorResult<(f64, f64)> {
    let [x, y, z] = white_point(illuminant, observer)?;
    let sum = x + y + z;
    Ok((x / sum, y / sum))
}
