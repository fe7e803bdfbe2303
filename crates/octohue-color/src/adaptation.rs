//! Chromatic adaptation between illuminants.
//!
//! Re-expresses XYZ tristimulus values referenced to one white point as
//! values referenced to another, using a cone-response transform
//! (`M^-1 * S * M`, see [`octohue_math::adapt_matrix`]).
//!
//! # Example
//!
//! ```rust
//! use octohue_color::adaptation::{adapt, AdaptationMethod};
//! use octohue_core::{Illuminant, Observer};
//!
//! let d65_white = [0.95047, 1.0, 1.08883];
//! let d50 = adapt(
//!     d65_white,
//!     Illuminant::D65,
//!     Illuminant::D50,
//!     Observer::Two,
//!     AdaptationMethod::Bradford,
//! )
//! .unwrap();
//! assert!((d50[0] - 0.96422).abs() < 1e-4);
//! ```

use std::fmt;
use std::str::FromStr;

use octohue_core::{
    white_point, ColorError, ColorResult, ColorSpaceId, ColorValue, Illuminant, IlluminantInfo,
    Observer,
};
use octohue_math::{adapt_matrix, Mat3, Vec3, BRADFORD, CAT02, VON_KRIES, XYZ_SCALING};
use tracing::trace;

/// Cone-response model used for adaptation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AdaptationMethod {
    /// Bradford transform.
    #[default]
    Bradford,
    /// Von Kries (Hunt-Pointer-Estevez) transform.
    VonKries,
    /// CIECAM02 transform.
    Cat02,
    /// Scaling in XYZ directly.
    XyzScaling,
}

impl AdaptationMethod {
    /// Every method, in display order.
    pub const ALL: [AdaptationMethod; 4] = [
        Self::Bradford,
        Self::VonKries,
        Self::Cat02,
        Self::XyzScaling,
    ];

    /// Cone-response matrix.
    pub const fn matrix(self) -> Mat3 {
        match self {
            Self::Bradford => BRADFORD,
            Self::VonKries => VON_KRIES,
            Self::Cat02 => CAT02,
            Self::XyzScaling => XYZ_SCALING,
        }
    }

    /// Lowercase name (`"von_kries"`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bradford => "bradford",
            Self::VonKries => "von_kries",
            Self::Cat02 => "cat02",
            Self::XyzScaling => "xyz_scaling",
        }
    }
}

impl fmt::Display for AdaptationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AdaptationMethod {
    type Err = ColorError;

    fn from_str(s: &str) -> ColorResult<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "bradford" => Ok(Self::Bradford),
            "vonkries" => Ok(Self::VonKries),
            "cat02" => Ok(Self::Cat02),
            "xyzscaling" => Ok(Self::XyzScaling),
            _ => Err(ColorError::invalid_argument(format!(
                "unknown adaptation method '{s}'"
            ))),
        }
    }
}

/// Adaptation matrix taking XYZ under `src` to XYZ under `dst`.
///
/// Both white points are looked up under `observer`.
pub fn adaptation_matrix(
    src: Illuminant,
    dst: Illuminant,
    observer: Observer,
    method: AdaptationMethod,
) -> ColorResult<Mat3> {
    let src_white = Vec3::from_array(white_point(src, observer)?);
    let dst_white = Vec3::from_array(white_point(dst, observer)?);
    Ok(adapt_matrix(method.matrix(), src_white, dst_white))
}

/// Adapts an XYZ triple from `src` to `dst`.
///
/// Unknown illuminant/observer pairs fail even when `src == dst`; a valid
/// identical pair returns `xyz` unchanged.
pub fn adapt(
    xyz: [f64; 3],
    src: Illuminant,
    dst: Illuminant,
    observer: Observer,
    method: AdaptationMethod,
) -> ColorResult<[f64; 3]> {
    let m = adaptation_matrix(src, dst, observer, method)?;
    if src == dst {
        return Ok(xyz);
    }
    let out = (m * Vec3::from_array(xyz)).to_array();
    trace!(%src, %dst, %observer, %method, ?xyz, ?out, "adapt");
    Ok(out)
}

/// [`adapt`] with string keys, e.g. `("d65", "d50", "2", "bradford")`.
pub fn adapt_by_name(
    xyz: [f64; 3],
    src: &str,
    dst: &str,
    observer: &str,
    method: &str,
) -> ColorResult<[f64; 3]> {
    let observer: Observer = observer.parse()?;
    let src = parse_illuminant(src, observer)?;
    let dst = parse_illuminant(dst, observer)?;
    let method: AdaptationMethod = method.parse()?;
    adapt(xyz, src, dst, observer, method)
}

fn parse_illuminant(key: &str, observer: Observer) -> ColorResult<Illuminant> {
    key.parse().map_err(|_| ColorError::InvalidIlluminant {
        illuminant: key.to_string(),
        observer: observer.to_string(),
    })
}

/// Returns a copy of an XYZ value adapted to `target` and tagged with it.
///
/// The observer is kept. Fails with [`ColorError::InvalidArgument`] for
/// anything but XYZ.
pub fn adapt_color(
    color: &ColorValue,
    target: Illuminant,
    method: AdaptationMethod,
) -> ColorResult<ColorValue> {
    if color.space() != ColorSpaceId::Xyz {
        return Err(ColorError::invalid_argument(format!(
            "chromatic adaptation needs an XYZ value, got {}",
            color.space()
        )));
    }
    let info = color.illuminant().unwrap_or_default();
    let [x, y, z] = adapt(
        color.triple_values(),
        info.illuminant,
        target,
        info.observer,
        method,
    )?;
    let mut adapted =
        ColorValue::xyz(x, y, z).with_illuminant(IlluminantInfo::new(target, info.observer))?;
    if let Some(rgb) = color.through_rgb() {
        adapted = adapted.with_through_rgb(rgb)?;
    }
    Ok(adapted)
}
