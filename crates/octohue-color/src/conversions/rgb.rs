//! XYZ <-> RGB for every concrete RGB variant.
//!
//! The variant's profile supplies the primaries matrix, companding curve
//! and native illuminant. RGB -> XYZ reads the profile of the value's own
//! space; XYZ -> RGB writes the context's target variant.

use octohue_core::{ColorError, ColorResult, ColorSpaceId, ColorValue, IlluminantInfo, Observer};
use octohue_math::Vec3;
use octohue_primaries::{profile, RgbProfile};
use tracing::trace;

use super::{derived, reference_white};
use crate::adaptation::adapt;
use crate::registry::ConversionContext;

fn rgb_profile(space: ColorSpaceId) -> ColorResult<&'static RgbProfile> {
    profile(space).ok_or_else(|| {
        ColorError::invalid_argument(format!("{space} is not a concrete RGB space"))
    })
}

/// RGB to XYZ.
///
/// Linearizes with the variant's curve and applies its forward matrix. The
/// result is tagged with the native illuminant (2° observer), then adapted
/// to the context's target illuminant when one is set and differs.
pub fn rgb_to_xyz(color: &ColorValue, ctx: &ConversionContext) -> ColorResult<ColorValue> {
    let profile = rgb_profile(color.space())?;
    let linear = profile.transfer.decode_rgb(color.triple_values());
    let xyz = (profile.to_xyz() * Vec3::from_array(linear)).to_array();

    let native = IlluminantInfo::new(profile.native_illuminant, Observer::Two);
    let (xyz, info) = match ctx.target_illuminant {
        Some(target) if target != native.illuminant => {
            let adapted = adapt(xyz, native.illuminant, target, native.observer, ctx.adaptation)?;
            (adapted, IlluminantInfo::new(target, native.observer))
        }
        _ => (xyz, native),
    };
    trace!(rgb = %color.space(), ?xyz, illuminant = %info.illuminant, "rgb_to_xyz");
    derived(ColorSpaceId::Xyz, xyz, Some(info))
}

/// XYZ to the context's target RGB variant.
///
/// Adapts to the variant's native illuminant under the value's observer
/// when needed, applies the inverse matrix, clamps linear channels to
/// [0, 1] and encodes with the variant's curve.
pub fn xyz_to_rgb(color: &ColorValue, ctx: &ConversionContext) -> ColorResult<ColorValue> {
    let profile = rgb_profile(ctx.target_rgb)?;
    let info = reference_white(color);

    let mut xyz = color.triple_values();
    if info.illuminant != profile.native_illuminant {
        xyz = adapt(
            xyz,
            info.illuminant,
            profile.native_illuminant,
            info.observer,
            ctx.adaptation,
        )?;
    }

    let linear = (profile.from_xyz() * Vec3::from_array(xyz)).clamp01();
    let rgb = profile.transfer.encode_rgb(linear.to_array());
    trace!(rgb = %ctx.target_rgb, ?rgb, "xyz_to_rgb");
    derived(ctx.target_rgb, rgb, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use octohue_core::Illuminant;

    fn ctx_for(target_rgb: ColorSpaceId) -> ConversionContext {
        ConversionContext {
            target_rgb,
            ..Default::default()
        }
    }

    #[test]
    fn test_srgb_green_golden() {
        let c = ColorValue::from_hex(ColorSpaceId::Srgb, "#33FF36").unwrap();
        let xyz = rgb_to_xyz(&c, &ConversionContext::default()).unwrap();
        let [x, y, z] = xyz.triple_values();
        assert_abs_diff_eq!(x, 0.377886591, epsilon = 1e-8);
        assert_abs_diff_eq!(y, 0.724855136, epsilon = 1e-8);
        assert_abs_diff_eq!(z, 0.154888265, epsilon = 1e-8);
        assert_eq!(
            xyz.illuminant(),
            Some(IlluminantInfo::new(Illuminant::D65, Observer::Two))
        );
    }

    #[test]
    fn test_target_illuminant_adapts() {
        let c = ColorValue::from_hex(ColorSpaceId::Srgb, "#33FF36").unwrap();
        let ctx = ConversionContext {
            target_illuminant: Some(Illuminant::D50),
            ..Default::default()
        };
        let xyz = rgb_to_xyz(&c, &ctx).unwrap();
        let [x, y, z] = xyz.triple_values();
        assert_abs_diff_eq!(x, 0.404779210, epsilon = 1e-6);
        assert_abs_diff_eq!(y, 0.726480679, epsilon = 1e-6);
        assert_abs_diff_eq!(z, 0.123911217, epsilon = 1e-6);
        assert_eq!(xyz.illuminant().map(|i| i.illuminant), Some(Illuminant::D50));
    }

    #[test]
    fn test_roundtrip_every_variant() {
        for space in ColorSpaceId::RGB_VARIANTS {
            let ctx = ctx_for(space);
            let start = ColorValue::rgb(space, 0.25, 0.6, 0.9).unwrap();
            let xyz = rgb_to_xyz(&start, &ctx).unwrap();
            let back = xyz_to_rgb(&xyz, &ctx).unwrap();
            assert_eq!(back.space(), space);
            for (a, b) in back.values().iter().zip(start.values()) {
                assert_abs_diff_eq!(a, b, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_d50_input_is_adapted_back() {
        let ctx = ConversionContext {
            target_illuminant: Some(Illuminant::D50),
            ..Default::default()
        };
        let start = ColorValue::srgb(0.3, 0.5, 0.7);
        let xyz = rgb_to_xyz(&start, &ctx).unwrap();
        let back = xyz_to_rgb(&xyz, &ctx).unwrap();
        for (a, b) in back.values().iter().zip(start.values()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_out_of_gamut_is_clamped() {
        let xyz = ColorValue::xyz(0.1, 0.9, 1.5)
            .with_illuminant(IlluminantInfo::new(Illuminant::D65, Observer::Two))
            .unwrap();
        let rgb = xyz_to_rgb(&xyz, &ctx_for(ColorSpaceId::Srgb)).unwrap();
        for v in rgb.values() {
            assert!((0.0..=1.0).contains(v), "{v}");
        }
        assert_eq!(rgb.values()[0], 0.0);
    }

    #[test]
    fn test_abstract_target_rejected() {
        let xyz = ColorValue::xyz(0.2, 0.2, 0.2);
        assert!(xyz_to_rgb(&xyz, &ctx_for(ColorSpaceId::Rgb)).is_err());
    }
}
