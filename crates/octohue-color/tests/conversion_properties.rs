//! Properties every conversion through the engine must hold.

use approx::assert_abs_diff_eq;
use octohue_color::conversions::{lab, rgb};
use octohue_color::{ConversionEngine, ConversionRegistry, ConvertOptions};
use octohue_core::{ColorError, ColorSpaceId, ColorValue, Illuminant, IlluminantInfo, Observer};

fn assert_values_close(actual: &ColorValue, expected: &ColorValue, eps: f64) {
    assert_eq!(actual.space(), expected.space());
    for (a, e) in actual.values().iter().zip(expected.values()) {
        assert_abs_diff_eq!(*a, *e, epsilon = eps);
    }
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn rgb_xyz_rgb_roundtrip_every_variant() {
    let engine = ConversionEngine::default();
    let samples = [
        [0.0, 0.0, 0.0],
        [1.0, 1.0, 1.0],
        [0.2, 1.0, 54.0 / 255.0],
        [0.5, 0.25, 0.75],
        [0.01, 0.02, 0.03],
        [0.0812, 0.5, 0.5],
        [0.0813, 0.081, 0.0805],
    ];
    for space in ColorSpaceId::RGB_VARIANTS {
        for [r, g, b] in samples {
            let c = ColorValue::rgb(space, r, g, b).unwrap();
            let xyz = engine.convert(&c, ColorSpaceId::Xyz).unwrap();
            let back = engine.convert(&xyz, space).unwrap();
            assert_values_close(&back, &c, 1e-6);
        }
    }
}

#[test]
fn full_graph_roundtrip_from_xyz() {
    let engine = ConversionEngine::default();
    let start = engine
        .convert(&ColorValue::srgb(0.3, 0.5, 0.7), ColorSpaceId::Xyz)
        .unwrap();
    for target in ColorSpaceId::CONCRETE {
        let there = engine.convert(&start, target).unwrap();
        assert_eq!(there.space(), target);
        let back = engine.convert(&there, ColorSpaceId::Xyz).unwrap();
        assert_values_close(&back, &start, 1e-6);
    }
}

// ============================================================================
// Identity and determinism
// ============================================================================

#[test]
fn same_space_is_identity() {
    let engine = ConversionEngine::default();
    let samples = [
        ColorValue::lab(50.0, 20.0, -30.0),
        ColorValue::hsl(200.0, 0.5, 0.5),
        ColorValue::cmyk(0.1, 0.2, 0.3, 0.4),
        ColorValue::rgb(ColorSpaceId::AdobeRgb, 0.1, 0.2, 0.3).unwrap(),
    ];
    for c in samples {
        assert_eq!(engine.convert(&c, c.space()).unwrap(), c);
    }
}

#[test]
fn repeated_conversions_are_bit_identical() {
    let engine = ConversionEngine::default();
    let c = ColorValue::from_hex(ColorSpaceId::Srgb, "#33FF36").unwrap();
    for target in [ColorSpaceId::LchUv, ColorSpaceId::Cmyk, ColorSpaceId::XyY] {
        let first = engine.convert(&c, target).unwrap();
        for _ in 0..5 {
            let again = engine.convert(&c, target).unwrap();
            assert_eq!(again, first);
            for (a, b) in again.values().iter().zip(first.values()) {
                assert_eq!(a.to_bits(), b.to_bits());
            }
        }
    }
}

// ============================================================================
// Graph structure
// ============================================================================

#[test]
fn one_rgb_pair_serves_every_variant() {
    let mut registry = ConversionRegistry::new();
    registry.register_fn(ColorSpaceId::AdobeRgb, ColorSpaceId::Xyz, rgb::rgb_to_xyz);
    registry.register_fn(ColorSpaceId::Xyz, ColorSpaceId::AdobeRgb, rgb::xyz_to_rgb);
    let engine = ConversionEngine::new(registry);

    for space in ColorSpaceId::RGB_VARIANTS {
        let c = ColorValue::rgb(space, 0.4, 0.5, 0.6).unwrap();
        let xyz = engine.convert(&c, ColorSpaceId::Xyz).unwrap();
        assert_eq!(xyz.space(), ColorSpaceId::Xyz, "{space}");
    }
}

#[test]
fn missing_path_names_both_spaces() {
    let mut registry = ConversionRegistry::new();
    registry.register_fn(ColorSpaceId::Xyz, ColorSpaceId::Lab, lab::xyz_to_lab);
    registry.register_fn(ColorSpaceId::Lab, ColorSpaceId::Xyz, lab::lab_to_xyz);
    let engine = ConversionEngine::new(registry);

    let err = engine
        .convert(&ColorValue::hsl(10.0, 0.5, 0.5), ColorSpaceId::Lab)
        .unwrap_err();
    assert_eq!(
        err,
        ColorError::UndefinedConversion {
            from: ColorSpaceId::Hsl,
            to: ColorSpaceId::Lab,
        }
    );
    let msg = err.to_string();
    assert!(msg.contains("HSL") && msg.contains("Lab"), "{msg}");

    // Lab -> XYZ exists but XYZ -> RGB does not.
    let err = engine
        .convert(&ColorValue::lab(50.0, 0.0, 0.0), ColorSpaceId::Srgb)
        .unwrap_err();
    assert!(err.is_undefined_conversion());
}

#[test]
fn empty_registry_only_knows_identity() {
    let engine = ConversionEngine::new(ConversionRegistry::new());
    let lab = ColorValue::lab(10.0, 0.0, 0.0);
    assert_eq!(engine.convert(&lab, ColorSpaceId::Lab).unwrap(), lab);
    assert!(engine.convert(&lab, ColorSpaceId::Xyz).is_err());
}

// ============================================================================
// Through-RGB memory
// ============================================================================

#[test]
fn remembered_variant_is_reused_on_the_way_back() {
    let engine = ConversionEngine::default();
    let start = engine
        .convert(&ColorValue::srgb(0.3, 0.5, 0.7), ColorSpaceId::Xyz)
        .unwrap();

    let via_adobe = engine
        .convert_with(
            &start,
            ColorSpaceId::Hsl,
            ConvertOptions::default().through_rgb(ColorSpaceId::AdobeRgb),
        )
        .unwrap();
    assert_eq!(via_adobe.through_rgb(), Some(ColorSpaceId::AdobeRgb));

    let via_srgb = engine.convert(&start, ColorSpaceId::Hsl).unwrap();
    assert_eq!(via_srgb.through_rgb(), None);
    assert_ne!(via_adobe.values(), via_srgb.values());

    let back = engine.convert(&via_adobe, ColorSpaceId::Xyz).unwrap();
    for (a, e) in back.values().iter().zip(start.values()) {
        assert_abs_diff_eq!(*a, *e, epsilon = 1e-6);
    }
    assert_eq!(back.through_rgb(), Some(ColorSpaceId::AdobeRgb));
}

#[test]
fn non_default_override_beats_memory() {
    let engine = ConversionEngine::default();
    let hsl = ColorValue::hsl(30.0, 0.5, 0.5)
        .with_through_rgb(ColorSpaceId::AppleRgb)
        .unwrap();

    let remembered = engine.convert(&hsl, ColorSpaceId::Xyz).unwrap();
    let overridden = engine
        .convert_with(
            &hsl,
            ColorSpaceId::Xyz,
            ConvertOptions::default().through_rgb(ColorSpaceId::Bt2020),
        )
        .unwrap();

    assert_eq!(remembered.through_rgb(), Some(ColorSpaceId::AppleRgb));
    assert_eq!(overridden.through_rgb(), Some(ColorSpaceId::Bt2020));
    assert_ne!(remembered.values(), overridden.values());
}

#[test]
fn default_variant_does_not_override_memory() {
    let engine = ConversionEngine::default();
    let hsl = ColorValue::hsl(30.0, 0.5, 0.5)
        .with_through_rgb(ColorSpaceId::AppleRgb)
        .unwrap();

    let remembered = engine.convert(&hsl, ColorSpaceId::Xyz).unwrap();
    let with_default = engine
        .convert_with(
            &hsl,
            ColorSpaceId::Xyz,
            ConvertOptions::default().through_rgb(ColorSpaceId::Srgb),
        )
        .unwrap();

    assert_eq!(with_default, remembered);
    assert_eq!(with_default.through_rgb(), Some(ColorSpaceId::AppleRgb));

    // Without memory the default is simply used and not recorded.
    let plain = ColorValue::hsl(30.0, 0.5, 0.5);
    let out = engine
        .convert_with(
            &plain,
            ColorSpaceId::Xyz,
            ConvertOptions::default().through_rgb(ColorSpaceId::Srgb),
        )
        .unwrap();
    assert_eq!(out, engine.convert(&plain, ColorSpaceId::Xyz).unwrap());
    assert_eq!(out.through_rgb(), None);
}

#[test]
fn rgb_target_forces_variant() {
    let engine = ConversionEngine::default();
    let hsl = ColorValue::hsl(120.0, 1.0, 0.5)
        .with_through_rgb(ColorSpaceId::AppleRgb)
        .unwrap();
    let out = engine
        .convert_with(
            &hsl,
            ColorSpaceId::Bt2020,
            ConvertOptions::default().through_rgb(ColorSpaceId::AdobeRgb),
        )
        .unwrap();
    assert_eq!(out.space(), ColorSpaceId::Bt2020);
    assert_eq!(out.through_rgb(), Some(ColorSpaceId::Bt2020));

    let srgb = engine.convert(&hsl, ColorSpaceId::Srgb).unwrap();
    assert_eq!(srgb.space(), ColorSpaceId::Srgb);
    assert_eq!(srgb.through_rgb(), None);
}

#[test]
fn input_is_never_modified() {
    let engine = ConversionEngine::default();
    let c = ColorValue::xyz(0.2, 0.3, 0.4);
    let snapshot = c.clone();
    let _ = engine
        .convert_with(
            &c,
            ColorSpaceId::Hsv,
            ConvertOptions::default().through_rgb(ColorSpaceId::Bt2020),
        )
        .unwrap();
    assert_eq!(c, snapshot);
}

// ============================================================================
// Illuminants and clamping
// ============================================================================

#[test]
fn target_illuminant_retags_rgb_results() {
    let engine = ConversionEngine::default();
    let green = ColorValue::from_hex(ColorSpaceId::Srgb, "#33FF36").unwrap();
    let lab = engine
        .convert_with(
            &green,
            ColorSpaceId::Lab,
            ConvertOptions::default().target_illuminant(Illuminant::D50),
        )
        .unwrap();
    assert_eq!(
        lab.illuminant(),
        Some(IlluminantInfo::new(Illuminant::D50, Observer::Two))
    );
}

#[test]
fn untabulated_reference_white_is_reported() {
    let engine = ConversionEngine::default();
    let xyz = ColorValue::xyz(0.2, 0.3, 0.4)
        .with_illuminant(IlluminantInfo::new(Illuminant::F2, Observer::Ten))
        .unwrap();
    assert!(matches!(
        engine.convert(&xyz, ColorSpaceId::Lab),
        Err(ColorError::InvalidIlluminant { .. })
    ));
}

#[test]
fn out_of_gamut_xyz_is_clamped() {
    let engine = ConversionEngine::default();
    let wild = [
        ColorValue::xyz(1.5, 0.2, -0.3),
        ColorValue::xyz(0.05, 0.9, 1.8),
        ColorValue::xyz(3.0, 3.0, 3.0),
    ];
    for xyz in &wild {
        for space in ColorSpaceId::RGB_VARIANTS {
            let rgb = engine.convert(xyz, space).unwrap();
            for v in rgb.values() {
                assert!((0.0..=1.0).contains(v), "{space}: {v}");
            }
            assert!(rgb.upscaled_values().is_some());
        }
    }
}
