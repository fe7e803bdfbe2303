//! Conversion engine: path lookup plus step application.
//!
//! The engine owns a shared snapshot of a [`ConversionRegistry`] and a
//! thread-safe cache of resolved paths. Conversions only read both, so one
//! engine can serve many threads. Registering through the engine copies
//! the registry on write and drops the cache; snapshots handed out earlier
//! keep the graph they were taken from.
//!
//! # Through-RGB variant
//!
//! Steps that produce RGB (XYZ -> RGB, HSL -> RGB, ...) need to know which
//! concrete variant to land in. The engine picks it per call:
//!
//! 1. the target space, when it is itself an RGB variant
//! 2. otherwise [`ConvertOptions::through_rgb`], when set to something
//!    other than the engine default
//! 3. otherwise the variant the input remembers from an earlier conversion
//! 4. otherwise the engine default (sRGB)
//!
//! A result produced with anything but the default remembers the variant.
//!
//! # Example
//!
//! ```rust
//! use octohue_color::{ConversionEngine, ConvertOptions};
//! use octohue_core::{ColorSpaceId, ColorValue};
//!
//! let engine = ConversionEngine::default();
//! let green = ColorValue::from_hex(ColorSpaceId::Srgb, "#33FF36").unwrap();
//!
//! let lab = engine.convert(&green, ColorSpaceId::Lab).unwrap();
//! assert!((lab.values()[0] - 88.2).abs() < 0.01);
//!
//! let hsl = engine
//!     .convert_with(
//!         &lab,
//!         ColorSpaceId::Hsl,
//!         ConvertOptions::default().through_rgb(ColorSpaceId::AdobeRgb),
//!     )
//!     .unwrap();
//! assert_eq!(hsl.through_rgb(), Some(ColorSpaceId::AdobeRgb));
//! ```

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use octohue_core::{ColorError, ColorResult, ColorSpaceId, ColorValue, Illuminant};
use tracing::{debug, trace};

use crate::adaptation::AdaptationMethod;
use crate::registry::{ConversionContext, ConversionRegistry, Step};
use crate::resolver::{ConversionPath, PathResolver};

/// Per-call conversion parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConvertOptions {
    /// RGB variant to pass through. Overrides the input's memory unless it
    /// equals the engine default.
    pub through_rgb: Option<ColorSpaceId>,
    /// Illuminant RGB -> XYZ steps adapt their result to.
    pub target_illuminant: Option<Illuminant>,
}

impl ConvertOptions {
    /// Sets [`through_rgb`](Self::through_rgb).
    pub fn through_rgb(mut self, rgb: ColorSpaceId) -> Self {
        self.through_rgb = Some(rgb);
        self
    }

    /// Sets [`target_illuminant`](Self::target_illuminant).
    pub fn target_illuminant(mut self, illuminant: Illuminant) -> Self {
        self.target_illuminant = Some(illuminant);
        self
    }
}

type PathCache = RwLock<HashMap<(ColorSpaceId, ColorSpaceId), ConversionPath>>;

/// Converts colour values between any two connected spaces.
#[derive(Debug)]
pub struct ConversionEngine {
    registry: Arc<ConversionRegistry>,
    default_rgb: ColorSpaceId,
    adaptation: AdaptationMethod,
    cache: PathCache,
}

impl Default for ConversionEngine {
    /// Engine over the built-in graph, sRGB default, Bradford adaptation.
    fn default() -> Self {
        Self::new(ConversionRegistry::with_defaults())
    }
}

impl ConversionEngine {
    /// Creates an engine owning `registry`.
    pub fn new(registry: ConversionRegistry) -> Self {
        Self::from_shared(Arc::new(registry))
    }

    /// Creates an engine over a shared registry snapshot.
    pub fn from_shared(registry: Arc<ConversionRegistry>) -> Self {
        Self {
            registry,
            default_rgb: ColorSpaceId::Srgb,
            adaptation: AdaptationMethod::default(),
            cache: PathCache::default(),
        }
    }

    /// Sets the RGB variant used when nothing else picks one.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidArgument`] unless `rgb` is a concrete RGB variant.
    pub fn with_default_rgb(mut self, rgb: ColorSpaceId) -> ColorResult<Self> {
        check_concrete_rgb(rgb)?;
        self.default_rgb = rgb;
        Ok(self)
    }

    /// Sets the chromatic adaptation method.
    pub fn with_adaptation(mut self, method: AdaptationMethod) -> Self {
        self.adaptation = method;
        self
    }

    /// Default through-RGB variant.
    pub fn default_rgb(&self) -> ColorSpaceId {
        self.default_rgb
    }

    /// Adaptation method.
    pub fn adaptation(&self) -> AdaptationMethod {
        self.adaptation
    }

    /// Shared registry snapshot.
    pub fn registry(&self) -> &Arc<ConversionRegistry> {
        &self.registry
    }

    /// Adds or replaces an edge and clears the path cache.
    pub fn register(&mut self, from: ColorSpaceId, to: ColorSpaceId, step: Step) {
        Arc::make_mut(&mut self.registry).register(from, to, step);
        self.cache = PathCache::default();
    }

    /// Resolves (and caches) the chain for `from -> to`.
    ///
    /// Two different concrete RGB variants share one graph node, so their
    /// chain is routed RGB -> XYZ -> RGB.
    pub fn resolve(&self, from: ColorSpaceId, to: ColorSpaceId) -> ColorResult<ConversionPath> {
        let key = (from, to);
        if let Some(path) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Ok(path.clone());
        }

        let resolver = PathResolver::new(&self.registry);
        let rgb_hop = from != to
            && from.is_rgb()
            && to.is_rgb()
            && !from.is_abstract()
            && !to.is_abstract();
        let path = if rgb_hop {
            let undefined = |_| ColorError::UndefinedConversion { from, to };
            let there = resolver.resolve(from, ColorSpaceId::Xyz).map_err(undefined)?;
            let back = resolver.resolve(ColorSpaceId::Xyz, to).map_err(undefined)?;
            there.join(back)
        } else {
            resolver.resolve(from, to)?
        };

        debug!(%from, %to, steps = path.len(), "Resolved conversion path");
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, path.clone());
        Ok(path)
    }

    /// Converts `color` to `target` with default options.
    pub fn convert(&self, color: &ColorValue, target: ColorSpaceId) -> ColorResult<ColorValue> {
        self.convert_with(color, target, ConvertOptions::default())
    }

    /// Converts `color` to `target`.
    ///
    /// # Errors
    ///
    /// - [`ColorError::InvalidTarget`] when `target` is the abstract RGB node
    /// - [`ColorError::InvalidArgument`] when `options.through_rgb` is not a
    ///   concrete RGB variant
    /// - [`ColorError::UndefinedConversion`] when no chain connects the spaces
    /// - whatever a step reports (e.g. an invalid illuminant)
    pub fn convert_with(
        &self,
        color: &ColorValue,
        target: ColorSpaceId,
        options: ConvertOptions,
    ) -> ColorResult<ColorValue> {
        if target.is_abstract() {
            return Err(ColorError::InvalidTarget(target.to_string()));
        }
        if let Some(rgb) = options.through_rgb {
            check_concrete_rgb(rgb)?;
        }

        let path = self.resolve(color.space(), target)?;
        if path.is_identity() {
            return Ok(color.clone());
        }

        let through_rgb = self.effective_rgb(color, target, &options);
        let ctx = ConversionContext {
            target_rgb: through_rgb,
            target_illuminant: options.target_illuminant,
            adaptation: self.adaptation,
        };
        debug!(
            from = %color.space(),
            to = %target,
            %through_rgb,
            "Converting"
        );

        let mut current = color.clone();
        for (i, step) in path.steps.iter().enumerate() {
            if step.is_identity() {
                continue;
            }
            trace!(step = i, input = %current, "conversion step");
            current = step.apply(&current, &ctx)?;
        }
        trace!(output = %current, "conversion done");

        if through_rgb != self.default_rgb {
            current = current.with_through_rgb(through_rgb)?;
        }
        Ok(current)
    }

    /// Converts to a space given by name.
    ///
    /// Names that do not resolve to a concrete space fail with
    /// [`ColorError::InvalidTarget`].
    pub fn convert_named(&self, color: &ColorValue, target: &str) -> ColorResult<ColorValue> {
        let target: ColorSpaceId = target
            .parse()
            .map_err(|_| ColorError::InvalidTarget(target.to_string()))?;
        self.convert(color, target)
    }

    fn effective_rgb(
        &self,
        color: &ColorValue,
        target: ColorSpaceId,
        options: &ConvertOptions,
    ) -> ColorSpaceId {
        if target.is_rgb() {
            target
        } else if let Some(rgb) = options.through_rgb.filter(|&rgb| rgb != self.default_rgb) {
            rgb
        } else if let Some(rgb) = color.through_rgb() {
            rgb
        } else {
            self.default_rgb
        }
    }
}

fn check_concrete_rgb(rgb: ColorSpaceId) -> ColorResult<()> {
    if rgb.is_rgb() && !rgb.is_abstract() {
        Ok(())
    } else {
        Err(ColorError::invalid_argument(format!(
            "{rgb} is not a concrete RGB space"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_engine_is_shareable() {
        assert_send_sync::<ConversionEngine>();
    }

    #[test]
    fn test_abstract_target_rejected() {
        let engine = ConversionEngine::default();
        let c = ColorValue::srgb(0.1, 0.2, 0.3);
        assert_eq!(
            engine.convert(&c, ColorSpaceId::Rgb),
            Err(ColorError::InvalidTarget("RGB".into()))
        );
        assert!(matches!(
            engine.convert_named(&c, "not-a-space"),
            Err(ColorError::InvalidTarget(_))
        ));
        assert!(matches!(
            engine.convert_with(
                &c,
                ColorSpaceId::Hsl,
                ConvertOptions::default().through_rgb(ColorSpaceId::Lab)
            ),
            Err(ColorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_rgb_to_rgb_goes_through_xyz() {
        let engine = ConversionEngine::default();
        let path = engine.resolve(ColorSpaceId::Srgb, ColorSpaceId::Bt2020).unwrap();
        assert_eq!(path.nodes, [ColorSpaceId::Rgb, ColorSpaceId::Xyz, ColorSpaceId::Rgb]);
        assert!(engine.resolve(ColorSpaceId::Rgb, ColorSpaceId::Srgb).unwrap().is_identity());

        let white = ColorValue::srgb(1.0, 1.0, 1.0);
        let wide = engine.convert(&white, ColorSpaceId::Bt2020).unwrap();
        assert_eq!(wide.space(), ColorSpaceId::Bt2020);
        assert_eq!(wide.through_rgb(), Some(ColorSpaceId::Bt2020));
        for v in wide.values() {
            assert_abs_diff_eq!(*v, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_register_clears_cache_and_keeps_snapshots() {
        fn to_black(_: &ColorValue, _: &ConversionContext) -> ColorResult<ColorValue> {
            Ok(ColorValue::lab(0.0, 0.0, 0.0))
        }

        let mut engine = ConversionEngine::default();
        let snapshot = Arc::clone(engine.registry());
        let xyz = ColorValue::xyz(0.2, 0.3, 0.4);
        let before = engine.convert(&xyz, ColorSpaceId::Lab).unwrap();

        engine.register(ColorSpaceId::Xyz, ColorSpaceId::Lab, Step::Convert(to_black));
        let after = engine.convert(&xyz, ColorSpaceId::Lab).unwrap();

        assert_ne!(before, after);
        assert_eq!(after.values(), &[0.0, 0.0, 0.0]);
        assert_eq!(snapshot.len(), engine.registry().len());
        assert!(!Arc::ptr_eq(&snapshot, engine.registry()));
    }

    #[test]
    fn test_default_rgb_must_be_concrete() {
        assert!(ConversionEngine::default().with_default_rgb(ColorSpaceId::Rgb).is_err());
        let engine = ConversionEngine::default()
            .with_default_rgb(ColorSpaceId::AdobeRgb)
            .unwrap();
        let hsl = engine.convert(&ColorValue::xyz(0.2, 0.2, 0.2), ColorSpaceId::Hsl).unwrap();
        assert_eq!(hsl.through_rgb(), None);
    }
}
