//! Registry of pairwise colour conversions.
//!
//! Each entry is a directed edge between two graph nodes. Nodes are
//! canonical space ids: every concrete RGB variant is stored under
//! [`ColorSpaceId::Rgb`], so one RGB <-> XYZ pair serves all of them.
//!
//! Edges keep their registration order. The resolver walks neighbours in
//! that order, which makes shortest-path ties deterministic.

use std::collections::HashMap;
use std::fmt;

use octohue_core::{ColorResult, ColorSpaceId, ColorValue, Illuminant};
use tracing::debug;

use crate::adaptation::AdaptationMethod;
use crate::conversions;

/// Ambient parameters threaded through every step of a conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionContext {
    /// Concrete RGB variant to land in when a step produces RGB.
    pub target_rgb: ColorSpaceId,
    /// Illuminant RGB -> XYZ results are adapted to, if any.
    pub target_illuminant: Option<Illuminant>,
    /// Adaptation method for any re-referencing a step performs.
    pub adaptation: AdaptationMethod,
}

impl Default for ConversionContext {
    fn default() -> Self {
        Self {
            target_rgb: ColorSpaceId::Srgb,
            target_illuminant: None,
            adaptation: AdaptationMethod::Bradford,
        }
    }
}

/// A single conversion step.
pub type ConversionFn = fn(&ColorValue, &ConversionContext) -> ColorResult<ColorValue>;

/// What an edge does when applied.
#[derive(Clone, Copy)]
pub enum Step {
    /// No-op marker; the engine skips it.
    Identity,
    /// Converts the value.
    Convert(ConversionFn),
}

impl Step {
    /// Applies the step; [`Step::Identity`] returns a clone.
    pub fn apply(&self, color: &ColorValue, ctx: &ConversionContext) -> ColorResult<ColorValue> {
        match self {
            Self::Identity => Ok(color.clone()),
            Self::Convert(f) => f(color, ctx),
        }
    }

    /// True for [`Step::Identity`].
    #[inline]
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("Identity"),
            Self::Convert(_) => f.write_str("Convert"),
        }
    }
}

/// Directed edge between two canonical nodes.
#[derive(Debug, Clone, Copy)]
pub struct ConversionEdge {
    /// Source node.
    pub from: ColorSpaceId,
    /// Target node.
    pub to: ColorSpaceId,
    /// Conversion applied along the edge.
    pub step: Step,
}

/// Ordered set of directed conversion edges.
///
/// Registering an existing `(from, to)` pair replaces its step in place
/// (last registration wins, the edge keeps its original position).
///
/// # Example
///
/// ```rust
/// use octohue_color::{ConversionRegistry, Step};
/// use octohue_core::ColorSpaceId;
///
/// let mut registry = ConversionRegistry::new();
/// registry.register(ColorSpaceId::AdobeRgb, ColorSpaceId::Xyz, Step::Identity);
/// assert!(registry.contains(ColorSpaceId::Srgb, ColorSpaceId::Xyz));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConversionRegistry {
    edges: Vec<ConversionEdge>,
    index: HashMap<(ColorSpaceId, ColorSpaceId), usize>,
}

impl ConversionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in conversion graph.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        conversions::register_defaults(&mut registry);
        registry
    }

    /// Graph node for `space`; RGB variants collapse onto [`ColorSpaceId::Rgb`].
    #[inline]
    pub fn canonicalize(space: ColorSpaceId) -> ColorSpaceId {
        space.canonical()
    }

    /// Adds or replaces the edge `from -> to`.
    pub fn register(&mut self, from: ColorSpaceId, to: ColorSpaceId, step: Step) {
        let from = Self::canonicalize(from);
        let to = Self::canonicalize(to);
        match self.index.get(&(from, to)) {
            Some(&i) => {
                debug!(%from, %to, "Replacing conversion");
                self.edges[i].step = step;
            }
            None => {
                debug!(%from, %to, "Registered conversion");
                self.index.insert((from, to), self.edges.len());
                self.edges.push(ConversionEdge { from, to, step });
            }
        }
    }

    /// Registers a conversion function.
    #[inline]
    pub fn register_fn(&mut self, from: ColorSpaceId, to: ColorSpaceId, f: ConversionFn) {
        self.register(from, to, Step::Convert(f));
    }

    /// Edge for the canonical pair, if registered.
    pub fn edge(&self, from: ColorSpaceId, to: ColorSpaceId) -> Option<&ConversionEdge> {
        let key = (Self::canonicalize(from), Self::canonicalize(to));
        self.index.get(&key).map(|&i| &self.edges[i])
    }

    /// True when `from -> to` is registered (after canonicalization).
    pub fn contains(&self, from: ColorSpaceId, to: ColorSpaceId) -> bool {
        self.edge(from, to).is_some()
    }

    /// True when `space` appears on either end of some edge.
    pub fn has_node(&self, space: ColorSpaceId) -> bool {
        let node = Self::canonicalize(space);
        self.edges.iter().any(|e| e.from == node || e.to == node)
    }

    /// Outgoing edges of a canonical node, in registration order.
    pub fn neighbors(&self, node: ColorSpaceId) -> impl Iterator<Item = &ConversionEdge> {
        self.edges.iter().filter(move |e| e.from == node)
    }

    /// All edges, in registration order.
    pub fn edges(&self) -> &[ConversionEdge] {
        &self.edges
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
