//! Shortest-path search over the conversion graph.
//!
//! Breadth-first from the source node, visiting outgoing edges in
//! registration order. The first path reaching the target is returned, so
//! the result has the fewest edges and ties resolve the same way for a
//! given registration order.

use std::collections::{HashMap, VecDeque};

use octohue_core::{ColorError, ColorResult, ColorSpaceId};
use tracing::trace;

use crate::registry::{ConversionRegistry, Step};

/// A resolved chain of conversions.
#[derive(Debug, Clone, Default)]
pub struct ConversionPath {
    /// Canonical nodes visited, source first. Empty for identity.
    pub nodes: Vec<ColorSpaceId>,
    /// One step per edge.
    pub steps: Vec<Step>,
}

impl ConversionPath {
    /// True when no conversion is needed.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when there are no steps.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Appends `other`, merging the shared junction node.
    pub fn join(mut self, other: ConversionPath) -> ConversionPath {
        if self.nodes.is_empty() {
            return other;
        }
        if other.nodes.is_empty() {
            return self;
        }
        self.nodes.extend(other.nodes.into_iter().skip(1));
        self.steps.extend(other.steps);
        self
    }
}

/// Resolves conversion chains against a registry.
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    registry: &'a ConversionRegistry,
}

impl<'a> PathResolver<'a> {
    /// Creates a resolver over `registry`.
    pub fn new(registry: &'a ConversionRegistry) -> Self {
        Self { registry }
    }

    /// Shortest chain from `from` to `to`.
    ///
    /// Both ends are canonicalized first; equal nodes give an empty path.
    /// Fails with [`ColorError::UndefinedConversion`] naming the spaces as
    /// given when no directed path exists or a node is not in the graph.
    pub fn resolve(&self, from: ColorSpaceId, to: ColorSpaceId) -> ColorResult<ConversionPath> {
        let undefined = || ColorError::UndefinedConversion { from, to };

        let start = ConversionRegistry::canonicalize(from);
        let goal = ConversionRegistry::canonicalize(to);
        if start == goal {
            return Ok(ConversionPath::default());
        }
        if !self.registry.has_node(start) || !self.registry.has_node(goal) {
            return Err(undefined());
        }

        // node -> (predecessor, step taken)
        let mut came_from: HashMap<ColorSpaceId, (ColorSpaceId, Step)> = HashMap::new();
        let mut queue = VecDeque::from([start]);

        'search: while let Some(node) = queue.pop_front() {
            for edge in self.registry.neighbors(node) {
                if edge.to == start || came_from.contains_key(&edge.to) {
                    continue;
                }
                came_from.insert(edge.to, (node, edge.step));
                if edge.to == goal {
                    break 'search;
                }
                queue.push_back(edge.to);
            }
        }

        let mut nodes = vec![goal];
        let mut steps = Vec::new();
        let mut cursor = goal;
        while cursor != start {
            let (prev, step) = *came_from.get(&cursor).ok_or_else(undefined)?;
            steps.push(step);
            nodes.push(prev);
            cursor = prev;
        }
        nodes.reverse();
        steps.reverse();

        trace!(%from, %to, ?nodes, "resolved path");
        Ok(ConversionPath { nodes, steps })
    }
}
