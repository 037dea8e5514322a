use crate::{
    foundation::core::{Axis, AxisGeometry, MultiplierSpan, NodeId, Size},
    foundation::error::{LayoutError, LayoutResult},
    foundation::math::{SPAN_EPSILON, is_fill_length, lerp},
    layout::cache::{LayoutCache, Slots},
    layout::tree::{LayoutNode, LayoutTree},
};

/// Relative anchor resolver.
///
/// Each child's two anchors per axis point at a target node (the container by default). The
/// solver walks those edges with an explicit worklist, memoising every node once per pass, so a
/// pass over `N` children costs `O(N)` per axis regardless of chain depth. Anchor cycles are
/// reported as [`LayoutError::CyclicConstraint`] instead of recursing forever.
#[derive(Debug, Default)]
pub struct RelativeSolver {
    cache: LayoutCache,
}

impl RelativeSolver {
    /// Solver with empty caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every memoised value and size the caches for `tree`.
    pub fn init_cache(&mut self, tree: &LayoutTree) {
        self.cache.reset(tree.len());
    }

    /// Number of node resolutions computed (not served from cache) since the last
    /// [`Self::init_cache`].
    pub fn computations(&self) -> u64 {
        self.cache.computations()
    }

    /// Normalised multipliers of `node` on `axis`: its anchored edges as fractions of the
    /// container span. The container itself is always `(0, 1)`.
    pub fn resolve_multiplier(
        &mut self,
        tree: &LayoutTree,
        node: NodeId,
        axis: Axis,
    ) -> LayoutResult<MultiplierSpan> {
        self.cache.ensure_len(tree.len());
        resolve_memoized(
            tree,
            self.cache.multipliers_mut(axis),
            axis,
            node,
            MultiplierSpan::FULL,
            |n, [low, high]| {
                let (a, b) = n.axis_anchors(axis);
                MultiplierSpan {
                    low: lerp(low.low, low.high, a.multiplier),
                    high: lerp(high.low, high.high, b.multiplier),
                }
            },
        )
    }

    /// Absolute `(position, length)` of `node` on `axis`, relative to the container's low
    /// edge. The container itself is always `(0, containerLength)`.
    pub fn resolve_geometry(
        &mut self,
        tree: &LayoutTree,
        node: NodeId,
        axis: Axis,
    ) -> LayoutResult<AxisGeometry> {
        self.cache.ensure_len(tree.len());
        let base = AxisGeometry {
            position: 0.0,
            length: tree.container().content_length(axis),
        };
        resolve_memoized(
            tree,
            self.cache.geometry_mut(axis),
            axis,
            node,
            base,
            |n, [low, high]| place_in_span(n, axis, low, high),
        )
    }

    /// Container length on `axis` needed so every child fits at its intrinsic length.
    ///
    /// A child spanning the multiplier range `(low, high)` needs `intrinsic / (high - low)`; when
    /// that range is degenerate the intrinsic length is used unscaled. Padding is added on top
    /// and the container minimum is honoured.
    pub fn required_length(&mut self, tree: &LayoutTree, axis: Axis) -> LayoutResult<f64> {
        let mut content = 0.0f64;
        for child in tree.children() {
            let span = self.resolve_multiplier(tree, child, axis)?.extent();
            let intrinsic = tree.node(child)?.intrinsic_length(axis);
            let required = if span > SPAN_EPSILON {
                intrinsic / span
            } else {
                intrinsic
            };
            content = content.max(required);
        }
        let container = tree.container();
        Ok((content + container.padding.total(axis)).max(axis.length_of(container.min_size)))
    }

    /// [`Self::required_length`] on both axes.
    #[tracing::instrument(skip(self, tree), fields(children = tree.len().saturating_sub(1)))]
    pub fn required_size(&mut self, tree: &LayoutTree) -> LayoutResult<Size> {
        Ok(Size::new(
            self.required_length(tree, Axis::Horizontal)?,
            self.required_length(tree, Axis::Vertical)?,
        ))
    }
}

fn place_in_span(n: &LayoutNode, axis: Axis, low: AxisGeometry, high: AxisGeometry) -> AxisGeometry {
    let (a, b) = n.axis_anchors(axis);
    let space_low = low.position + low.length * a.multiplier;
    let space_high = high.position + high.length * b.multiplier;
    let space = space_high - space_low;

    let intrinsic = n.intrinsic_length(axis);
    let length = if n.fill[axis.index()] || is_fill_length(intrinsic) {
        space
    } else {
        intrinsic
    };
    AxisGeometry {
        position: space_low + (space - length) * n.align[axis.index()].fraction(),
        length,
    }
}

/// Depth-first evaluation of `root` over the anchor graph of `axis`.
///
/// `stack` holds pending nodes; `path` holds the nodes expanded but not yet computed, which is
/// exactly the chain of dependents above the current node. Reaching a node on `path` again is
/// a cycle.
fn resolve_memoized<T: Copy>(
    tree: &LayoutTree,
    slots: &mut Slots<T>,
    axis: Axis,
    root: NodeId,
    base: T,
    combine: impl Fn(&LayoutNode, [T; 2]) -> T,
) -> LayoutResult<T> {
    if root.is_container() {
        return Ok(base);
    }
    if !tree.contains(root) {
        return Err(LayoutError::UnknownNode(root));
    }
    if let Some(v) = slots.values[root.index()] {
        return Ok(v);
    }

    let lookup = |slots: &Slots<T>, id: NodeId| {
        if id.is_container() {
            Some(base)
        } else {
            slots.values[id.index()]
        }
    };

    let mut stack = vec![root];
    let mut path = Vec::<NodeId>::new();
    while let Some(&top) = stack.last() {
        if lookup(slots, top).is_some() {
            stack.pop();
            continue;
        }

        let targets = match tree.axis_targets(top, axis) {
            Ok(t) => t,
            Err(err) => {
                clear_marks(slots, &path);
                return Err(err);
            }
        };
        let resolved = [lookup(slots, targets[0]), lookup(slots, targets[1])];

        if let [Some(low), Some(high)] = resolved {
            let value = combine(&tree.nodes[top.index()], [low, high]);
            slots.values[top.index()] = Some(value);
            slots.visiting[top.index()] = false;
            slots.computed += 1;
            if path.last() == Some(&top) {
                path.pop();
            }
            stack.pop();
            continue;
        }

        slots.visiting[top.index()] = true;
        path.push(top);
        for (target, value) in targets.into_iter().zip(resolved) {
            if value.is_some() {
                continue;
            }
            if slots.visiting[target.index()] {
                let start = path.iter().rposition(|&n| n == target).unwrap_or(0);
                let mut cycle = path[start..].to_vec();
                cycle.push(target);
                tracing::debug!(%axis, ?cycle, "anchor cycle detected");
                clear_marks(slots, &path);
                return Err(LayoutError::cyclic(axis, cycle));
            }
            stack.push(target);
        }
    }

    slots.values[root.index()].ok_or(LayoutError::UnknownNode(root))
}

fn clear_marks<T>(slots: &mut Slots<T>, path: &[NodeId]) {
    for n in path {
        slots.visiting[n.index()] = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
