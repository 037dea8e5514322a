use crate::foundation::core::{Axis, AxisGeometry, MultiplierSpan};

/// Memo slots and traversal marks for one derived quantity on one axis.
#[derive(Debug)]
pub(crate) struct Slots<T> {
    pub(crate) values: Vec<Option<T>>,
    /// Nodes currently expanded on the worklist; a revisit means a cycle.
    pub(crate) visiting: Vec<bool>,
    pub(crate) computed: u64,
}

impl<T> Default for Slots<T> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            visiting: Vec::new(),
            computed: 0,
        }
    }
}

impl<T> Slots<T> {
    fn reset(&mut self, n: usize) {
        self.values.clear();
        self.values.resize_with(n, || None);
        self.visiting.clear();
        self.visiting.resize(n, false);
        self.computed = 0;
    }
}

/// Pass-scoped memo arena for the relative solver.
///
/// Slots are indexed by [`crate::NodeId`]. Entries are only added during a pass; `reset` drops
/// every entry and must run before each measure or arrange traversal.
#[derive(Debug, Default)]
pub(crate) struct LayoutCache {
    pub(crate) multipliers: [Slots<MultiplierSpan>; 2],
    pub(crate) geometry: [Slots<AxisGeometry>; 2],
}

impl LayoutCache {
    pub(crate) fn reset(&mut self, n: usize) {
        for s in &mut self.multipliers {
            s.reset(n);
        }
        for s in &mut self.geometry {
            s.reset(n);
        }
    }

    pub(crate) fn ensure_len(&mut self, n: usize) {
        if self.multipliers[0].values.len() != n {
            self.reset(n);
        }
    }

    pub(crate) fn multipliers_mut(&mut self, axis: Axis) -> &mut Slots<MultiplierSpan> {
        &mut self.multipliers[axis.index()]
    }

    pub(crate) fn geometry_mut(&mut self, axis: Axis) -> &mut Slots<AxisGeometry> {
        &mut self.geometry[axis.index()]
    }

    /// Number of non-base-case computations performed since the last reset.
    pub(crate) fn computations(&self) -> u64 {
        self.multipliers
            .iter()
            .map(|s| s.computed)
            .chain(self.geometry.iter().map(|s| s.computed))
            .sum()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/cache.rs"]
mod tests;
