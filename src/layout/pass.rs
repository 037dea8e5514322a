use crate::{
    foundation::core::{Axis, NodeId, Point, Rect, Size},
    foundation::error::{LayoutError, LayoutResult},
    layout::solver::RelativeSolver,
    layout::tree::LayoutTree,
};

/// Source of intrinsic sizes for children, run before a layout pass.
///
/// The solver never measures on its own; callers refresh sizes through
/// [`RelativeLayout::apply_measurements`].
pub trait Measure {
    /// Intrinsic size of `node`.
    fn measure(&mut self, node: NodeId, name: &str) -> LayoutResult<Size>;
}

impl<F> Measure for F
where
    F: FnMut(NodeId, &str) -> LayoutResult<Size>,
{
    fn measure(&mut self, node: NodeId, name: &str) -> LayoutResult<Size> {
        self(node, name)
    }
}

/// Final rectangles of one arrange pass, in container coordinates.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Arrangement {
    /// Container size the pass was arranged into.
    pub container: Size,
    /// One entry per child, in tree order.
    pub children: Vec<ArrangedChild>,
}

/// Placement of a single child.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ArrangedChild {
    /// Node handle.
    pub id: NodeId,
    /// Node name.
    pub name: String,
    /// Placed rectangle, padding included.
    pub rect: Rect,
}

impl Arrangement {
    /// Rectangle for `id`; `None` for the container or unknown handles.
    pub fn rect_for(&self, id: NodeId) -> Option<Rect> {
        self.children.iter().find(|c| c.id == id).map(|c| c.rect)
    }

    /// Rectangle for the child named `name`.
    pub fn rect_by_name(&self, name: &str) -> Option<Rect> {
        self.children
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.rect)
    }
}

/// A layout tree together with the solver state for its passes.
///
/// Each `measure` or `arrange` call is one pass: the cache is reset before the traversal and
/// every value computed during the pass stays memoised until the next one.
#[derive(Debug, Default)]
pub struct RelativeLayout {
    tree: LayoutTree,
    solver: RelativeSolver,
}

impl RelativeLayout {
    /// Wrap `tree`.
    pub fn new(tree: LayoutTree) -> Self {
        Self {
            tree,
            solver: RelativeSolver::new(),
        }
    }

    /// The underlying tree.
    pub fn tree(&self) -> &LayoutTree {
        &self.tree
    }

    /// Mutable tree access for attribute changes between passes.
    pub fn tree_mut(&mut self) -> &mut LayoutTree {
        &mut self.tree
    }

    /// Solver state of the last pass.
    pub fn solver(&self) -> &RelativeSolver {
        &self.solver
    }

    /// Refresh every child's intrinsic size from `measurer`.
    pub fn apply_measurements(&mut self, measurer: &mut impl Measure) -> LayoutResult<()> {
        let ids = self.tree.children().collect::<Vec<_>>();
        for id in ids {
            let size = measurer.measure(id, self.tree.name(id)?)?;
            if !(size.width.is_finite() && size.height.is_finite()) {
                return Err(LayoutError::validation(format!(
                    "measured size of {id} must be finite"
                )));
            }
            self.tree.set_intrinsic(id, size)?;
        }
        Ok(())
    }

    /// Size the container needs to show every child at its intrinsic size.
    #[tracing::instrument(skip(self))]
    pub fn measure(&mut self) -> LayoutResult<Size> {
        self.solver.init_cache(&self.tree);
        let size = self.solver.required_size(&self.tree)?;
        tracing::debug!(width = size.width, height = size.height, "measured");
        Ok(size)
    }

    /// Place every child inside a container of `size`.
    ///
    /// The container size is recorded on the tree so later passes reuse it.
    #[tracing::instrument(skip(self))]
    pub fn arrange(&mut self, size: Size) -> LayoutResult<Arrangement> {
        self.tree.container_mut().size = size;
        self.solver.init_cache(&self.tree);

        let padding = self.tree.container().padding;
        let origin = Point::new(
            padding.leading(Axis::Horizontal),
            padding.leading(Axis::Vertical),
        );
        let mut children = Vec::with_capacity(self.tree.len().saturating_sub(1));
        for id in self.tree.children() {
            let x = self.solver.resolve_geometry(&self.tree, id, Axis::Horizontal)?;
            let y = self.solver.resolve_geometry(&self.tree, id, Axis::Vertical)?;
            let rect = Rect::new(
                origin.x + x.position,
                origin.y + y.position,
                origin.x + x.end(),
                origin.y + y.end(),
            );
            children.push(ArrangedChild {
                id,
                name: self.tree.name(id)?.to_string(),
                rect,
            });
        }
        tracing::debug!(
            children = children.len(),
            computations = self.solver.computations(),
            "arranged"
        );
        Ok(Arrangement {
            container: size,
            children,
        })
    }

    /// Measure, then arrange into the measured size.
    pub fn layout(&mut self) -> LayoutResult<Arrangement> {
        let size = self.measure()?;
        self.arrange(size)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/pass.rs"]
mod tests;
