use crate::foundation::core::{Align, Anchor, Axis, Edge, Edges, NodeId, Size, Target};
use crate::foundation::error::{LayoutError, LayoutResult};

/// Per-node layout attributes.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutNode {
    /// Name for lookup and diagnostics.
    pub name: String,
    /// Intrinsic size from the last measurement.
    #[serde(default)]
    pub intrinsic: Size,
    /// Attachments indexed by [`Edge`] (left, right, top, bottom).
    #[serde(default)]
    pub anchors: [Anchor; 4],
    /// Alignment per axis (horizontal, vertical).
    #[serde(default)]
    pub align: [Align; 2],
    /// Forces the node to fill its span per axis regardless of intrinsic size.
    #[serde(default)]
    pub fill: [bool; 2],
}

impl LayoutNode {
    /// Node with default attachments and no intrinsic size.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Anchor attached to `edge`.
    pub fn anchor(&self, edge: Edge) -> Anchor {
        self.anchors[edge.index()]
    }

    /// `(low, high)` anchors of `axis`.
    pub fn axis_anchors(&self, axis: Axis) -> (Anchor, Anchor) {
        let (low, high) = axis.edges();
        (self.anchor(low), self.anchor(high))
    }

    /// Intrinsic length on `axis`.
    pub fn intrinsic_length(&self, axis: Axis) -> f64 {
        axis.length_of(self.intrinsic)
    }
}

/// Container description: the root of every layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Container {
    /// Measured size of the container (including padding).
    #[serde(default)]
    pub size: Size,
    /// Minimum size reported by `measure`.
    #[serde(default)]
    pub min_size: Size,
    /// Inner padding; anchors resolve against the padded interior.
    #[serde(default)]
    pub padding: Edges,
}

impl Container {
    /// Length the resolver uses as the container span on `axis`.
    pub fn content_length(&self, axis: Axis) -> f64 {
        (axis.length_of(self.size) - self.padding.total(axis)).max(0.0)
    }
}

/// Arena of layout nodes; slot 0 is reserved for the container.
///
/// All attribute accessors are keyed by [`NodeId`]. Unset attributes keep their defaults:
/// anchors target the container with multiplier `0.0`, alignment is [`Align::Start`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "LayoutTreeDef")]
pub struct LayoutTree {
    pub(crate) container: Container,
    pub(crate) nodes: Vec<LayoutNode>,
}

#[derive(serde::Deserialize)]
struct LayoutTreeDef {
    #[serde(default)]
    container: Container,
    nodes: Vec<LayoutNode>,
}

impl TryFrom<LayoutTreeDef> for LayoutTree {
    type Error = LayoutError;

    fn try_from(def: LayoutTreeDef) -> LayoutResult<Self> {
        if def.nodes.is_empty() {
            return Err(LayoutError::validation(
                "layout tree nodes must start with the container slot",
            ));
        }
        Ok(Self {
            container: def.container,
            nodes: def.nodes,
        })
    }
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new(Container::default())
    }
}

impl LayoutTree {
    /// Tree holding only the container.
    pub fn new(container: Container) -> Self {
        Self {
            container,
            nodes: vec![LayoutNode::new("container")],
        }
    }

    /// Container attributes.
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Mutable container attributes.
    pub fn container_mut(&mut self) -> &mut Container {
        &mut self.container
    }

    /// Number of nodes including the container.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no children.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Append a child and return its handle.
    pub fn add_child(&mut self, node: LayoutNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Handles of all children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        (1..self.nodes.len()).map(|i| NodeId(i as u32))
    }

    /// Whether `id` names a slot in this tree.
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Handle of the first child named `name`.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, n)| n.name == name)
            .map(|(i, _)| NodeId(i as u32))
    }

    /// Node attributes for `id`.
    pub fn node(&self, id: NodeId) -> LayoutResult<&LayoutNode> {
        self.nodes
            .get(id.index())
            .ok_or(LayoutError::UnknownNode(id))
    }

    /// Mutable node attributes for `id`.
    pub fn node_mut(&mut self, id: NodeId) -> LayoutResult<&mut LayoutNode> {
        self.nodes
            .get_mut(id.index())
            .ok_or(LayoutError::UnknownNode(id))
    }

    /// Name of `id`.
    pub fn name(&self, id: NodeId) -> LayoutResult<&str> {
        Ok(self.node(id)?.name.as_str())
    }

    /// Anchor of `id` on `edge`.
    pub fn anchor(&self, id: NodeId, edge: Edge) -> LayoutResult<Anchor> {
        Ok(self.node(id)?.anchor(edge))
    }

    /// Replace the anchor of `id` on `edge`.
    pub fn set_anchor(&mut self, id: NodeId, edge: Edge, anchor: Anchor) -> LayoutResult<()> {
        self.node_mut(id)?.anchors[edge.index()] = anchor;
        Ok(())
    }

    /// Set the target of `id`'s `edge` anchor, keeping its multiplier.
    pub fn set_target(
        &mut self,
        id: NodeId,
        edge: Edge,
        target: impl Into<Target>,
    ) -> LayoutResult<()> {
        self.node_mut(id)?.anchors[edge.index()].target = target.into();
        Ok(())
    }

    /// Set the multiplier of `id`'s `edge` anchor, keeping its target.
    pub fn set_multiplier(&mut self, id: NodeId, edge: Edge, multiplier: f64) -> LayoutResult<()> {
        self.node_mut(id)?.anchors[edge.index()].multiplier = multiplier;
        Ok(())
    }

    /// Alignment of `id` on `axis`.
    pub fn align(&self, id: NodeId, axis: Axis) -> LayoutResult<Align> {
        Ok(self.node(id)?.align[axis.index()])
    }

    /// Set the alignment of `id` on `axis`.
    pub fn set_align(&mut self, id: NodeId, axis: Axis, align: Align) -> LayoutResult<()> {
        self.node_mut(id)?.align[axis.index()] = align;
        Ok(())
    }

    /// Whether `id` is forced to fill its span on `axis`.
    pub fn fill(&self, id: NodeId, axis: Axis) -> LayoutResult<bool> {
        Ok(self.node(id)?.fill[axis.index()])
    }

    /// Force (or stop forcing) `id` to fill its span on `axis`.
    pub fn set_fill(&mut self, id: NodeId, axis: Axis, fill: bool) -> LayoutResult<()> {
        self.node_mut(id)?.fill[axis.index()] = fill;
        Ok(())
    }

    /// Intrinsic size of `id`.
    pub fn intrinsic(&self, id: NodeId) -> LayoutResult<Size> {
        Ok(self.node(id)?.intrinsic)
    }

    /// Record a measured intrinsic size for `id`.
    pub fn set_intrinsic(&mut self, id: NodeId, size: Size) -> LayoutResult<()> {
        self.node_mut(id)?.intrinsic = size;
        Ok(())
    }

    /// Concrete `(low, high)` target handles of `id` on `axis`.
    ///
    /// Fails with [`LayoutError::UnknownNode`] when a target is outside the arena.
    pub(crate) fn axis_targets(&self, id: NodeId, axis: Axis) -> LayoutResult<[NodeId; 2]> {
        let (low, high) = self.node(id)?.axis_anchors(axis);
        let targets = [low.target.node(), high.target.node()];
        for t in targets {
            if !self.contains(t) {
                return Err(LayoutError::UnknownNode(t));
            }
        }
        Ok(targets)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/tree.rs"]
mod tests;
