use std::fmt;

pub use kurbo::{Point, Rect, Size};

/// Stable handle of a node inside a [`crate::LayoutTree`].
///
/// Handles are arena indices. [`NodeId::CONTAINER`] always names the container.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The container (root) of a layout pass.
    pub const CONTAINER: NodeId = NodeId(0);

    /// Whether this handle names the container.
    pub fn is_container(self) -> bool {
        self == Self::CONTAINER
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_container() {
            f.write_str("container")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

/// Layout axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// The `(low, high)` edges constraining this axis.
    pub fn edges(self) -> (Edge, Edge) {
        match self {
            Axis::Horizontal => (Edge::Left, Edge::Right),
            Axis::Vertical => (Edge::Top, Edge::Bottom),
        }
    }

    /// Extent of `size` along this axis.
    pub fn length_of(self, size: Size) -> f64 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Axis::Horizontal => 0,
            Axis::Vertical => 1,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

/// One of the four anchorable edges of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    /// Low edge of the horizontal axis.
    Left,
    /// High edge of the horizontal axis.
    Right,
    /// Low edge of the vertical axis.
    Top,
    /// High edge of the vertical axis.
    Bottom,
}

impl Edge {
    /// All edges in storage order.
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// Axis this edge belongs to.
    pub fn axis(self) -> Axis {
        match self {
            Edge::Left | Edge::Right => Axis::Horizontal,
            Edge::Top | Edge::Bottom => Axis::Vertical,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Edge::Left => 0,
            Edge::Right => 1,
            Edge::Top => 2,
            Edge::Bottom => 3,
        }
    }
}

/// Alignment of a node's intrinsic length inside its anchored span.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    /// Slack goes after the node.
    #[default]
    Start,
    /// Slack is split evenly.
    Center,
    /// Slack goes before the node.
    End,
}

impl Align {
    /// Share of the slack placed before the node.
    pub fn fraction(self) -> f64 {
        match self {
            Align::Start => 0.0,
            Align::Center => 0.5,
            Align::End => 1.0,
        }
    }
}

/// What an anchor is attached to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// The container; used when no target is set.
    #[default]
    Container,
    /// Another node of the same tree.
    Node(NodeId),
}

impl Target {
    /// Concrete node handle for this target.
    pub fn node(self) -> NodeId {
        match self {
            Target::Container => NodeId::CONTAINER,
            Target::Node(id) => id,
        }
    }
}

impl From<NodeId> for Target {
    fn from(id: NodeId) -> Self {
        if id.is_container() {
            Target::Container
        } else {
            Target::Node(id)
        }
    }
}

/// Edge attachment: a point at `multiplier` along the target's span.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Anchor {
    /// Node whose span is interpolated.
    #[serde(default)]
    pub target: Target,
    /// Interpolation factor, nominally in `[0, 1]`.
    #[serde(default)]
    pub multiplier: f64,
}

impl Anchor {
    /// Anchor at `multiplier` along `target`.
    pub fn new(target: impl Into<Target>, multiplier: f64) -> Self {
        Self {
            target: target.into(),
            multiplier,
        }
    }

    /// Anchor at `multiplier` along the container.
    pub fn container(multiplier: f64) -> Self {
        Self {
            target: Target::Container,
            multiplier,
        }
    }
}

/// A node's anchored edges on one axis as fractions of the container span.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MultiplierSpan {
    /// Fraction for the low edge (left/top).
    pub low: f64,
    /// Fraction for the high edge (right/bottom).
    pub high: f64,
}

impl MultiplierSpan {
    /// The container's own span.
    pub const FULL: MultiplierSpan = MultiplierSpan {
        low: 0.0,
        high: 1.0,
    };

    /// Width of the span as a fraction of the container.
    pub fn extent(self) -> f64 {
        self.high - self.low
    }
}

/// Resolved placement of a node on one axis.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AxisGeometry {
    /// Offset from the container's low edge.
    pub position: f64,
    /// Extent along the axis.
    pub length: f64,
}

impl AxisGeometry {
    /// Coordinate of the high edge.
    pub fn end(self) -> f64 {
        self.position + self.length
    }
}

/// Padding edges in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Edges {
    /// Left padding.
    #[serde(default)]
    pub left: f64,
    /// Right padding.
    #[serde(default)]
    pub right: f64,
    /// Top padding.
    #[serde(default)]
    pub top: f64,
    /// Bottom padding.
    #[serde(default)]
    pub bottom: f64,
}

impl Edges {
    /// Same padding on every side.
    pub fn uniform(v: f64) -> Self {
        Self {
            left: v,
            right: v,
            top: v,
            bottom: v,
        }
    }

    /// Padding before the content on `axis`.
    pub fn leading(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Total padding on `axis`.
    pub fn total(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.left + self.right,
            Axis::Vertical => self.top + self.bottom,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
