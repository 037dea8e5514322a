//! relayout resolves relative anchor layouts.
//!
//! Every child of a container attaches each of its four edges to a point along another node's
//! span (the container by default) using a multiplier in `[0, 1]`. The solver turns that graph of
//! anchors into rectangles.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: build a [`LayoutTree`] directly, or load a [`SceneSpec`] from JSON and
//!    resolve its names into handles.
//! 2. **Measure** (optional): refresh intrinsic sizes through a [`Measure`] implementation, then
//!    [`RelativeLayout::measure`] computes the container size the children require.
//! 3. **Arrange**: [`RelativeLayout::arrange`] resolves every child's geometry on both axes and
//!    returns an [`Arrangement`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Linear passes**: each node is resolved at most once per axis per pass.
//! - **No unbounded recursion**: anchor cycles are reported as
//!   [`LayoutError::CyclicConstraint`].
//! - **No IO in the solver**: only [`SceneSpec`] loading touches the filesystem.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod layout;
mod scene;

pub use foundation::core::{
    Align, Anchor, Axis, AxisGeometry, Edge, Edges, MultiplierSpan, NodeId, Point, Rect, Size,
    Target,
};
pub use foundation::error::{LayoutError, LayoutResult};
pub use foundation::math::{FILL_EPSILON, SPAN_EPSILON};
pub use layout::pass::{ArrangedChild, Arrangement, Measure, RelativeLayout};
pub use layout::solver::RelativeSolver;
pub use layout::tree::{Container, LayoutNode, LayoutTree};
pub use scene::dsl::{ChildBuilder, SceneBuilder};
pub use scene::model::{AnchorSpec, CONTAINER_NAME, ChildSpec, ContainerSpec, SceneSpec};
