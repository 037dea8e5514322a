use crate::foundation::core::{Axis, NodeId};

/// Convenience result type used across relayout.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Top-level error taxonomy used by layout APIs.
#[derive(thiserror::Error, Debug)]
pub enum LayoutError {
    /// Invalid user-provided scene or tree data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Anchors on one axis form a cycle; resolution cannot terminate.
    #[error("cyclic constraint on {axis} axis: {}", format_cycle(.cycle))]
    CyclicConstraint {
        /// Axis whose anchors form the cycle.
        axis: Axis,
        /// Nodes on the cycle, starting and ending at the revisited node.
        cycle: Vec<NodeId>,
    },

    /// An anchor or lookup refers to a node handle outside the tree.
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// Errors when serializing or deserializing scene data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LayoutError {
    /// Build a [`LayoutError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LayoutError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`LayoutError::CyclicConstraint`] value.
    pub fn cyclic(axis: Axis, cycle: Vec<NodeId>) -> Self {
        Self::CyclicConstraint { axis, cycle }
    }
}

fn format_cycle(cycle: &[NodeId]) -> String {
    cycle
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
