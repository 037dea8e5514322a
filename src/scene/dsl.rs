use crate::{
    foundation::core::{Align, Edge, Edges},
    foundation::error::{LayoutError, LayoutResult},
    scene::model::{AnchorSpec, CONTAINER_NAME, ChildSpec, ContainerSpec, SceneSpec},
};

/// Fluent builder for [`SceneSpec`].
pub struct SceneBuilder {
    container: ContainerSpec,
    children: Vec<ChildSpec>,
}

impl SceneBuilder {
    /// Builder for a container of `width` x `height`.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            container: ContainerSpec {
                width,
                height,
                ..ContainerSpec::default()
            },
            children: Vec::new(),
        }
    }

    /// Minimum size reported by measure.
    pub fn min_size(mut self, width: f64, height: f64) -> Self {
        self.container.min_width = width;
        self.container.min_height = height;
        self
    }

    /// Container padding.
    pub fn padding(mut self, padding: Edges) -> Self {
        self.container.padding = padding;
        self
    }

    /// Append a child.
    pub fn child(mut self, child: ChildSpec) -> Self {
        self.children.push(child);
        self
    }

    /// Validate and return the scene.
    pub fn build(self) -> LayoutResult<SceneSpec> {
        let scene = SceneSpec {
            container: self.container,
            children: self.children,
        };
        scene.validate()?;
        Ok(scene)
    }
}

/// Fluent builder for [`ChildSpec`].
pub struct ChildBuilder {
    spec: ChildSpec,
}

impl ChildBuilder {
    /// Child named `name` with default anchors and no intrinsic size.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            spec: ChildSpec {
                name: name.into(),
                ..ChildSpec::default()
            },
        }
    }

    /// Intrinsic size.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.spec.width = width;
        self.spec.height = height;
        self
    }

    /// Anchor `edge` at `multiplier` along the child named `target`.
    pub fn anchor(mut self, edge: Edge, target: impl Into<String>, multiplier: f64) -> Self {
        let target = target.into();
        *self.spec.anchor_mut(edge) = AnchorSpec {
            target: (target != CONTAINER_NAME).then_some(target),
            multiplier,
        };
        self
    }

    /// Anchor `edge` at `multiplier` along the container.
    pub fn anchor_container(mut self, edge: Edge, multiplier: f64) -> Self {
        *self.spec.anchor_mut(edge) = AnchorSpec {
            target: None,
            multiplier,
        };
        self
    }

    /// Alignment on both axes.
    pub fn align(mut self, x: Align, y: Align) -> Self {
        self.spec.align_x = x;
        self.spec.align_y = y;
        self
    }

    /// Fill flags on both axes.
    pub fn fill(mut self, x: bool, y: bool) -> Self {
        self.spec.fill_x = x;
        self.spec.fill_y = y;
        self
    }

    /// Finish the child; names must be non-empty.
    pub fn build(self) -> LayoutResult<ChildSpec> {
        if self.spec.name.trim().is_empty() {
            return Err(LayoutError::validation("child name must be non-empty"));
        }
        Ok(self.spec)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/dsl.rs"]
mod tests;
