use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    foundation::core::{Align, Anchor, Axis, Edge, Edges, NodeId, Size, Target},
    foundation::error::{LayoutError, LayoutResult},
    layout::pass::RelativeLayout,
    layout::tree::{Container, LayoutNode, LayoutTree},
};

/// Reserved target name for the container.
pub const CONTAINER_NAME: &str = "container";

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// JSON-facing description of a relative layout.
///
/// Children refer to each other by name; names are resolved to [`NodeId`] handles when the
/// scene is built into a [`RelativeLayout`].
pub struct SceneSpec {
    /// Container dimensions and padding.
    #[serde(default)]
    pub container: ContainerSpec,
    /// Children in layout order.
    #[serde(default)]
    pub children: Vec<ChildSpec>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Container section of a scene.
pub struct ContainerSpec {
    /// Available width (padding included).
    #[serde(default)]
    pub width: f64,
    /// Available height (padding included).
    #[serde(default)]
    pub height: f64,
    /// Minimum width reported by measure.
    #[serde(default)]
    pub min_width: f64,
    /// Minimum height reported by measure.
    #[serde(default)]
    pub min_height: f64,
    /// Inner padding.
    #[serde(default)]
    pub padding: Edges,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// One child of a scene.
pub struct ChildSpec {
    /// Unique child name.
    pub name: String,
    /// Intrinsic width; `0` fills the anchored span.
    #[serde(default)]
    pub width: f64,
    /// Intrinsic height; `0` fills the anchored span.
    #[serde(default)]
    pub height: f64,
    /// Left edge anchor.
    #[serde(default)]
    pub left: AnchorSpec,
    /// Right edge anchor.
    #[serde(default)]
    pub right: AnchorSpec,
    /// Top edge anchor.
    #[serde(default)]
    pub top: AnchorSpec,
    /// Bottom edge anchor.
    #[serde(default)]
    pub bottom: AnchorSpec,
    /// Horizontal alignment inside the anchored span.
    #[serde(default)]
    pub align_x: Align,
    /// Vertical alignment inside the anchored span.
    #[serde(default)]
    pub align_y: Align,
    /// Fill the horizontal span regardless of width.
    #[serde(default)]
    pub fill_x: bool,
    /// Fill the vertical span regardless of height.
    #[serde(default)]
    pub fill_y: bool,
}

impl ChildSpec {
    /// Anchor spec for `edge`.
    pub fn anchor(&self, edge: Edge) -> &AnchorSpec {
        match edge {
            Edge::Left => &self.left,
            Edge::Right => &self.right,
            Edge::Top => &self.top,
            Edge::Bottom => &self.bottom,
        }
    }

    pub(crate) fn anchor_mut(&mut self, edge: Edge) -> &mut AnchorSpec {
        match edge {
            Edge::Left => &mut self.left,
            Edge::Right => &mut self.right,
            Edge::Top => &mut self.top,
            Edge::Bottom => &mut self.bottom,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Named anchor target plus multiplier.
pub struct AnchorSpec {
    /// Target child name; absent or `"container"` means the container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Interpolation factor along the target's span.
    #[serde(default)]
    pub multiplier: f64,
}

impl AnchorSpec {
    fn target_name(&self) -> Option<&str> {
        self.target.as_deref().filter(|t| *t != CONTAINER_NAME)
    }
}

fn edge_field(edge: Edge) -> &'static str {
    match edge {
        Edge::Left => "left",
        Edge::Right => "right",
        Edge::Top => "top",
        Edge::Bottom => "bottom",
    }
}

impl SceneSpec {
    /// Parse a scene from a JSON string.
    pub fn from_json_str(s: &str) -> LayoutResult<Self> {
        serde_json::from_str(s).map_err(|e| LayoutError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> LayoutResult<Self> {
        serde_json::from_reader(r).map_err(|e| LayoutError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> LayoutResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            LayoutError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> LayoutResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| LayoutError::serde(e.to_string()))
    }

    /// Validate names, references and numeric ranges.
    ///
    /// Multipliers outside `[0, 1]` are legal and only logged; anchor cycles are detected when
    /// the layout is solved.
    pub fn validate(&self) -> LayoutResult<()> {
        let c = &self.container;
        for (name, value) in [
            ("width", c.width),
            ("height", c.height),
            ("min_width", c.min_width),
            ("min_height", c.min_height),
            ("padding.left", c.padding.left),
            ("padding.right", c.padding.right),
            ("padding.top", c.padding.top),
            ("padding.bottom", c.padding.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::validation(format!(
                    "container.{name} must be finite and >= 0"
                )));
            }
        }

        let mut seen = HashMap::<&str, usize>::with_capacity(self.children.len());
        for (i, child) in self.children.iter().enumerate() {
            if child.name.trim().is_empty() {
                return Err(LayoutError::validation(format!(
                    "children[{i}].name must not be empty"
                )));
            }
            if child.name == CONTAINER_NAME {
                return Err(LayoutError::validation(format!(
                    "children[{i}].name '{CONTAINER_NAME}' is reserved"
                )));
            }
            if seen.insert(child.name.as_str(), i).is_some() {
                return Err(LayoutError::validation(format!(
                    "duplicate child name '{}'",
                    child.name
                )));
            }
            for (field, value) in [("width", child.width), ("height", child.height)] {
                if !value.is_finite() || value < 0.0 {
                    return Err(LayoutError::validation(format!(
                        "child '{}' {field} must be finite and >= 0",
                        child.name
                    )));
                }
            }
        }

        for child in &self.children {
            for edge in Edge::ALL {
                let anchor = child.anchor(edge);
                let field = edge_field(edge);
                if !anchor.multiplier.is_finite() {
                    return Err(LayoutError::validation(format!(
                        "child '{}' {field}.multiplier must be finite",
                        child.name
                    )));
                }
                if !(0.0..=1.0).contains(&anchor.multiplier) {
                    tracing::warn!(
                        child = %child.name,
                        edge = field,
                        multiplier = anchor.multiplier,
                        "anchor multiplier outside [0, 1]"
                    );
                }
                if let Some(target) = anchor.target_name()
                    && !seen.contains_key(target)
                {
                    return Err(LayoutError::validation(format!(
                        "child '{}' {field}.target references missing child '{target}'",
                        child.name
                    )));
                }
            }
        }
        Ok(())
    }

    /// Validate and resolve names into a layout tree.
    pub fn to_tree(&self) -> LayoutResult<LayoutTree> {
        self.validate()?;
        let c = &self.container;
        let mut tree = LayoutTree::new(Container {
            size: Size::new(c.width, c.height),
            min_size: Size::new(c.min_width, c.min_height),
            padding: c.padding,
        });

        let ids = self
            .children
            .iter()
            .enumerate()
            .map(|(i, child)| (child.name.as_str(), NodeId(i as u32 + 1)))
            .collect::<HashMap<_, _>>();
        let resolve = |spec: &AnchorSpec| -> LayoutResult<Anchor> {
            let target = match spec.target_name() {
                None => Target::Container,
                Some(name) => Target::Node(*ids.get(name).ok_or_else(|| {
                    LayoutError::validation(format!("unknown anchor target '{name}'"))
                })?),
            };
            Ok(Anchor {
                target,
                multiplier: spec.multiplier,
            })
        };

        for child in &self.children {
            let mut node = LayoutNode::new(child.name.clone());
            node.intrinsic = Size::new(child.width, child.height);
            for edge in Edge::ALL {
                node.anchors[edge.index()] = resolve(child.anchor(edge))?;
            }
            node.align[Axis::Horizontal.index()] = child.align_x;
            node.align[Axis::Vertical.index()] = child.align_y;
            node.fill[Axis::Horizontal.index()] = child.fill_x;
            node.fill[Axis::Vertical.index()] = child.fill_y;
            tree.add_child(node);
        }
        Ok(tree)
    }

    /// Validate, resolve and wrap into a [`RelativeLayout`].
    pub fn build(&self) -> LayoutResult<RelativeLayout> {
        Ok(RelativeLayout::new(self.to_tree()?))
    }

    /// Container size declared by the scene.
    pub fn container_size(&self) -> Size {
        Size::new(self.container.width, self.container.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
