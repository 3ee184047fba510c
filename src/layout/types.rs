use std::collections::BTreeMap;

use crate::graph::{GateKind, NodeKind};

/// Subtree footprint in layout units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Attachment geometry a placed node exposes to its parent and siblings:
/// horizontal extent plus the vertical line on which connectors arrive.
/// For an expanded gate this reflects the full nested content, not just
/// the label box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub left_x: f32,
    pub right_x: f32,
    pub center_y: f32,
}

impl Anchor {
    pub fn of_box(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            left_x: x,
            right_x: x + width,
            center_y: y + height / 2.0,
        }
    }
}

/// Renderable projection of a graph node after placement.
#[derive(Debug, Clone)]
pub struct DiagramNode {
    pub id: String,
    pub kind: NodeKind,
    pub gate: Option<GateKind>,
    pub k: Option<u32>,
    pub name: Option<String>,
    pub label: Option<String>,
    pub color: Option<String>,
    pub reliability: Option<f64>,
    pub unit_type: Option<String>,
    pub dist_kind: Option<String>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub parent_gate: Option<String>,
    /// True child count of the underlying graph node, retained even when
    /// the subtree is hidden behind a collapsed gate.
    pub child_count: usize,
    pub collapsed: bool,
}

/// Bounding rectangle of an expanded gate's nested content.
#[derive(Debug, Clone)]
pub struct GateArea {
    pub id: String,
    pub parent_gate: Option<String>,
    pub depth: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Horizontal chain segment between consecutive AND children.
    Series,
    /// Vertical guide line bracketing OR/K-of-N branches.
    Rail,
    /// Horizontal spur between a rail and a branch edge.
    Connector,
}

/// Undecorated 2D segment. `arrow` marks an arrowhead at `(x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramLine {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub kind: LineKind,
    pub arrow: bool,
}

/// Terminal artifact of one layout invocation. Replaced wholesale on every
/// re-layout; nothing is shared across calls.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    pub nodes: Vec<DiagramNode>,
    pub areas: Vec<GateArea>,
    pub lines: Vec<DiagramLine>,
    /// One anchor per placed id. Ids reached through several branches are
    /// replicated geometrically; the map keeps the last placement.
    pub anchors: BTreeMap<String, Anchor>,
    pub width: f32,
    pub height: f32,
}
