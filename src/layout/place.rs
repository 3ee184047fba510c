use std::collections::{BTreeMap, HashMap, HashSet};

use super::index::GraphIndex;
use super::types::{Anchor, DiagramNode, GateArea, Size};
use crate::config::LayoutConfig;
use crate::graph::{GateKind, GraphNode, NodeKind};

/// One child attachment of an expanded gate, recorded in edge order for the
/// connection builder.
pub(crate) struct ChildAttach {
    pub anchor: Anchor,
    /// Whether a line terminating at this child carries an arrowhead.
    /// Suppressed when the child is an expanded OR/K-of-N gate, whose own
    /// rails pick up the flow.
    pub arrow_into: bool,
}

/// An expanded gate placement together with everything the connection
/// builder needs: the gate rectangle and the ordered child anchors.
pub(crate) struct PlacedGate {
    pub kind: GateKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub children: Vec<ChildAttach>,
}

/// Pre-order position pass. Owns the accumulators for one invocation and
/// hands them back by value; strictly sequential, no shared state.
pub(crate) struct Placer<'a> {
    index: &'a GraphIndex<'a>,
    collapsed: &'a HashSet<String>,
    config: &'a LayoutConfig,
    sizes: &'a HashMap<&'a str, Size>,
    path: Vec<&'a str>,
    pub nodes: Vec<DiagramNode>,
    pub areas: Vec<GateArea>,
    pub anchors: BTreeMap<String, Anchor>,
    pub gates: Vec<PlacedGate>,
}

impl<'a> Placer<'a> {
    pub fn new(
        index: &'a GraphIndex<'a>,
        collapsed: &'a HashSet<String>,
        config: &'a LayoutConfig,
        sizes: &'a HashMap<&'a str, Size>,
    ) -> Self {
        Self {
            index,
            collapsed,
            config,
            sizes,
            path: Vec::new(),
            nodes: Vec::new(),
            areas: Vec::new(),
            anchors: BTreeMap::new(),
            gates: Vec::new(),
        }
    }

    fn size_of(&self, id: &str) -> Size {
        self.sizes
            .get(id)
            .copied()
            .unwrap_or_else(|| self.config.leaf_size())
    }

    fn is_collapsed(&self, id: &str) -> bool {
        self.index.is_gate(id) && self.collapsed.contains(id)
    }

    /// Size the parent allotted this child. A cycle-cut occurrence was
    /// measured as a leaf for the current branch, so its memoized full size
    /// must not leak into placement.
    fn allotted_size(&self, id: &str) -> Size {
        if self.path.contains(&id) {
            self.config.leaf_size()
        } else {
            self.size_of(id)
        }
    }

    /// An expanded OR/K-of-N gate absorbs incoming flow through its rails,
    /// so lines into it drop their arrowhead. Cycle-cut occurrences and
    /// gates without branches are placed as plain blocks and keep the arrow.
    fn suppresses_arrow(&self, id: &str) -> bool {
        !self.path.contains(&id)
            && matches!(
                self.index.gate_kind(id),
                Some(GateKind::Or | GateKind::Koon)
            )
            && !self.collapsed.contains(id)
            && !self.index.children(id).is_empty()
    }

    /// Vertical offset, inside a child's own box, of the line its parent
    /// attaches to. Expanded OR/K-of-N children center on their rail
    /// content; everything else centers on half its height. This keeps the
    /// rails of nested gates continuous across AND sibling boundaries.
    fn attach_offset(&self, id: &str) -> f32 {
        let height = self.allotted_size(id).height;
        if self.suppresses_arrow(id) {
            self.config.label_height + (height - self.config.label_height) / 2.0
        } else {
            height / 2.0
        }
    }

    /// Place the subtree rooted at `id` with its top-left corner at
    /// `(x, y)`; returns the anchor the parent attaches to.
    pub fn place(
        &mut self,
        id: &'a str,
        x: f32,
        y: f32,
        parent: Option<&str>,
        depth: usize,
    ) -> Anchor {
        let node = self.index.node(id);
        let child_count = self.index.children(id).len();
        let expanded = node.is_some_and(GraphNode::is_gate)
            && child_count > 0
            && !self.collapsed.contains(id)
            && !self.path.contains(&id);

        if !expanded {
            // Components, collapsed gates, childless gates, dangling ids and
            // cycle-cut occurrences all occupy one block of their measured
            // footprint.
            let collapsed = self.is_collapsed(id);
            let size = self.allotted_size(id);
            return self.place_block(id, x, y, size, parent, collapsed, child_count);
        }

        let size = self.size_of(id);
        let kind = self
            .index
            .gate_kind(id)
            .unwrap_or(GateKind::And);

        self.areas.push(GateArea {
            id: id.to_string(),
            parent_gate: parent.map(str::to_string),
            depth,
            x,
            y,
            width: size.width,
            height: size.height,
        });

        let label = self.config.label_size();
        self.push_node(
            id,
            x + (size.width - label.width) / 2.0,
            y,
            label,
            parent,
            false,
            child_count,
        );

        self.path.push(id);
        let children: Vec<&'a str> = self.index.children(id).to_vec();
        let attaches = match kind {
            GateKind::And => self.place_series(&children, x, y, id, depth + 1),
            GateKind::Or | GateKind::Koon => {
                self.place_stacked(&children, kind, x, y, size, id, depth + 1)
            }
        };
        self.path.pop();

        self.gates.push(PlacedGate {
            kind,
            x,
            y,
            width: size.width,
            height: size.height,
            children: attaches,
        });

        // The gate anchor spans the full nested content, centered on it.
        let anchor = Anchor {
            left_x: x,
            right_x: x + size.width,
            center_y: y + self.config.label_height
                + (size.height - self.config.label_height) / 2.0,
        };
        self.anchors.insert(id.to_string(), anchor);
        anchor
    }

    /// Left-to-right row below the header, every child's attach line pulled
    /// onto a common baseline.
    fn place_series(
        &mut self,
        children: &[&'a str],
        x: f32,
        y: f32,
        parent: &str,
        depth: usize,
    ) -> Vec<ChildAttach> {
        let baseline = children
            .iter()
            .map(|&child| self.attach_offset(child))
            .fold(0.0f32, f32::max);
        let mut attaches = Vec::with_capacity(children.len());
        let mut cursor = x;
        for &child in children {
            let size = self.allotted_size(child);
            let arrow_into = !self.suppresses_arrow(child);
            let top = y + self.config.label_height + baseline - self.attach_offset(child);
            let anchor = self.place(child, cursor, top, Some(parent), depth);
            attaches.push(ChildAttach { anchor, arrow_into });
            cursor += size.width + self.config.series_spacing;
        }
        attaches
    }

    /// Top-to-bottom stack between the rails, each branch centered within
    /// the span the rail paddings leave free.
    fn place_stacked(
        &mut self,
        children: &[&'a str],
        kind: GateKind,
        x: f32,
        y: f32,
        size: Size,
        parent: &str,
        depth: usize,
    ) -> Vec<ChildAttach> {
        let left_pad = self.config.left_rail_padding();
        let inner = size.width - left_pad - self.config.right_rail_padding(kind);
        let mut attaches = Vec::with_capacity(children.len());
        let mut cursor = y + self.config.label_height;
        for &child in children {
            let child_size = self.allotted_size(child);
            let arrow_into = !self.suppresses_arrow(child);
            let left = x + left_pad + (inner - child_size.width) / 2.0;
            let anchor = self.place(child, left, cursor, Some(parent), depth);
            attaches.push(ChildAttach { anchor, arrow_into });
            cursor += child_size.height + self.config.branch_spacing;
        }
        attaches
    }

    fn place_block(
        &mut self,
        id: &'a str,
        x: f32,
        y: f32,
        size: Size,
        parent: Option<&str>,
        collapsed: bool,
        child_count: usize,
    ) -> Anchor {
        self.push_node(id, x, y, size, parent, collapsed, child_count);
        let anchor = Anchor::of_box(x, y, size.width, size.height);
        self.anchors.insert(id.to_string(), anchor);
        anchor
    }

    fn push_node(
        &mut self,
        id: &'a str,
        x: f32,
        y: f32,
        size: Size,
        parent: Option<&str>,
        collapsed: bool,
        child_count: usize,
    ) {
        let node = self.index.node(id);
        self.nodes.push(DiagramNode {
            id: id.to_string(),
            kind: node.map(|n| n.kind).unwrap_or(NodeKind::Component),
            gate: node.filter(|n| n.is_gate()).map(GraphNode::gate_kind),
            k: node.and_then(|n| n.k),
            name: node.and_then(|n| n.name.clone()),
            label: node.and_then(|n| n.label.clone()),
            color: node.and_then(|n| n.color.clone()),
            reliability: node.and_then(|n| n.reliability),
            unit_type: node.and_then(|n| n.unit_type.clone()),
            dist_kind: node.and_then(|n| n.dist.as_ref().map(|d| d.kind.clone())),
            x,
            y,
            width: size.width,
            height: size.height,
            parent_gate: parent.map(str::to_string),
            child_count,
            collapsed,
        });
    }
}
