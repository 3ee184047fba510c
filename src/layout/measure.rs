use std::collections::{HashMap, HashSet};

use super::index::GraphIndex;
use super::types::Size;
use crate::config::LayoutConfig;
use crate::graph::GateKind;

/// Post-order size pass. Memoized per traversal, never shared across layout
/// invocations. The recursion carries its current path so that a node
/// reappearing on its own ancestry (a true cycle) is cut to leaf size
/// instead of diverging, while a node shared by two sibling branches is
/// measured independently in each.
pub(crate) struct Measurer<'a> {
    index: &'a GraphIndex<'a>,
    collapsed: &'a HashSet<String>,
    config: &'a LayoutConfig,
    sizes: HashMap<&'a str, Size>,
    path: Vec<&'a str>,
}

impl<'a> Measurer<'a> {
    pub fn new(
        index: &'a GraphIndex<'a>,
        collapsed: &'a HashSet<String>,
        config: &'a LayoutConfig,
    ) -> Self {
        Self {
            index,
            collapsed,
            config,
            sizes: HashMap::new(),
            path: Vec::new(),
        }
    }

    pub fn measure(&mut self, id: &'a str) -> Size {
        if let Some(size) = self.sizes.get(id) {
            return *size;
        }
        if self.path.contains(&id) {
            // Cycle: substitute the leaf footprint for this occurrence and
            // stop descending. Deliberately not memoized.
            return self.config.leaf_size();
        }

        let index = self.index;
        let Some(node) = index.node(id) else {
            // Dangling edge target: implicit leaf.
            return self.config.leaf_size();
        };

        if !node.is_gate() {
            let size = self.config.leaf_size();
            self.sizes.insert(id, size);
            return size;
        }
        if self.collapsed.contains(id) {
            // Collapse hides the whole subtree behind a leaf-sized block.
            let size = self.config.leaf_size();
            self.sizes.insert(id, size);
            return size;
        }

        let children = index.children(id);
        let size = if children.is_empty() {
            childless_gate_size(self.config)
        } else {
            self.path.push(id);
            let child_sizes: Vec<Size> = children.iter().map(|&child| self.measure(child)).collect();
            self.path.pop();
            match node.gate_kind() {
                GateKind::And => series_size(&child_sizes, self.config),
                kind @ (GateKind::Or | GateKind::Koon) => {
                    stacked_size(&child_sizes, kind, self.config)
                }
            }
        };
        self.sizes.insert(id, size);
        size
    }

    pub fn into_sizes(self) -> HashMap<&'a str, Size> {
        self.sizes
    }
}

/// A gate without children shows only its label block; it still occupies at
/// least a leaf footprint so the diagram stays visually regular.
fn childless_gate_size(config: &LayoutConfig) -> Size {
    let leaf = config.leaf_size();
    let label = config.label_size();
    Size {
        width: label.width.max(leaf.width),
        height: label.height.max(leaf.height),
    }
}

/// AND: children sit side by side; the gate compresses to the tallest child
/// plus the header band.
fn series_size(children: &[Size], config: &LayoutConfig) -> Size {
    let width: f32 = children.iter().map(|size| size.width).sum::<f32>()
        + config.series_spacing * (children.len() as f32 - 1.0);
    let tallest = children
        .iter()
        .map(|size| size.height)
        .fold(0.0f32, f32::max);
    Size {
        width,
        height: config.label_height + tallest,
    }
}

/// OR and K-of-N: children stack vertically between twin rails.
fn stacked_size(children: &[Size], kind: GateKind, config: &LayoutConfig) -> Size {
    let widest = children.iter().map(|size| size.width).fold(0.0f32, f32::max);
    let stacked: f32 = children.iter().map(|size| size.height).sum::<f32>()
        + config.branch_spacing * (children.len() as f32 - 1.0);
    Size {
        width: widest + config.left_rail_padding() + config.right_rail_padding(kind),
        height: config.label_height + stacked,
    }
}
