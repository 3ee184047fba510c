mod connect;
mod index;
mod measure;
mod place;
pub(crate) mod types;
pub use types::*;

use std::collections::HashSet;

use crate::config::LayoutConfig;
use crate::graph::GraphData;
use index::GraphIndex;
use measure::Measurer;
use place::Placer;

/// Transform a raw node/edge graph into absolute diagram geometry.
///
/// The pipeline runs four pure stages: index the graph, measure every
/// subtree, place every node from the root down, then synthesize the
/// connection lines per expanded gate. `collapsed` is the externally
/// managed set of gate ids whose subtrees are hidden; the engine never
/// decides collapse state itself.
///
/// Degenerate input never fails: an empty graph yields an empty result,
/// dangling edges become implicit leaf blocks, cycles are cut to leaf
/// size, unknown gate subtypes fall back to AND.
pub fn compute_layout(
    graph: &GraphData,
    collapsed: &HashSet<String>,
    config: &LayoutConfig,
) -> LayoutResult {
    let index = GraphIndex::build(graph);
    let Some(root) = index.root else {
        return LayoutResult::default();
    };

    let mut measurer = Measurer::new(&index, collapsed, config);
    let root_size = measurer.measure(root);
    let sizes = measurer.into_sizes();

    let mut placer = Placer::new(&index, collapsed, config, &sizes);
    placer.place(root, config.diagram_padding, config.diagram_padding, None, 0);

    let lines = connect::build_lines(&placer.gates);

    LayoutResult {
        nodes: placer.nodes,
        areas: placer.areas,
        lines,
        anchors: placer.anchors,
        width: root_size.width + 2.0 * config.diagram_padding,
        height: root_size.height + 2.0 * config.diagram_padding,
    }
}
