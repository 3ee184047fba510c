use std::collections::HashMap;

use crate::graph::{GateKind, GraphData, GraphNode};

/// Lookup structure over raw graph data: id to node, parent to ordered
/// children (edge order), and the resolved entry point. Built fresh for
/// every layout invocation; borrows the caller's graph.
pub(crate) struct GraphIndex<'a> {
    nodes: HashMap<&'a str, &'a GraphNode>,
    children: HashMap<&'a str, Vec<&'a str>>,
    pub root: Option<&'a str>,
}

impl<'a> GraphIndex<'a> {
    pub fn build(graph: &'a GraphData) -> Self {
        let mut nodes: HashMap<&str, &GraphNode> = HashMap::with_capacity(graph.nodes.len());
        for node in &graph.nodes {
            // Duplicate ids are a caller error; keep the last one.
            nodes.insert(node.id.as_str(), node);
        }

        let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
        for edge in &graph.edges {
            children
                .entry(edge.from.as_str())
                .or_default()
                .push(edge.to.as_str());
        }

        // Edges may reference ids missing from the node list; they stay in
        // the children map and later stages treat them as implicit leaves.
        // An empty node list is an empty graph even when a root id is set.
        let root = if graph.nodes.is_empty() {
            None
        } else {
            graph
                .root
                .as_deref()
                .or_else(|| graph.nodes.first().map(|node| node.id.as_str()))
        };

        Self {
            nodes,
            children,
            root,
        }
    }

    pub fn node(&self, id: &str) -> Option<&'a GraphNode> {
        self.nodes.get(id).copied()
    }

    pub fn children(&self, id: &str) -> &[&'a str] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_gate(&self, id: &str) -> bool {
        self.node(id).is_some_and(GraphNode::is_gate)
    }

    pub fn gate_kind(&self, id: &str) -> Option<GateKind> {
        let node = self.node(id)?;
        node.is_gate().then(|| node.gate_kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphEdge, NodeKind};

    fn node(id: &str, kind: NodeKind) -> GraphNode {
        GraphNode {
            id: id.to_string(),
            kind,
            subtype: None,
            k: None,
            name: None,
            label: None,
            color: None,
            reliability: None,
            unit_type: None,
            dist: None,
        }
    }

    fn edge(from: &str, to: &str) -> GraphEdge {
        GraphEdge {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    #[test]
    fn resolves_explicit_root() {
        let graph = GraphData {
            nodes: vec![node("a", NodeKind::Component), node("g", NodeKind::Gate)],
            edges: vec![edge("g", "a")],
            root: Some("g".to_string()),
        };
        let index = GraphIndex::build(&graph);
        assert_eq!(index.root, Some("g"));
        assert_eq!(index.children("g"), ["a"]);
        assert!(index.children("a").is_empty());
    }

    #[test]
    fn falls_back_to_first_node() {
        let graph = GraphData {
            nodes: vec![node("x", NodeKind::Component), node("y", NodeKind::Component)],
            edges: vec![],
            root: None,
        };
        let index = GraphIndex::build(&graph);
        assert_eq!(index.root, Some("x"));
    }

    #[test]
    fn empty_graph_has_no_root() {
        let graph = GraphData::default();
        let index = GraphIndex::build(&graph);
        assert_eq!(index.root, None);
    }

    #[test]
    fn root_id_without_nodes_stays_unresolved() {
        let graph = GraphData {
            nodes: vec![],
            edges: vec![],
            root: Some("ghost".to_string()),
        };
        let index = GraphIndex::build(&graph);
        assert_eq!(index.root, None);
    }

    #[test]
    fn children_keep_edge_order() {
        let graph = GraphData {
            nodes: vec![node("g", NodeKind::Gate)],
            edges: vec![edge("g", "c"), edge("g", "a"), edge("g", "b")],
            root: Some("g".to_string()),
        };
        let index = GraphIndex::build(&graph);
        assert_eq!(index.children("g"), ["c", "a", "b"]);
        // "c" has no node entry but remains addressable through the edge.
        assert!(index.node("c").is_none());
    }
}
