use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Node classification on the wire: a `component` is a leaf, a `gate`
/// combines its children under a logical rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    #[default]
    Component,
    Gate,
}

/// Combination rule of a gate. `Koon` is "k out of n".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateKind {
    And,
    Or,
    Koon,
}

impl GateKind {
    /// Case-insensitive subtype token as stored by the backend.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "and" => Some(Self::And),
            "or" => Some(Self::Or),
            "koon" => Some(Self::Koon),
            _ => None,
        }
    }
}

/// Failure distribution reference carried on components, opaque to layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistRef {
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reliability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dist: Option<DistRef>,
}

impl GraphNode {
    pub fn is_gate(&self) -> bool {
        self.kind == NodeKind::Gate
    }

    /// Resolved combination rule. Missing or unrecognized subtype strings
    /// degrade to AND rather than failing.
    pub fn gate_kind(&self) -> GateKind {
        self.subtype
            .as_deref()
            .and_then(GateKind::from_token)
            .unwrap_or(GateKind::And)
    }
}

/// Directed edge: `from` is the logical parent of `to`. Insertion order is
/// the child display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphData {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
}

impl GraphData {
    pub fn from_json(input: &str) -> Result<Self, GraphLoadError> {
        Ok(serde_json::from_str(input)?)
    }
}

#[derive(Debug, Error)]
pub enum GraphLoadError {
    #[error("failed to read graph file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid graph JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_graph(path: &Path) -> Result<GraphData, GraphLoadError> {
    let contents = std::fs::read_to_string(path)?;
    GraphData::from_json(&contents)
}
