use crate::layout::{LayoutResult, LineKind};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Serializable projection of a [`LayoutResult`], the shape the rendering
/// layer consumes: boxes, nested containers, line segments, anchors and the
/// overall canvas size.
#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub width: f32,
    pub height: f32,
    pub nodes: Vec<NodeDump>,
    pub areas: Vec<AreaDump>,
    pub lines: Vec<LineDump>,
    pub anchors: Vec<AnchorDump>,
}

#[derive(Debug, Serialize)]
pub struct NodeDump {
    pub id: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reliability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dist_kind: Option<String>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_gate: Option<String>,
    pub child_count: usize,
    pub collapsed: bool,
}

#[derive(Debug, Serialize)]
pub struct AreaDump {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_gate: Option<String>,
    pub depth: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Serialize)]
pub struct LineDump {
    pub kind: String,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub arrow: bool,
}

#[derive(Debug, Serialize)]
pub struct AnchorDump {
    pub id: String,
    pub left_x: f32,
    pub right_x: f32,
    pub center_y: f32,
}

impl LayoutDump {
    pub fn from_layout(layout: &LayoutResult) -> Self {
        let nodes = layout
            .nodes
            .iter()
            .map(|node| NodeDump {
                id: node.id.clone(),
                kind: format!("{:?}", node.kind).to_lowercase(),
                gate: node.gate.map(|gate| format!("{gate:?}").to_lowercase()),
                k: node.k,
                name: node.name.clone(),
                label: node.label.clone(),
                color: node.color.clone(),
                reliability: node.reliability,
                unit_type: node.unit_type.clone(),
                dist_kind: node.dist_kind.clone(),
                x: node.x,
                y: node.y,
                width: node.width,
                height: node.height,
                parent_gate: node.parent_gate.clone(),
                child_count: node.child_count,
                collapsed: node.collapsed,
            })
            .collect();

        let areas = layout
            .areas
            .iter()
            .map(|area| AreaDump {
                id: area.id.clone(),
                parent_gate: area.parent_gate.clone(),
                depth: area.depth,
                x: area.x,
                y: area.y,
                width: area.width,
                height: area.height,
            })
            .collect();

        let lines = layout
            .lines
            .iter()
            .map(|line| LineDump {
                kind: match line.kind {
                    LineKind::Series => "series".to_string(),
                    LineKind::Rail => "rail".to_string(),
                    LineKind::Connector => "connector".to_string(),
                },
                x1: line.x1,
                y1: line.y1,
                x2: line.x2,
                y2: line.y2,
                arrow: line.arrow,
            })
            .collect();

        let anchors = layout
            .anchors
            .iter()
            .map(|(id, anchor)| AnchorDump {
                id: id.clone(),
                left_x: anchor.left_x,
                right_x: anchor.right_x,
                center_y: anchor.center_y,
            })
            .collect();

        LayoutDump {
            width: layout.width,
            height: layout.height,
            nodes,
            areas,
            lines,
            anchors,
        }
    }
}

pub fn write_layout_dump(path: &Path, layout: &LayoutResult) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
