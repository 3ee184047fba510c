use crate::graph::GateKind;
use crate::layout::Size;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Every geometric constant of the layout, in abstract layout units. The
/// renderer decides what a unit means on screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Footprint of a component and of a collapsed gate.
    pub leaf_width: f32,
    pub leaf_height: f32,
    /// Label box drawn at the top of an expanded gate. `label_height` is
    /// also the header band reserved above a gate's content.
    pub label_width: f32,
    pub label_height: f32,
    /// Horizontal gap between consecutive AND children.
    pub series_spacing: f32,
    /// Vertical gap between stacked OR/K-of-N branches.
    pub branch_spacing: f32,
    /// Space reserved on each side of an OR/K-of-N gate for its rails.
    pub rail_padding: f32,
    /// Extra right-side rail allowance on K-of-N gates (per-branch marker).
    pub koon_rail_extra: f32,
    /// Margin around the whole diagram.
    pub diagram_padding: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            leaf_width: 200.0,
            leaf_height: 120.0,
            label_width: 140.0,
            label_height: 36.0,
            series_spacing: 56.0,
            branch_spacing: 32.0,
            rail_padding: 64.0,
            koon_rail_extra: 32.0,
            diagram_padding: 24.0,
        }
    }
}

impl LayoutConfig {
    pub fn leaf_size(&self) -> Size {
        Size {
            width: self.leaf_width,
            height: self.leaf_height,
        }
    }

    pub fn label_size(&self) -> Size {
        Size {
            width: self.label_width,
            height: self.label_height,
        }
    }

    pub fn left_rail_padding(&self) -> f32 {
        self.rail_padding
    }

    pub fn right_rail_padding(&self, kind: GateKind) -> f32 {
        match kind {
            GateKind::Koon => self.rail_padding + self.koon_rail_extra,
            _ => self.rail_padding,
        }
    }
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<LayoutConfig> {
    let Some(path) = path else {
        return Ok(LayoutConfig::default());
    };
    let contents = std::fs::read_to_string(path)?;
    let config: LayoutConfig = serde_json::from_str(&contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let config: LayoutConfig =
            serde_json::from_str(r#"{"leaf_width": 160.0}"#).expect("parse failed");
        assert_eq!(config.leaf_width, 160.0);
        assert_eq!(config.leaf_height, 120.0);
        assert_eq!(config.series_spacing, 56.0);
    }

    #[test]
    fn koon_reserves_extra_right_rail() {
        let config = LayoutConfig::default();
        assert_eq!(config.right_rail_padding(GateKind::Or), 64.0);
        assert_eq!(config.right_rail_padding(GateKind::Koon), 96.0);
    }
}
