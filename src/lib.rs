#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod graph;
pub mod layout;
pub mod layout_dump;

pub use config::{LayoutConfig, load_config};
pub use graph::{GateKind, GraphData, GraphEdge, GraphNode, NodeKind};
pub use layout::{LayoutResult, compute_layout};

#[cfg(feature = "cli")]
pub use cli::run;
