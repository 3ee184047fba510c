use crate::config::load_config;
use crate::graph::GraphData;
use crate::layout::compute_layout;
use crate::layout_dump::{LayoutDump, write_layout_dump};
use anyhow::Result;
use clap::Parser;
use std::collections::HashSet;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "rbdl", version, about = "Reliability block diagram layout engine")]
pub struct Args {
    /// Input graph JSON or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output layout JSON. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Comma-separated ids of gates to lay out collapsed
    #[arg(short = 'g', long = "collapsed")]
    pub collapsed: Option<String>,

    /// Layout config JSON (partial overrides of the default constants)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let graph = read_graph(args.input.as_deref())?;
    let collapsed = parse_collapsed(args.collapsed.as_deref());

    let layout = compute_layout(&graph, &collapsed, &config);

    match args.output.as_deref() {
        Some(path) => write_layout_dump(path, &layout)?,
        None => {
            let dump = LayoutDump::from_layout(&layout);
            println!("{}", serde_json::to_string_pretty(&dump)?);
        }
    }
    Ok(())
}

fn read_graph(path: Option<&Path>) -> Result<GraphData> {
    let contents = match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(GraphData::from_json(&contents)?)
}

fn parse_collapsed(raw: Option<&str>) -> HashSet<String> {
    raw.map(|list| {
        list.split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
