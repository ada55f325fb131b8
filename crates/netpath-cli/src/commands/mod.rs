// Module exports for CLI subcommands.
//
// Each module handles one subcommand. main.rs parses arguments, loads the
// snapshot once and dispatches here.

pub mod list;
pub mod neighbors;
pub mod paths;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use netpath_lib::{CanonicalGraph, Snapshot};

/// Read the snapshot at `path` and validate it into a graph.
pub fn load_graph(path: &Path) -> Result<CanonicalGraph> {
    let snapshot = Snapshot::from_path(path)
        .with_context(|| format!("failed to load snapshot from {}", path.display()))?;
    let graph = snapshot
        .build_graph()
        .with_context(|| format!("snapshot {} is not a valid graph", path.display()))?;
    info!(
        devices = graph.devices().len(),
        edges = graph.edges().len(),
        "graph built"
    );
    Ok(graph)
}
