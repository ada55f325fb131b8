//! Neighbors command handler: forward neighbours of one device.

use anyhow::{Context, Result};

use netpath_lib::{CanonicalGraph, NeighborList, OutputFormat, PathFinder};

/// Handle the neighbors subcommand.
pub fn handle_neighbors(
    graph: &CanonicalGraph,
    device: &str,
    format: OutputFormat,
) -> Result<()> {
    let neighbors = PathFinder::new(graph)
        .neighbors(device)
        .with_context(|| format!("cannot list neighbors of {device}"))?;
    let list = NeighborList {
        device: device.to_string(),
        neighbors: neighbors.into_iter().map(str::to_string).collect(),
    };
    println!("{}", list.render(format)?.trim_end());
    Ok(())
}
