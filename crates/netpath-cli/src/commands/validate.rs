//! Validate command handler: report the shape of a valid snapshot.

use anyhow::Result;

use netpath_lib::{CanonicalGraph, GraphSummary, OutputFormat};

/// Handle the validate subcommand.
///
/// Invalid snapshots never reach this point; loading the graph already
/// reports the first violation.
pub fn handle_validate(graph: &CanonicalGraph, format: OutputFormat) -> Result<()> {
    let summary = GraphSummary::from_graph(graph);
    println!("{}", summary.render(format)?.trim_end());
    Ok(())
}
