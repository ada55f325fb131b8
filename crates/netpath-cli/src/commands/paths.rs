//! Paths command handler: shortest paths from one source device.

use anyhow::{Context, Result};

use netpath_lib::{render_paths, CanonicalGraph, OutputFormat, PathFinder};

/// Handle the paths subcommand.
pub fn handle_paths(graph: &CanonicalGraph, source: &str, format: OutputFormat) -> Result<()> {
    print!("{}", render(graph, source, format)?);
    Ok(())
}

fn render(graph: &CanonicalGraph, source: &str, format: OutputFormat) -> Result<String> {
    let paths = PathFinder::new(graph)
        .shortest_paths(source)
        .with_context(|| format!("cannot compute paths from {source}"))?;
    let mut rendered = render_paths(&paths, format)?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use netpath_lib::build_graph;

    #[test]
    fn unknown_source_is_an_error() {
        let graph = build_graph(["A"], [("A", "B", 1.0)]).unwrap();
        let err = render(&graph, "Z", OutputFormat::Json).unwrap_err();
        assert!(format!("{err:#}").contains("unknown source device: Z"));
    }

    #[test]
    fn json_output_ends_with_newline() {
        let graph = build_graph(["A"], [("A", "B", 1.0)]).unwrap();
        let rendered = render(&graph, "A", OutputFormat::Json).unwrap();
        assert!(rendered.ends_with("}\n"));
    }
}
