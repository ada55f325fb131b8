//! Listing handlers for canonical devices and connections.

use std::fmt::Write;

use anyhow::Result;

use netpath_lib::output::format_cost;
use netpath_lib::{CanonicalGraph, OutputFormat};

/// Handle the devices subcommand.
pub fn handle_devices(graph: &CanonicalGraph, format: OutputFormat) -> Result<()> {
    print!("{}", render_devices(graph, format)?);
    Ok(())
}

/// Handle the connections subcommand.
pub fn handle_connections(graph: &CanonicalGraph, format: OutputFormat) -> Result<()> {
    print!("{}", render_connections(graph, format)?);
    Ok(())
}

fn render_devices(graph: &CanonicalGraph, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(graph.devices())? + "\n"),
        OutputFormat::Text => {
            let mut buffer = String::new();
            let _ = writeln!(buffer, "Devices ({}):", graph.devices().len());
            for device in graph.devices() {
                match device.id {
                    Some(id) => {
                        let _ = writeln!(buffer, "- {} (id {})", device.name, id);
                    }
                    None => {
                        let _ = writeln!(buffer, "- {}", device.name);
                    }
                }
            }
            Ok(buffer)
        }
    }
}

fn render_connections(graph: &CanonicalGraph, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(graph.edges())? + "\n"),
        OutputFormat::Text => {
            let mut buffer = String::new();
            let _ = writeln!(buffer, "Connections ({}):", graph.edges().len());
            for edge in graph.edges() {
                let _ = writeln!(
                    buffer,
                    "- {} -> {} (cost {})",
                    edge.src,
                    edge.dst,
                    format_cost(edge.cost)
                );
            }
            Ok(buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netpath_lib::{build_graph, Device};

    #[test]
    fn devices_text_shows_ids_when_known() {
        let graph = build_graph([Device::with_id("A", 1)], [("A", "B", 2.0)]).unwrap();
        let text = render_devices(&graph, OutputFormat::Text).unwrap();
        assert!(text.contains("- A (id 1)"));
        assert!(text.contains("- B\n"));
    }

    #[test]
    fn devices_json_omits_missing_ids() {
        let graph = build_graph(["A"], Vec::<netpath_lib::Edge>::new()).unwrap();
        let json = render_devices(&graph, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, serde_json::json!([{"name": "A"}]));
    }

    #[test]
    fn connections_text_lists_declared_direction() {
        let graph = build_graph(["A", "B"], [("B", "A", 2.5)]).unwrap();
        let text = render_connections(&graph, OutputFormat::Text).unwrap();
        assert!(text.contains("- B -> A (cost 2.5)"));
    }
}
