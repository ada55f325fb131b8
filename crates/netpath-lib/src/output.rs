use std::fmt::{self, Write};
use std::str::FromStr;

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::error::Result;
use crate::graph::CanonicalGraph;
use crate::path::{PathEntry, ShortestPaths, NULL};

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Presentation format for command output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Machine-readable JSON.
    #[default]
    Json,
    /// Aligned plain-text table.
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" | "plain" => Ok(OutputFormat::Text),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
        };
        f.write_str(value)
    }
}

/// Serializes as `{"Cost": {..}, "Parent": {..}}`, keys in canonical device
/// order.
impl Serialize for ShortestPaths {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ShortestPaths", 2)?;
        state.serialize_field("Cost", &CostMap(self.entries()))?;
        state.serialize_field("Parent", &ParentMap(self.entries()))?;
        state.end()
    }
}

struct CostMap<'a>(&'a [PathEntry]);

impl Serialize for CostMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.0
                .iter()
                .map(|entry| (entry.device.as_str(), Cost(entry.cost))),
        )
    }
}

struct ParentMap<'a>(&'a [PathEntry]);

impl Serialize for ParentMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|entry| {
            (
                entry.device.as_str(),
                entry.parent.as_deref().unwrap_or(NULL),
            )
        }))
    }
}

/// Whole-valued costs are written as integers so the sentinel stays `100000`.
struct Cost(f64);

impl Serialize for Cost {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 && self.0.abs() <= MAX_EXACT_INTEGER {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

/// Format a cost the same way it is serialized.
pub fn format_cost(cost: f64) -> String {
    if cost.fract() == 0.0 && cost.abs() <= MAX_EXACT_INTEGER {
        format!("{}", cost as i64)
    } else {
        format!("{cost}")
    }
}

/// Render shortest-path results.
pub fn render_paths(paths: &ShortestPaths, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(paths)?),
        OutputFormat::Text => Ok(render_paths_text(paths)),
    }
}

fn render_paths_text(paths: &ShortestPaths) -> String {
    let width = paths
        .entries()
        .iter()
        .map(|entry| entry.device.chars().count())
        .max()
        .unwrap_or(0)
        .max("Device".len());

    let mut buffer = String::new();
    let _ = writeln!(buffer, "Shortest paths from {}", paths.source());
    let _ = writeln!(buffer, "{:<width$}  {:>10}  Parent", "Device", "Cost");
    for entry in paths.entries() {
        let cost = if paths.is_reachable(&entry.device) {
            format_cost(entry.cost)
        } else {
            "unreachable".to_string()
        };
        let _ = writeln!(
            buffer,
            "{:<width$}  {:>10}  {}",
            entry.device,
            cost,
            entry.parent.as_deref().unwrap_or(NULL)
        );
    }
    buffer
}

/// Shape of a validated graph, reported after a successful build.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GraphSummary {
    pub devices: usize,
    pub declared: usize,
    pub edges: usize,
    pub synthesized: Vec<String>,
}

impl GraphSummary {
    pub fn from_graph(graph: &CanonicalGraph) -> Self {
        Self {
            devices: graph.devices().len(),
            declared: graph.declared_len(),
            edges: graph.edges().len(),
            synthesized: graph
                .synthesized()
                .iter()
                .map(|device| device.name.clone())
                .collect(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => {
                let mut buffer = String::new();
                let _ = writeln!(
                    buffer,
                    "Graph is valid: {} devices ({} declared), {} edges",
                    self.devices, self.declared, self.edges
                );
                if !self.synthesized.is_empty() {
                    let _ = writeln!(buffer, "Added from edges: {}", self.synthesized.join(", "));
                }
                Ok(buffer)
            }
        }
    }
}

/// Forward neighbours of a single device.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NeighborList {
    pub device: String,
    pub neighbors: Vec<String>,
}

impl NeighborList {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => {
                let mut buffer = String::new();
                let _ = writeln!(buffer, "Neighbors of {}:", self.device);
                for neighbor in &self.neighbors {
                    let _ = writeln!(buffer, "- {neighbor}");
                }
                Ok(buffer)
            }
        }
    }
}
