use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::ValidationError;
use crate::graph::CanonicalGraph;

/// Distance reported for devices the source cannot reach.
///
/// This is a fixed value rather than floating-point infinity; consumers
/// compare against it directly. Relaxation only ever lowers a distance below
/// it, so a device whose best path costs `INF` or more is reported as
/// unreachable.
pub const INF: f64 = 100_000.0;

/// Parent reported for the source and for unreachable devices.
pub const NULL: &str = "NULL";

/// Per-device outcome of a shortest-path computation.
#[derive(Debug, Clone, PartialEq)]
pub struct PathEntry {
    pub device: String,
    pub cost: f64,
    pub parent: Option<String>,
}

/// Distances and predecessor links from a single source, one entry per
/// device in canonical order.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: String,
    entries: Vec<PathEntry>,
}

impl ShortestPaths {
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Entries in canonical device order.
    pub fn entries(&self) -> &[PathEntry] {
        &self.entries
    }

    fn entry(&self, device: &str) -> Option<&PathEntry> {
        self.entries.iter().find(|entry| entry.device == device)
    }

    /// Distance from the source, [`INF`] when unreachable.
    pub fn cost(&self, device: &str) -> Option<f64> {
        self.entry(device).map(|entry| entry.cost)
    }

    /// Parent as reported on the wire: the predecessor name or [`NULL`].
    pub fn parent(&self, device: &str) -> Option<&str> {
        self.entry(device)
            .map(|entry| entry.parent.as_deref().unwrap_or(NULL))
    }

    /// Predecessor on the shortest path, `None` for the source, for
    /// unreachable devices and for unknown names.
    pub fn predecessor(&self, device: &str) -> Option<&str> {
        self.entry(device).and_then(|entry| entry.parent.as_deref())
    }

    pub fn is_reachable(&self, device: &str) -> bool {
        self.cost(device).is_some_and(|cost| cost < INF)
    }

    /// Devices from the source to `target` following parent links, or
    /// `None` when `target` is unknown or unreachable.
    pub fn path_to(&self, target: &str) -> Option<Vec<&str>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = self.entry(target)?;
        loop {
            path.push(current.device.as_str());
            match current.parent.as_deref() {
                Some(parent) => current = self.entry(parent)?,
                None => break,
            }
        }
        path.reverse();
        Some(path)
    }
}

/// Single-source shortest-path engine over a [`CanonicalGraph`].
///
/// Only the stored direction of each edge is traversed.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'a> {
    graph: &'a CanonicalGraph,
}

impl<'a> PathFinder<'a> {
    pub fn new(graph: &'a CanonicalGraph) -> Self {
        Self { graph }
    }

    /// Devices reachable over one stored edge from `device`, in canonical order.
    pub fn neighbors(&self, device: &str) -> Result<Vec<&'a str>, ValidationError> {
        let position = self.position_of(device)?;
        let devices = self.graph.devices();
        Ok(self
            .graph
            .neighbours(position)
            .iter()
            .map(|neighbour| devices[neighbour.target].name.as_str())
            .collect())
    }

    /// Run Dijkstra's algorithm from `source` over every device.
    ///
    /// Among unsettled devices at equal distance, the one earliest in
    /// canonical order is settled first, so parent links are deterministic.
    pub fn shortest_paths(&self, source: &str) -> Result<ShortestPaths, ValidationError> {
        let start = self.position_of(source)?;
        let devices = self.graph.devices();

        let mut distances = vec![INF; devices.len()];
        let mut parents: Vec<Option<usize>> = vec![None; devices.len()];
        let mut settled = vec![false; devices.len()];
        let mut queue = BinaryHeap::new();

        distances[start] = 0.0;
        queue.push(QueueEntry::new(start, 0.0));

        while let Some(entry) = queue.pop() {
            let current = entry.node;
            if settled[current] {
                continue;
            }
            settled[current] = true;

            for neighbour in self.graph.neighbours(current) {
                let next = neighbour.target;
                if settled[next] {
                    continue;
                }

                let candidate = distances[current] + neighbour.cost;
                if candidate < distances[next] {
                    distances[next] = candidate;
                    parents[next] = Some(current);
                    queue.push(QueueEntry::new(next, candidate));
                }
            }
        }

        let entries = devices
            .iter()
            .zip(distances)
            .zip(parents)
            .map(|((device, cost), parent)| PathEntry {
                device: device.name.clone(),
                cost,
                parent: parent.map(|index| devices[index].name.clone()),
            })
            .collect();

        Ok(ShortestPaths {
            source: source.to_string(),
            entries,
        })
    }

    fn position_of(&self, name: &str) -> Result<usize, ValidationError> {
        self.graph
            .position(name)
            .ok_or_else(|| ValidationError::UnknownSource {
                name: name.to_string(),
            })
    }
}

/// Shortest paths from `source`; see [`PathFinder::shortest_paths`].
pub fn shortest_paths(
    graph: &CanonicalGraph,
    source: &str,
) -> Result<ShortestPaths, ValidationError> {
    PathFinder::new(graph).shortest_paths(source)
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: usize,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: usize, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then by
        // canonical position.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
