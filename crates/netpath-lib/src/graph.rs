use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ValidationError;
use crate::model::{Device, DeviceLike, Edge, EdgeLike};

/// Outgoing edge stored against its source device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbour {
    /// Canonical position of the target device.
    pub target: usize,
    pub cost: f64,
}

#[derive(Debug)]
struct GraphData {
    devices: Vec<Device>,
    positions: HashMap<String, usize>,
    edges: Vec<Edge>,
    /// Outgoing edges per device position, sorted by target position.
    adjacency: Vec<Vec<Neighbour>>,
    declared: usize,
}

/// Validated, immutable device graph.
///
/// Devices keep their declaration order, followed by any devices synthesized
/// from edge endpoints. Cloning is cheap; clones share storage.
#[derive(Debug, Clone)]
pub struct CanonicalGraph {
    data: Arc<GraphData>,
}

impl CanonicalGraph {
    /// Devices in canonical order.
    pub fn devices(&self) -> &[Device] {
        &self.data.devices
    }

    /// Lookup a device by its case-sensitive name.
    pub fn device(&self, name: &str) -> Option<&Device> {
        self.position(name).map(|index| &self.data.devices[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.data.positions.contains_key(name)
    }

    /// Canonical position of a device, if it is part of the graph.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.data.positions.get(name).copied()
    }

    /// Unique edges in the order they were first declared.
    pub fn edges(&self) -> &[Edge] {
        &self.data.edges
    }

    /// Cost of the stored edge `src -> dst`. The reverse direction is not
    /// consulted.
    pub fn cost(&self, src: &str, dst: &str) -> Option<f64> {
        let from = self.position(src)?;
        let to = self.position(dst)?;
        self.data.adjacency[from]
            .iter()
            .find(|neighbour| neighbour.target == to)
            .map(|neighbour| neighbour.cost)
    }

    /// Number of devices that were declared explicitly (after deduplication).
    pub fn declared_len(&self) -> usize {
        self.data.declared
    }

    /// Devices added because an edge referenced them without a declaration.
    pub fn synthesized(&self) -> &[Device] {
        &self.data.devices[self.data.declared..]
    }

    /// Outgoing edges of the device at `position`, in canonical target order.
    pub fn neighbours(&self, position: usize) -> &[Neighbour] {
        self.data
            .adjacency
            .get(position)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Collects raw device and connection declarations and validates them into a
/// [`CanonicalGraph`].
#[derive(Debug, Default, Clone)]
pub struct GraphBuilder {
    devices: Vec<DeviceLike>,
    connections: Vec<EdgeLike>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_device(&mut self, device: impl Into<DeviceLike>) -> &mut Self {
        self.devices.push(device.into());
        self
    }

    pub fn add_connection(&mut self, connection: impl Into<EdgeLike>) -> &mut Self {
        self.connections.push(connection.into());
        self
    }

    pub fn extend_devices<I>(&mut self, devices: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<DeviceLike>,
    {
        self.devices.extend(devices.into_iter().map(Into::into));
        self
    }

    pub fn extend_connections<I>(&mut self, connections: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<EdgeLike>,
    {
        self.connections
            .extend(connections.into_iter().map(Into::into));
        self
    }

    /// Validate the collected declarations and freeze them into a graph.
    ///
    /// Devices are coerced first, then every connection is coerced (negative
    /// cost and self-loop checks fire here), then pairs are checked for
    /// conflicts and reversals, and finally undeclared endpoints are appended
    /// to the device list.
    pub fn build(self) -> Result<CanonicalGraph, ValidationError> {
        let declared = self
            .devices
            .into_iter()
            .map(DeviceLike::into_device)
            .collect::<Result<Vec<_>, _>>()?;
        let coerced = self
            .connections
            .into_iter()
            .map(EdgeLike::into_edge)
            .collect::<Result<Vec<_>, _>>()?;
        let edges = unique_edges(coerced)?;

        let mut devices = Vec::with_capacity(declared.len());
        let mut positions = HashMap::with_capacity(declared.len());
        for device in declared {
            if !positions.contains_key(&device.name) {
                positions.insert(device.name.clone(), devices.len());
                devices.push(device);
            }
        }
        let declared = devices.len();

        for edge in &edges {
            for name in [&edge.src, &edge.dst] {
                if !positions.contains_key(name) {
                    positions.insert(name.clone(), devices.len());
                    devices.push(Device::new(name.clone()));
                }
            }
        }

        let mut adjacency = vec![Vec::new(); devices.len()];
        for edge in &edges {
            adjacency[positions[&edge.src]].push(Neighbour {
                target: positions[&edge.dst],
                cost: edge.cost,
            });
        }
        for list in &mut adjacency {
            list.sort_by_key(|neighbour: &Neighbour| neighbour.target);
        }

        Ok(CanonicalGraph {
            data: Arc::new(GraphData {
                devices,
                positions,
                edges,
                adjacency,
                declared,
            }),
        })
    }
}

/// Build a graph from device and connection declarations in one call.
pub fn build_graph<D, C>(devices: D, connections: C) -> Result<CanonicalGraph, ValidationError>
where
    D: IntoIterator,
    D::Item: Into<DeviceLike>,
    C: IntoIterator,
    C::Item: Into<EdgeLike>,
{
    let mut builder = GraphBuilder::new();
    builder.extend_devices(devices).extend_connections(connections);
    builder.build()
}

/// Drop idempotent re-declarations and reject conflicting or reversed pairs.
fn unique_edges(edges: Vec<Edge>) -> Result<Vec<Edge>, ValidationError> {
    let mut seen: HashMap<(String, String), f64> = HashMap::with_capacity(edges.len());
    let mut unique = Vec::with_capacity(edges.len());

    for edge in edges {
        let key = (edge.src.clone(), edge.dst.clone());
        let is_new = match seen.get(&key) {
            None => true,
            Some(&existing) if existing == edge.cost => false,
            Some(&existing) => {
                return Err(ValidationError::ConflictingEdge {
                    src: edge.src,
                    dst: edge.dst,
                    existing,
                    conflicting: edge.cost,
                });
            }
        };
        if is_new {
            seen.insert(key, edge.cost);
        }

        if seen.contains_key(&(edge.dst.clone(), edge.src.clone())) {
            return Err(ValidationError::BidirectionalEdge { edge });
        }

        if is_new {
            unique.push(edge);
        }
    }

    Ok(unique)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_devices_keep_first_declaration() {
        let graph = build_graph(
            [Device::with_id("A", 1), Device::with_id("B", 2), Device::with_id("A", 3)],
            Vec::<EdgeLike>::new(),
        )
        .unwrap();

        assert_eq!(graph.devices().len(), 2);
        assert_eq!(graph.device("A").and_then(|d| d.id), Some(1));
        assert_eq!(graph.declared_len(), 2);
    }

    #[test]
    fn adjacency_sorted_by_canonical_position() {
        let graph = build_graph(
            ["A", "B", "C", "D"],
            [("A", "D", 1.0), ("A", "B", 2.0), ("A", "C", 3.0)],
        )
        .unwrap();

        let targets: Vec<_> = graph.neighbours(0).iter().map(|n| n.target).collect();
        assert_eq!(targets, vec![1, 2, 3]);
        assert!(graph.neighbours(99).is_empty());
    }

    #[test]
    fn cost_is_directional() {
        let graph = build_graph(["A", "B"], [("A", "B", 4.5)]).unwrap();
        assert_eq!(graph.cost("A", "B"), Some(4.5));
        assert_eq!(graph.cost("B", "A"), None);
        assert_eq!(graph.cost("A", "Z"), None);
    }

    #[test]
    fn reverse_check_fires_before_forward_key_exists() {
        let err = unique_edges(vec![Edge::new("A", "B", 1.0), Edge::new("B", "A", 1.0)])
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::BidirectionalEdge {
                edge: Edge::new("B", "A", 1.0)
            }
        );
    }

    #[test]
    fn coercion_errors_win_over_pair_errors() {
        let err = build_graph(
            ["A", "B"],
            [("A", "B", 3.0), ("A", "B", 9.0), ("C", "C", 1.0)],
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::SelfLoop { .. }));
    }

    #[test]
    fn device_errors_reported_before_edge_errors() {
        let err = build_graph([""], [("A", "A", 1.0)]).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidName { .. }));
    }

    #[test]
    fn clones_share_storage() {
        let graph = build_graph(["A"], [("A", "B", 1.0)]).unwrap();
        let clone = graph.clone();
        assert!(Arc::ptr_eq(&graph.data, &clone.data));
    }
}
