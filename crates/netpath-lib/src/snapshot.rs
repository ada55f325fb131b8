//! Plain device and connection lists handed over by the persistence layer.
//!
//! A snapshot is a JSON document of the form
//!
//! ```json
//! {
//!   "devices": ["A", {"name": "B", "id": 2}],
//!   "connections": [["A", "B", 3], {"src": "B", "dst": "C", "cost": 1.5}]
//! }
//! ```
//!
//! Both lists may be omitted and default to empty.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{CanonicalGraph, GraphBuilder};
use crate::model::{DeviceLike, EdgeLike};

/// Raw, unvalidated devices and connections.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub devices: Vec<DeviceLike>,
    #[serde(default)]
    pub connections: Vec<EdgeLike>,
}

impl Snapshot {
    /// Decode a snapshot from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and decode a snapshot file.
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading snapshot");
        let contents = fs::read_to_string(path).map_err(|source| Error::SnapshotRead {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::from_json_str(&contents)?;
        debug!(
            devices = snapshot.devices.len(),
            connections = snapshot.connections.len(),
            "decoded snapshot"
        );
        Ok(snapshot)
    }

    /// Validate the snapshot into a graph.
    pub fn build_graph(&self) -> Result<CanonicalGraph> {
        let mut builder = GraphBuilder::new();
        builder
            .extend_devices(self.devices.iter().cloned())
            .extend_connections(self.connections.iter().cloned());
        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn missing_lists_default_to_empty() {
        let snapshot = Snapshot::from_json_str("{}").unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }

    #[test]
    fn invalid_graph_surfaces_validation_error() {
        let snapshot =
            Snapshot::from_json_str(r#"{"devices": ["A"], "connections": [["A", "A", 1]]}"#)
                .unwrap();
        let err = snapshot.build_graph().unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::SelfLoop { .. })
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = Snapshot::from_json_str(r#"{"devices": [1]}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
