use std::path::PathBuf;

use thiserror::Error;

use crate::model::{Edge, MAX_NAME_LEN};

/// Convenient result alias for the netpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Rejections raised while building a graph or starting a path computation.
///
/// None of these are transient: the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// An edge carries a cost below zero (or a cost that is not a number).
    #[error("edge cost must be non-negative: {edge}")]
    NegativeCost { edge: Edge },

    /// An edge starts and ends at the same device.
    #[error("self-loop edges are not allowed: {edge}")]
    SelfLoop { edge: Edge },

    /// The same ordered pair was declared again with a different cost.
    #[error("edge {src} -> {dst} was already declared with cost {existing}, got {conflicting}")]
    ConflictingEdge {
        src: String,
        dst: String,
        existing: f64,
        conflicting: f64,
    },

    /// The reverse of an already declared pair was declared.
    #[error("edge cannot be bidirectional: {edge}")]
    BidirectionalEdge { edge: Edge },

    /// The requested source device is not part of the graph.
    #[error("unknown source device: {name}")]
    UnknownSource { name: String },

    /// A device or edge endpoint name is empty or too long.
    #[error("invalid device name {name:?}: must be 1 to {max} characters", max = MAX_NAME_LEN)]
    InvalidName { name: String },
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when graph input or a path query is rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Raised when a snapshot file could not be read.
    #[error("failed to read snapshot from {path}")]
    SnapshotRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for JSON decoding errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
