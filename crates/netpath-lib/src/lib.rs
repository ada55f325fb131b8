//! netpath library entry points.
//!
//! This crate validates device/connection snapshots into an immutable graph
//! and computes single-source shortest paths over it. Higher-level consumers
//! (the CLI, or a service fronting a database) should only depend on the
//! functions exported here instead of reimplementing behavior.
//!
//! # Example
//!
//! ```
//! use netpath_lib::{build_graph, shortest_paths, INF};
//!
//! let graph = build_graph(
//!     ["A", "B", "C", "D"],
//!     [("A", "B", 24.0), ("A", "C", 3.0), ("A", "D", 20.0), ("C", "D", 12.0)],
//! )?;
//! let paths = shortest_paths(&graph, "A")?;
//!
//! assert_eq!(paths.cost("D"), Some(15.0));
//! assert_eq!(paths.parent("D"), Some("C"));
//!
//! let from_b = shortest_paths(&graph, "B")?;
//! assert_eq!(from_b.cost("A"), Some(INF));
//! # Ok::<(), netpath_lib::ValidationError>(())
//! ```

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod model;
pub mod output;
pub mod path;
pub mod snapshot;

pub use error::{Error, Result, ValidationError};
pub use graph::{build_graph, CanonicalGraph, GraphBuilder, Neighbour};
pub use model::{Device, DeviceLike, Edge, EdgeLike, MAX_NAME_LEN};
pub use output::{render_paths, GraphSummary, NeighborList, OutputFormat};
pub use path::{shortest_paths, PathEntry, PathFinder, ShortestPaths, INF, NULL};
pub use snapshot::Snapshot;
