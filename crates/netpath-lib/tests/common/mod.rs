//! Shared fixtures for netpath-lib integration tests.

use std::path::PathBuf;

use netpath_lib::{build_graph, CanonicalGraph};

/// Path to the JSON fixtures directory.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Devices A-D with D feeding C.
#[allow(dead_code)]
pub fn graph_set_1() -> CanonicalGraph {
    build_graph(
        ["A", "B", "C", "D"],
        [
            ("A", "B", 24.0),
            ("A", "C", 3.0),
            ("A", "D", 20.0),
            ("D", "C", 12.0),
        ],
    )
    .expect("set 1 is valid")
}

/// Devices A-D with C feeding D, giving a cheaper detour to D.
#[allow(dead_code)]
pub fn graph_set_2() -> CanonicalGraph {
    build_graph(
        ["A", "B", "C", "D"],
        [
            ("A", "B", 24.0),
            ("A", "C", 3.0),
            ("A", "D", 20.0),
            ("C", "D", 12.0),
        ],
    )
    .expect("set 2 is valid")
}
