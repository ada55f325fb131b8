mod common;

use std::fs;

use common::fixtures_dir;
use netpath_lib::{shortest_paths, Error, Snapshot, ValidationError};
use tempfile::TempDir;

#[test]
fn tuple_fixture_builds_graph() {
    let snapshot = Snapshot::from_path(&fixtures_dir().join("network_set_1.json")).unwrap();
    let graph = snapshot.build_graph().unwrap();

    assert_eq!(graph.devices().len(), 4);
    assert_eq!(graph.cost("D", "C"), Some(12.0));
}

#[test]
fn record_fixture_keeps_ids_and_routes() {
    let snapshot = Snapshot::from_path(&fixtures_dir().join("network_set_2.json")).unwrap();
    let graph = snapshot.build_graph().unwrap();

    assert_eq!(graph.device("C").and_then(|d| d.id), Some(3));
    let paths = shortest_paths(&graph, "A").unwrap();
    assert_eq!(paths.cost("D"), Some(15.0));
}

#[test]
fn undeclared_endpoint_fixture_extends_devices() {
    let snapshot =
        Snapshot::from_path(&fixtures_dir().join("undeclared_endpoint.json")).unwrap();
    let graph = snapshot.build_graph().unwrap();
    assert_eq!(graph.synthesized().len(), 1);
    assert!(graph.contains("C"));
}

#[test]
fn bidirectional_fixture_rejected() {
    let snapshot = Snapshot::from_path(&fixtures_dir().join("bidirectional.json")).unwrap();
    let err = snapshot.build_graph().unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::BidirectionalEdge { .. })
    ));
}

#[test]
fn missing_file_reports_path() {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("absent.json");
    let err = Snapshot::from_path(&path).unwrap_err();

    assert!(matches!(err, Error::SnapshotRead { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn file_written_at_runtime_loads() {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("snapshot.json");
    fs::write(
        &path,
        r#"{"devices": ["core"], "connections": [{"src": "core", "dst": "edge-1", "cost": 0.5}]}"#,
    )
    .expect("write snapshot");

    let graph = Snapshot::from_path(&path).unwrap().build_graph().unwrap();
    assert_eq!(graph.cost("core", "edge-1"), Some(0.5));
}
