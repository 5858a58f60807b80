//! End-to-end articulation point scenarios through the public API

use cutvertex::*;
use std::collections::BTreeSet;
use std::io::Write;

fn graph(n: usize, edges: &[(u64, u64)]) -> GraphStore {
    let mut store = GraphStore::new();
    for _ in 0..n {
        store.add_node();
    }
    for &(a, b) in edges {
        store.add_edge(NodeId::new(a), NodeId::new(b)).unwrap();
    }
    store
}

fn ids(raw: &[u64]) -> BTreeSet<NodeId> {
    raw.iter().copied().map(NodeId::new).collect()
}

#[test]
fn test_reference_scenarios() {
    let cases: Vec<(usize, Vec<(u64, u64)>, Vec<u64>)> = vec![
        // path
        (3, vec![(0, 1), (1, 2)], vec![1]),
        // triangle
        (3, vec![(0, 1), (1, 2), (2, 0)], vec![]),
        // star
        (4, vec![(0, 1), (0, 2), (0, 3)], vec![0]),
        // two disjoint edges
        (4, vec![(0, 1), (2, 3)], vec![]),
        // bridge between two triangles
        (6, vec![(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (2, 3)], vec![2, 3]),
    ];

    for (n, edges, expected) in cases {
        let store = graph(n, &edges);
        assert_eq!(find_articulation_points(&store), ids(&expected), "edges {:?}", edges);
    }
}

#[test]
fn test_analysis_is_idempotent() {
    let store = graph(7, &[(0, 1), (1, 2), (2, 3), (3, 1), (3, 4), (5, 6)]);

    let first = find_articulation_points(&store);
    let second = find_articulation_points(&store);
    assert_eq!(first, second);
    assert_eq!(first, ids(&[1, 3]));
}

#[test]
fn test_clear_resets_store_and_analysis() {
    let mut store = graph(3, &[(0, 1), (1, 2)]);
    assert!(!find_articulation_points(&store).is_empty());

    store.clear();
    assert_eq!(store.node_count(), 0);
    assert_eq!(store.edge_count(), 0);
    assert!(find_articulation_points(&store).is_empty());
}

#[test]
fn test_deep_path_does_not_exhaust_stack() {
    let n = 100_000u64;
    let mut store = GraphStore::new();
    for _ in 0..n {
        store.add_node();
    }
    for i in 0..n - 1 {
        store.add_edge(NodeId::new(i), NodeId::new(i + 1)).unwrap();
    }

    let points = find_articulation_points(&store);
    assert_eq!(points.len(), (n - 2) as usize);
    assert!(!points.contains(&NodeId::new(0)));
    assert!(!points.contains(&NodeId::new(n - 1)));
}

#[test]
fn test_script_file_through_session() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# star with a self-loop attempt").unwrap();
    writeln!(file, "node 100 100").unwrap();
    writeln!(file, "node 200 100").unwrap();
    writeln!(file, "node 100 200").unwrap();
    writeln!(file, "node 0 100").unwrap();
    writeln!(file, "edge 0 1").unwrap();
    writeln!(file, "edge 0 2").unwrap();
    writeln!(file, "edge 0 3").unwrap();
    writeln!(file, "edge 3 3").unwrap();
    writeln!(file, "edge 0 9").unwrap();
    writeln!(file, "analyze").unwrap();
    file.flush().unwrap();

    let mut session = Session::new(SessionConfig::default());
    let report = run_script_file(&mut session, file.path()).unwrap();

    let messages: Vec<&str> = report.rejected.iter().map(|r| r.message.as_str()).collect();
    assert_eq!(messages, vec!["Self-loop on node 3 is not allowed", "Node 9 not found"]);

    let analysis = report.last_analysis().unwrap();
    assert_eq!(analysis.points, vec![NodeId::new(0)]);
    assert_eq!(analysis.edge_count, 3);
    assert_eq!(session.node_at(102.0, 98.0), Some(NodeId::new(0)));
}

#[test]
fn test_interactive_edge_creation_then_analysis() {
    let mut session = Session::new(SessionConfig::default());
    let a = session.place_node(50.0, 50.0).unwrap();
    let b = session.place_node(150.0, 50.0).unwrap();
    let c = session.place_node(250.0, 50.0).unwrap();

    for (from, to) in [(a, b), (b, c)] {
        session.begin_edge().unwrap();
        let first = session.node_at(session.position(from).unwrap().x, 50.0).unwrap();
        let second = session.node_at(session.position(to).unwrap().x, 50.0).unwrap();
        session.select(first).unwrap();
        assert_eq!(session.select(second).unwrap(), Selection::Connected(from, to));
    }

    let report = session.analyze();
    assert_eq!(report.points, vec![b]);
    assert!(report.is_articulation_point(b));
    assert!(!report.is_articulation_point(a));
}
