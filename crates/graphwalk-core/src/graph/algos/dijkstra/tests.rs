use super::*;
use crate::graph::types::GraphOptions;

/// A -> B (1), A -> D (7), B -> C (3), C -> D (4)
fn reference_graph() -> (Graph<&'static str>, [VertexId; 4]) {
    let mut graph = Graph::new(GraphOptions::new(true, true));
    let a = graph.add_vertex("A");
    let b = graph.add_vertex("B");
    let c = graph.add_vertex("C");
    let d = graph.add_vertex("D");
    graph.add_edge(a, b, 1.0).unwrap();
    graph.add_edge(a, d, 7.0).unwrap();
    graph.add_edge(b, c, 3.0).unwrap();
    graph.add_edge(c, d, 4.0).unwrap();
    (graph, [a, b, c, d])
}

#[test]
fn test_reference_distances_and_predecessors() {
    let (graph, [a, b, c, d]) = reference_graph();
    let paths = dijkstra(&graph, Some(a)).unwrap();

    assert_eq!(paths.start(), a);
    assert_eq!(paths.distance(a), Some(0.0));
    assert_eq!(paths.distance(b), Some(1.0));
    assert_eq!(paths.distance(c), Some(4.0));
    assert_eq!(paths.distance(d), Some(7.0));

    assert_eq!(paths.predecessor(a), None);
    assert_eq!(paths.predecessor(b), Some(a));
    assert_eq!(paths.predecessor(c), Some(b));
    assert_eq!(paths.predecessor(d), Some(a));
}

#[test]
fn test_default_start_is_first_vertex() {
    let (graph, [a, _, _, d]) = reference_graph();
    let paths = graph.dijkstra(None).unwrap();
    assert_eq!(paths.start(), a);
    assert_eq!(paths.distance(d), Some(7.0));
}

#[test]
fn test_path_reconstruction() {
    let (graph, [a, b, c, d]) = reference_graph();
    let paths = graph.dijkstra(Some(a)).unwrap();

    assert_eq!(paths.path_to(c), Some(vec![a, b, c]));
    assert_eq!(paths.path_to(d), Some(vec![a, d]));
    assert_eq!(paths.path_to(a), Some(vec![a]));
}

#[test]
fn test_shorter_detour_replaces_direct_edge() {
    let (mut graph, [a, b, c, d]) = reference_graph();
    graph.remove_edge(a, d).unwrap();
    graph.add_edge(a, d, 9.0).unwrap();

    let paths = graph.dijkstra(Some(a)).unwrap();
    assert_eq!(paths.distance(d), Some(8.0));
    assert_eq!(paths.predecessor(d), Some(c));
    assert_eq!(paths.path_to(d), Some(vec![a, b, c, d]));
}

#[test]
fn test_unreachable_vertex_keeps_infinity() {
    let (mut graph, [a, _, _, d]) = reference_graph();
    let island = graph.add_vertex("Z");

    let paths = graph.dijkstra(Some(a)).unwrap();
    assert_eq!(paths.distance(island), Some(f64::INFINITY));
    assert_eq!(paths.predecessor(island), None);
    assert!(!paths.is_reachable(island));
    assert_eq!(paths.path_to(island), None);

    // Directed edges are not walked backwards
    let from_d = graph.dijkstra(Some(d)).unwrap();
    assert!(!from_d.is_reachable(a));
    assert_eq!(from_d.reachable(), vec![(d, 0.0)]);
}

#[test]
fn test_unweighted_graph_counts_hops() {
    let mut graph = Graph::new(GraphOptions::new(false, false));
    let ids: Vec<VertexId> = (0..5).map(|i| graph.add_vertex(i)).collect();
    graph.add_edge(ids[0], ids[1], 10.0).unwrap();
    graph.add_edge(ids[1], ids[2], 10.0).unwrap();
    graph.add_edge(ids[2], ids[3], 10.0).unwrap();
    graph.add_edge(ids[0], ids[3], 10.0).unwrap();
    graph.add_edge(ids[3], ids[4], 10.0).unwrap();

    let paths = graph.dijkstra(Some(ids[4])).unwrap();
    assert_eq!(paths.distance(ids[4]), Some(0.0));
    assert_eq!(paths.distance(ids[3]), Some(1.0));
    assert_eq!(paths.distance(ids[0]), Some(2.0));
    assert_eq!(paths.distance(ids[2]), Some(2.0));
    assert_eq!(paths.distance(ids[1]), Some(3.0));
}

#[test]
fn test_stale_entries_do_not_override_better_distance() {
    // B is first queued at 10 via the direct edge, then improved to 2 via C
    let mut graph = Graph::new(GraphOptions::new(true, true));
    let a = graph.add_vertex('a');
    let b = graph.add_vertex('b');
    let c = graph.add_vertex('c');
    let e = graph.add_vertex('e');
    graph.add_edge(a, b, 10.0).unwrap();
    graph.add_edge(a, c, 1.0).unwrap();
    graph.add_edge(c, b, 1.0).unwrap();
    graph.add_edge(b, e, 1.0).unwrap();

    let paths = graph.dijkstra(Some(a)).unwrap();
    assert_eq!(paths.distance(b), Some(2.0));
    assert_eq!(paths.predecessor(b), Some(c));
    assert_eq!(paths.distance(e), Some(3.0));
    assert_eq!(paths.path_to(e), Some(vec![a, c, b, e]));
}

#[test]
fn test_zero_weight_edges() {
    let mut graph = Graph::new(GraphOptions::new(true, false));
    let a = graph.add_vertex("a");
    let b = graph.add_vertex("b");
    let c = graph.add_vertex("c");
    graph.add_edge(a, b, 0.0).unwrap();
    graph.add_edge(b, c, 0.0).unwrap();

    let paths = graph.dijkstra(Some(c)).unwrap();
    assert_eq!(paths.distance(a), Some(0.0));
    assert_eq!(paths.path_to(a), Some(vec![c, b, a]));
}

#[test]
fn test_empty_graph_has_no_start() {
    let graph: Graph<u8> = Graph::default();
    let err = graph.dijkstra(None).unwrap_err();
    assert!(matches!(err, GraphError::NotFound { .. }));
}

#[test]
fn test_foreign_start_rejected() {
    let (graph, _) = reference_graph();
    let mut other = Graph::default();
    let stranger = other.add_vertex("A");
    assert!(matches!(
        graph.dijkstra(Some(stranger)),
        Err(GraphError::ForeignVertex { .. })
    ));
}

#[test]
fn test_reachable_sorted_by_distance() {
    let (graph, [a, b, c, d]) = reference_graph();
    let paths = graph.dijkstra(Some(a)).unwrap();
    assert_eq!(
        paths.reachable(),
        vec![(a, 0.0), (b, 1.0), (c, 4.0), (d, 7.0)]
    );
}

#[test]
fn test_huge_weights_saturate_instead_of_overflowing() {
    let mut graph = Graph::new(GraphOptions::new(true, true));
    let a = graph.add_vertex("A");
    let b = graph.add_vertex("B");
    let c = graph.add_vertex("C");
    graph.add_edge(a, b, f64::MAX).unwrap();
    graph.add_edge(b, c, f64::MAX).unwrap();

    let paths = graph.dijkstra(Some(a)).unwrap();
    assert_eq!(paths.distance(b), Some(f64::MAX));
    assert_eq!(paths.distance(c), Some(f64::MAX));
    assert!(paths.is_reachable(c));
    assert_eq!(paths.predecessor(c), Some(b));
    assert_eq!(paths.path_to(c), Some(vec![a, b, c]));
}
