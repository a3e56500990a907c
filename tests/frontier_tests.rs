use hopgraph::{frontier, Direction, IdSet, MemoryGraph, VertexId, NO_LIMIT};

fn v(id: i64) -> VertexId {
    VertexId(id)
}

fn build_graph(vertex_count: i64, edges: &[(i64, i64)]) -> MemoryGraph {
    let mut graph = MemoryGraph::new();
    let person = graph.define_vertex_label("person");
    let link = graph.define_edge_label("link");
    for _ in 0..vertex_count {
        graph.add_vertex(person).expect("vertex");
    }
    for &(from, to) in edges {
        graph.add_edge(v(from), v(to), link).expect("edge");
    }
    graph
}

#[test]
fn test_id_set_keeps_first_insertion_order() {
    let mut set = IdSet::new();
    assert!(set.insert(v(3)));
    assert!(set.insert(v(1)));
    assert!(!set.insert(v(3)));
    assert!(set.insert(v(2)));
    assert_eq!(set.to_vec(), vec![v(3), v(1), v(2)]);
    assert_eq!(set.len(), 3);
    assert!(set.contains(v(1)));
    assert!(!set.contains(v(4)));
}

#[test]
fn test_id_set_extend_skips_duplicates() {
    let mut left: IdSet = [v(1), v(2)].into_iter().collect();
    let right: IdSet = [v(2), v(3)].into_iter().collect();
    left.extend(&right);
    assert_eq!(left.to_vec(), vec![v(1), v(2), v(3)]);
}

#[test]
fn test_expand_zero_residual_returns_empty() {
    let graph = build_graph(3, &[(1, 2), (1, 3)]);
    let frontier = IdSet::singleton(v(1));
    let result = frontier::expand(&graph, &frontier, Direction::Out, None, None, 10, 0)
        .expect("expand");
    assert!(result.is_empty());
}

#[test]
fn test_expand_short_circuits_at_residual() {
    let graph = build_graph(5, &[(1, 2), (1, 3), (1, 4), (1, 5)]);
    let frontier = IdSet::singleton(v(1));
    let result = frontier::expand(&graph, &frontier, Direction::Out, None, None, 10, 2)
        .expect("expand");
    assert_eq!(result.to_vec(), vec![v(2), v(3)]);
}

#[test]
fn test_expand_skips_excluded_targets() {
    let graph = build_graph(4, &[(1, 2), (1, 3), (1, 4)]);
    let frontier = IdSet::singleton(v(1));
    let excluded: IdSet = [v(2), v(4)].into_iter().collect();
    let result = frontier::expand(
        &graph,
        &frontier,
        Direction::Out,
        None,
        Some(&excluded),
        10,
        NO_LIMIT,
    )
    .expect("expand");
    assert_eq!(result.to_vec(), vec![v(3)]);
}

#[test]
fn test_expand_iterates_sources_in_frontier_order() {
    let graph = build_graph(6, &[(1, 4), (2, 5), (1, 6), (2, 3)]);
    let frontier: IdSet = [v(2), v(1)].into_iter().collect();
    let result = frontier::expand(&graph, &frontier, Direction::Out, None, None, 10, NO_LIMIT)
        .expect("expand");
    // Source 2 first, then source 1, each in edge order.
    assert_eq!(result.to_vec(), vec![v(5), v(3), v(4), v(6)]);
}

#[test]
fn test_adjacent_vertices_caps_at_limit() {
    let graph = build_graph(4, &[(1, 2), (1, 3), (1, 4)]);
    let neighbors = frontier::adjacent_vertices(&graph, v(1), Direction::Out, None, 2)
        .expect("adjacent");
    assert_eq!(neighbors.to_vec(), vec![v(2), v(3)]);
}

#[test]
fn test_adjacent_vertices_both_directions() {
    let graph = build_graph(3, &[(1, 2), (3, 1)]);
    let neighbors = frontier::adjacent_vertices(&graph, v(1), Direction::Both, None, NO_LIMIT)
        .expect("adjacent");
    assert_eq!(neighbors.to_vec(), vec![v(2), v(3)]);
}
