use serde_json::json;

use hopgraph::{
    Direction, EdgeQuery, GraphBackend, GraphSchema, HopGraphError, LabelKind, MemoryGraph,
    VertexId,
};

#[test]
fn test_vertex_ids_start_at_one() {
    let mut graph = MemoryGraph::new();
    let person = graph.define_vertex_label("person");
    assert_eq!(graph.add_vertex(person).expect("vertex"), VertexId(1));
    assert_eq!(graph.add_vertex(person).expect("vertex"), VertexId(2));
    assert_eq!(graph.vertex_count(), 2);
}

#[test]
fn test_add_vertex_rejects_unknown_label() {
    let mut graph = MemoryGraph::new();
    let err = graph
        .add_vertex(hopgraph::VertexLabelId(7))
        .expect_err("unknown label");
    assert!(matches!(err, HopGraphError::SchemaMismatch(_)));
}

#[test]
fn test_add_edge_rejects_self_loop() {
    let mut graph = MemoryGraph::new();
    let person = graph.define_vertex_label("person");
    let link = graph.define_edge_label("link");
    let a = graph.add_vertex(person).expect("vertex");
    let err = graph.add_edge(a, a, link).expect_err("self loop");
    assert!(matches!(err, HopGraphError::Parameter(_)));
}

#[test]
fn test_add_edge_rejects_missing_endpoint() {
    let mut graph = MemoryGraph::new();
    let person = graph.define_vertex_label("person");
    let link = graph.define_edge_label("link");
    let a = graph.add_vertex(person).expect("vertex");
    let err = graph.add_edge(a, VertexId(9), link).expect_err("endpoint");
    assert!(matches!(err, HopGraphError::Parameter(_)));
}

#[test]
fn test_schema_lookups() {
    let mut graph = MemoryGraph::new();
    graph.define_vertex_label("person");
    let since = graph.define_property("since");
    let knows = graph.define_edge_label_with_sort_keys("knows", &[since]);
    assert_eq!(graph.label_id(LabelKind::Vertex, "person"), Some(0));
    assert_eq!(graph.label_id(LabelKind::Edge, "knows"), Some(knows.0));
    assert_eq!(graph.label_id(LabelKind::Edge, "absent"), None);
    assert_eq!(graph.edge_label_name(knows).as_deref(), Some("knows"));
    assert_eq!(graph.property_name(since).as_deref(), Some("since"));
}

#[test]
fn test_edges_stream_is_deterministic() {
    let mut graph = MemoryGraph::new();
    let person = graph.define_vertex_label("person");
    let link = graph.define_edge_label("link");
    for _ in 0..4 {
        graph.add_vertex(person).expect("vertex");
    }
    graph.add_edge(VertexId(1), VertexId(3), link).expect("edge");
    graph.add_edge(VertexId(1), VertexId(2), link).expect("edge");
    graph.add_edge(VertexId(4), VertexId(1), link).expect("edge");

    let query = EdgeQuery::new(VertexId(1), Direction::Both, &[]);
    let first: Vec<_> = graph
        .edges(&query)
        .expect("edges")
        .map(|edge| edge.expect("edge"))
        .collect();
    let second: Vec<_> = graph
        .edges(&query)
        .expect("edges")
        .map(|edge| edge.expect("edge"))
        .collect();
    assert_eq!(first, second);
    // Out-edges in insertion order, then in-edges.
    let endpoints: Vec<VertexId> = first
        .iter()
        .map(|edge| edge.other_vertex(VertexId(1)))
        .collect();
    assert_eq!(endpoints, vec![VertexId(3), VertexId(2), VertexId(4)]);
}

#[test]
fn test_property_conditions_filter_the_stream() {
    let mut graph = MemoryGraph::new();
    let person = graph.define_vertex_label("person");
    let since = graph.define_property("since");
    let knows = graph.define_edge_label("knows");
    for _ in 0..3 {
        graph.add_vertex(person).expect("vertex");
    }
    graph
        .add_edge_with_properties(VertexId(1), VertexId(2), knows, &[(since, json!(2019))])
        .expect("edge");
    graph
        .add_edge_with_properties(VertexId(1), VertexId(3), knows, &[(since, json!(2020))])
        .expect("edge");

    let mut query = EdgeQuery::new(VertexId(1), Direction::Out, &[knows]);
    query.push_condition(since, json!(2020));
    let edges: Vec<_> = graph
        .edges(&query)
        .expect("edges")
        .map(|edge| edge.expect("edge"))
        .collect();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].to, VertexId(3));
}
