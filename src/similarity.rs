//! Local-structure comparisons over two vertices.

use crate::{
    backend::GraphBackend,
    errors::HopGraphError,
    frontier,
    params::{self, NO_LIMIT},
    schema::{self, GraphSchema},
    types::{Direction, VertexId},
};

/// Intersection of the two bounded neighborhoods, kept in the iteration
/// order of N(vertex) and truncated after intersecting.
pub fn same_neighbors<G: GraphBackend + GraphSchema>(
    graph: &G,
    vertex: VertexId,
    other: VertexId,
    direction: Direction,
    label: Option<&str>,
    degree: i64,
    limit: i64,
) -> Result<Vec<VertexId>, HopGraphError> {
    params::check_degree(degree)?;
    params::check_limit(limit)?;

    let label = schema::edge_label_id(graph, label)?;

    let source_neighbors = frontier::adjacent_vertices(graph, vertex, direction, label, degree)?;
    let target_neighbors = frontier::adjacent_vertices(graph, other, direction, label, degree)?;
    let mut same: Vec<VertexId> = source_neighbors
        .iter()
        .filter(|id| target_neighbors.contains(*id))
        .collect();
    if limit != NO_LIMIT {
        same.truncate(limit as usize);
    }
    Ok(same)
}

/// |N(u) ∩ N(v)| / |N(u) ∪ N(v)| over the degree-bounded neighborhoods.
/// Fails with [`HopGraphError::EmptyNeighborhood`] when both sides are
/// empty instead of dividing zero by zero.
pub fn jaccard_similarity<G: GraphBackend + GraphSchema>(
    graph: &G,
    vertex: VertexId,
    other: VertexId,
    direction: Direction,
    label: Option<&str>,
    degree: i64,
) -> Result<f64, HopGraphError> {
    params::check_degree(degree)?;

    let label = schema::edge_label_id(graph, label)?;

    let source_neighbors = frontier::adjacent_vertices(graph, vertex, direction, label, degree)?;
    let target_neighbors = frontier::adjacent_vertices(graph, other, direction, label, degree)?;
    let intersection = source_neighbors
        .iter()
        .filter(|id| target_neighbors.contains(*id))
        .count();
    let union = source_neighbors.len() + target_neighbors.len() - intersection;
    if union == 0 {
        return Err(HopGraphError::EmptyNeighborhood);
    }
    Ok(intersection as f64 / union as f64)
}
