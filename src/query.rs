//! Edge-query construction. Every filter the backend can evaluate (label,
//! property, sort key, fetch limit) is folded into one `EdgeQuery` so a
//! neighborhood is never materialized engine-side just to be filtered.

use serde_json::Value;

use crate::{
    backend::{EdgeIter, GraphBackend},
    errors::HopGraphError,
    params::NO_LIMIT,
    schema::{self, GraphSchema},
    step::EdgeStep,
    stream::EdgeStream,
    types::{Direction, EdgeLabelId, PropertyId, VertexId},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Aggregate {
    Count,
}

/// The value handed to [`GraphBackend`]. Constructed by the engine,
/// interpreted by the backend.
#[derive(Clone, Debug)]
pub struct EdgeQuery {
    source: VertexId,
    direction: Direction,
    labels: Vec<EdgeLabelId>,
    conditions: Vec<(PropertyId, Value)>,
    limit: i64,
    capacity: i64,
    aggregate: Option<Aggregate>,
}

impl EdgeQuery {
    pub fn new(source: VertexId, direction: Direction, labels: &[EdgeLabelId]) -> Self {
        Self {
            source,
            direction,
            labels: labels.to_vec(),
            conditions: Vec::new(),
            limit: NO_LIMIT,
            capacity: NO_LIMIT,
            aggregate: None,
        }
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn labels(&self) -> &[EdgeLabelId] {
        &self.labels
    }

    pub fn conditions(&self) -> &[(PropertyId, Value)] {
        &self.conditions
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    pub fn aggregate(&self) -> Option<Aggregate> {
        self.aggregate
    }

    pub fn set_limit(&mut self, limit: i64) {
        self.limit = limit;
    }

    pub fn set_capacity(&mut self, capacity: i64) {
        self.capacity = capacity;
    }

    pub fn set_aggregate(&mut self, aggregate: Aggregate) {
        self.aggregate = Some(aggregate);
    }

    pub fn push_condition(&mut self, property: PropertyId, value: Value) {
        self.conditions.push((property, value));
    }
}

/// Streams the edges of `source`, optionally restricted to one label and
/// capped at `limit`.
pub fn edges_of_vertex<G: GraphBackend>(
    graph: &G,
    source: VertexId,
    direction: Direction,
    label: Option<EdgeLabelId>,
    limit: i64,
) -> Result<EdgeIter<'_>, HopGraphError> {
    let labels: Vec<EdgeLabelId> = label.into_iter().collect();
    let mut query = EdgeQuery::new(source, direction, &labels);
    if limit != NO_LIMIT {
        query.set_limit(limit);
    }
    graph.edges(&query)
}

/// Multi-label variant: one backend query per label, concatenated lazily.
/// `limit` applies per label, not globally; callers that need a global cap
/// enforce it at the frontier residual.
pub fn edges_of_vertex_labels<'a, G: GraphBackend>(
    graph: &'a G,
    source: VertexId,
    direction: Direction,
    labels: &[EdgeLabelId],
    limit: i64,
) -> Result<EdgeIter<'a>, HopGraphError> {
    if labels.len() <= 1 {
        return edges_of_vertex(graph, source, direction, labels.first().copied(), limit);
    }
    let mut parts = Vec::with_capacity(labels.len());
    for &label in labels {
        parts.push(edges_of_vertex(graph, source, direction, Some(label), limit)?);
    }
    Ok(Box::new(parts.into_iter().flatten()))
}

/// Streams the edges selected by an [`EdgeStep`] in property mode. Any
/// predicate may be pushed down; the backend picks an index.
pub fn edges_of_step<'a, G: GraphBackend + GraphSchema>(
    graph: &'a G,
    source: VertexId,
    step: &EdgeStep,
) -> Result<EdgeStream<'a>, HopGraphError> {
    if step.properties.is_empty() {
        let edges = edges_of_vertex_labels(
            graph,
            source,
            step.direction,
            &step.edge_labels(),
            step.effective_limit(),
        )?;
        return Ok(step.skip_super_node_if_needed(edges));
    }
    edges_of_step_filtered(graph, source, step, false)
}

/// Sort-key mode: the property predicates must exactly cover the sort key
/// of the step's single edge label, enabling primary-index pushdown.
pub fn edges_of_step_with_sort_keys<'a, G: GraphBackend + GraphSchema>(
    graph: &'a G,
    source: VertexId,
    step: &EdgeStep,
) -> Result<EdgeStream<'a>, HopGraphError> {
    debug_assert!(!step.properties.is_empty());
    edges_of_step_filtered(graph, source, step, true)
}

fn edges_of_step_filtered<'a, G: GraphBackend + GraphSchema>(
    graph: &'a G,
    source: VertexId,
    step: &EdgeStep,
    must_all_sort_keys: bool,
) -> Result<EdgeStream<'a>, HopGraphError> {
    let labels = step.edge_labels();
    let mut query = EdgeQuery::new(source, step.direction, &labels);
    if must_all_sort_keys {
        fill_filter_by_sort_keys(graph, &mut query, step)?;
    } else {
        fill_filter_by_properties(&mut query, step);
    }
    // The engine manages capacity itself; the backend query runs unbounded.
    query.set_capacity(NO_LIMIT);
    if step.effective_limit() != NO_LIMIT {
        query.set_limit(step.effective_limit());
    }
    let edges = graph.edges(&query)?;
    Ok(step.skip_super_node_if_needed(edges))
}

fn fill_filter_by_sort_keys<G: GraphBackend + GraphSchema>(
    graph: &G,
    query: &mut EdgeQuery,
    step: &EdgeStep,
) -> Result<(), HopGraphError> {
    if step.properties.is_empty() {
        return Ok(());
    }
    if step.labels.len() != 1 {
        return Err(HopGraphError::parameter(
            "the properties filter condition can be set only if just one edge label is set",
        ));
    }
    fill_filter_by_properties(query, step);
    if !graph.matches_full_edge_sort_keys(query) {
        let properties = schema::property_names(graph, &step.property_ids());
        let (label, name) = &step.labels[0];
        let label = graph.edge_label_name(*label).unwrap_or_else(|| name.clone());
        return Err(HopGraphError::schema_mismatch(format!(
            "the properties {properties:?} do not match sort keys of edge label '{label}'"
        )));
    }
    Ok(())
}

fn fill_filter_by_properties(query: &mut EdgeQuery, step: &EdgeStep) {
    for (property, value) in &step.properties {
        query.push_condition(*property, value.clone());
    }
}

/// Total edge count for `source` under the step's filters, post-processed
/// by the degree and skip-degree budgets.
pub fn edges_count<G: GraphBackend + GraphSchema>(
    graph: &G,
    source: VertexId,
    step: &EdgeStep,
) -> Result<i64, HopGraphError> {
    let labels = step.edge_labels();
    let mut query = EdgeQuery::new(source, step.direction, &labels);
    fill_filter_by_sort_keys(graph, &mut query, step)?;
    query.set_aggregate(Aggregate::Count);
    query.set_capacity(NO_LIMIT);
    query.set_limit(NO_LIMIT);
    let count = graph.query_number(&query)?;
    if step.degree == NO_LIMIT || count < step.degree {
        Ok(count)
    } else if step.skip_degree != 0 && count >= step.skip_degree {
        Ok(0)
    } else {
        Ok(step.degree)
    }
}
