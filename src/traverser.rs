//! Bounded breadth-first expansions: k-out and k-neighbor.
//!
//! Both run depth-layered frontier expansion under three interacting
//! budgets: per-vertex fan-out (`degree`), total visited vertices
//! (`capacity`, source included) and result size (`limit`).

use tracing::debug;

use crate::{
    backend::GraphBackend,
    errors::HopGraphError,
    frontier::{self, IdSet},
    params::{self, NO_LIMIT},
    paths,
    path::PathSet,
    schema::{self, GraphSchema},
    similarity,
    types::{Direction, VertexId},
};

/// Vertices reachable in exactly `depth` hops (`nearest = true`), or the
/// raw `depth`-th expansion (`nearest = false`).
#[allow(clippy::too_many_arguments)]
pub fn kout<G: GraphBackend + GraphSchema>(
    graph: &G,
    source: VertexId,
    direction: Direction,
    label: Option<&str>,
    depth: i32,
    nearest: bool,
    degree: i64,
    capacity: i64,
    limit: i64,
) -> Result<IdSet, HopGraphError> {
    params::check_positive(i64::from(depth), "k-out max_depth")?;
    params::check_degree(degree)?;
    params::check_capacity(capacity)?;
    params::check_limit(limit)?;
    if capacity != NO_LIMIT && (limit == NO_LIMIT || capacity < limit) {
        // The source vertex counts toward capacity, so capacity >= limit.
        return Err(HopGraphError::parameter(format!(
            "capacity can't be less than limit, but got capacity '{capacity}' and limit '{limit}'"
        )));
    }

    let label = schema::edge_label_id(graph, label)?;

    let mut latest = IdSet::singleton(source);
    let mut all = IdSet::singleton(source);

    let mut remaining = if capacity == NO_LIMIT {
        NO_LIMIT
    } else {
        capacity - latest.len() as i64
    };
    let mut depth = depth;
    while depth > 0 {
        depth -= 1;
        // Fetch only limit vertices in the last layer if limit < remaining.
        if depth == 0 && limit != NO_LIMIT && (limit < remaining || remaining == NO_LIMIT) {
            remaining = limit;
        }
        if nearest {
            latest = frontier::expand(graph, &latest, direction, label, Some(&all), degree, remaining)?;
            all.extend(&latest);
        } else {
            latest = frontier::expand(graph, &latest, direction, label, None, degree, remaining)?;
        }
        debug!(depth, frontier = latest.len(), nearest, "kout.layer");
        if capacity != NO_LIMIT {
            remaining -= latest.len() as i64;
            if remaining <= 0 && depth > 0 {
                return Err(HopGraphError::capacity_exceeded(format!(
                    "reached capacity '{capacity}' while remaining depth '{depth}'"
                )));
            }
        }
    }

    Ok(latest)
}

/// All vertices within `depth` hops of `source`, the source included.
pub fn kneighbor<G: GraphBackend + GraphSchema>(
    graph: &G,
    source: VertexId,
    direction: Direction,
    label: Option<&str>,
    depth: i32,
    degree: i64,
    limit: i64,
) -> Result<IdSet, HopGraphError> {
    params::check_positive(i64::from(depth), "k-neighbor max_depth")?;
    params::check_degree(degree)?;
    params::check_limit(limit)?;

    let label = schema::edge_label_id(graph, label)?;

    let mut latest = IdSet::singleton(source);
    let mut all = IdSet::singleton(source);

    let mut depth = depth;
    while depth > 0 {
        depth -= 1;
        let remaining = if limit == NO_LIMIT {
            NO_LIMIT
        } else {
            limit - all.len() as i64
        };
        latest = frontier::expand(graph, &latest, direction, label, Some(&all), degree, remaining)?;
        all.extend(&latest);
        debug!(depth, frontier = latest.len(), total = all.len(), "kneighbor.layer");
        if limit != NO_LIMIT && all.len() as i64 >= limit {
            break;
        }
    }

    Ok(all)
}

/// Facade bundling the traversal operations over one graph reference.
pub struct Traverser<'a, G> {
    graph: &'a G,
}

impl<'a, G: GraphBackend + GraphSchema> Traverser<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'a G {
        self.graph
    }

    #[allow(clippy::too_many_arguments)]
    pub fn kout(
        &self,
        source: VertexId,
        direction: Direction,
        label: Option<&str>,
        depth: i32,
        nearest: bool,
        degree: i64,
        capacity: i64,
        limit: i64,
    ) -> Result<IdSet, HopGraphError> {
        kout(
            self.graph, source, direction, label, depth, nearest, degree, capacity, limit,
        )
    }

    pub fn kneighbor(
        &self,
        source: VertexId,
        direction: Direction,
        label: Option<&str>,
        depth: i32,
        degree: i64,
        limit: i64,
    ) -> Result<IdSet, HopGraphError> {
        kneighbor(self.graph, source, direction, label, depth, degree, limit)
    }

    pub fn same_neighbors(
        &self,
        vertex: VertexId,
        other: VertexId,
        direction: Direction,
        label: Option<&str>,
        degree: i64,
        limit: i64,
    ) -> Result<Vec<VertexId>, HopGraphError> {
        similarity::same_neighbors(self.graph, vertex, other, direction, label, degree, limit)
    }

    pub fn jaccard_similarity(
        &self,
        vertex: VertexId,
        other: VertexId,
        direction: Direction,
        label: Option<&str>,
        degree: i64,
    ) -> Result<f64, HopGraphError> {
        similarity::jaccard_similarity(self.graph, vertex, other, direction, label, degree)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn paths(
        &self,
        source: VertexId,
        target: VertexId,
        direction: Direction,
        label: Option<&str>,
        depth: i32,
        degree: i64,
        capacity: i64,
        limit: i64,
    ) -> Result<PathSet, HopGraphError> {
        paths::paths(
            self.graph, source, target, direction, label, depth, degree, capacity, limit,
        )
    }
}
