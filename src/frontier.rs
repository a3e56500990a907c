//! Frontier expansion. An `IdSet` keeps first-insertion order so a
//! traversal over a deterministic backend is itself deterministic.

use ahash::AHashSet;
use tracing::trace;

use crate::{
    backend::GraphBackend,
    errors::HopGraphError,
    params::NO_LIMIT,
    query,
    types::{Direction, EdgeLabelId, VertexId},
};

/// Set of vertex ids iterated in first-insertion order.
#[derive(Clone, Debug, Default)]
pub struct IdSet {
    order: Vec<VertexId>,
    seen: AHashSet<VertexId>,
}

impl IdSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn singleton(id: VertexId) -> Self {
        let mut set = Self::new();
        set.insert(id);
        set
    }

    /// Returns true when the id was not yet present.
    pub fn insert(&mut self, id: VertexId) -> bool {
        if self.seen.insert(id) {
            self.order.push(id);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.seen.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.order.iter().copied()
    }

    pub fn extend(&mut self, other: &IdSet) {
        for id in other.iter() {
            self.insert(id);
        }
    }

    pub fn as_slice(&self) -> &[VertexId] {
        &self.order
    }

    pub fn to_vec(&self) -> Vec<VertexId> {
        self.order.clone()
    }
}

impl FromIterator<VertexId> for IdSet {
    fn from_iter<I: IntoIterator<Item = VertexId>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl<'a> IntoIterator for &'a IdSet {
    type Item = VertexId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, VertexId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter().copied()
    }
}

/// Expands `frontier` one hop: the union of the "other" endpoints of each
/// source's edges, minus `excluded`, short-circuiting at `limit`. Each
/// source contributes at most `degree` edges.
pub fn expand<G: GraphBackend>(
    graph: &G,
    frontier: &IdSet,
    direction: Direction,
    label: Option<EdgeLabelId>,
    excluded: Option<&IdSet>,
    degree: i64,
    limit: i64,
) -> Result<IdSet, HopGraphError> {
    if limit == 0 {
        return Ok(IdSet::new());
    }
    let mut neighbors = IdSet::new();
    for source in frontier.iter() {
        let edges = query::edges_of_vertex(graph, source, direction, label, degree)?;
        for edge in edges {
            let target = edge?.other_vertex(source);
            if excluded.is_some_and(|set| set.contains(target)) {
                continue;
            }
            neighbors.insert(target);
            if limit != NO_LIMIT && neighbors.len() as i64 >= limit {
                trace!(sources = frontier.len(), found = neighbors.len(), "expand.limit");
                return Ok(neighbors);
            }
        }
    }
    trace!(sources = frontier.len(), found = neighbors.len(), "expand");
    Ok(neighbors)
}

/// Materializes one vertex's neighborhood, capped at `limit`, in edge
/// order.
pub fn adjacent_vertices<G: GraphBackend>(
    graph: &G,
    source: VertexId,
    direction: Direction,
    label: Option<EdgeLabelId>,
    limit: i64,
) -> Result<IdSet, HopGraphError> {
    let mut neighbors = IdSet::new();
    let edges = query::edges_of_vertex(graph, source, direction, label, limit)?;
    for edge in edges {
        neighbors.insert(edge?.other_vertex(source));
    }
    Ok(neighbors)
}
