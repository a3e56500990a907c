//! Bidirectional path search between two vertices.
//!
//! Forward and backward frontiers expand alternately, smaller side first;
//! partial paths live in the back-linked [`Node`] forest and are fused
//! with [`Node::join_path`] the moment the frontiers meet.

use std::rc::Rc;

use ahash::AHashMap;
use tracing::debug;

use crate::{
    backend::GraphBackend,
    errors::HopGraphError,
    params::{self, NO_LIMIT},
    path::{Node, Path, PathSet},
    query,
    schema::{self, GraphSchema},
    types::{Direction, EdgeLabelId, VertexId},
};

/// Partial paths keyed by their frontier vertex. Several nodes per vertex
/// means several distinct partial paths currently end there.
type NodeMap = AHashMap<VertexId, Vec<Rc<Node>>>;

/// Loop-free paths from `source` to `target` of at most `depth` hops.
/// Forward expansion follows `direction`, backward expansion its opposite.
/// Every discovered path records the meeting vertex as its crosspoint.
#[allow(clippy::too_many_arguments)]
pub fn paths<G: GraphBackend + GraphSchema>(
    graph: &G,
    source: VertexId,
    target: VertexId,
    direction: Direction,
    label: Option<&str>,
    depth: i32,
    degree: i64,
    capacity: i64,
    limit: i64,
) -> Result<PathSet, HopGraphError> {
    params::check_positive(i64::from(depth), "max depth")?;
    params::check_degree(degree)?;
    params::check_capacity(capacity)?;
    params::check_limit(limit)?;
    if source == target {
        return Err(HopGraphError::parameter(
            "source and target vertex id can't be the same",
        ));
    }

    let label = schema::edge_label_id(graph, label)?;

    let mut found = PathSet::new();
    let mut sources = root_frontier(source);
    let mut targets = root_frontier(target);
    let mut accessed: i64 = 2;

    let mut remaining = depth;
    while remaining > 0 {
        remaining -= 1;
        if limit != NO_LIMIT && found.len() as i64 >= limit {
            break;
        }
        let budget = if limit == NO_LIMIT {
            NO_LIMIT
        } else {
            limit - found.len() as i64
        };
        let forward = sources.len() <= targets.len();
        let (new_frontier, met) = if forward {
            expand_frontier(graph, &sources, &targets, direction, label, degree, true, budget)?
        } else {
            expand_frontier(
                graph,
                &targets,
                &sources,
                direction.opposite(),
                label,
                degree,
                false,
                budget,
            )?
        };
        accessed += new_frontier.len() as i64;
        params::check_capacity_for(capacity, accessed, "paths")?;
        debug!(
            remaining,
            forward,
            frontier = new_frontier.len(),
            found = met.len(),
            "paths.round"
        );
        found.extend(met);
        if new_frontier.is_empty() {
            break;
        }
        if forward {
            sources = new_frontier;
        } else {
            targets = new_frontier;
        }
    }

    Ok(found)
}

fn root_frontier(id: VertexId) -> NodeMap {
    let mut frontier = NodeMap::new();
    frontier.insert(id, vec![Rc::new(Node::new(id))]);
    frontier
}

/// One expansion round. Each reached vertex already present in the
/// opposite frontier fuses the partial paths; each loop-free reach seeds
/// the next frontier.
#[allow(clippy::too_many_arguments)]
fn expand_frontier<G: GraphBackend>(
    graph: &G,
    frontier: &NodeMap,
    opposite: &NodeMap,
    direction: Direction,
    label: Option<EdgeLabelId>,
    degree: i64,
    forward: bool,
    budget: i64,
) -> Result<(NodeMap, PathSet), HopGraphError> {
    let mut next = NodeMap::new();
    let mut met = PathSet::new();
    for (&vertex, nodes) in frontier {
        let edges = query::edges_of_vertex(graph, vertex, direction, label, degree)?;
        for edge in edges {
            let reached = edge?.other_vertex(vertex);
            for node in nodes {
                if let Some(others) = opposite.get(&reached) {
                    for other in others {
                        let joined = if forward {
                            node.join_path(other)
                        } else {
                            other.join_path(node)
                        };
                        if joined.is_empty() {
                            continue;
                        }
                        met.add(Path::with_crosspoint(reached, joined));
                        if budget != NO_LIMIT && met.len() as i64 >= budget {
                            return Ok((next, met));
                        }
                    }
                }
                if !node.contains(reached) {
                    next.entry(reached)
                        .or_default()
                        .push(Rc::new(Node::with_parent(reached, Rc::clone(node))));
                }
            }
        }
    }
    Ok((next, met))
}
