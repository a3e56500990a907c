//! Backend trait bridging the traversal engine with a property-graph store.
//! The engine never retains an `EdgeIter` across calls; every stream is
//! consumed to completion or dropped at an early-return limit.

use crate::{errors::HopGraphError, query::EdgeQuery, types::Edge};

pub type EdgeIter<'a> = Box<dyn Iterator<Item = Result<Edge, HopGraphError>> + 'a>;

pub trait GraphBackend {
    /// Streams the edges matching `query` in a deterministic order.
    fn edges(&self, query: &EdgeQuery) -> Result<EdgeIter<'_>, HopGraphError>;

    /// Evaluates an aggregate query (COUNT) to a single number.
    fn query_number(&self, query: &EdgeQuery) -> Result<i64, HopGraphError>;

    /// True when the property conditions on `query` exactly cover the sort
    /// key of its single edge label.
    fn matches_full_edge_sort_keys(&self, query: &EdgeQuery) -> bool;
}

impl<B> GraphBackend for &B
where
    B: GraphBackend + ?Sized,
{
    fn edges(&self, query: &EdgeQuery) -> Result<EdgeIter<'_>, HopGraphError> {
        (*self).edges(query)
    }

    fn query_number(&self, query: &EdgeQuery) -> Result<i64, HopGraphError> {
        (*self).query_number(query)
    }

    fn matches_full_edge_sort_keys(&self, query: &EdgeQuery) -> bool {
        (*self).matches_full_edge_sort_keys(query)
    }
}
