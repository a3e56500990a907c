//! Bounded traversal primitives over a pluggable property-graph backend:
//! k-out and k-neighbor expansions, neighborhood similarity, and the
//! path-tree machinery longer path searches are built on.

pub mod backend;
pub mod errors;
pub mod frontier;
pub mod memory;
pub mod params;
pub mod path;
pub mod paths;
pub mod query;
pub mod schema;
pub mod similarity;
pub mod step;
pub mod stream;
pub mod traverser;
pub mod types;

pub use crate::backend::{EdgeIter, GraphBackend};
pub use crate::errors::HopGraphError;
pub use crate::frontier::IdSet;
pub use crate::memory::MemoryGraph;
pub use crate::params::NO_LIMIT;
pub use crate::path::{Node, Path, PathSet};
pub use crate::query::EdgeQuery;
pub use crate::schema::{GraphSchema, LabelKind};
pub use crate::step::EdgeStep;
pub use crate::stream::EdgeStream;
pub use crate::traverser::Traverser;
pub use crate::types::{Direction, Edge, EdgeLabelId, PropertyId, VertexId, VertexLabelId};
