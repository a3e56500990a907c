//! In-memory reference backend. Keeps adjacency in insertion order so
//! traversals over it are deterministic, which the tests rely on.

use ahash::AHashMap;
use serde_json::Value;

use crate::{
    backend::{EdgeIter, GraphBackend},
    errors::HopGraphError,
    params::NO_LIMIT,
    query::{Aggregate, EdgeQuery},
    schema::{GraphSchema, LabelKind},
    traverser::Traverser,
    types::{Direction, Edge, EdgeLabelId, PropertyId, VertexId, VertexLabelId},
};

#[derive(Clone, Debug)]
struct EdgeLabelMeta {
    name: String,
    sort_keys: Vec<PropertyId>,
}

#[derive(Clone, Debug)]
struct StoredEdge {
    label: EdgeLabelId,
    from: VertexId,
    to: VertexId,
    properties: AHashMap<PropertyId, Value>,
}

#[derive(Default)]
pub struct MemoryGraph {
    vertex_labels: Vec<String>,
    edge_labels: Vec<EdgeLabelMeta>,
    property_names: Vec<String>,
    vertices: AHashMap<VertexId, VertexLabelId>,
    next_vertex: i64,
    edges: Vec<StoredEdge>,
    outgoing: AHashMap<VertexId, Vec<usize>>,
    incoming: AHashMap<VertexId, Vec<usize>>,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn traverser(&self) -> Traverser<'_, MemoryGraph> {
        Traverser::new(self)
    }

    pub fn define_vertex_label<T: Into<String>>(&mut self, name: T) -> VertexLabelId {
        self.vertex_labels.push(name.into());
        VertexLabelId(self.vertex_labels.len() as i64 - 1)
    }

    pub fn define_edge_label<T: Into<String>>(&mut self, name: T) -> EdgeLabelId {
        self.define_edge_label_with_sort_keys(name, &[])
    }

    pub fn define_edge_label_with_sort_keys<T: Into<String>>(
        &mut self,
        name: T,
        sort_keys: &[PropertyId],
    ) -> EdgeLabelId {
        self.edge_labels.push(EdgeLabelMeta {
            name: name.into(),
            sort_keys: sort_keys.to_vec(),
        });
        EdgeLabelId(self.edge_labels.len() as i64 - 1)
    }

    pub fn define_property<T: Into<String>>(&mut self, name: T) -> PropertyId {
        self.property_names.push(name.into());
        PropertyId(self.property_names.len() as i64 - 1)
    }

    /// Vertex ids are handed out in insertion order, starting at 1.
    pub fn add_vertex(&mut self, label: VertexLabelId) -> Result<VertexId, HopGraphError> {
        if self.vertex_labels.get(label.0 as usize).is_none() {
            return Err(HopGraphError::schema_mismatch(format!(
                "unknown vertex label id '{label}'"
            )));
        }
        self.next_vertex += 1;
        let id = VertexId(self.next_vertex);
        self.vertices.insert(id, label);
        Ok(id)
    }

    pub fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        label: EdgeLabelId,
    ) -> Result<(), HopGraphError> {
        self.add_edge_with_properties(from, to, label, &[])
    }

    pub fn add_edge_with_properties(
        &mut self,
        from: VertexId,
        to: VertexId,
        label: EdgeLabelId,
        properties: &[(PropertyId, Value)],
    ) -> Result<(), HopGraphError> {
        if self.edge_labels.get(label.0 as usize).is_none() {
            return Err(HopGraphError::schema_mismatch(format!(
                "unknown edge label id '{label}'"
            )));
        }
        if from == to {
            return Err(HopGraphError::parameter("self loops are not supported"));
        }
        if !self.vertices.contains_key(&from) || !self.vertices.contains_key(&to) {
            return Err(HopGraphError::parameter(
                "edge endpoints must reference existing vertices",
            ));
        }
        let idx = self.edges.len();
        self.edges.push(StoredEdge {
            label,
            from,
            to,
            properties: properties.iter().cloned().collect(),
        });
        self.outgoing.entry(from).or_default().push(idx);
        self.incoming.entry(to).or_default().push(idx);
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edge indices adjacent to `source`, out-edges before in-edges.
    fn adjacency(
        &self,
        source: VertexId,
        direction: Direction,
    ) -> impl Iterator<Item = usize> + '_ {
        let out: &[usize] = match direction {
            Direction::Out | Direction::Both => self
                .outgoing
                .get(&source)
                .map(Vec::as_slice)
                .unwrap_or(&[]),
            Direction::In => &[],
        };
        let inc: &[usize] = match direction {
            Direction::In | Direction::Both => self
                .incoming
                .get(&source)
                .map(Vec::as_slice)
                .unwrap_or(&[]),
            Direction::Out => &[],
        };
        out.iter().copied().chain(inc.iter().copied())
    }

    fn edge_matches(
        edge: &StoredEdge,
        labels: &[EdgeLabelId],
        conditions: &[(PropertyId, Value)],
    ) -> bool {
        if !labels.is_empty() && !labels.contains(&edge.label) {
            return false;
        }
        conditions
            .iter()
            .all(|(property, value)| edge.properties.get(property) == Some(value))
    }
}

impl GraphBackend for MemoryGraph {
    fn edges(&self, query: &EdgeQuery) -> Result<EdgeIter<'_>, HopGraphError> {
        if query.aggregate().is_some() {
            return Err(HopGraphError::backend(
                "aggregate queries must go through query_number",
            ));
        }
        let labels = query.labels().to_vec();
        let conditions = query.conditions().to_vec();
        let take = if query.limit() == NO_LIMIT {
            usize::MAX
        } else {
            query.limit() as usize
        };
        let iter = self
            .adjacency(query.source(), query.direction())
            .map(move |idx| &self.edges[idx])
            .filter(move |edge| Self::edge_matches(edge, &labels, &conditions))
            .take(take)
            .map(|edge| Ok(Edge::new(edge.label, edge.from, edge.to)));
        Ok(Box::new(iter))
    }

    fn query_number(&self, query: &EdgeQuery) -> Result<i64, HopGraphError> {
        match query.aggregate() {
            Some(Aggregate::Count) => {}
            None => {
                return Err(HopGraphError::backend(
                    "query_number requires an aggregate function",
                ));
            }
        }
        let mut count: i64 = 0;
        for idx in self.adjacency(query.source(), query.direction()) {
            if Self::edge_matches(&self.edges[idx], query.labels(), query.conditions()) {
                count += 1;
            }
        }
        Ok(count)
    }

    fn matches_full_edge_sort_keys(&self, query: &EdgeQuery) -> bool {
        let [label] = query.labels() else {
            return false;
        };
        let Some(meta) = self.edge_labels.get(label.0 as usize) else {
            return false;
        };
        if meta.sort_keys.is_empty() {
            return false;
        }
        let mut condition_ids: Vec<PropertyId> =
            query.conditions().iter().map(|(id, _)| *id).collect();
        condition_ids.sort();
        condition_ids.dedup();
        let mut sort_keys = meta.sort_keys.clone();
        sort_keys.sort();
        condition_ids == sort_keys
    }
}

impl GraphSchema for MemoryGraph {
    fn label_id(&self, kind: LabelKind, name: &str) -> Option<i64> {
        match kind {
            LabelKind::Vertex => self
                .vertex_labels
                .iter()
                .position(|label| label == name)
                .map(|idx| idx as i64),
            LabelKind::Edge => self
                .edge_labels
                .iter()
                .position(|meta| meta.name == name)
                .map(|idx| idx as i64),
        }
    }

    fn edge_label_name(&self, id: EdgeLabelId) -> Option<String> {
        self.edge_labels
            .get(id.0 as usize)
            .map(|meta| meta.name.clone())
    }

    fn property_name(&self, id: PropertyId) -> Option<String> {
        self.property_names.get(id.0 as usize).cloned()
    }
}
