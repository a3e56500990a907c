//! `EdgeStep` bundles the per-step edge filters: direction, labels,
//! property predicates and the degree/skip-degree/limit budgets.

use serde_json::Value;

use crate::{
    backend::EdgeIter,
    errors::HopGraphError,
    params::{self, NO_LIMIT},
    schema::{GraphSchema, LabelKind},
    stream::EdgeStream,
    types::{Direction, EdgeLabelId, PropertyId},
};

#[derive(Clone, Debug)]
pub struct EdgeStep {
    pub direction: Direction,
    /// Label id with the name it was resolved from. Empty means any label.
    pub labels: Vec<(EdgeLabelId, String)>,
    /// Property predicates, each an exact-value match. Empty means none.
    pub properties: Vec<(PropertyId, Value)>,
    /// Per-vertex fan-out cap, positive or `NO_LIMIT`.
    pub degree: i64,
    /// A vertex whose true degree reaches this contributes no edges at
    /// all. Zero disables super-node suppression.
    pub skip_degree: i64,
    /// Result cap for the step, positive or `NO_LIMIT`.
    pub limit: i64,
}

impl EdgeStep {
    pub fn new<S: GraphSchema>(
        schema: &S,
        direction: Direction,
        labels: &[&str],
        degree: i64,
        skip_degree: i64,
    ) -> Result<Self, HopGraphError> {
        params::check_degree(degree)?;
        params::check_skip_degree(skip_degree, degree, NO_LIMIT)?;
        let mut resolved = Vec::with_capacity(labels.len());
        for name in labels {
            let id = schema
                .label_id(LabelKind::Edge, name)
                .map(EdgeLabelId)
                .ok_or_else(|| {
                    HopGraphError::schema_mismatch(format!("unknown edge label '{name}'"))
                })?;
            resolved.push((id, (*name).to_string()));
        }
        Ok(Self {
            direction,
            labels: resolved,
            properties: Vec::new(),
            degree,
            skip_degree,
            limit: NO_LIMIT,
        })
    }

    pub fn with_properties(mut self, properties: Vec<(PropertyId, Value)>) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Result<Self, HopGraphError> {
        params::check_limit(limit)?;
        self.limit = limit;
        Ok(self)
    }

    pub fn edge_labels(&self) -> Vec<EdgeLabelId> {
        self.labels.iter().map(|(id, _)| *id).collect()
    }

    pub fn property_ids(&self) -> Vec<PropertyId> {
        self.properties.iter().map(|(id, _)| *id).collect()
    }

    /// The fetch bound pushed into the backend query. When suppression is
    /// armed the query must reach the skip_degree-th edge to detect a
    /// super-node, so the bound is skip_degree rather than degree.
    pub fn effective_limit(&self) -> i64 {
        if self.skip_degree > 0 {
            return self.skip_degree;
        }
        match (self.degree, self.limit) {
            (NO_LIMIT, limit) => limit,
            (degree, NO_LIMIT) => degree,
            (degree, limit) => degree.min(limit),
        }
    }

    pub fn skip_super_node_if_needed<'a>(&self, edges: EdgeIter<'a>) -> EdgeStream<'a> {
        EdgeStream::new(edges, self.degree, self.skip_degree)
    }
}
