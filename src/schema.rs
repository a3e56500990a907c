//! Schema collaborator interface. The engine resolves human label names to
//! opaque ids once per traversal and maps ids back to names only when
//! composing error messages.

use crate::{
    errors::HopGraphError,
    types::{EdgeLabelId, PropertyId, VertexLabelId},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelKind {
    Vertex,
    Edge,
}

pub trait GraphSchema {
    /// Resolves a label name to its id, or `None` when unknown.
    fn label_id(&self, kind: LabelKind, name: &str) -> Option<i64>;
    fn edge_label_name(&self, id: EdgeLabelId) -> Option<String>;
    fn property_name(&self, id: PropertyId) -> Option<String>;
}

impl<B> GraphSchema for &B
where
    B: GraphSchema + ?Sized,
{
    fn label_id(&self, kind: LabelKind, name: &str) -> Option<i64> {
        (*self).label_id(kind, name)
    }

    fn edge_label_name(&self, id: EdgeLabelId) -> Option<String> {
        (*self).edge_label_name(id)
    }

    fn property_name(&self, id: PropertyId) -> Option<String> {
        (*self).property_name(id)
    }
}

/// Resolves an optional edge-label name. Absent means "any label".
pub fn edge_label_id<S: GraphSchema>(
    schema: &S,
    label: Option<&str>,
) -> Result<Option<EdgeLabelId>, HopGraphError> {
    match label {
        None => Ok(None),
        Some(name) => schema
            .label_id(LabelKind::Edge, name)
            .map(|id| Some(EdgeLabelId(id)))
            .ok_or_else(|| HopGraphError::schema_mismatch(format!("unknown edge label '{name}'"))),
    }
}

pub fn vertex_label_id<S: GraphSchema>(
    schema: &S,
    label: Option<&str>,
) -> Result<Option<VertexLabelId>, HopGraphError> {
    match label {
        None => Ok(None),
        Some(name) => schema
            .label_id(LabelKind::Vertex, name)
            .map(|id| Some(VertexLabelId(id)))
            .ok_or_else(|| {
                HopGraphError::schema_mismatch(format!("unknown vertex label '{name}'"))
            }),
    }
}

/// Renders property ids as names for error messages, falling back to the
/// raw id when the schema no longer knows it.
pub fn property_names<S: GraphSchema>(schema: &S, ids: &[PropertyId]) -> Vec<String> {
    ids.iter()
        .map(|id| {
            schema
                .property_name(*id)
                .unwrap_or_else(|| id.to_string())
        })
        .collect()
}
