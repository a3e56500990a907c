//! Explored-path representations.
//!
//! `Node` is a back-linked tree node: each traversal step owns a node
//! pointing at its parent, so partial paths share storage and two
//! opposing frontiers can be joined without quadratic copying. `Path` and
//! `PathSet` are the value types for completed paths.

use std::hash::{Hash, Hasher};
use std::rc::Rc;

use ahash::AHashSet;
use serde_json::{Value, json};

use crate::types::VertexId;

/// A vertex with an optional parent link. Equality is structural (id and
/// full parent chain); the hash intentionally covers the id only, letting
/// hot sets avoid O(depth) hashing and leaving collisions to equality.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    id: VertexId,
    parent: Option<Rc<Node>>,
}

impl Node {
    pub fn new(id: VertexId) -> Self {
        Self { id, parent: None }
    }

    pub fn with_parent(id: VertexId, parent: Rc<Node>) -> Self {
        Self {
            id,
            parent: Some(parent),
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn parent(&self) -> Option<&Rc<Node>> {
        self.parent.as_ref()
    }

    /// Root-to-self vertex sequence.
    pub fn path(&self) -> Vec<VertexId> {
        let mut ids = Vec::new();
        let mut current = self;
        loop {
            ids.push(current.id);
            match &current.parent {
                Some(parent) => current = parent,
                None => break,
            }
        }
        ids.reverse();
        ids
    }

    /// Fuses this forward chain with a backward chain: self root-to-self,
    /// then `back` self-to-root. Any shared vertex would form a loop, in
    /// which case the join is empty.
    pub fn join_path(&self, back: &Node) -> Vec<VertexId> {
        let mut path = self.path();
        let mut back_path = back.path();
        back_path.reverse();

        if back_path.iter().any(|id| path.contains(id)) {
            return Vec::new();
        }

        path.append(&mut back_path);
        path
    }

    pub fn contains(&self, id: VertexId) -> bool {
        let mut current = self;
        loop {
            if current.id == id {
                return true;
            }
            match &current.parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }
}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A completed path. The optional crosspoint marks where a bidirectional
/// search's frontiers met; it is ignored by equality and hashing.
#[derive(Clone, Debug, Eq)]
pub struct Path {
    crosspoint: Option<VertexId>,
    vertices: Vec<VertexId>,
}

impl Path {
    pub fn new(vertices: Vec<VertexId>) -> Self {
        Self {
            crosspoint: None,
            vertices,
        }
    }

    pub fn with_crosspoint(crosspoint: VertexId, vertices: Vec<VertexId>) -> Self {
        Self {
            crosspoint: Some(crosspoint),
            vertices,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn crosspoint(&self) -> Option<VertexId> {
        self.crosspoint
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn reverse(&mut self) {
        self.vertices.reverse();
    }

    /// True iff `source` is the numerically smallest id along the path.
    /// Deduplicates paths discovered from multiple roots: exactly one root
    /// owns each path.
    pub fn owned_by(&self, source: VertexId) -> bool {
        self.vertices.iter().min().copied() == Some(source)
    }

    pub fn to_map(&self, with_crosspoint: bool) -> Value {
        if with_crosspoint {
            json!({
                "crosspoint": self.crosspoint,
                "objects": self.vertices,
            })
        } else {
            json!({ "objects": self.vertices })
        }
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl Hash for Path {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vertices.hash(state);
    }
}

/// Set of paths unique by vertex sequence, crosspoint disregarded.
#[derive(Clone, Debug, Default)]
pub struct PathSet {
    paths: AHashSet<Path>,
}

impl PathSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the sequence was not yet present.
    pub fn add(&mut self, path: Path) -> bool {
        self.paths.insert(path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter()
    }

    /// Union of the vertex sequences of all contained paths.
    pub fn vertices(&self) -> AHashSet<VertexId> {
        let mut vertices = AHashSet::new();
        for path in &self.paths {
            vertices.extend(path.vertices.iter().copied());
        }
        vertices
    }
}

impl Extend<Path> for PathSet {
    fn extend<I: IntoIterator<Item = Path>>(&mut self, iter: I) {
        self.paths.extend(iter);
    }
}

impl FromIterator<Path> for PathSet {
    fn from_iter<I: IntoIterator<Item = Path>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for PathSet {
    type Item = Path;
    type IntoIter = <AHashSet<Path> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}
