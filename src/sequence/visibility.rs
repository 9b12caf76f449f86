use std::collections::BTreeSet;

use crate::{foundation::core::ElementKind, graph::model::GraphState};

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Ids currently on screen.
///
/// Owned and mutated by the sequencer, read by the renderer. Every mutation is idempotent.
pub struct VisibilitySet {
    /// Visible vertex ids.
    pub vertices: BTreeSet<String>,
    /// Visible edge ids.
    pub edges: BTreeSet<String>,
}

impl VisibilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every vertex and edge id of `state`, as if it had finished animating in.
    pub fn all_of(state: &GraphState) -> Self {
        Self {
            vertices: state.vertices.iter().map(|v| v.id.clone()).collect(),
            edges: state.edges.iter().map(|e| e.id.clone()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vertices.len() + self.edges.len()
    }

    pub fn contains(&self, kind: ElementKind, id: &str) -> bool {
        self.set(kind).contains(id)
    }

    pub fn contains_vertex(&self, id: &str) -> bool {
        self.vertices.contains(id)
    }

    pub fn contains_edge(&self, id: &str) -> bool {
        self.edges.contains(id)
    }

    /// Returns `true` when the id was not visible before.
    pub fn reveal(&mut self, kind: ElementKind, id: &str) -> bool {
        let set = self.set_mut(kind);
        if set.contains(id) {
            return false;
        }
        set.insert(id.to_owned())
    }

    /// Returns `true` when the id was visible before.
    pub fn hide(&mut self, kind: ElementKind, id: &str) -> bool {
        self.set_mut(kind).remove(id)
    }

    /// Drop every id that `state` does not contain; returns what was dropped.
    pub fn retain_in(&mut self, state: &GraphState) -> VisibilitySet {
        let keep_v = state.vertex_ids();
        let keep_e = state.edge_ids();
        let mut dropped = VisibilitySet::new();
        self.vertices.retain(|id| {
            let keep = keep_v.contains(id.as_str());
            if !keep {
                dropped.vertices.insert(id.clone());
            }
            keep
        });
        self.edges.retain(|id| {
            let keep = keep_e.contains(id.as_str());
            if !keep {
                dropped.edges.insert(id.clone());
            }
            keep
        });
        dropped
    }

    /// Whether every id of `state` is visible and nothing else is.
    pub fn matches(&self, state: &GraphState) -> bool {
        *self == Self::all_of(state)
    }

    /// Visible edges of `state` whose endpoints are not both visible.
    pub fn dangling_edges<'a>(&'a self, state: &'a GraphState) -> impl Iterator<Item = &'a str> {
        state
            .edges
            .iter()
            .filter(move |e| {
                self.contains_edge(&e.id)
                    && !(self.contains_vertex(&e.from) && self.contains_vertex(&e.to))
            })
            .map(|e| e.id.as_str())
    }

    fn set(&self, kind: ElementKind) -> &BTreeSet<String> {
        match kind {
            ElementKind::Vertex => &self.vertices,
            ElementKind::Edge => &self.edges,
        }
    }

    fn set_mut(&mut self, kind: ElementKind) -> &mut BTreeSet<String> {
        match kind {
            ElementKind::Vertex => &mut self.vertices,
            ElementKind::Edge => &mut self.edges,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/visibility.rs"]
mod tests;
