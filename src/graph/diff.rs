use std::collections::BTreeSet;

use crate::graph::model::GraphState;

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// Ids added and removed between two snapshots.
///
/// Added ids keep the order of the newer state; removed ids keep the order of the older one.
pub struct GraphDiff {
    /// Vertex ids present only in the newer state.
    pub added_vertices: Vec<String>,
    /// Vertex ids present only in the older state.
    pub removed_vertices: Vec<String>,
    /// Edge ids present only in the newer state.
    pub added_edges: Vec<String>,
    /// Edge ids present only in the older state.
    pub removed_edges: Vec<String>,
}

impl GraphDiff {
    /// Set differences `next − prev` and `prev − next` over vertex and edge ids.
    pub fn between(prev: &GraphState, next: &GraphState) -> Self {
        let prev_v = prev.vertex_ids();
        let next_v = next.vertex_ids();
        let prev_e = prev.edge_ids();
        let next_e = next.edge_ids();

        Self {
            added_vertices: ordered_minus(next.vertices.iter().map(|v| v.id.as_str()), &prev_v),
            removed_vertices: ordered_minus(prev.vertices.iter().map(|v| v.id.as_str()), &next_v),
            added_edges: ordered_minus(next.edges.iter().map(|e| e.id.as_str()), &prev_e),
            removed_edges: ordered_minus(prev.edges.iter().map(|e| e.id.as_str()), &next_e),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added_vertices.is_empty()
            && self.removed_vertices.is_empty()
            && self.added_edges.is_empty()
            && self.removed_edges.is_empty()
    }
}

/// Items of `ids` not in `exclude`, first occurrence only, in iteration order.
pub(crate) fn ordered_minus<'a>(
    ids: impl Iterator<Item = &'a str>,
    exclude: &BTreeSet<&str>,
) -> Vec<String> {
    let mut seen = BTreeSet::new();
    ids.filter(|id| !exclude.contains(id) && seen.insert(*id))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/graph/diff.rs"]
mod tests;
