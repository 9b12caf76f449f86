use std::collections::{BTreeMap, BTreeSet};

use crate::{
    foundation::core::{ElementKind, Millis},
    graph::{
        diff::{GraphDiff, ordered_minus},
        model::{Edge, GraphState},
    },
    sequence::{timing::Timing, visibility::VisibilitySet},
};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// One slot of a reveal sequence: a new vertex, optionally paired with one new incident edge,
/// or a leftover edge on its own.
pub struct SequenceEntry {
    /// Vertex revealed at the start of the slot.
    pub vertex: Option<String>,
    /// Edge revealed after the vertex (and after both of its endpoints).
    pub edge: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// Adds `id` to the visibility set `delay` after the transition starts.
pub struct ScheduledEvent {
    /// Offset from the start of the transition.
    pub delay: Millis,
    /// Which set the id goes into.
    pub kind: ElementKind,
    /// Vertex or edge id.
    pub id: String,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Result of planning one step transition.
pub struct Transition {
    /// Visibility right after the transition starts: removals applied, nothing revealed yet.
    pub visible: VisibilitySet,
    /// Ids removed immediately (present before, absent from the target).
    pub hidden: VisibilitySet,
    /// Plain id diff between the two states.
    pub diff: GraphDiff,
    /// Slot sequence the events were derived from.
    pub sequence: Vec<SequenceEntry>,
    /// Reveal events in non-decreasing delay order.
    pub events: Vec<ScheduledEvent>,
}

impl Transition {
    /// Delay of the last event, or zero when nothing animates.
    pub fn duration(&self) -> Millis {
        self.events.last().map_or(Millis::ZERO, |e| e.delay)
    }

    pub fn is_noop(&self) -> bool {
        self.events.is_empty() && self.hidden.is_empty()
    }

    /// Visibility once every event has fired.
    pub fn settled(&self) -> VisibilitySet {
        let mut out = self.visible.clone();
        for ev in &self.events {
            out.reveal(ev.kind, &ev.id);
        }
        out
    }
}

/// Plan the animation from `prev` (with `prev_visible` on screen) to `next`.
///
/// `prev_visible` is authoritative for what is on screen: visible ids missing from `next` are
/// removed immediately, ids of `next` that are not visible are scheduled as additions. When
/// `prev_visible` holds exactly the ids of `prev`, that is the plain diff of the two states.
#[tracing::instrument(
    skip_all,
    fields(prev_vertices = prev.vertices.len(), next_vertices = next.vertices.len())
)]
pub fn transition(
    prev: &GraphState,
    prev_visible: &VisibilitySet,
    next: &GraphState,
    timing: Timing,
) -> Transition {
    let diff = GraphDiff::between(prev, next);

    let mut visible = prev_visible.clone();
    let mut hidden = visible.retain_in(next);

    // An edge id reused with new endpoints must not stay attached to a hidden vertex.
    let detached: Vec<String> = visible
        .dangling_edges(next)
        .filter(|id| next.edge(id).is_some_and(|e| next.endpoints(e).is_some()))
        .map(str::to_owned)
        .collect();
    for id in detached {
        visible.hide(ElementKind::Edge, &id);
        hidden.edges.insert(id);
    }

    let shown_v: BTreeSet<&str> = visible.vertices.iter().map(String::as_str).collect();
    let shown_e: BTreeSet<&str> = visible.edges.iter().map(String::as_str).collect();
    let new_vertices = ordered_minus(next.vertices.iter().map(|v| v.id.as_str()), &shown_v);
    let new_edges = ordered_minus(next.edges.iter().map(|e| e.id.as_str()), &shown_e);

    let sequence = pair_entries(next, &new_vertices, &new_edges);
    let events = schedule(next, &sequence, timing);

    tracing::debug!(
        hidden = hidden.len(),
        slots = sequence.len(),
        events = events.len(),
        "planned transition"
    );

    Transition {
        visible,
        hidden,
        diff,
        sequence,
        events,
    }
}

/// Pair each new vertex with the first unclaimed new edge touching it, then append the
/// leftover edges as edge-only slots. Both lists keep `next`'s authoring order.
pub fn pair_entries(
    next: &GraphState,
    new_vertices: &[String],
    new_edges: &[String],
) -> Vec<SequenceEntry> {
    let by_id = edge_index(next);
    let mut claimed = vec![false; new_edges.len()];
    let mut out = Vec::with_capacity(new_vertices.len() + new_edges.len());

    for v in new_vertices {
        let slot = (0..new_edges.len()).find(|&i| {
            !claimed[i] && by_id.get(new_edges[i].as_str()).is_some_and(|e| e.touches(v))
        });
        let edge = slot.map(|i| {
            claimed[i] = true;
            new_edges[i].clone()
        });
        out.push(SequenceEntry {
            vertex: Some(v.clone()),
            edge,
        });
    }

    for (i, id) in new_edges.iter().enumerate() {
        if !claimed[i] {
            out.push(SequenceEntry {
                vertex: None,
                edge: Some(id.clone()),
            });
        }
    }

    out
}

/// Turn a slot sequence into timed reveal events.
///
/// Vertex of slot `k` fires at `k * unit`. An edge fires `edge_offset` after the later of its
/// slot start and its endpoints' reveal times, so it never attaches to a hidden vertex.
pub fn schedule(
    next: &GraphState,
    sequence: &[SequenceEntry],
    timing: Timing,
) -> Vec<ScheduledEvent> {
    let by_id = edge_index(next);

    let mut vertex_at: BTreeMap<&str, Millis> = BTreeMap::new();
    for (k, entry) in sequence.iter().enumerate() {
        if let Some(v) = &entry.vertex {
            vertex_at.insert(v.as_str(), timing.unit.times(k));
        }
    }

    let mut events = Vec::with_capacity(sequence.len() * 2);
    for (k, entry) in sequence.iter().enumerate() {
        let slot = timing.unit.times(k);
        if let Some(v) = &entry.vertex {
            events.push(ScheduledEvent {
                delay: slot,
                kind: ElementKind::Vertex,
                id: v.clone(),
            });
        }
        if let Some(e) = &entry.edge {
            let mut start = slot;
            if let Some(edge) = by_id.get(e.as_str()) {
                for end in [edge.from.as_str(), edge.to.as_str()] {
                    if let Some(&at) = vertex_at.get(end) {
                        start = start.max(at);
                    }
                }
            }
            events.push(ScheduledEvent {
                delay: start.saturating_add(timing.edge_offset),
                kind: ElementKind::Edge,
                id: e.clone(),
            });
        }
    }

    // Vertices before edges at equal delays, then slot order.
    events.sort_by_key(|e| (e.delay, e.kind));
    events
}

fn edge_index(state: &GraphState) -> BTreeMap<&str, &Edge> {
    let mut by_id = BTreeMap::new();
    for e in &state.edges {
        by_id.entry(e.id.as_str()).or_insert(e);
    }
    by_id
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/plan.rs"]
mod tests;
