//! proofgraph animates graph-theory proofs one step at a time.
//!
//! Each proof step is a complete [`GraphState`]. Moving between steps diffs the two snapshots
//! and plays a staged reveal: new vertices appear slot by slot, each followed by one incident
//! new edge, and removed elements vanish at once.
//!
//! # Pipeline overview
//!
//! 1. **Diff**: `(previous, next) -> GraphDiff` (what was added, what was removed)
//! 2. **Plan**: `(previous, visible, next) -> Transition` (immediate removals + timed reveals)
//! 3. **Play**: [`Sequencer`] owns the [`VisibilitySet`] and fires reveals as its clock advances
//! 4. **Render**: `(target, visible) -> Scene -> SVG`
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: planning is pure, and the sequencer's clock only moves when told to.
//! - **Supersede safely**: a new transition cancels the pending reveals of the previous one
//!   before anything else is queued, and plans against what is actually on screen.
//! - **Edges follow vertices**: an edge is never revealed before both of its endpoints.
#![forbid(unsafe_code)]

mod foundation;
mod graph;
mod proof;
mod render;
mod sequence;

pub use foundation::core::{BezPath, ElementKind, Millis, Point, Vec2};
pub use foundation::error::{ProofGraphError, ProofGraphResult};
pub use graph::diff::GraphDiff;
pub use graph::model::{Edge, GraphState, Vertex};
pub use proof::catalog::{builtin, builtin_ids, builtins, resolve};
pub use proof::model::{Proof, ProofStep};
pub use proof::session::ProofSession;
pub use render::scene::{
    EdgeStroke, Scene, VERTEX_RADIUS, VIEW_HEIGHT, VIEW_WIDTH, VertexSprite, build_scene,
    edge_path,
};
pub use sequence::plan::{
    ScheduledEvent, SequenceEntry, Transition, pair_entries, schedule, transition,
};
pub use sequence::sequencer::{FiredEvent, Phase, Sequencer, TransitionReport};
pub use sequence::timing::Timing;
pub use sequence::visibility::VisibilitySet;
