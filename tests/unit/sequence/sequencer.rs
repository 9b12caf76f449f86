use super::*;
use crate::foundation::core::ElementKind;
use crate::graph::model::{Edge, Vertex};

fn state(vertices: &[&str], edges: &[(&str, &str, &str)]) -> GraphState {
    GraphState::new(
        vertices
            .iter()
            .enumerate()
            .map(|(i, id)| Vertex::new(*id, 60.0 * i as f64, 200.0))
            .collect(),
        edges
            .iter()
            .map(|(id, from, to)| Edge::new(*id, *from, *to))
            .collect(),
    )
}

fn path(prefix: &str, n: usize) -> GraphState {
    let names: Vec<String> = (0..n).map(|i| format!("{prefix}{i}")).collect();
    let edges: Vec<(String, String, String)> = (1..n)
        .map(|i| {
            (
                format!("{prefix}e{i}"),
                names[i - 1].clone(),
                names[i].clone(),
            )
        })
        .collect();
    GraphState::new(
        names
            .iter()
            .map(|id| Vertex::new(id.clone(), 0.0, 0.0))
            .collect(),
        edges
            .iter()
            .map(|(id, a, b)| Edge::new(id.clone(), a.clone(), b.clone()))
            .collect(),
    )
}

fn assert_no_dangling(seq: &Sequencer) {
    let dangling: Vec<&str> = seq.visible().dangling_edges(seq.target()).collect();
    assert!(
        dangling.is_empty(),
        "dangling edges at {}: {dangling:?}",
        seq.now()
    );
}

#[test]
fn open_animates_single_vertex() {
    let mut seq = Sequencer::default();
    let report = seq.open(state(&["x0"], &[]));

    assert_eq!(report.plan.events.len(), 1);
    assert_eq!(report.plan.events[0].delay, Millis(0));
    assert!(seq.visible().is_empty());
    assert_eq!(seq.phase(), Phase::Animating { generation: 1, remaining: 1 });

    let fired = seq.advance(Millis::ZERO);
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].event.id, "x0");
    assert!(seq.visible().contains_vertex("x0"));
    assert!(seq.visible().edges.is_empty());
    assert_eq!(seq.phase(), Phase::Settled);
}

#[test]
fn identity_transition_is_a_noop() {
    let g = path("v", 4);
    let mut seq = Sequencer::default();
    seq.snap_to(g.clone());
    let before = seq.visible().clone();

    let report = seq.transition_to(g);
    assert!(report.plan.events.is_empty());
    assert_eq!(report.canceled, 0);
    assert_eq!(seq.visible(), &before);
    assert!(seq.is_settled());
}

#[test]
fn completeness_after_all_events_fire() {
    let mut seq = Sequencer::default();
    seq.snap_to(path("v", 2));
    seq.transition_to(path("v", 6));
    assert!(!seq.is_settled());

    let fired = seq.finish();
    assert_eq!(fired.len(), 8);
    assert!(seq.visible().matches(seq.target()));
    assert!(seq.is_settled());
    assert_eq!(seq.now(), Millis(3 * 600 + 250));
}

#[test]
fn no_dangling_edges_at_any_instant() {
    let target = state(
        &["a", "b", "c", "d"],
        &[
            ("ab", "a", "b"),
            ("cd", "c", "d"),
            ("da", "d", "a"),
            ("bc", "b", "c"),
        ],
    );
    let mut seq = Sequencer::default();
    seq.open(target);

    assert_no_dangling(&seq);
    while !seq.is_settled() {
        seq.advance(Millis(10));
        assert_no_dangling(&seq);
    }
    assert!(seq.visible().matches(seq.target()));
}

#[test]
fn pairing_order_reveals_vertices_before_their_edge() {
    let mut seq = Sequencer::default();
    seq.open(state(&["A", "B"], &[("E", "A", "B")]));
    let fired = seq.finish();

    let at = |id: &str| fired.iter().find(|f| f.event.id == id).unwrap().at;
    assert!(at("A") < at("E"));
    assert!(at("B") >= at("A"));
    assert!(at("B") < at("E"));
}

#[test]
fn events_fire_in_non_decreasing_time() {
    let mut seq = Sequencer::default();
    seq.open(path("p", 7));
    let fired = seq.finish();
    assert!(fired.windows(2).all(|w| w[0].at <= w[1].at));
    let first_edge = fired
        .iter()
        .position(|f| f.event.kind == ElementKind::Edge)
        .unwrap();
    assert!(first_edge > 0);
}

#[test]
fn removal_is_immediate() {
    let mut seq = Sequencer::default();
    seq.snap_to(path("v", 5));

    let report = seq.transition_to(path("v", 2));
    assert!(report.plan.events.is_empty());
    assert!(seq.visible().matches(seq.target()));
    assert!(seq.is_settled());
    assert_eq!(seq.now(), Millis::ZERO);
}

#[test]
fn superseding_cancels_and_never_leaks_old_ids() {
    let s1 = path("a", 5);
    let s2 = path("b", 3);

    let mut seq = Sequencer::default();
    seq.open(s1.clone());
    seq.advance(Millis(700));
    assert!(seq.visible().contains_vertex("a1"));
    assert!(!seq.is_settled());

    let report = seq.transition_to(s2.clone());
    assert!(report.canceled > 0);
    assert_eq!(report.generation, 2);
    // Partially revealed S1 ids are gone before any S2 reveal fires.
    assert!(seq.visible().is_empty());

    let s1_ids: Vec<String> = s1
        .vertices
        .iter()
        .map(|v| v.id.clone())
        .chain(s1.edges.iter().map(|e| e.id.clone()))
        .collect();
    while !seq.is_settled() {
        for f in seq.advance(Millis(50)) {
            assert!(!s1_ids.contains(&f.event.id), "leaked {}", f.event.id);
        }
        assert_no_dangling(&seq);
    }
    assert!(seq.visible().matches(&s2));
}

#[test]
fn superseding_back_to_shared_state_finishes_abandoned_reveals() {
    let s0 = path("v", 1);
    let s1 = path("v", 4);

    let mut seq = Sequencer::default();
    seq.snap_to(s0.clone());
    seq.transition_to(s1.clone());
    seq.advance(Millis(300));
    assert!(seq.visible().contains_vertex("v1"));
    assert!(!seq.visible().contains_vertex("v2"));

    // Going back drops the partial reveals immediately.
    seq.transition_to(s0.clone());
    assert!(seq.visible().matches(&s0));
    assert!(seq.is_settled());

    // Forward again mid-way, then supersede with the same target.
    seq.transition_to(s1.clone());
    seq.advance(Millis(650));
    let report = seq.transition_to(s1.clone());
    assert!(report.canceled > 0);
    assert!(report.plan.diff.is_empty());
    assert!(!report.plan.events.is_empty());
    seq.finish();
    assert!(seq.visible().matches(&s1));
}

#[test]
fn rapid_navigation_settles_on_last_target() {
    let steps = [path("v", 1), path("v", 3), path("w", 2), path("v", 5), path("v", 2)];
    let mut seq = Sequencer::default();
    seq.open(steps[0].clone());
    for s in &steps[1..] {
        seq.advance(Millis(120));
        seq.transition_to(s.clone());
        assert_no_dangling(&seq);
    }
    seq.finish();
    assert!(seq.visible().matches(&steps[4]));
}

#[test]
fn clock_never_runs_backwards() {
    let mut seq = Sequencer::default();
    seq.advance_to(Millis(1000));
    seq.advance_to(Millis(10));
    assert_eq!(seq.now(), Millis(1000));

    let report = seq.transition_to(state(&["a"], &[]));
    assert_eq!(report.started_at, Millis(1000));
    assert_eq!(seq.next_due(), Some(Millis(1000)));
}

#[test]
fn new_rejects_invalid_timing() {
    let zero_offset = Timing {
        unit: Millis(600),
        edge_offset: Millis(0),
    };
    assert!(matches!(
        Sequencer::new(zero_offset),
        Err(crate::foundation::error::ProofGraphError::Validation(_))
    ));

    let zero_unit = Timing {
        unit: Millis(0),
        edge_offset: Millis(250),
    };
    assert!(Sequencer::new(zero_unit).is_err());
}

#[test]
fn edges_never_fire_before_their_endpoints() {
    let timing = Timing::new(Millis(600), Millis(1)).unwrap();
    let mut seq = Sequencer::new(timing).unwrap();
    seq.transition_to(state(&["A", "B"], &[("E", "A", "B")]));
    assert_eq!(seq.pending(), 3);

    let fired = seq.finish();
    let order: Vec<(u64, &str)> = fired
        .iter()
        .map(|f| (f.at.0, f.event.id.as_str()))
        .collect();
    assert_eq!(order, vec![(0, "A"), (600, "B"), (601, "E")]);
    assert_eq!(seq.pending(), 0);
}
