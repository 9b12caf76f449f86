use super::*;
use crate::proof::catalog::builtin;

fn session() -> ProofSession {
    ProofSession::open(builtin("longest-path-cycle").unwrap(), Timing::default()).unwrap()
}

#[test]
fn open_starts_at_first_step_and_animates_it_in() {
    let mut s = session();
    assert_eq!(s.step_index(), 0);
    assert!(s.is_first());
    assert!(!s.sequencer().is_settled());

    let opening = s.opening().unwrap();
    assert_eq!(opening.generation, 1);
    assert_eq!(opening.plan.events.len(), 1);
    assert_eq!(opening.plan.events[0].id, "x0");

    s.finish();
    let g = &s.current_step().unwrap().graph_state;
    assert!(s.sequencer().visible().matches(g));
}

#[test]
fn navigation_clamps_at_both_ends() {
    let mut s = session();
    assert!(s.previous_step().is_none());
    assert_eq!(s.step_index(), 0);

    let last = s.proof().len() - 1;
    assert!(s.go_to(100).is_some());
    assert_eq!(s.step_index(), last);
    assert!(s.is_last());
    assert!(s.next_step().is_none());
    assert_eq!(s.step_index(), last);

    assert!(s.reset().is_some());
    assert_eq!(s.step_index(), 0);
    assert!(s.reset().is_none());
}

#[test]
fn every_step_settles_on_its_graph() {
    let mut s = session();
    s.finish();
    while s.next_step().is_some() {
        s.finish();
        let g = s.current_step().unwrap().graph_state.clone();
        assert!(s.sequencer().visible().matches(&g), "step {}", s.step_index());
    }
    while s.previous_step().is_some() {
        s.finish();
        let g = s.current_step().unwrap().graph_state.clone();
        assert!(s.sequencer().visible().matches(&g), "step {}", s.step_index());
    }
}

#[test]
fn step_one_reveals_path_in_pairs() {
    let mut s = session();
    s.finish();
    let report = s.next_step().unwrap();

    let first: Vec<(u64, &str)> = report
        .plan
        .events
        .iter()
        .take(4)
        .map(|e| (e.delay.0, e.id.as_str()))
        .collect();
    assert_eq!(first, vec![(0, "x1"), (250, "e1"), (600, "xi"), (850, "e2")]);
    assert_eq!(report.plan.events.len(), 12);
}

#[test]
fn hiding_vertex_v_is_immediate() {
    let mut s = session();
    s.go_to(3);
    s.finish();
    assert!(s.sequencer().visible().contains_vertex("v"));

    let report = s.next_step().unwrap();
    assert!(report.plan.events.is_empty());
    assert!(!s.sequencer().visible().contains_vertex("v"));
    assert!(!s.sequencer().visible().contains_edge("e7"));
}

#[test]
fn quick_clicks_cancel_previous_animation() {
    let mut s = session();
    s.advance(Millis(10));
    s.next_step();
    s.advance(Millis(300));
    let report = s.previous_step().unwrap();
    assert!(report.canceled > 0);

    s.finish();
    let g = s.current_step().unwrap().graph_state.clone();
    assert!(s.sequencer().visible().matches(&g));
}

#[test]
fn open_rejects_invalid_timing() {
    let proof = builtin("longest-path-cycle").unwrap();
    let timing = Timing {
        unit: Millis(600),
        edge_offset: Millis(0),
    };
    assert!(ProofSession::open(proof, timing).is_err());
}

#[test]
fn host_can_drive_the_clock_directly() {
    let mut s = session();
    let fired = s.sequencer_mut().advance_to(Millis(0));
    assert_eq!(fired.len(), 1);
    assert_eq!(s.sequencer().now(), Millis(0));
    assert!(s.sequencer().is_settled());
}
