use crate::{
    foundation::{core::Millis, error::ProofGraphResult},
    graph::model::GraphState,
    sequence::{
        plan::{ScheduledEvent, Transition, transition},
        timer::{TaskHandle, TimerQueue},
        timing::Timing,
        visibility::VisibilitySet,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Where the sequencer is in its reveal schedule.
pub enum Phase {
    /// Nothing pending; the visibility set matches the target state.
    Settled,
    /// Reveals of the current transition are still pending.
    Animating {
        /// Transition counter of the running schedule.
        generation: u64,
        /// Events not fired yet.
        remaining: usize,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// A reveal that has been applied to the visibility set.
pub struct FiredEvent {
    /// Absolute clock time the event was due.
    pub at: Millis,
    /// The event as planned.
    pub event: ScheduledEvent,
}

#[derive(Clone, Debug, serde::Serialize)]
/// What a call to [`Sequencer::transition_to`] did.
pub struct TransitionReport {
    /// Counter of the transition that was started.
    pub generation: u64,
    /// Clock time the transition started at.
    pub started_at: Millis,
    /// Pending events of the superseded transition that were canceled.
    pub canceled: usize,
    /// The plan now being played.
    pub plan: Transition,
}

/// State machine that owns the visibility set and plays reveal schedules on a virtual clock.
///
/// Time only moves when the host calls [`Sequencer::advance`] / [`Sequencer::advance_to`].
/// Starting a new transition cancels every pending event of the previous one first, then plans
/// against what is actually visible, so a superseded animation never leaks into the next step.
pub struct Sequencer {
    timing: Timing,
    target: GraphState,
    visible: VisibilitySet,
    queue: TimerQueue<ScheduledEvent>,
    handles: Vec<TaskHandle>,
    now: Millis,
    generation: u64,
}

impl Sequencer {
    /// Fails when `timing` does not pass [`Timing::validate`].
    pub fn new(timing: Timing) -> ProofGraphResult<Self> {
        timing.validate()?;
        Ok(Self::with_timing(timing))
    }

    fn with_timing(timing: Timing) -> Self {
        Self {
            timing,
            target: GraphState::empty(),
            visible: VisibilitySet::new(),
            queue: TimerQueue::new(),
            handles: Vec::new(),
            now: Millis::ZERO,
            generation: 0,
        }
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn now(&self) -> Millis {
        self.now
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// State the sequencer is animating towards (or has reached).
    pub fn target(&self) -> &GraphState {
        &self.target
    }

    pub fn visible(&self) -> &VisibilitySet {
        &self.visible
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_settled(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn phase(&self) -> Phase {
        if self.queue.is_empty() {
            Phase::Settled
        } else {
            Phase::Animating {
                generation: self.generation,
                remaining: self.queue.len(),
            }
        }
    }

    /// Due time of the next pending reveal.
    pub fn next_due(&mut self) -> Option<Millis> {
        self.queue.next_due()
    }

    /// Start from an empty screen and animate every element of `initial` in.
    #[tracing::instrument(skip_all, fields(vertices = initial.vertices.len()))]
    pub fn open(&mut self, initial: GraphState) -> TransitionReport {
        let canceled = self.cancel_pending();
        self.visible = VisibilitySet::new();
        self.target = GraphState::empty();
        let mut report = self.transition_to(initial);
        report.canceled += canceled;
        report
    }

    /// Jump straight to `state` with everything visible and nothing pending.
    pub fn snap_to(&mut self, state: GraphState) {
        let canceled = self.cancel_pending();
        if canceled > 0 {
            tracing::debug!(canceled, "snap canceled pending reveals");
        }
        self.visible = VisibilitySet::all_of(&state);
        self.target = state;
        self.generation += 1;
    }

    /// Supersede whatever is playing and start animating towards `next`.
    #[tracing::instrument(skip_all, fields(generation = self.generation + 1, now = self.now.0))]
    pub fn transition_to(&mut self, next: GraphState) -> TransitionReport {
        // Cancellation completes before anything new is queued.
        let canceled = self.cancel_pending();

        let plan = transition(&self.target, &self.visible, &next, self.timing);
        self.visible = plan.visible.clone();
        for ev in &plan.events {
            let at = self.now.saturating_add(ev.delay);
            let handle = self.queue.schedule(at, ev.clone());
            self.handles.push(handle);
        }

        self.target = next;
        self.generation += 1;

        if canceled > 0 {
            tracing::debug!(canceled, "superseded running transition");
        }

        TransitionReport {
            generation: self.generation,
            started_at: self.now,
            canceled,
            plan,
        }
    }

    /// Move the clock forward by `by` and fire everything that came due.
    pub fn advance(&mut self, by: Millis) -> Vec<FiredEvent> {
        self.advance_to(self.now.saturating_add(by))
    }

    /// Move the clock to `t` (never backwards) and fire everything due at or before it.
    pub fn advance_to(&mut self, t: Millis) -> Vec<FiredEvent> {
        let t = t.max(self.now);
        let mut fired = Vec::new();
        while let Some((at, _, event)) = self.queue.pop_due(t) {
            self.now = at;
            self.visible.reveal(event.kind, &event.id);
            tracing::trace!(at = at.0, kind = ?event.kind, id = %event.id, "reveal");
            fired.push(FiredEvent { at, event });
        }
        self.now = t;
        if self.queue.is_empty() {
            self.handles.clear();
        }
        fired
    }

    /// Fire every pending reveal, leaving the clock at the last one's due time.
    pub fn finish(&mut self) -> Vec<FiredEvent> {
        let mut fired = Vec::new();
        while let Some(at) = self.queue.next_due() {
            fired.extend(self.advance_to(at));
        }
        fired
    }

    fn cancel_pending(&mut self) -> usize {
        let mut canceled = 0;
        for handle in self.handles.drain(..) {
            if self.queue.cancel(handle).is_some() {
                canceled += 1;
            }
        }
        debug_assert!(self.queue.is_empty());
        canceled
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::with_timing(Timing::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/sequencer.rs"]
mod tests;
