use crate::{
    foundation::{core::Millis, error::ProofGraphResult},
    proof::model::{Proof, ProofStep},
    sequence::{
        sequencer::{FiredEvent, Sequencer, TransitionReport},
        timing::Timing,
    },
};

/// A proof being stepped through, with its sequencer.
///
/// Step changes clamp at both ends; a change that does not move the index does not start a
/// transition.
pub struct ProofSession {
    proof: Proof,
    index: usize,
    sequencer: Sequencer,
    opening: Option<TransitionReport>,
}

impl ProofSession {
    /// Open `proof` at step 0 and start animating its first graph in.
    #[tracing::instrument(skip_all, fields(proof = %proof.id, steps = proof.steps.len()))]
    pub fn open(proof: Proof, timing: Timing) -> ProofGraphResult<Self> {
        let mut sequencer = Sequencer::new(timing)?;
        let opening = proof
            .steps
            .first()
            .map(|first| sequencer.open(first.graph_state.clone()));
        Ok(Self {
            proof,
            index: 0,
            sequencer,
            opening,
        })
    }

    /// Schedule that animated step 0 in; `None` for a proof without steps.
    pub fn opening(&self) -> Option<&TransitionReport> {
        self.opening.as_ref()
    }

    pub fn proof(&self) -> &Proof {
        &self.proof
    }

    pub fn step_index(&self) -> usize {
        self.index
    }

    pub fn current_step(&self) -> Option<&ProofStep> {
        self.proof.step(self.index)
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.proof.len()
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    pub fn sequencer_mut(&mut self) -> &mut Sequencer {
        &mut self.sequencer
    }

    pub fn next_step(&mut self) -> Option<TransitionReport> {
        if self.is_last() {
            return None;
        }
        self.go_to(self.index + 1)
    }

    pub fn previous_step(&mut self) -> Option<TransitionReport> {
        self.go_to(self.index.saturating_sub(1))
    }

    /// Back to step 0.
    pub fn reset(&mut self) -> Option<TransitionReport> {
        self.go_to(0)
    }

    /// Jump to `index` (clamped to the last step).
    #[tracing::instrument(skip(self), fields(from = self.index))]
    pub fn go_to(&mut self, index: usize) -> Option<TransitionReport> {
        let last = self.proof.len().checked_sub(1)?;
        let index = index.min(last);
        if index == self.index {
            return None;
        }
        self.index = index;
        let next = self.proof.steps[index].graph_state.clone();
        Some(self.sequencer.transition_to(next))
    }

    pub fn advance(&mut self, by: Millis) -> Vec<FiredEvent> {
        self.sequencer.advance(by)
    }

    pub fn finish(&mut self) -> Vec<FiredEvent> {
        self.sequencer.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/proof/session.rs"]
mod tests;
