use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use crate::foundation::core::Millis;

/// Handle to one scheduled task; used to cancel it before it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskHandle(u64);

/// Deterministic single-threaded timer queue with cancelable tasks.
///
/// Determinism rule: tasks due at the same instant fire in scheduling order.
/// Cancellation is lazy on the heap side; a canceled handle is skipped when it surfaces.
pub(crate) struct TimerQueue<T> {
    heap: BinaryHeap<Reverse<(Millis, u64)>>,
    pending: BTreeMap<u64, T>,
    next_seq: u64,
}

impl<T> TimerQueue<T> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            pending: BTreeMap::new(),
            next_seq: 0,
        }
    }

    pub(crate) fn schedule(&mut self, at: Millis, task: T) -> TaskHandle {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.heap.push(Reverse((at, seq)));
        self.pending.insert(seq, task);
        TaskHandle(seq)
    }

    /// Returns the task if it had not fired or been canceled yet.
    pub(crate) fn cancel(&mut self, handle: TaskHandle) -> Option<T> {
        self.pending.remove(&handle.0)
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Due time of the earliest live task.
    pub(crate) fn next_due(&mut self) -> Option<Millis> {
        self.discard_canceled();
        self.heap.peek().map(|Reverse((at, _))| *at)
    }

    /// Pop the earliest live task due at or before `now`.
    pub(crate) fn pop_due(&mut self, now: Millis) -> Option<(Millis, TaskHandle, T)> {
        self.discard_canceled();
        let &Reverse((at, seq)) = self.heap.peek()?;
        if at > now {
            return None;
        }
        let _ = self.heap.pop();
        let task = self.pending.remove(&seq)?;
        Some((at, TaskHandle(seq), task))
    }

    fn discard_canceled(&mut self) {
        while let Some(&Reverse((_, seq))) = self.heap.peek() {
            if self.pending.contains_key(&seq) {
                break;
            }
            let _ = self.heap.pop();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/timer.rs"]
mod tests;
