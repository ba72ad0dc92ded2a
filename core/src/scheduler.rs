use core::cmp::{Ordering, Reverse};
use core::time::Duration;
use std::collections::BinaryHeap;

use crate::ExplosionStep;

/// Capability to run an [`ExplosionStep`] once `delay` has passed.
///
/// Implementations hand the step back to [`crate::Game::fire`] when the delay is up. Steps are
/// never cancelled.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, step: ExplosionStep);
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Pending {
    deadline: Duration,
    seq: u64,
    step: ExplosionStep,
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.deadline, self.seq).cmp(&(other.deadline, other.seq))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-threaded timer queue running on a virtual clock.
///
/// The owner moves the clock with [`TimerQueue::advance`] and receives due steps ordered by
/// deadline, ties broken by scheduling order.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_seq: u64,
    pending: BinaryHeap<Reverse<Pending>>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.peek().map(|Reverse(pending)| pending.deadline)
    }

    /// Time left until the next step is due, zero if one is overdue.
    pub fn time_to_next(&self) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_sub(self.now))
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Moves the clock forward by `by` and pops every step that became due.
    pub fn advance(&mut self, by: Duration) -> Vec<ExplosionStep> {
        self.now += by;

        let mut due = Vec::new();
        while let Some(Reverse(pending)) = self.pending.peek() {
            if pending.deadline > self.now {
                break;
            }
            if let Some(Reverse(pending)) = self.pending.pop() {
                due.push(pending.step);
            }
        }
        due
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, delay: Duration, step: ExplosionStep) {
        let pending = Pending {
            deadline: self.now + delay,
            seq: self.next_seq,
            step,
        };
        self.next_seq += 1;
        self.pending.push(Reverse(pending));
    }
}
