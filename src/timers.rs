//! Deadline-ordered timer queue driven by a host clock.
//!
//! The core never sleeps. It records what should happen at which millisecond
//! and the host calls back with the current time; the browser binding arms a
//! single real timeout for [`TimerQueue::next_deadline`]. Timers with equal
//! deadlines fire in scheduling order.

use std::collections::BTreeMap;

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

/// Handle to a scheduled timer, usable for cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A timer popped from the queue once its deadline has passed.
#[derive(Debug, Clone, PartialEq)]
pub struct Fired<A> {
    pub id: TimerId,
    pub due_ms: u64,
    pub action: A,
}

#[derive(Debug, Clone)]
pub struct TimerQueue<A> {
    pending: BTreeMap<(u64, TimerId), A>,
    next_id: u64,
}

impl<A> Default for TimerQueue<A> {
    fn default() -> Self {
        Self { pending: BTreeMap::new(), next_id: 0 }
    }
}

impl<A> TimerQueue<A> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to fire at `now_ms + delay_ms`.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u32, action: A) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let due = now_ms.saturating_add(u64::from(delay_ms));
        self.pending.insert((due, id), action);
        id
    }

    /// Cancel a pending timer. Returns `false` if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(_, pending), _| *pending != id);
        self.pending.len() != before
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.keys().next().map(|(due, _)| *due)
    }

    /// Pop the earliest timer if its deadline is at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<Fired<A>> {
        if self.next_deadline()? > now_ms {
            return None;
        }
        let ((due_ms, id), action) = self.pending.pop_first()?;
        Some(Fired { id, due_ms, action })
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

// =============================================================================
// Host timeout planning
// =============================================================================

/// The one real timeout a host has armed for the queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArmedTimeout {
    pub due_ms: u64,
    /// Set once the timeout's callback has run. A fired timeout never runs
    /// again, even if its deadline is still the earliest one.
    pub fired: bool,
}

/// What the host should do with its real timeout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rearm {
    /// Nothing is pending; drop any armed timeout.
    Disarm,
    /// The armed timeout already covers the earliest deadline.
    Keep,
    /// Replace the armed timeout with one for `due_ms`.
    Arm { due_ms: u64 },
}

/// Decide how to cover `next_deadline` given the currently armed timeout.
pub fn plan_rearm(current: Option<ArmedTimeout>, next_deadline: Option<u64>) -> Rearm {
    let Some(due_ms) = next_deadline else {
        return Rearm::Disarm;
    };
    match current {
        Some(armed) if armed.due_ms == due_ms && !armed.fired => Rearm::Keep,
        _ => Rearm::Arm { due_ms },
    }
}
