//! Cancellable, generation-stamped timers
//!
//! Every timed transition in the dashboard (navigation settle, toast dismissal,
//! copy revert) goes through one [`Scheduler`]. A timer is identified by its
//! [`TimerKey`]; scheduling a key that is already pending replaces the old timer,
//! so each logical entity has at most one outstanding timer.
//!
//! Each scheduled timer gets a fresh generation number. Owners keep the
//! [`TimerTicket`] they were handed and compare it against the ticket that
//! fires, so a callback from a superseded timer can never mutate state.
//!
//! Time is virtual: a [`Duration`] since the scheduler was created. The front-end
//! maps wall-clock time onto it, tests step it directly.

use std::collections::HashMap;
use std::time::Duration;

use crate::types::AffordanceId;

/// Logical owner of a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimerKey {
    NavigationSettle,
    ToastDismiss,
    AffordanceRevert(AffordanceId),
}

/// Handle for one scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTicket {
    pub key: TimerKey,
    pub generation: u64,
    pub deadline: Duration,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_generation: u64,
    pending: HashMap<TimerKey, TimerTicket>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `key` to fire after `delay`, cancelling any timer pending for the same key.
    pub fn schedule(&mut self, key: TimerKey, delay: Duration) -> TimerTicket {
        self.next_generation += 1;
        let ticket = TimerTicket {
            key,
            generation: self.next_generation,
            deadline: self.now + delay,
        };

        if let Some(previous) = self.pending.insert(key, ticket) {
            log::trace!(
                "Timer {:?} gen {} superseded by gen {}",
                key,
                previous.generation,
                ticket.generation
            );
        }

        ticket
    }

    /// Cancel the pending timer for `key`; returns whether one existed.
    pub fn cancel(&mut self, key: &TimerKey) -> bool {
        self.pending.remove(key).is_some()
    }

    pub fn is_pending(&self, key: &TimerKey) -> bool {
        self.pending.contains_key(key)
    }

    /// Whether `ticket` is still the live timer for its key
    pub fn is_current(&self, ticket: &TimerTicket) -> bool {
        self.pending.get(&ticket.key) == Some(ticket)
    }

    /// Earliest pending deadline, used by the front-end to size its poll timeout
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.values().map(|t| t.deadline).min()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Remove and return the earliest timer whose deadline is at or before `until`.
    ///
    /// The clock moves forward to that deadline, so handlers run at the virtual
    /// time their timer was due. Ties are broken by generation (scheduling order).
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerTicket> {
        let ticket = self
            .pending
            .values()
            .filter(|t| t.deadline <= until)
            .min_by_key(|t| (t.deadline, t.generation))
            .copied()?;

        self.pending.remove(&ticket.key);
        self.now = self.now.max(ticket.deadline);
        Some(ticket)
    }

    /// Move the clock forward to `now`. The clock never goes backwards.
    pub fn advance_clock(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}
