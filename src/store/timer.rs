//! The celebration auto-clear timer.
//!
//! At most one timer is outstanding. Scheduling a new one cancels the old
//! handle, so the last scheduled deadline always wins. The timer never
//! fires by itself: the store checks it against its clock on `tick()`.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Identifier of a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// A scheduled deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerHandle {
    pub id: TimerId,
    pub due: Instant,
}

impl TimerHandle {
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }
}

/// Single-slot timer.
#[derive(Clone, Debug, Default)]
pub struct CelebrationTimer {
    handle: Option<TimerHandle>,
    next_id: u64,
}

impl CelebrationTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a deadline `delay` after `now`.
    ///
    /// Returns the new handle and the handle it replaced, if any.
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> (TimerHandle, Option<TimerHandle>) {
        let handle = TimerHandle {
            id: TimerId(self.next_id),
            due: now + delay,
        };
        self.next_id += 1;
        (handle, self.handle.replace(handle))
    }

    /// Cancel the outstanding timer.
    pub fn cancel(&mut self) -> Option<TimerHandle> {
        self.handle.take()
    }

    /// Fire the outstanding timer if its deadline has passed.
    ///
    /// A fired timer is consumed.
    pub fn fire_if_due(&mut self, now: Instant) -> Option<TimerHandle> {
        match self.handle {
            Some(handle) if handle.is_due(now) => self.handle.take(),
            _ => None,
        }
    }

    /// Deadline of the outstanding timer.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.handle.map(|h| h.due)
    }
}
