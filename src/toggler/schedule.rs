//! Deferred actions keyed by transition.
//!
//! A toggle schedules follow-up work (restoring scroll, resuming size
//! observation) for when its animated transition has finished. Each toggle
//! opens a new [`TransitionId`]; opening one cancels everything still
//! pending from earlier transitions, so rapid toggling never interleaves
//! stale actions with fresh ones.

use std::time::Duration;

/// Monotonically increasing identifier of a toggle transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TransitionId(u64);

impl TransitionId {
    /// The id before any transition has started.
    pub const NONE: Self = Self(0);

    /// The id following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Work deferred until a transition's duration has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledAction {
    /// Smoothly scroll back to the position captured on expand.
    RestoreScroll,
    /// Reconnect the container size observer.
    ResumeObserver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    due: Duration,
    transition: TransitionId,
    action: ScheduledAction,
}

/// Queue of pending actions, ordered by due time then insertion.
#[derive(Debug, Clone, Default)]
pub struct ActionQueue {
    pending: Vec<Pending>,
}

impl ActionQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` for `transition` at time `due`.
    pub fn schedule(&mut self, due: Duration, transition: TransitionId, action: ScheduledAction) {
        // Stable insert after every entry due no later than this one.
        let at = self.pending.partition_point(|p| p.due <= due);
        self.pending.insert(
            at,
            Pending {
                due,
                transition,
                action,
            },
        );
    }

    /// Drop every action belonging to a transition older than `current`.
    ///
    /// Returns the number of cancelled actions.
    pub fn cancel_superseded(&mut self, current: TransitionId) -> usize {
        let before = self.pending.len();
        self.pending.retain(|p| p.transition >= current);
        before - self.pending.len()
    }

    /// Drop every pending `action`, whatever transition scheduled it.
    ///
    /// Returns the number of cancelled actions.
    pub fn cancel_action(&mut self, action: ScheduledAction) -> usize {
        let before = self.pending.len();
        self.pending.retain(|p| p.action != action);
        before - self.pending.len()
    }

    /// Remove and return every action due at or before `now`, in order.
    pub fn take_due(&mut self, now: Duration) -> Vec<(TransitionId, ScheduledAction)> {
        let split = self.pending.partition_point(|p| p.due <= now);
        self.pending
            .drain(..split)
            .map(|p| (p.transition, p.action))
            .collect()
    }

    /// Due time of the earliest pending action.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.first().map(|p| p.due)
    }

    /// Number of pending actions.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
