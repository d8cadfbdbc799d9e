//! Deferred presentation effects.
//!
//! The original pages hide these inside `setTimeout` closures. Here they are
//! explicit commands in a queue the controller owns: an operation schedules
//! an [`Effect`] with a due time, and the presentation layer drains whatever
//! is due on its next turn. With a fixed [`Clock`](crate::time::Clock) the
//! whole delay story becomes a plain unit test.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Visual weight of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Success,
    Warning,
}

/// A presentation-only command scheduled to run after a fixed delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a transient notification.
    ShowMessage { text: String, severity: Severity },
    /// Reveal the correct option and explanation for a quiz question.
    RevealAnswer { question_index: usize },
    /// Show the course-completion celebration.
    ShowCompletion,
}

/// Delay before the welcome message on page load.
pub const WELCOME_DELAY_MS: i64 = 1_000;
/// Delay between advancing a section and the encouragement message.
pub const ENCOURAGEMENT_DELAY_MS: i64 = 500;
/// Delay between selecting an option and revealing correctness.
pub const REVEAL_DELAY_MS: i64 = 500;
/// Delay between a passing quiz result and the completion celebration.
pub const COMPLETION_DELAY_MS: i64 = 2_000;
/// How long a notification stays visible.
pub const NOTIFICATION_DISMISS_MS: i64 = 4_000;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScheduledEffect {
    due: DateTime<Utc>,
    effect: Effect,
}

/// FIFO queue of pending deferred effects.
///
/// Effects scheduled earlier drain earlier; two effects due at the same
/// instant keep their scheduling order. An effect that fires after the user
/// has navigated away is an accepted no-op, so there is no cancellation
/// beyond [`EffectQueue::clear`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectQueue {
    pending: Vec<ScheduledEffect>,
}

impl EffectQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `effect` to fire `delay_ms` after `now`.
    pub fn schedule_in(&mut self, now: DateTime<Utc>, delay_ms: i64, effect: Effect) {
        self.pending.push(ScheduledEffect {
            due: now + Duration::milliseconds(delay_ms),
            effect,
        });
    }

    /// Removes and returns every effect due at or before `now`, in firing
    /// order.
    pub fn drain_due(&mut self, now: DateTime<Utc>) -> Vec<Effect> {
        let mut due = Vec::new();
        let mut remaining = Vec::with_capacity(self.pending.len());
        for scheduled in self.pending.drain(..) {
            if scheduled.due <= now {
                due.push(scheduled);
            } else {
                remaining.push(scheduled);
            }
        }
        due.sort_by_key(|scheduled| scheduled.due);
        self.pending = remaining;
        due.into_iter().map(|scheduled| scheduled.effect).collect()
    }

    /// Drops all pending effects. Used on quiz retake.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
