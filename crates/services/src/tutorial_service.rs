use coach_core::effects::{ENCOURAGEMENT_DELAY_MS, WELCOME_DELAY_MS};
use coach_core::model::SectionId;
use coach_core::model::encouragement::WELCOME_MESSAGE;
use coach_core::{Clock, Effect, EffectQueue, Navigator, Severity};
use serde::{Deserialize, Serialize};

use crate::encouragement::EncouragementPicker;

/// Projection of navigation state for the progress markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub current: SectionId,
    pub completed: Vec<SectionId>,
}

/// Orchestrates the tutorial navigator: navigation itself stays pure in the
/// core; this layer adds the clock, the deferred encouragement message, and
/// the welcome greeting.
#[derive(Debug, Clone)]
pub struct TutorialService {
    navigator: Navigator,
    clock: Clock,
    effects: EffectQueue,
    picker: EncouragementPicker,
}

impl TutorialService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            navigator: Navigator::default(),
            clock,
            effects: EffectQueue::new(),
            picker: EncouragementPicker::new(),
        }
    }

    #[must_use]
    pub fn with_start(mut self, start: SectionId) -> Self {
        self.navigator = Navigator::new(start);
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.picker = EncouragementPicker::with_seed(seed);
        self
    }

    #[must_use]
    pub fn current(&self) -> SectionId {
        self.navigator.current()
    }

    /// Plain navigation, no side effects.
    pub fn go_to(&mut self, target: SectionId) {
        self.navigator.go_to(target);
    }

    /// Navigation from an untyped key; unknown keys are dropped silently.
    pub fn go_to_key(&mut self, key: &str) -> bool {
        self.navigator.go_to_key(key)
    }

    /// Navigates forward with the "next step" button semantics: same as
    /// `go_to`, plus one random encouragement message after a short delay.
    pub fn advance_to(&mut self, target: SectionId) {
        self.navigator.go_to(target);
        let text = self.picker.advance_message().to_string();
        self.effects.schedule_in(
            self.clock.now(),
            ENCOURAGEMENT_DELAY_MS,
            Effect::ShowMessage {
                text,
                severity: Severity::Success,
            },
        );
    }

    /// Advances to the next section in order, with the encouragement side
    /// effect. `None` (and no effect) at the last section.
    pub fn advance_next(&mut self) -> Option<SectionId> {
        let target = self.navigator.current().next()?;
        self.advance_to(target);
        Some(target)
    }

    /// Steps back one section. No encouragement for going backwards.
    pub fn back(&mut self) -> Option<SectionId> {
        self.navigator.back()
    }

    /// Queues the one-time welcome greeting.
    pub fn schedule_welcome(&mut self) {
        self.effects.schedule_in(
            self.clock.now(),
            WELCOME_DELAY_MS,
            Effect::ShowMessage {
                text: WELCOME_MESSAGE.to_string(),
                severity: Severity::Info,
            },
        );
    }

    #[must_use]
    pub fn progress(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            current: self.navigator.current(),
            completed: self.navigator.completed_milestones(),
        }
    }

    #[must_use]
    pub fn is_milestone_completed(&self, section: SectionId) -> bool {
        self.navigator.is_milestone_completed(section)
    }

    /// Removes and returns every deferred effect that is due now.
    pub fn drain_due_effects(&mut self) -> Vec<Effect> {
        self.effects.drain_due(self.clock.now())
    }

    #[must_use]
    pub fn pending_effects(&self) -> usize {
        self.effects.pending()
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Mutable clock access, used by tests to advance a fixed clock.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }
}
