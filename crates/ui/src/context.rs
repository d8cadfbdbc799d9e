use std::sync::Arc;

use coach_core::Clock;
use coach_core::model::SectionId;
use services::{EncouragementPicker, QuizService, TutorialService};

/// What the composition root (the desktop binary, or a test harness) must
/// provide to the views.
pub trait UiApp: Send + Sync {
    fn start_section(&self) -> SectionId;
    fn clock(&self) -> Clock;
    /// Pin the encouragement RNG; `None` means real entropy.
    fn encouragement_seed(&self) -> Option<u64>;
}

/// Per-launch configuration plus service constructors for the views.
///
/// The services themselves hold page state, so each view constructs its own
/// instance inside a signal; the context only carries the launch knobs.
#[derive(Clone, Copy, PartialEq)]
pub struct AppContext {
    start_section: SectionId,
    clock: Clock,
    seed: Option<u64>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            start_section: app.start_section(),
            clock: app.clock(),
            seed: app.encouragement_seed(),
        }
    }

    #[must_use]
    pub fn start_section(&self) -> SectionId {
        self.start_section
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn new_tutorial(&self) -> TutorialService {
        let tutorial = TutorialService::new(self.clock).with_start(self.start_section);
        match self.seed {
            Some(seed) => tutorial.with_seed(seed),
            None => tutorial,
        }
    }

    #[must_use]
    pub fn new_quiz(&self) -> QuizService {
        QuizService::new(self.clock)
    }

    #[must_use]
    pub fn new_picker(&self) -> EncouragementPicker {
        match self.seed {
            Some(seed) => EncouragementPicker::with_seed(seed),
            None => EncouragementPicker::new(),
        }
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
