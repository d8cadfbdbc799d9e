use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use coach_core::model::encouragement::{ADVANCE_MESSAGES, COACH_MESSAGES};

/// Picks random messages from the fixed pools.
///
/// Seedable so tests can pin the sequence.
#[derive(Debug, Clone)]
pub struct EncouragementPicker {
    rng: StdRng,
}

impl Default for EncouragementPicker {
    fn default() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl EncouragementPicker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// One message for the post-advance toast.
    pub fn advance_message(&mut self) -> &'static str {
        ADVANCE_MESSAGES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(ADVANCE_MESSAGES[0])
    }

    /// One message for the landing-page coach avatar.
    pub fn coach_message(&mut self) -> &'static str {
        COACH_MESSAGES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(COACH_MESSAGES[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_come_from_the_fixed_pools() {
        let mut picker = EncouragementPicker::with_seed(7);
        for _ in 0..20 {
            assert!(ADVANCE_MESSAGES.contains(&picker.advance_message()));
            assert!(COACH_MESSAGES.contains(&picker.coach_message()));
        }
    }

    #[test]
    fn seeded_pickers_agree() {
        let mut left = EncouragementPicker::with_seed(42);
        let mut right = EncouragementPicker::with_seed(42);
        for _ in 0..10 {
            assert_eq!(left.advance_message(), right.advance_message());
        }
    }
}
