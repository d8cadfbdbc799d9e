//! Tutorial Navigator: which section is visible and which milestones are
//! marked complete.

use crate::model::SectionId;

/// Owns the single current section. Completion is derived, never stored, so
/// there is nothing to persist and nothing to get out of sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current: SectionId,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(SectionId::Basics)
    }
}

impl Navigator {
    #[must_use]
    pub fn new(start: SectionId) -> Self {
        Self { current: start }
    }

    #[must_use]
    pub fn current(&self) -> SectionId {
        self.current
    }

    /// Makes `target` the current section. Idempotent.
    pub fn go_to(&mut self, target: SectionId) {
        self.current = target;
    }

    /// String-keyed entry point for stale references (deep links, data
    /// attributes). Unknown keys are silently ignored and leave the current
    /// section unchanged; returns whether navigation happened.
    pub fn go_to_key(&mut self, key: &str) -> bool {
        match SectionId::from_key(key) {
            Some(target) => {
                self.go_to(target);
                true
            }
            None => false,
        }
    }

    /// Moves to the next section in the full order, if any.
    pub fn forward(&mut self) -> Option<SectionId> {
        let next = self.current.next()?;
        self.go_to(next);
        Some(next)
    }

    /// Moves to the previous section in the full order, if any.
    pub fn back(&mut self) -> Option<SectionId> {
        let prev = self.current.prev()?;
        self.go_to(prev);
        Some(prev)
    }

    /// The milestones completed so far: every milestone strictly before the
    /// current section in the milestone subsequence.
    ///
    /// Sections outside the milestone list have no milestone position, so
    /// while they are current nothing counts as completed. That asymmetry
    /// matches the original behavior and is kept on purpose.
    #[must_use]
    pub fn completed_milestones(&self) -> Vec<SectionId> {
        let Some(current_pos) = self.current.milestone_position() else {
            return Vec::new();
        };
        SectionId::MILESTONES[..current_pos].to_vec()
    }

    #[must_use]
    pub fn is_milestone_completed(&self, section: SectionId) -> bool {
        self.completed_milestones().contains(&section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_basics_by_default() {
        let navigator = Navigator::default();
        assert_eq!(navigator.current(), SectionId::Basics);
        assert!(navigator.completed_milestones().is_empty());
    }

    #[test]
    fn go_to_is_idempotent() {
        let mut navigator = Navigator::default();
        navigator.go_to(SectionId::Formulas);
        navigator.go_to(SectionId::Formulas);
        assert_eq!(navigator.current(), SectionId::Formulas);
    }

    #[test]
    fn unknown_key_leaves_current_unchanged() {
        let mut navigator = Navigator::new(SectionId::Properties);
        assert!(!navigator.go_to_key("hyperbola"));
        assert_eq!(navigator.current(), SectionId::Properties);
        assert!(navigator.go_to_key("quiz"));
        assert_eq!(navigator.current(), SectionId::Quiz);
    }

    #[test]
    fn forward_and_back_walk_the_full_order() {
        let mut navigator = Navigator::default();
        assert_eq!(navigator.forward(), Some(SectionId::Properties));
        assert_eq!(navigator.back(), Some(SectionId::Basics));
        assert_eq!(navigator.back(), None);

        navigator.go_to(SectionId::Quiz);
        assert_eq!(navigator.forward(), None);
        assert_eq!(navigator.current(), SectionId::Quiz);
    }

    #[test]
    fn completed_set_precedes_current_and_excludes_it() {
        let mut navigator = Navigator::default();
        navigator.go_to(SectionId::Properties);
        navigator.go_to(SectionId::Formulas);

        let completed = navigator.completed_milestones();
        assert_eq!(completed, vec![SectionId::Basics, SectionId::Properties]);
        assert!(!completed.contains(&SectionId::Formulas));
        assert!(!navigator.is_milestone_completed(SectionId::Interactive));
    }

    #[test]
    fn detail_pages_never_complete_anything() {
        let mut navigator = Navigator::default();
        navigator.go_to(SectionId::Positions);
        assert!(navigator.completed_milestones().is_empty());

        // A detail page itself never registers as completed either.
        navigator.go_to(SectionId::Quiz);
        assert!(!navigator.is_milestone_completed(SectionId::Positions));
    }

    #[test]
    fn quiz_completes_all_other_milestones() {
        let mut navigator = Navigator::default();
        navigator.go_to(SectionId::Quiz);
        assert_eq!(
            navigator.completed_milestones(),
            vec![
                SectionId::Basics,
                SectionId::Properties,
                SectionId::Formulas,
                SectionId::Interactive,
            ]
        );
    }
}
