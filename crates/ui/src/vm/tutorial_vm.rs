use coach_core::model::SectionId;
use services::ProgressSnapshot;

/// Visual state of one progress marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerState {
    Active,
    Completed,
    Upcoming,
}

impl MarkerState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            MarkerState::Active => "progress-item progress-item--active",
            MarkerState::Completed => "progress-item progress-item--completed",
            MarkerState::Upcoming => "progress-item",
        }
    }
}

/// One clickable milestone circle above the tutorial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionCardVm {
    pub id: SectionId,
    pub title: &'static str,
    pub step: usize,
    pub state: MarkerState,
}

/// Projects the navigator's progress onto the five milestone markers.
///
/// Detail pages are navigable but have no marker; while one is current no
/// marker is active, matching the original page.
#[must_use]
pub fn map_progress(progress: &ProgressSnapshot) -> Vec<SectionCardVm> {
    SectionId::MILESTONES
        .iter()
        .enumerate()
        .map(|(index, &id)| {
            let state = if id == progress.current {
                MarkerState::Active
            } else if progress.completed.contains(&id) {
                MarkerState::Completed
            } else {
                MarkerState::Upcoming
            };
            SectionCardVm {
                id,
                title: id.title(),
                step: index + 1,
                state,
            }
        })
        .collect()
}

/// Labels for the previous/next buttons under a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionNavVm {
    pub prev: Option<SectionId>,
    pub next: Option<SectionId>,
    pub prev_label: &'static str,
    pub next_label: &'static str,
}

#[must_use]
pub fn map_section_nav(current: SectionId) -> SectionNavVm {
    let prev = current.prev();
    let next = current.next();
    SectionNavVm {
        prev,
        next,
        prev_label: prev.map_or("", SectionId::title),
        next_label: next.map_or("", SectionId::title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(current: SectionId, completed: Vec<SectionId>) -> ProgressSnapshot {
        ProgressSnapshot { current, completed }
    }

    #[test]
    fn markers_reflect_progress() {
        let cards = map_progress(&snapshot(
            SectionId::Formulas,
            vec![SectionId::Basics, SectionId::Properties],
        ));
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].state, MarkerState::Completed);
        assert_eq!(cards[1].state, MarkerState::Completed);
        assert_eq!(cards[2].state, MarkerState::Active);
        assert_eq!(cards[3].state, MarkerState::Upcoming);
        assert_eq!(cards[4].state, MarkerState::Upcoming);
    }

    #[test]
    fn detail_page_leaves_no_marker_active() {
        let cards = map_progress(&snapshot(SectionId::Angles, Vec::new()));
        assert!(cards.iter().all(|card| card.state == MarkerState::Upcoming));
    }

    #[test]
    fn nav_labels_name_the_neighbors() {
        let nav = map_section_nav(SectionId::Properties);
        assert_eq!(nav.prev, Some(SectionId::Basics));
        assert_eq!(nav.next, Some(SectionId::Formulas));
        assert_eq!(nav.prev_label, "Meet the Circle");

        let first = map_section_nav(SectionId::Basics);
        assert_eq!(first.prev, None);
        let last = map_section_nav(SectionId::Quiz);
        assert_eq!(last.next, None);
    }
}
