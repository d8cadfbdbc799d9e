use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One navigable content block of the circle tutorial.
///
/// The sequence is fixed at startup and never reordered. Variant order here
/// is the navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Basics,
    Properties,
    Formulas,
    Angles,
    Inscribed,
    Positions,
    Interactive,
    Quiz,
}

impl SectionId {
    /// Every section, in navigation order.
    pub const ALL: [SectionId; 8] = [
        SectionId::Basics,
        SectionId::Properties,
        SectionId::Formulas,
        SectionId::Angles,
        SectionId::Inscribed,
        SectionId::Positions,
        SectionId::Interactive,
        SectionId::Quiz,
    ];

    /// The subset of sections that participates in progress tracking.
    ///
    /// Deliberately shorter than [`SectionId::ALL`]: the detail pages
    /// (`Angles`, `Inscribed`, `Positions`) are navigable but never count
    /// toward completion.
    pub const MILESTONES: [SectionId; 5] = [
        SectionId::Basics,
        SectionId::Properties,
        SectionId::Formulas,
        SectionId::Interactive,
        SectionId::Quiz,
    ];

    /// Stable string key, used in routes and deep links.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            SectionId::Basics => "basics",
            SectionId::Properties => "properties",
            SectionId::Formulas => "formulas",
            SectionId::Angles => "angles",
            SectionId::Inscribed => "inscribed",
            SectionId::Positions => "positions",
            SectionId::Interactive => "interactive",
            SectionId::Quiz => "quiz",
        }
    }

    /// Parses a string key. Unknown keys yield `None`, never a panic.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.key() == key)
    }

    /// Display title shown in navigation buttons and progress markers.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            SectionId::Basics => "Meet the Circle",
            SectionId::Properties => "Circle Properties",
            SectionId::Formulas => "Formulas & Calculation",
            SectionId::Angles => "Inscribed Angle Theorem",
            SectionId::Inscribed => "Cyclic Quadrilaterals",
            SectionId::Positions => "Relative Positions",
            SectionId::Interactive => "Hands-On Practice",
            SectionId::Quiz => "Knowledge Check",
        }
    }

    /// Ordinal position in the full navigation order.
    #[must_use]
    pub fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|section| *section == self)
            .unwrap_or_default()
    }

    /// Position within the milestone subsequence, if this section is one.
    #[must_use]
    pub fn milestone_position(self) -> Option<usize> {
        Self::MILESTONES
            .iter()
            .position(|section| *section == self)
    }

    /// The section after this one in navigation order.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.position() + 1).copied()
    }

    /// The section before this one in navigation order.
    #[must_use]
    pub fn prev(self) -> Option<Self> {
        self.position().checked_sub(1).map(|i| Self::ALL[i])
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error type for parsing a section key from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSectionError {
    raw: String,
}

impl fmt::Display for ParseSectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section key: {}", self.raw)
    }
}

impl std::error::Error for ParseSectionError {}

impl FromStr for SectionId {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| ParseSectionError { raw: s.to_string() })
    }
}

/// Static content for one tutorial section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionContent {
    pub id: SectionId,
    pub lede: &'static str,
    pub points: &'static [&'static str],
}

/// Returns the course content for a section.
#[must_use]
pub fn section_content(id: SectionId) -> SectionContent {
    match id {
        SectionId::Basics => SectionContent {
            id,
            lede: "A circle is the set of all points in a plane at a fixed \
                   distance (the radius) from a fixed point (the center).",
            points: &[
                "The center is usually written O, the radius r.",
                "The diameter d passes through the center: d = 2r.",
                "Every point on the circle is exactly r away from O.",
            ],
        },
        SectionId::Properties => SectionContent {
            id,
            lede: "A few properties come up again and again when working \
                   with circles.",
            points: &[
                "A chord is a segment joining two points on the circle; the \
                 diameter is the longest chord.",
                "A diameter perpendicular to a chord bisects that chord and \
                 its arcs (the perpendicular-chord theorem).",
                "All radii of a circle are equal.",
            ],
        },
        SectionId::Formulas => SectionContent {
            id,
            lede: "Two formulas cover most circle calculations.",
            points: &[
                "Circumference: C = 2\u{3c0}r = \u{3c0}d.",
                "Area: S = \u{3c0}r\u{b2}.",
                "Doubling the radius doubles the circumference but \
                 quadruples the area.",
            ],
        },
        SectionId::Angles => SectionContent {
            id,
            lede: "An inscribed angle is half the central angle that \
                   subtends the same arc.",
            points: &[
                "Inscribed angles on the same arc are equal.",
                "An angle inscribed in a semicircle is a right angle.",
            ],
        },
        SectionId::Inscribed => SectionContent {
            id,
            lede: "A quadrilateral whose vertices all lie on one circle is \
                   called cyclic.",
            points: &[
                "Opposite angles of a cyclic quadrilateral sum to 180\u{b0}.",
                "An exterior angle equals the opposite interior angle.",
            ],
        },
        SectionId::Positions => SectionContent {
            id,
            lede: "A line and a circle can miss, touch, or cross; compare \
                   the center distance with the radius.",
            points: &[
                "d > r: the line misses the circle.",
                "d = r: the line is tangent, touching at one point.",
                "d < r: the line is a secant, crossing at two points.",
            ],
        },
        SectionId::Interactive => SectionContent {
            id,
            lede: "Try the calculator: enter a radius and read off the \
                   diameter, circumference, and area.",
            points: &[
                "Use \u{3c0} \u{2248} 3.14159 and round to two decimals.",
                "When you can predict the results before they appear, move \
                 on to the quiz.",
            ],
        },
        SectionId::Quiz => SectionContent {
            id,
            lede: "Five questions, 20 points each. You can retake the quiz \
                   as many times as you like.",
            points: &[
                "Pick an answer, read the explanation, then move on.",
                "80 or more is an excellent score.",
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_key(section.key()), Some(section));
            assert_eq!(section.key().parse::<SectionId>().unwrap(), section);
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert_eq!(SectionId::from_key("perimeter"), None);
        assert!("".parse::<SectionId>().is_err());
    }

    #[test]
    fn order_is_stable() {
        assert_eq!(SectionId::Basics.position(), 0);
        assert_eq!(SectionId::Quiz.position(), 7);
        assert_eq!(SectionId::Basics.next(), Some(SectionId::Properties));
        assert_eq!(SectionId::Basics.prev(), None);
        assert_eq!(SectionId::Quiz.next(), None);
        assert_eq!(SectionId::Quiz.prev(), Some(SectionId::Interactive));
    }

    #[test]
    fn milestone_positions_skip_detail_pages() {
        assert_eq!(SectionId::Basics.milestone_position(), Some(0));
        assert_eq!(SectionId::Interactive.milestone_position(), Some(3));
        assert_eq!(SectionId::Angles.milestone_position(), None);
        assert_eq!(SectionId::Positions.milestone_position(), None);
    }

    #[test]
    fn every_section_has_content() {
        for section in SectionId::ALL {
            let content = section_content(section);
            assert_eq!(content.id, section);
            assert!(!content.lede.is_empty());
            assert!(!content.points.is_empty());
        }
    }
}
