use serde::{Deserialize, Serialize};

/// Named score bracket used to select result feedback text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultTier {
    /// 80 points or more.
    Excellent,
    /// 60 to 79 points.
    Good,
    /// Below 60 points.
    KeepGoing,
}

impl ResultTier {
    /// Score at or above which the quiz counts as passed.
    pub const PASSING_SCORE: u32 = 60;

    /// Maps a final score to its tier.
    #[must_use]
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            ResultTier::Excellent
        } else if score >= Self::PASSING_SCORE {
            ResultTier::Good
        } else {
            ResultTier::KeepGoing
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            ResultTier::Excellent => "Outstanding! \u{1f3c6}",
            ResultTier::Good => "Nice work! \u{1f44d}",
            ResultTier::KeepGoing => "Keep at it! \u{1f4aa}",
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ResultTier::Excellent => "You have a solid grasp of circles!",
            ResultTier::Good => {
                "You understand circles well. One more push and you'll have \
                 it all."
            }
            ResultTier::KeepGoing => {
                "Revisit the earlier sections and try the practice again."
            }
        }
    }

    /// Whether this tier triggers the completion celebration.
    #[must_use]
    pub fn is_passing(self) -> bool {
        !matches!(self, ResultTier::KeepGoing)
    }
}
