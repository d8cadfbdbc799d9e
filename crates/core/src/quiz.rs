//! Quiz Engine: the question-by-question state machine behind the knowledge
//! check.

use crate::model::{
    AnswerChoice, POINTS_PER_QUESTION, Question, QuestionBank, ResultTier, SectionId,
};

/// What was selected for the current question, and whether it was right.
///
/// Once recorded it locks the question: further selections are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRecord {
    pub choice: AnswerChoice,
    pub correct: bool,
}

/// Lifecycle of one quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuizState {
    NotStarted,
    InProgress {
        index: usize,
        score: u32,
        answered: Option<AnswerRecord>,
    },
    Completed {
        score: u32,
    },
}

/// Result of a `select_answer` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// First selection for this question; correctness and scoring are final
    /// as of this moment.
    Recorded { correct: bool },
    /// The question was already answered (or no question is active).
    Ignored,
}

/// Result of a `next_question` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the next question, unanswered.
    NextQuestion { index: usize },
    /// The bank is exhausted; the quiz is complete.
    Completed { score: u32, tier: ResultTier },
    /// Current question not answered yet, or quiz not in progress.
    Ignored,
}

/// Final score with its feedback tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: u32,
    pub tier: ResultTier,
}

/// The quiz state machine. Owns the immutable bank and all mutable run state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizEngine {
    bank: QuestionBank,
    state: QuizState,
}

impl QuizEngine {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            state: QuizState::NotStarted,
        }
    }

    /// Begins a run: question 0, score 0, unanswered.
    pub fn start(&mut self) {
        self.state = QuizState::InProgress {
            index: 0,
            score: 0,
            answered: None,
        };
    }

    /// Records the first selection for the active question.
    ///
    /// Scoring is deterministic at selection time; the visual reveal delay
    /// is presentation-only and never gates the score update.
    pub fn select_answer(&mut self, choice: AnswerChoice) -> SelectOutcome {
        let QuizState::InProgress {
            index,
            score,
            answered,
        } = &mut self.state
        else {
            return SelectOutcome::Ignored;
        };
        if answered.is_some() {
            return SelectOutcome::Ignored;
        }
        let Some(question) = self.bank.get(*index) else {
            return SelectOutcome::Ignored;
        };

        let correct = choice == question.correct();
        if correct {
            *score += POINTS_PER_QUESTION;
        }
        *answered = Some(AnswerRecord { choice, correct });
        SelectOutcome::Recorded { correct }
    }

    /// Advances past an answered question, completing the quiz at the end of
    /// the bank.
    pub fn next_question(&mut self) -> AdvanceOutcome {
        let QuizState::InProgress {
            index,
            score,
            answered,
        } = &mut self.state
        else {
            return AdvanceOutcome::Ignored;
        };
        if answered.is_none() {
            return AdvanceOutcome::Ignored;
        }

        let next = *index + 1;
        if next >= self.bank.len() {
            let final_score = *score;
            self.state = QuizState::Completed { score: final_score };
            return AdvanceOutcome::Completed {
                score: final_score,
                tier: ResultTier::from_score(final_score),
            };
        }

        *index = next;
        *answered = None;
        AdvanceOutcome::NextQuestion { index: next }
    }

    /// Discards the run and immediately starts a fresh one.
    pub fn retake(&mut self) {
        self.state = QuizState::NotStarted;
        self.start();
    }

    /// The section the quiz returns to when the user exits.
    #[must_use]
    pub fn exit_section(&self) -> SectionId {
        SectionId::Interactive
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        !matches!(self.state, QuizState::NotStarted)
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self.state, QuizState::Completed { .. })
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            QuizState::InProgress { index, .. } => self.bank.get(index),
            _ => None,
        }
    }

    /// 0-based index of the active question.
    #[must_use]
    pub fn question_index(&self) -> Option<usize> {
        match self.state {
            QuizState::InProgress { index, .. } => Some(index),
            _ => None,
        }
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }

    /// Accumulated score so far (final score once completed).
    #[must_use]
    pub fn score(&self) -> u32 {
        match self.state {
            QuizState::NotStarted => 0,
            QuizState::InProgress { score, .. } | QuizState::Completed { score } => score,
        }
    }

    /// The locked answer for the active question, if any.
    #[must_use]
    pub fn answered(&self) -> Option<AnswerRecord> {
        match self.state {
            QuizState::InProgress { answered, .. } => answered,
            _ => None,
        }
    }

    /// Fraction of the bank already passed, for the progress fill.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        match self.state {
            QuizState::NotStarted => 0.0,
            QuizState::InProgress { index, .. } => index as f64 / self.bank.len() as f64,
            QuizState::Completed { .. } => 1.0,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<QuizResult> {
        match self.state {
            QuizState::Completed { score } => Some(QuizResult {
                score,
                tier: ResultTier::from_score(score),
            }),
            _ => None,
        }
    }
}
