use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Points awarded per correct answer.
pub const POINTS_PER_QUESTION: u32 = 20;

/// Errors that can occur while building a question bank.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuestionError {
    #[error("question bank must contain at least one question")]
    EmptyBank,
    #[error("invalid answer choice index: {0}")]
    InvalidChoice(usize),
}

/// One of the four answer slots of a multiple-choice question.
///
/// A closed enum instead of a raw index: an out-of-range selection is
/// unrepresentable, so a stray index from the UI layer can be dropped at the
/// boundary without any chance of corrupting the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerChoice {
    A,
    B,
    C,
    D,
}

impl AnswerChoice {
    /// All choices, in display order.
    pub const ALL: [AnswerChoice; 4] = [
        AnswerChoice::A,
        AnswerChoice::B,
        AnswerChoice::C,
        AnswerChoice::D,
    ];

    /// Converts a 0-based option index to a choice.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The 0-based option index of this choice.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            AnswerChoice::A => 0,
            AnswerChoice::B => 1,
            AnswerChoice::C => 2,
            AnswerChoice::D => 3,
        }
    }

    /// Display label for option buttons.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AnswerChoice::A => "A",
            AnswerChoice::B => "B",
            AnswerChoice::C => "C",
            AnswerChoice::D => "D",
        }
    }
}

/// A multiple-choice question: prompt, four options, the correct choice, and
/// explanatory text shown after answering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    prompt: String,
    options: [String; 4],
    correct: AnswerChoice,
    explanation: String,
}

impl Question {
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        options: [&str; 4],
        correct: AnswerChoice,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.map(str::to_string),
            correct,
            explanation: explanation.into(),
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String; 4] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, choice: AnswerChoice) -> &str {
        &self.options[choice.index()]
    }

    #[must_use]
    pub fn correct(&self) -> AnswerChoice {
        self.correct
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

/// An immutable, validated, ordered bank of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Builds a bank from a non-empty question list.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyBank` when `questions` is empty.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionError> {
        if questions.is_empty() {
            return Err(QuestionError::EmptyBank);
        }
        Ok(Self { questions })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// The maximum score this bank can award.
    #[must_use]
    pub fn max_score(&self) -> u32 {
        POINTS_PER_QUESTION * u32::try_from(self.questions.len()).unwrap_or(u32::MAX)
    }
}

/// The fixed five-question bank for the circle tutorial.
#[must_use]
pub fn circle_question_bank() -> QuestionBank {
    let questions = vec![
        Question::new(
            "What is a circle made of?",
            [
                "All points at a fixed distance from a fixed point",
                "Any closed curve you can draw",
                "A shape made of three points",
                "A shape made of four sides",
            ],
            AnswerChoice::A,
            "A circle is the set of all points in a plane whose distance \
             from a fixed point (the center) equals a fixed length (the \
             radius).",
        ),
        Question::new(
            "If a circle has radius 5 cm, what is its diameter?",
            ["5 cm", "10 cm", "15 cm", "25 cm"],
            AnswerChoice::B,
            "The diameter is twice the radius, so d = 2r = 2 \u{d7} 5 = \
             10 cm.",
        ),
        Question::new(
            "Which is the circumference formula?",
            ["C = \u{3c0}r", "C = 2\u{3c0}r", "C = \u{3c0}r\u{b2}", "C = 2\u{3c0}r\u{b2}"],
            AnswerChoice::B,
            "The circumference of a circle is C = 2\u{3c0}r, which can also \
             be written C = \u{3c0}d.",
        ),
        Question::new(
            "Roughly what is the area of a circle with radius 3 cm? \
             (\u{3c0} \u{2248} 3.14)",
            [
                "18.84 cm\u{b2}",
                "28.26 cm\u{b2}",
                "9.42 cm\u{b2}",
                "37.68 cm\u{b2}",
            ],
            AnswerChoice::B,
            "The area formula is S = \u{3c0}r\u{b2}, so S = \u{3c0} \u{d7} \
             3\u{b2} = 9\u{3c0} \u{2248} 28.26 cm\u{b2}.",
        ),
        Question::new(
            "What does the perpendicular-chord theorem say?",
            [
                "A diameter perpendicular to a chord bisects the chord",
                "All chords are equal",
                "The diameter is the shortest chord",
                "The center is equidistant from all chords",
            ],
            AnswerChoice::A,
            "A diameter perpendicular to a chord bisects that chord and \
             also bisects the arcs the chord subtends.",
        ),
    ];

    QuestionBank::new(questions).expect("built-in bank is non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_index_round_trip() {
        for choice in AnswerChoice::ALL {
            assert_eq!(AnswerChoice::from_index(choice.index()), Some(choice));
        }
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert_eq!(AnswerChoice::from_index(4), None);
        assert_eq!(AnswerChoice::from_index(usize::MAX), None);
    }

    #[test]
    fn empty_bank_is_invalid() {
        let err = QuestionBank::new(Vec::new()).unwrap_err();
        assert_eq!(err, QuestionError::EmptyBank);
    }

    #[test]
    fn circle_bank_has_five_questions_worth_100() {
        let bank = circle_question_bank();
        assert_eq!(bank.len(), 5);
        assert_eq!(bank.max_score(), 100);
    }

    #[test]
    fn circle_bank_correct_options_are_in_bounds() {
        let bank = circle_question_bank();
        for i in 0..bank.len() {
            let question = bank.get(i).unwrap();
            let correct = question.option(question.correct());
            assert!(!correct.is_empty());
            assert!(!question.explanation().is_empty());
        }
    }
}
