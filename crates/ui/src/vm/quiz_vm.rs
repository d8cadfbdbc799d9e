use coach_core::model::{AnswerChoice, POINTS_PER_QUESTION};
use services::QuizService;

/// Visual state of one answer option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    /// Chosen, correctness not revealed yet.
    Selected,
    Correct,
    /// Chosen and wrong, after the reveal.
    Incorrect,
}

impl OptionState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            OptionState::Idle => "answer-option",
            OptionState::Selected => "answer-option answer-option--selected",
            OptionState::Correct => "answer-option answer-option--correct",
            OptionState::Incorrect => "answer-option answer-option--incorrect",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub choice: AnswerChoice,
    pub text: String,
    pub state: OptionState,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionVm {
    pub number: usize,
    pub total: usize,
    pub progress_pct: f64,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub explanation: Option<String>,
    pub next_enabled: bool,
}

/// Maps the active question for display. `revealed` is the presentation
/// flag flipped by the deferred reveal effect; before it fires the chosen
/// option only shows as selected.
#[must_use]
pub fn map_question(quiz: &QuizService, revealed: bool) -> Option<QuestionVm> {
    let question = quiz.current_question()?;
    let answered = quiz.answered();

    let options = AnswerChoice::ALL
        .into_iter()
        .map(|choice| {
            let state = match answered {
                Some(record) if revealed => {
                    if choice == question.correct() {
                        OptionState::Correct
                    } else if choice == record.choice {
                        OptionState::Incorrect
                    } else {
                        OptionState::Idle
                    }
                }
                Some(record) if record.choice == choice => OptionState::Selected,
                _ => OptionState::Idle,
            };
            OptionVm {
                choice,
                text: question.option(choice).to_string(),
                state,
                disabled: answered.is_some(),
            }
        })
        .collect();

    let explanation = (answered.is_some() && revealed)
        .then(|| question.explanation().to_string());

    Some(QuestionVm {
        number: quiz.question_number().unwrap_or(1),
        total: quiz.total_questions(),
        progress_pct: quiz.progress_fraction() * 100.0,
        prompt: question.prompt().to_string(),
        options,
        explanation,
        next_enabled: answered.is_some(),
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score: u32,
    pub max_score: u32,
    pub title: &'static str,
    pub message: &'static str,
}

#[must_use]
pub fn map_results(quiz: &QuizService) -> Option<ResultsVm> {
    let result = quiz.result()?;
    Some(ResultsVm {
        score: result.score,
        max_score: POINTS_PER_QUESTION * u32::try_from(quiz.total_questions()).unwrap_or(0),
        title: result.tier.title(),
        message: result.tier.message(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use coach_core::time::fixed_clock;

    fn started_quiz() -> QuizService {
        let mut quiz = QuizService::new(fixed_clock());
        quiz.start();
        quiz
    }

    #[test]
    fn unanswered_question_is_all_idle() {
        let quiz = started_quiz();
        let vm = map_question(&quiz, false).unwrap();
        assert_eq!(vm.number, 1);
        assert_eq!(vm.total, 5);
        assert!(vm.options.iter().all(|opt| opt.state == OptionState::Idle));
        assert!(vm.options.iter().all(|opt| !opt.disabled));
        assert!(vm.explanation.is_none());
        assert!(!vm.next_enabled);
    }

    #[test]
    fn selection_shows_before_the_reveal() {
        let mut quiz = started_quiz();
        let wrong = AnswerChoice::ALL
            .into_iter()
            .find(|choice| *choice != quiz.current_question().unwrap().correct())
            .unwrap();
        quiz.select_answer(wrong);

        let vm = map_question(&quiz, false).unwrap();
        let selected: Vec<_> = vm
            .options
            .iter()
            .filter(|opt| opt.state == OptionState::Selected)
            .collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].choice, wrong);
        assert!(vm.options.iter().all(|opt| opt.disabled));
        assert!(vm.explanation.is_none());
        assert!(vm.next_enabled);
    }

    #[test]
    fn reveal_marks_correct_and_incorrect() {
        let mut quiz = started_quiz();
        let correct = quiz.current_question().unwrap().correct();
        let wrong = AnswerChoice::ALL
            .into_iter()
            .find(|choice| *choice != correct)
            .unwrap();
        quiz.select_answer(wrong);

        let vm = map_question(&quiz, true).unwrap();
        for option in &vm.options {
            let expected = if option.choice == correct {
                OptionState::Correct
            } else if option.choice == wrong {
                OptionState::Incorrect
            } else {
                OptionState::Idle
            };
            assert_eq!(option.state, expected);
        }
        assert!(vm.explanation.is_some());
    }

    #[test]
    fn results_map_score_and_tier_text() {
        let mut quiz = started_quiz();
        for _ in 0..5 {
            let correct = quiz.current_question().unwrap().correct();
            quiz.select_answer(correct);
            quiz.next_question();
        }
        let vm = map_results(&quiz).unwrap();
        assert_eq!(vm.score, 100);
        assert_eq!(vm.max_score, 100);
        assert!(vm.title.contains("Outstanding"));
    }
}
