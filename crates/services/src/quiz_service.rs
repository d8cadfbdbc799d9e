use coach_core::effects::{COMPLETION_DELAY_MS, REVEAL_DELAY_MS};
use coach_core::model::{
    AnswerChoice, Question, QuestionBank, SectionId, circle_question_bank,
};
use coach_core::quiz::{AdvanceOutcome, AnswerRecord, QuizResult, SelectOutcome};
use coach_core::{Clock, Effect, EffectQueue, QuizEngine};

use crate::error::CoachServiceError;

/// Orchestrates the quiz engine: scoring stays pure and immediate in the
/// core; this layer schedules the delayed answer reveal and the completion
/// celebration.
#[derive(Debug, Clone)]
pub struct QuizService {
    engine: QuizEngine,
    clock: Clock,
    effects: EffectQueue,
}

impl QuizService {
    /// A quiz over the built-in circle bank.
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self::with_bank(clock, circle_question_bank())
    }

    #[must_use]
    pub fn with_bank(clock: Clock, bank: QuestionBank) -> Self {
        Self {
            engine: QuizEngine::new(bank),
            clock,
            effects: EffectQueue::new(),
        }
    }

    /// Builds a quiz from raw questions, validating them into a bank.
    ///
    /// # Errors
    ///
    /// Returns `CoachServiceError::Question` when the list is empty.
    pub fn from_questions(
        clock: Clock,
        questions: Vec<Question>,
    ) -> Result<Self, CoachServiceError> {
        Ok(Self::with_bank(clock, QuestionBank::new(questions)?))
    }

    pub fn start(&mut self) {
        self.engine.start();
    }

    /// Records a selection. On the first selection for a question the score
    /// updates immediately and a [`Effect::RevealAnswer`] is scheduled; a
    /// locked question ignores the call and schedules nothing.
    pub fn select_answer(&mut self, choice: AnswerChoice) -> SelectOutcome {
        let index = self.engine.question_index();
        let outcome = self.engine.select_answer(choice);
        if let (SelectOutcome::Recorded { .. }, Some(question_index)) = (outcome, index) {
            self.effects.schedule_in(
                self.clock.now(),
                REVEAL_DELAY_MS,
                Effect::RevealAnswer { question_index },
            );
        }
        outcome
    }

    /// Advances to the next question; on a passing final result, schedules
    /// the completion celebration.
    pub fn next_question(&mut self) -> AdvanceOutcome {
        let outcome = self.engine.next_question();
        if let AdvanceOutcome::Completed { tier, .. } = outcome
            && tier.is_passing()
        {
            self.effects.schedule_in(
                self.clock.now(),
                COMPLETION_DELAY_MS,
                Effect::ShowCompletion,
            );
        }
        outcome
    }

    /// Restarts the quiz and drops any effect still in flight.
    pub fn retake(&mut self) {
        self.effects.clear();
        self.engine.retake();
    }

    #[must_use]
    pub fn exit_section(&self) -> SectionId {
        self.engine.exit_section()
    }

    /// Removes and returns every deferred effect that is due now.
    pub fn drain_due_effects(&mut self) -> Vec<Effect> {
        self.effects.drain_due(self.clock.now())
    }

    #[must_use]
    pub fn pending_effects(&self) -> usize {
        self.effects.pending()
    }

    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    // Read-through accessors for the view layer.

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.engine.is_started()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.engine.is_completed()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.engine.current_question()
    }

    /// 1-based number of the active question, for display.
    #[must_use]
    pub fn question_number(&self) -> Option<usize> {
        self.engine.question_index().map(|index| index + 1)
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.engine.total_questions()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.engine.score()
    }

    #[must_use]
    pub fn answered(&self) -> Option<AnswerRecord> {
        self.engine.answered()
    }

    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        self.engine.progress_fraction()
    }

    #[must_use]
    pub fn result(&self) -> Option<QuizResult> {
        self.engine.result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use coach_core::time::fixed_clock;

    fn answer_current(quiz: &mut QuizService, correctly: bool) {
        let correct = quiz.current_question().unwrap().correct();
        let choice = if correctly {
            correct
        } else {
            AnswerChoice::ALL
                .into_iter()
                .find(|choice| *choice != correct)
                .unwrap()
        };
        quiz.select_answer(choice);
    }

    #[test]
    fn first_selection_schedules_a_reveal() {
        let mut quiz = QuizService::new(fixed_clock());
        quiz.start();
        answer_current(&mut quiz, true);
        assert_eq!(quiz.pending_effects(), 1);

        quiz.clock_mut()
            .advance(Duration::milliseconds(REVEAL_DELAY_MS));
        assert_eq!(
            quiz.drain_due_effects(),
            vec![Effect::RevealAnswer { question_index: 0 }]
        );
    }

    #[test]
    fn locked_question_schedules_nothing() {
        let mut quiz = QuizService::new(fixed_clock());
        quiz.start();
        answer_current(&mut quiz, false);
        assert_eq!(quiz.select_answer(AnswerChoice::A), SelectOutcome::Ignored);
        assert_eq!(quiz.pending_effects(), 1);
    }

    #[test]
    fn score_is_final_before_the_reveal_fires() {
        let mut quiz = QuizService::new(fixed_clock());
        quiz.start();
        answer_current(&mut quiz, true);
        // The reveal has not fired, the score has already moved.
        assert_eq!(quiz.score(), 20);
        assert_eq!(quiz.pending_effects(), 1);
    }

    #[test]
    fn passing_result_schedules_the_celebration() {
        let mut quiz = QuizService::new(fixed_clock());
        quiz.start();
        for i in 0..5 {
            answer_current(&mut quiz, i < 3);
            quiz.next_question();
        }
        assert_eq!(quiz.result().unwrap().score, 60);

        quiz.clock_mut()
            .advance(Duration::milliseconds(COMPLETION_DELAY_MS));
        let effects = quiz.drain_due_effects();
        assert!(effects.contains(&Effect::ShowCompletion));
    }

    #[test]
    fn failing_result_schedules_no_celebration() {
        let mut quiz = QuizService::new(fixed_clock());
        quiz.start();
        for _ in 0..5 {
            answer_current(&mut quiz, false);
            quiz.next_question();
        }
        quiz.clock_mut().advance(Duration::days(1));
        let effects = quiz.drain_due_effects();
        assert!(!effects.contains(&Effect::ShowCompletion));
    }

    #[test]
    fn retake_clears_pending_effects() {
        let mut quiz = QuizService::new(fixed_clock());
        quiz.start();
        answer_current(&mut quiz, true);
        assert_eq!(quiz.pending_effects(), 1);

        quiz.retake();
        assert_eq!(quiz.pending_effects(), 0);
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.question_number(), Some(1));
    }

    #[test]
    fn empty_question_list_is_an_error() {
        let err = QuizService::from_questions(fixed_clock(), Vec::new()).unwrap_err();
        assert!(matches!(err, CoachServiceError::Question(_)));
    }
}
