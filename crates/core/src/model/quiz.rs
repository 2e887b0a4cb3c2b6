use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

use crate::evaluator::{is_correct, option_mark};
use crate::model::ids::{OptionId, QuestionIndex};
use crate::model::question::Question;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Rejected quiz events. State is never modified when one is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("question {index} does not exist (quiz has {len} questions)")]
    InvalidQuestionIndex { index: QuestionIndex, len: usize },

    #[error("option {option} does not belong to question {question}")]
    InvalidOptionId {
        question: QuestionIndex,
        option: OptionId,
    },

    #[error("cannot submit: {unanswered} question(s) have no selection")]
    PrematureSubmit { unanswered: usize },

    #[error("attempt tracks {tracked} questions but the quiz has {actual}")]
    QuestionCountMismatch { tracked: usize, actual: usize },
}

//
// ─── STATUS ────────────────────────────────────────────────────────────────────
//

/// Gate state of a quiz page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QuizStatus {
    /// Results hidden; no continue action.
    Unsubmitted,
    /// Every question answered exactly right; continue is available.
    Passed,
    /// Results revealed with at least one wrong answer.
    Failed,
}

//
// ─── FEEDBACK ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OptionMark {
    Unmarked,
    /// Selected and correct.
    Correct,
    /// Selected but wrong.
    Incorrect,
    /// Correct but not selected.
    Missed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionFeedback {
    pub id: OptionId,
    pub mark: OptionMark,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionFeedback {
    pub question: QuestionIndex,
    pub is_correct: bool,
    pub options: Vec<OptionFeedback>,
}

//
// ─── ATTEMPT STATE ─────────────────────────────────────────────────────────────
//

/// Selections and revealed results for the quiz page currently shown.
///
/// Created when the page is entered and dropped when the user moves on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizAttemptState {
    selections: Vec<BTreeSet<OptionId>>,
    results_revealed: bool,
    all_correct: bool,
}

impl QuizAttemptState {
    fn new(question_count: usize) -> Self {
        Self {
            selections: vec![BTreeSet::new(); question_count],
            results_revealed: false,
            all_correct: false,
        }
    }

    /// Fresh attempt with an empty selection set per question.
    #[must_use]
    pub fn for_questions(questions: &[Question]) -> Self {
        Self::new(questions.len())
    }

    fn check_questions(&self, questions: &[Question]) -> Result<(), QuizError> {
        if questions.len() == self.selections.len() {
            Ok(())
        } else {
            Err(QuizError::QuestionCountMismatch {
                tracked: self.selections.len(),
                actual: questions.len(),
            })
        }
    }

    #[must_use]
    pub fn selections(&self) -> &[BTreeSet<OptionId>] {
        &self.selections
    }

    #[must_use]
    pub fn selection(&self, question: QuestionIndex) -> Option<&BTreeSet<OptionId>> {
        self.selections.get(question.value())
    }

    #[must_use]
    pub fn is_selected(&self, question: QuestionIndex, option: &OptionId) -> bool {
        self.selection(question)
            .is_some_and(|selected| selected.contains(option))
    }

    #[must_use]
    pub fn results_revealed(&self) -> bool {
        self.results_revealed
    }

    #[must_use]
    pub fn all_correct(&self) -> bool {
        self.all_correct
    }

    #[must_use]
    pub fn status(&self) -> QuizStatus {
        match (self.results_revealed, self.all_correct) {
            (false, _) => QuizStatus::Unsubmitted,
            (true, true) => QuizStatus::Passed,
            (true, false) => QuizStatus::Failed,
        }
    }

    /// Number of questions whose selection set is still empty.
    #[must_use]
    pub fn unanswered(&self) -> usize {
        self.selections.iter().filter(|set| set.is_empty()).count()
    }

    /// Submit is only offered once every question has a selection.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.unanswered() == 0
    }

    /// Apply a user selection.
    ///
    /// Single-select questions replace the set with `{option}`; multi-select
    /// questions toggle membership. Any accepted change hides previously
    /// revealed results until the next submit.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidQuestionIndex` or `QuizError::InvalidOptionId`
    /// for out-of-domain input, and `QuizError::QuestionCountMismatch` when
    /// `questions` is not the quiz this attempt was created for. State is left
    /// untouched.
    pub fn toggle_selection(
        &mut self,
        questions: &[Question],
        question_index: QuestionIndex,
        option: &OptionId,
    ) -> Result<(), QuizError> {
        self.check_questions(questions)?;
        let len = questions.len();
        let idx = question_index.value();
        if idx >= len {
            return Err(QuizError::InvalidQuestionIndex {
                index: question_index,
                len,
            });
        }

        let question = &questions[idx];
        if !question.has_option(option) {
            return Err(QuizError::InvalidOptionId {
                question: question_index,
                option: option.clone(),
            });
        }

        self.results_revealed = false;
        self.all_correct = false;

        let selected = &mut self.selections[idx];
        if question.allows_multiple_selections() {
            if !selected.remove(option) {
                selected.insert(option.clone());
            }
        } else {
            selected.clear();
            selected.insert(option.clone());
        }
        Ok(())
    }

    /// Evaluate every question and reveal the results.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::PrematureSubmit` while any question has an empty
    /// selection and `QuizError::QuestionCountMismatch` when `questions` is
    /// not the quiz this attempt was created for. Nothing is revealed in
    /// either case.
    pub fn submit(&mut self, questions: &[Question]) -> Result<QuizStatus, QuizError> {
        self.check_questions(questions)?;
        let unanswered = self.unanswered();
        if unanswered > 0 {
            return Err(QuizError::PrematureSubmit { unanswered });
        }

        self.all_correct = questions
            .iter()
            .zip(&self.selections)
            .all(|(question, selected)| is_correct(question, selected));
        self.results_revealed = true;
        Ok(self.status())
    }

    /// Per-question feedback, available only after results are revealed and
    /// only for the quiz this attempt was created for.
    #[must_use]
    pub fn feedback(&self, questions: &[Question]) -> Option<Vec<QuestionFeedback>> {
        if !self.results_revealed || self.check_questions(questions).is_err() {
            return None;
        }

        let items = questions
            .iter()
            .zip(&self.selections)
            .enumerate()
            .map(|(idx, (question, selected))| QuestionFeedback {
                question: QuestionIndex::new(idx),
                is_correct: is_correct(question, selected),
                options: question
                    .options()
                    .iter()
                    .map(|option| OptionFeedback {
                        id: option.id.clone(),
                        mark: option_mark(option, selected),
                    })
                    .collect(),
            })
            .collect();
        Some(items)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnswerOption;

    fn q(idx: usize) -> QuestionIndex {
        QuestionIndex::new(idx)
    }

    fn id(value: &str) -> OptionId {
        OptionId::new(value)
    }

    fn questions() -> Vec<Question> {
        vec![
            Question::single(
                "Choose a strong admin password",
                vec![
                    AnswerOption::new("A", "Sunset123!", false),
                    AnswerOption::new("B", "GarrettHomeWiFi2025", false),
                    AnswerOption::new("C", "river-train-laptop-orange", true),
                    AnswerOption::new("D", "P@ssword!", false),
                ],
            )
            .unwrap(),
            Question::multiple(
                "Which devices belong on the guest network?",
                vec![
                    AnswerOption::new("A", "Smart Speakers", true),
                    AnswerOption::new("B", "Personal laptops", false),
                    AnswerOption::new("C", "Smart TVs", true),
                ],
            )
            .unwrap(),
        ]
    }

    #[test]
    fn new_attempt_starts_unsubmitted_and_empty() {
        let attempt = QuizAttemptState::for_questions(&questions());
        assert_eq!(attempt.selections().len(), 2);
        assert!(attempt.selections().iter().all(BTreeSet::is_empty));
        assert_eq!(attempt.status(), QuizStatus::Unsubmitted);
        assert!(!attempt.can_submit());
    }

    #[test]
    fn single_select_always_keeps_exactly_one() {
        let qs = questions();
        let mut attempt = QuizAttemptState::for_questions(&qs);
        for option in ["A", "C", "C", "B"] {
            attempt.toggle_selection(&qs, q(0), &id(option)).unwrap();
            assert_eq!(attempt.selection(q(0)).unwrap().len(), 1);
        }
        assert!(attempt.is_selected(q(0), &id("B")));
    }

    #[test]
    fn multi_select_double_toggle_restores_prior_set() {
        let qs = questions();
        let mut attempt = QuizAttemptState::for_questions(&qs);
        attempt.toggle_selection(&qs, q(1), &id("A")).unwrap();
        let before = attempt.selection(q(1)).unwrap().clone();

        attempt.toggle_selection(&qs, q(1), &id("C")).unwrap();
        attempt.toggle_selection(&qs, q(1), &id("C")).unwrap();

        assert_eq!(attempt.selection(q(1)).unwrap(), &before);
    }

    #[test]
    fn invalid_question_index_is_rejected_without_change() {
        let qs = questions();
        let mut attempt = QuizAttemptState::for_questions(&qs);
        let before = attempt.clone();
        let err = attempt.toggle_selection(&qs, q(5), &id("A")).unwrap_err();
        assert_eq!(
            err,
            QuizError::InvalidQuestionIndex {
                index: q(5),
                len: 2
            }
        );
        assert_eq!(attempt, before);
    }

    #[test]
    fn invalid_option_id_is_rejected_without_change() {
        let qs = questions();
        let mut attempt = QuizAttemptState::for_questions(&qs);
        attempt.toggle_selection(&qs, q(0), &id("A")).unwrap();
        attempt.toggle_selection(&qs, q(1), &id("B")).unwrap();
        attempt.submit(&qs).unwrap();
        let before = attempt.clone();

        let err = attempt.toggle_selection(&qs, q(1), &id("Z")).unwrap_err();
        assert!(matches!(err, QuizError::InvalidOptionId { .. }));
        assert_eq!(attempt, before);
        assert!(attempt.results_revealed());
    }

    #[test]
    fn submit_with_empty_selection_is_rejected() {
        let qs = questions();
        let mut attempt = QuizAttemptState::for_questions(&qs);
        attempt.toggle_selection(&qs, q(0), &id("C")).unwrap();

        let err = attempt.submit(&qs).unwrap_err();
        assert_eq!(err, QuizError::PrematureSubmit { unanswered: 1 });
        assert!(!attempt.results_revealed());
        assert_eq!(attempt.status(), QuizStatus::Unsubmitted);
    }

    #[test]
    fn correct_submission_passes() {
        let qs = questions();
        let mut attempt = QuizAttemptState::for_questions(&qs);
        attempt.toggle_selection(&qs, q(0), &id("C")).unwrap();
        attempt.toggle_selection(&qs, q(1), &id("A")).unwrap();
        attempt.toggle_selection(&qs, q(1), &id("C")).unwrap();

        assert_eq!(attempt.submit(&qs).unwrap(), QuizStatus::Passed);
        assert!(attempt.results_revealed());
        assert!(attempt.all_correct());
    }

    #[test]
    fn wrong_submission_fails_and_reports_feedback() {
        let qs = questions();
        let mut attempt = QuizAttemptState::for_questions(&qs);
        attempt.toggle_selection(&qs, q(0), &id("A")).unwrap();
        attempt.toggle_selection(&qs, q(1), &id("A")).unwrap();

        assert_eq!(attempt.submit(&qs).unwrap(), QuizStatus::Failed);
        assert!(attempt.results_revealed());
        assert!(!attempt.all_correct());

        let feedback = attempt.feedback(&qs).unwrap();
        assert!(!feedback[0].is_correct);
        assert_eq!(feedback[0].options[0].mark, OptionMark::Incorrect);
        assert_eq!(feedback[0].options[2].mark, OptionMark::Missed);
        assert!(!feedback[1].is_correct);
        assert_eq!(feedback[1].options[0].mark, OptionMark::Correct);
        assert_eq!(feedback[1].options[1].mark, OptionMark::Unmarked);
        assert_eq!(feedback[1].options[2].mark, OptionMark::Missed);
    }

    #[test]
    fn selection_after_reveal_resets_flags() {
        let qs = questions();
        let mut attempt = QuizAttemptState::for_questions(&qs);
        attempt.toggle_selection(&qs, q(0), &id("C")).unwrap();
        attempt.toggle_selection(&qs, q(1), &id("A")).unwrap();
        attempt.toggle_selection(&qs, q(1), &id("C")).unwrap();
        attempt.submit(&qs).unwrap();
        assert_eq!(attempt.status(), QuizStatus::Passed);

        attempt.toggle_selection(&qs, q(0), &id("C")).unwrap();
        assert!(!attempt.results_revealed());
        assert!(!attempt.all_correct());
        assert_eq!(attempt.status(), QuizStatus::Unsubmitted);
        assert!(attempt.feedback(&qs).is_none());
    }

    #[test]
    fn failed_attempt_can_be_corrected_and_resubmitted() {
        let qs = questions();
        let mut attempt = QuizAttemptState::for_questions(&qs);
        attempt.toggle_selection(&qs, q(0), &id("A")).unwrap();
        attempt.toggle_selection(&qs, q(1), &id("A")).unwrap();
        assert_eq!(attempt.submit(&qs).unwrap(), QuizStatus::Failed);

        attempt.toggle_selection(&qs, q(0), &id("C")).unwrap();
        attempt.toggle_selection(&qs, q(1), &id("C")).unwrap();
        assert_eq!(attempt.submit(&qs).unwrap(), QuizStatus::Passed);
    }

    #[test]
    fn attempt_for_fewer_questions_never_passes() {
        let qs = questions();
        let mut attempt = QuizAttemptState::for_questions(&qs[..1]);
        attempt.toggle_selection(&qs[..1], q(0), &id("C")).unwrap();

        let err = attempt.toggle_selection(&qs, q(1), &id("A")).unwrap_err();
        assert_eq!(
            err,
            QuizError::QuestionCountMismatch {
                tracked: 1,
                actual: 2
            }
        );
        let err = attempt.submit(&qs).unwrap_err();
        assert_eq!(
            err,
            QuizError::QuestionCountMismatch {
                tracked: 1,
                actual: 2
            }
        );
        assert_eq!(attempt.status(), QuizStatus::Unsubmitted);
        assert!(!attempt.results_revealed());

        assert_eq!(attempt.submit(&qs[..1]).unwrap(), QuizStatus::Passed);
        assert!(attempt.feedback(&qs).is_none());
        assert!(attempt.feedback(&qs[..1]).is_some());
    }
}
