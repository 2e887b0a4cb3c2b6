//! Correctness rules for quiz answers.
//!
//! Everything here is pure: the functions only read a question and a
//! selection set.

use std::collections::BTreeSet;

use crate::model::{AnswerOption, OptionId, OptionMark, Question};

/// Ids of the options marked correct, in id order.
#[must_use]
pub fn correct_option_ids(question: &Question) -> BTreeSet<&OptionId> {
    question
        .options()
        .iter()
        .filter(|option| option.is_correct)
        .map(|option| &option.id)
        .collect()
}

/// Returns true iff `selected` is exactly the set of correct option ids.
///
/// Subsets and supersets of the correct set are both wrong. The rule is the
/// same for single- and multi-select questions.
#[must_use]
pub fn is_correct(question: &Question, selected: &BTreeSet<OptionId>) -> bool {
    let correct = correct_option_ids(question);
    correct.len() == selected.len() && selected.iter().all(|id| correct.contains(id))
}

/// Feedback mark for one option once results are revealed.
///
/// Correct options the user did not pick are always flagged as `Missed`.
#[must_use]
pub fn option_mark(option: &AnswerOption, selected: &BTreeSet<OptionId>) -> OptionMark {
    match (selected.contains(&option.id), option.is_correct) {
        (true, true) => OptionMark::Correct,
        (true, false) => OptionMark::Incorrect,
        (false, true) => OptionMark::Missed,
        (false, false) => OptionMark::Unmarked,
    }
}
