use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

use crate::model::ids::OptionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question must offer at least one option")]
    NoOptions,

    #[error("option id cannot be empty")]
    EmptyOptionId,

    #[error("duplicate option id: {0}")]
    DuplicateOptionId(OptionId),

    #[error("question must have at least one correct option")]
    NoCorrectOption,

    #[error("single-select question must have exactly one correct option, found {correct}")]
    AmbiguousSingleSelect { correct: usize },
}

//
// ─── ANSWER OPTION ─────────────────────────────────────────────────────────────
//

/// One selectable answer of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub id: OptionId,
    pub text: String,
    pub is_correct: bool,
}

impl AnswerOption {
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            id: OptionId::new(id),
            text: text.into(),
            is_correct,
        }
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A prompt with an ordered list of options and exactly one correct subset.
///
/// Single-select questions render as radio buttons and always have exactly
/// one correct option; multi-select questions render as checkboxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    prompt: String,
    options: Vec<AnswerOption>,
    allow_multiple_selections: bool,
}

impl Question {
    /// Creates a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt is blank, there are no options,
    /// an option id is blank or repeated, no option is correct, or a
    /// single-select question has more than one correct option.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<AnswerOption>,
        allow_multiple_selections: bool,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }

        let mut seen = BTreeSet::new();
        for option in &options {
            if option.id.as_str().trim().is_empty() {
                return Err(QuestionError::EmptyOptionId);
            }
            if !seen.insert(&option.id) {
                return Err(QuestionError::DuplicateOptionId(option.id.clone()));
            }
        }

        let correct = options.iter().filter(|option| option.is_correct).count();
        if correct == 0 {
            return Err(QuestionError::NoCorrectOption);
        }
        if !allow_multiple_selections && correct != 1 {
            return Err(QuestionError::AmbiguousSingleSelect { correct });
        }

        Ok(Self {
            prompt,
            options,
            allow_multiple_selections,
        })
    }

    /// Shorthand for a radio-button question.
    ///
    /// # Errors
    ///
    /// See [`Question::new`].
    pub fn single(
        prompt: impl Into<String>,
        options: Vec<AnswerOption>,
    ) -> Result<Self, QuestionError> {
        Self::new(prompt, options, false)
    }

    /// Shorthand for a checkbox question.
    ///
    /// # Errors
    ///
    /// See [`Question::new`].
    pub fn multiple(
        prompt: impl Into<String>,
        options: Vec<AnswerOption>,
    ) -> Result<Self, QuestionError> {
        Self::new(prompt, options, true)
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    #[must_use]
    pub fn allows_multiple_selections(&self) -> bool {
        self.allow_multiple_selections
    }

    #[must_use]
    pub fn option(&self, id: &OptionId) -> Option<&AnswerOption> {
        self.options.iter().find(|option| &option.id == id)
    }

    #[must_use]
    pub fn has_option(&self, id: &OptionId) -> bool {
        self.option(id).is_some()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
