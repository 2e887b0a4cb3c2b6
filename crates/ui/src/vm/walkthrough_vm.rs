use services::{PageActions, WalkthroughError, WalkthroughService};
use tracing::debug;
use walkthrough_core::model::{
    OptionId, OptionMark, PageDescriptor, PageKind, Question, QuestionFeedback, QuestionIndex,
    QuizAttemptState,
};

use crate::views::ViewError;
use crate::vm::markdown::{markdown_to_html, paragraphs};

pub const SUBMIT_LABEL: &str = "Submit Answers";
pub const CORRECT_BANNER: &str = "✓ Correct!";
pub const INCORRECT_BANNER: &str = "✗ Incorrect - Please review and try again";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalkthroughIntent {
    Select {
        question: QuestionIndex,
        option: OptionId,
    },
    Submit,
    Continue,
}

//
// ─── VIEW MODELS ───────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub id: OptionId,
    pub text: String,
    pub selected: bool,
    pub mark: OptionMark,
}

impl OptionVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match (self.mark, self.selected) {
            (OptionMark::Correct, _) => "quiz-option quiz-option--correct",
            (OptionMark::Incorrect, _) => "quiz-option quiz-option--incorrect",
            (OptionMark::Missed, _) => "quiz-option quiz-option--missed",
            (OptionMark::Unmarked, true) => "quiz-option quiz-option--selected",
            (OptionMark::Unmarked, false) => "quiz-option",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: QuestionIndex,
    /// First paragraph of the prompt, shown as the question heading.
    pub heading: String,
    pub details: Vec<String>,
    pub multiple: bool,
    pub options: Vec<OptionVm>,
    /// `Some` once results are revealed.
    pub verdict: Option<bool>,
}

impl QuestionVm {
    #[must_use]
    pub fn input_kind(&self) -> &'static str {
        if self.multiple { "checkbox" } else { "radio" }
    }

    #[must_use]
    pub fn banner(&self) -> Option<&'static str> {
        self.verdict
            .map(|correct| if correct { CORRECT_BANNER } else { INCORRECT_BANNER })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionVm {
    pub heading: String,
    pub body_html: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageBodyVm {
    Text { html: String },
    Lesson { sections: Vec<SectionVm> },
    Quiz { questions: Vec<QuestionVm> },
    Completion { html: String, references: Vec<String> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageVm {
    pub kind: PageKind,
    pub title: Option<String>,
    pub body: PageBodyVm,
    pub progress_label: String,
    /// `None` on the completion page.
    pub continue_label: Option<&'static str>,
    pub actions: PageActions,
}

impl PageVm {
    #[must_use]
    pub fn is_quiz(&self) -> bool {
        self.kind == PageKind::Quiz
    }

    /// The submit button is shown on quiz pages until the quiz is passed.
    #[must_use]
    pub fn shows_submit(&self) -> bool {
        self.is_quiz() && !self.actions.can_continue
    }
}

//
// ─── MAPPING ───────────────────────────────────────────────────────────────────
//

#[must_use]
pub fn continue_label(kind: PageKind) -> Option<&'static str> {
    match kind {
        PageKind::Welcome => Some("Start"),
        PageKind::Introduction | PageKind::Quiz => Some("Continue"),
        PageKind::Lesson => Some("Continue to Quiz"),
        PageKind::Completion => None,
    }
}

/// Build the view model of the page currently shown.
#[must_use]
pub fn map_current_page(walkthrough: &WalkthroughService) -> Option<PageVm> {
    let page = walkthrough.current_page()?;
    let progress = walkthrough.progress();

    let body = match page {
        PageDescriptor::Welcome { body, .. } | PageDescriptor::Introduction { body } => {
            PageBodyVm::Text {
                html: markdown_to_html(body),
            }
        }
        PageDescriptor::Lesson { sections, .. } => PageBodyVm::Lesson {
            sections: sections
                .iter()
                .map(|section| SectionVm {
                    heading: section.heading.clone(),
                    body_html: markdown_to_html(&section.body),
                })
                .collect(),
        },
        PageDescriptor::Quiz { questions, .. } => {
            let attempt = walkthrough.session().quiz()?;
            PageBodyVm::Quiz {
                questions: map_questions(questions, attempt, walkthrough.feedback()),
            }
        }
        PageDescriptor::Completion {
            body, references, ..
        } => PageBodyVm::Completion {
            html: markdown_to_html(body),
            references: references.clone(),
        },
    };

    Some(PageVm {
        kind: page.kind(),
        title: page.title().map(str::to_string),
        body,
        progress_label: format!("Page {} of {}", progress.page_number(), progress.total),
        continue_label: continue_label(page.kind()),
        actions: walkthrough.available_actions(),
    })
}

fn map_questions(
    questions: &[Question],
    attempt: &QuizAttemptState,
    feedback: Option<Vec<QuestionFeedback>>,
) -> Vec<QuestionVm> {
    questions
        .iter()
        .enumerate()
        .map(|(idx, question)| {
            let index = QuestionIndex::new(idx);
            let revealed = feedback.as_ref().and_then(|all| all.get(idx));
            let mut prompt = paragraphs(question.prompt()).into_iter();
            let heading = prompt.next().unwrap_or_default();

            let options = question
                .options()
                .iter()
                .map(|option| {
                    let mark = revealed
                        .and_then(|fb| fb.options.iter().find(|o| o.id == option.id))
                        .map_or(OptionMark::Unmarked, |fb| fb.mark);
                    OptionVm {
                        id: option.id.clone(),
                        text: option.text.clone(),
                        selected: attempt.is_selected(index, &option.id),
                        mark,
                    }
                })
                .collect();

            QuestionVm {
                index,
                heading,
                details: prompt.collect(),
                multiple: question.allows_multiple_selections(),
                options,
                verdict: revealed.map(|fb| fb.is_correct),
            }
        })
        .collect()
}

//
// ─── INTENTS ───────────────────────────────────────────────────────────────────
//

/// Forward a UI intent to the walkthrough.
///
/// # Errors
///
/// Returns `ViewError::Rejected` when the walkthrough refuses the event; its
/// state is unchanged in that case.
pub fn apply_intent(
    walkthrough: &mut WalkthroughService,
    intent: WalkthroughIntent,
) -> Result<(), ViewError> {
    let result = match &intent {
        WalkthroughIntent::Select { question, option } => {
            walkthrough.select_option(*question, option)
        }
        WalkthroughIntent::Submit => walkthrough.submit_quiz().map(|_| ()),
        WalkthroughIntent::Continue => walkthrough.continue_to_next().map(|_| ()),
    };

    result.map_err(|err: WalkthroughError| {
        debug!(intent = ?intent, error = %err, "intent rejected");
        ViewError::Rejected
    })
}
