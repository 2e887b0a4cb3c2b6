use walkthrough_core::ContentCatalog;
use walkthrough_core::model::{PageDescriptor, PageIndex, QuizAttemptState, QuizStatus};

/// Transient state of the page currently shown.
///
/// A new session is created every time a page is entered; the previous one is
/// dropped, so quiz selections never leak from one page to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSession {
    index: PageIndex,
    quiz: Option<QuizAttemptState>,
}

impl PageSession {
    /// Session for the first page of `catalog`.
    pub(crate) fn start(catalog: &ContentCatalog) -> Self {
        Self {
            index: PageIndex::FIRST,
            quiz: catalog
                .pages()
                .first()
                .and_then(PageDescriptor::questions)
                .map(QuizAttemptState::for_questions),
        }
    }

    pub(crate) fn enter(index: PageIndex, page: &PageDescriptor) -> Self {
        Self {
            index,
            quiz: page.questions().map(QuizAttemptState::for_questions),
        }
    }

    #[must_use]
    pub fn index(&self) -> PageIndex {
        self.index
    }

    /// Attempt state, present only on quiz pages.
    #[must_use]
    pub fn quiz(&self) -> Option<&QuizAttemptState> {
        self.quiz.as_ref()
    }

    pub(crate) fn quiz_mut(&mut self) -> Option<&mut QuizAttemptState> {
        self.quiz.as_mut()
    }

    #[must_use]
    pub fn quiz_status(&self) -> Option<QuizStatus> {
        self.quiz.as_ref().map(QuizAttemptState::status)
    }
}
