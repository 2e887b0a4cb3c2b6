use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};
use walkthrough_core::ContentCatalog;
use walkthrough_core::model::{
    OptionId, PageDescriptor, PageIndex, Question, QuestionFeedback, QuestionIndex,
    QuizAttemptState, QuizStatus,
};

use super::events::{PageChanged, PageListener};
use super::progress::{PageActions, WalkthroughProgress};
use super::session::PageSession;
use crate::error::WalkthroughError;

//
// ─── WALKTHROUGH ───────────────────────────────────────────────────────────────
//

/// Forward-only navigation through a catalog, gated by quiz pages.
///
/// Starts on the first page. Non-quiz pages can always be left with
/// `continue_to_next`; a quiz page only once its attempt is `Passed`. The
/// completion page is terminal.
pub struct WalkthroughService {
    catalog: Arc<ContentCatalog>,
    session: PageSession,
    listeners: Vec<Arc<dyn PageListener>>,
}

impl WalkthroughService {
    #[must_use]
    pub fn new(catalog: Arc<ContentCatalog>) -> Self {
        let session = PageSession::start(&catalog);

        Self {
            catalog,
            session,
            listeners: Vec::new(),
        }
    }

    /// Register a page-change listener.
    #[must_use]
    pub fn with_listener(mut self, listener: Arc<dyn PageListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn current_index(&self) -> PageIndex {
        self.session.index()
    }

    #[must_use]
    pub fn session(&self) -> &PageSession {
        &self.session
    }

    /// Page currently shown, if the catalog is not empty.
    #[must_use]
    pub fn current_page(&self) -> Option<&PageDescriptor> {
        self.catalog.pages().get(self.session.index().value())
    }

    /// Look up any page of the walkthrough.
    ///
    /// # Errors
    ///
    /// Returns `WalkthroughError::InvalidIndex` past the last page.
    pub fn page(&self, index: PageIndex) -> Result<&PageDescriptor, WalkthroughError> {
        self.catalog
            .pages()
            .get(index.value())
            .ok_or(WalkthroughError::InvalidIndex {
                index,
                len: self.catalog.len(),
            })
    }

    /// View-only snapshot of the quiz attempt on page `index`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIndex` out of range, `NotCurrent` for any page other
    /// than the current one (no other page has state), and `NotAQuiz` for
    /// non-quiz pages.
    pub fn quiz_state(&self, index: PageIndex) -> Result<&QuizAttemptState, WalkthroughError> {
        let page = self.page(index)?;
        let current = self.session.index();
        if index != current {
            return Err(WalkthroughError::NotCurrent {
                requested: index,
                current,
            });
        }
        self.session.quiz().ok_or(WalkthroughError::NotAQuiz {
            index,
            kind: page.kind(),
        })
    }

    /// Apply a selection on the current quiz page.
    ///
    /// Revealed results are hidden again, so a failed quiz returns to
    /// `Unsubmitted`.
    ///
    /// # Errors
    ///
    /// Returns `NotAQuiz` off quiz pages and `Quiz(..)` for an unknown
    /// question or option.
    pub fn select_option(
        &mut self,
        question: QuestionIndex,
        option: &OptionId,
    ) -> Result<(), WalkthroughError> {
        let index = self.session.index();
        let (questions, attempt) = self.quiz_parts()?;
        attempt
            .toggle_selection(questions, question, option)
            .inspect_err(|err| {
                warn!(index = %index, question = %question, option = %option, error = %err, "selection rejected");
            })?;
        debug!(index = %index, question = %question, option = %option, "option toggled");
        Ok(())
    }

    /// Evaluate the current quiz and reveal results.
    ///
    /// # Errors
    ///
    /// Returns `NotAQuiz` off quiz pages and `Quiz(PrematureSubmit)` while a
    /// question is unanswered.
    pub fn submit_quiz(&mut self) -> Result<QuizStatus, WalkthroughError> {
        let index = self.session.index();
        let (questions, attempt) = self.quiz_parts()?;
        let status = attempt.submit(questions).inspect_err(|err| {
            debug!(index = %index, error = %err, "submit rejected");
        })?;
        debug!(index = %index, status = ?status, "quiz submitted");
        Ok(status)
    }

    /// Move to the next page, discarding the current page session.
    ///
    /// # Errors
    ///
    /// Returns `PrematureAdvance` from a quiz that has not been passed and
    /// `AtEnd` from the completion page. The index is unchanged on error.
    pub fn continue_to_next(&mut self) -> Result<PageChanged, WalkthroughError> {
        let from = self.session.index();
        let terminal = self
            .current_page()
            .is_none_or(PageDescriptor::is_terminal);
        if terminal || from >= self.catalog.last_index() {
            debug!(index = %from, "continue rejected: end of walkthrough");
            return Err(WalkthroughError::AtEnd { index: from });
        }

        if let Some(status) = self
            .session
            .quiz_status()
            .filter(|status| *status != QuizStatus::Passed)
        {
            debug!(index = %from, status = ?status, "continue rejected: quiz not passed");
            return Err(WalkthroughError::PrematureAdvance { index: from });
        }

        let to = from.next();
        let next_page = self.catalog.page(to)?;
        let event = PageChanged {
            from,
            to,
            kind: next_page.kind(),
        };
        self.session = PageSession::enter(to, next_page);
        debug!(from = %from, to = %to, kind = ?event.kind, "page changed");

        for listener in &self.listeners {
            listener.page_changed(&event);
        }
        Ok(event)
    }

    /// Controls to enable for the current page.
    #[must_use]
    pub fn available_actions(&self) -> PageActions {
        let index = self.session.index();
        let has_next = index < self.catalog.last_index()
            && self
                .current_page()
                .is_some_and(|page| !page.is_terminal());

        match self.session.quiz() {
            Some(attempt) => {
                let passed = attempt.status() == QuizStatus::Passed;
                PageActions {
                    can_continue: has_next && passed,
                    can_submit: !passed && attempt.can_submit(),
                }
            }
            None => PageActions {
                can_continue: has_next,
                can_submit: false,
            },
        }
    }

    /// Per-question feedback for the current quiz once results are revealed.
    #[must_use]
    pub fn feedback(&self) -> Option<Vec<QuestionFeedback>> {
        let questions = self.current_page()?.questions()?;
        self.session.quiz()?.feedback(questions)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current_page().is_some_and(PageDescriptor::is_terminal)
    }

    #[must_use]
    pub fn progress(&self) -> WalkthroughProgress {
        WalkthroughProgress {
            current: self.session.index(),
            total: self.catalog.len(),
            is_complete: self.is_complete(),
        }
    }

    fn quiz_parts(&mut self) -> Result<(&[Question], &mut QuizAttemptState), WalkthroughError> {
        let index = self.session.index();
        let page = self.catalog.page(index)?;
        let kind = page.kind();
        match (page.questions(), self.session.quiz_mut()) {
            (Some(questions), Some(attempt)) => Ok((questions, attempt)),
            _ => {
                debug!(index = %index, kind = ?kind, "quiz event on non-quiz page");
                Err(WalkthroughError::NotAQuiz { index, kind })
            }
        }
    }
}

impl fmt::Debug for WalkthroughService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalkthroughService")
            .field("catalog", &self.catalog.title())
            .field("pages", &self.catalog.len())
            .field("session", &self.session)
            .field("listeners_len", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
