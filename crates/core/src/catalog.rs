use serde::Serialize;
use thiserror::Error;

use crate::model::{PageDescriptor, PageIndex, PageKind, QuestionError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog must contain at least one page")]
    Empty,

    #[error("page {index} does not exist (catalog has {len} pages)")]
    InvalidIndex { index: PageIndex, len: usize },

    #[error("catalog must end with a completion page")]
    MissingCompletion,

    #[error("completion page at {index} must be the last page")]
    CompletionNotLast { index: PageIndex },

    #[error("quiz page at {index} has no questions")]
    EmptyQuiz { index: PageIndex },

    #[error(transparent)]
    Question(#[from] QuestionError),
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Ordered, immutable sequence of pages.
///
/// The last page is always the single `Completion` page, so forward
/// navigation always terminates there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentCatalog {
    title: String,
    pages: Vec<PageDescriptor>,
}

impl ContentCatalog {
    /// Validate and freeze a page sequence.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the sequence is empty, does not end with
    /// exactly one completion page, or contains a quiz without questions.
    pub fn new(title: impl Into<String>, pages: Vec<PageDescriptor>) -> Result<Self, CatalogError> {
        let Some(last) = pages.last() else {
            return Err(CatalogError::Empty);
        };
        if last.kind() != PageKind::Completion {
            return Err(CatalogError::MissingCompletion);
        }

        let last_index = pages.len() - 1;
        for (idx, page) in pages.iter().enumerate() {
            let index = PageIndex::new(idx);
            match page {
                PageDescriptor::Completion { .. } if idx != last_index => {
                    return Err(CatalogError::CompletionNotLast { index });
                }
                PageDescriptor::Quiz { questions, .. } if questions.is_empty() => {
                    return Err(CatalogError::EmptyQuiz { index });
                }
                _ => {}
            }
        }

        Ok(Self {
            title: title.into(),
            pages,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn pages(&self) -> &[PageDescriptor] {
        &self.pages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false for a validated catalog; provided for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    #[must_use]
    pub fn last_index(&self) -> PageIndex {
        PageIndex::new(self.pages.len().saturating_sub(1))
    }

    /// Look up a page.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidIndex` for an index past the end.
    pub fn page(&self, index: PageIndex) -> Result<&PageDescriptor, CatalogError> {
        self.pages
            .get(index.value())
            .ok_or(CatalogError::InvalidIndex {
                index,
                len: self.pages.len(),
            })
    }

    #[must_use]
    pub fn contains(&self, index: PageIndex) -> bool {
        index.value() < self.pages.len()
    }

    /// Number of quiz pages gating the walkthrough.
    #[must_use]
    pub fn quiz_count(&self) -> usize {
        self.pages.iter().filter(|page| page.is_quiz()).count()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
