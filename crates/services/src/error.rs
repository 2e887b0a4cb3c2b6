//! Shared error types for the services crate.

use thiserror::Error;

use walkthrough_core::model::{PageIndex, PageKind, QuizError};
use walkthrough_core::CatalogError;

/// Rejected walkthrough events.
///
/// None of these are fatal: the controller state is unchanged whenever one is
/// returned, and the presentation layer may ignore them or surface them as
/// disabled controls.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WalkthroughError {
    #[error("page {index} does not exist (walkthrough has {len} pages)")]
    InvalidIndex { index: PageIndex, len: usize },

    #[error("page {requested} is not the current page ({current})")]
    NotCurrent {
        requested: PageIndex,
        current: PageIndex,
    },

    #[error("page {index} is a {kind:?} page, not a quiz")]
    NotAQuiz { index: PageIndex, kind: PageKind },

    #[error("quiz on page {index} has not been passed yet")]
    PrematureAdvance { index: PageIndex },

    #[error("walkthrough is already on its last page ({index})")]
    AtEnd { index: PageIndex },

    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
