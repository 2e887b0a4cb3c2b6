use walkthrough_core::model::PageIndex;

/// Aggregated view of walkthrough progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkthroughProgress {
    pub current: PageIndex,
    pub total: usize,
    pub is_complete: bool,
}

impl WalkthroughProgress {
    /// One-based page number for display.
    #[must_use]
    pub fn page_number(&self) -> usize {
        self.current.value() + 1
    }
}

/// Controls the presentation layer should enable for the current page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageActions {
    pub can_continue: bool,
    pub can_submit: bool,
}
