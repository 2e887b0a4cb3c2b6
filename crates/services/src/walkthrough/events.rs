use walkthrough_core::model::{PageIndex, PageKind};

/// Emitted after the current page moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChanged {
    pub from: PageIndex,
    pub to: PageIndex,
    pub kind: PageKind,
}

/// Receives page-change notifications, synchronously and in registration order.
pub trait PageListener: Send + Sync {
    fn page_changed(&self, event: &PageChanged);
}
