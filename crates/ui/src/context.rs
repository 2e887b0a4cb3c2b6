use std::sync::Arc;

use services::{PageListener, WalkthroughService};
use walkthrough_core::ContentCatalog;

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<ContentCatalog>;

    /// Optional observer of page changes, e.g. for logging by the host.
    fn page_listener(&self) -> Option<Arc<dyn PageListener>> {
        None
    }
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<ContentCatalog>,
    page_listener: Option<Arc<dyn PageListener>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            page_listener: app.page_listener(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<ContentCatalog> {
        Arc::clone(&self.catalog)
    }

    /// Fresh walkthrough positioned on the first page.
    #[must_use]
    pub fn start_walkthrough(&self) -> WalkthroughService {
        let walkthrough = WalkthroughService::new(self.catalog());
        match &self.page_listener {
            Some(listener) => walkthrough.with_listener(Arc::clone(listener)),
            None => walkthrough,
        }
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
