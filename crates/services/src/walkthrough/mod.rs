mod events;
mod progress;
mod service;
mod session;

// Public API of the walkthrough subsystem.
pub use crate::error::WalkthroughError;
pub use events::{PageChanged, PageListener};
pub use progress::{PageActions, WalkthroughProgress};
pub use service::WalkthroughService;
pub use session::PageSession;
