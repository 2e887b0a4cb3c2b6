#![forbid(unsafe_code)]

pub mod error;
pub mod walkthrough;

pub use error::WalkthroughError;
pub use walkthrough::{
    PageActions, PageChanged, PageListener, PageSession, WalkthroughProgress, WalkthroughService,
};
