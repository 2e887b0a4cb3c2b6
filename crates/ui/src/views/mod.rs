mod pages;
mod quiz;
mod state;
mod walkthrough;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use pages::{CompletionBody, LessonBody, TextBody};
pub use quiz::QuizBody;
pub use state::ViewError;
pub use walkthrough::WalkthroughView;

#[cfg(test)]
pub(crate) use walkthrough::WalkthroughTestHandles;
