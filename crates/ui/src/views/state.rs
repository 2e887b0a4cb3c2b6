#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The walkthrough refused the event; nothing changed.
    Rejected,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Rejected => "That action is not available right now.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}
