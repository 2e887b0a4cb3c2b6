mod markdown;
mod walkthrough_vm;

pub use markdown::{markdown_to_html, paragraphs, sanitize_html};
pub use walkthrough_vm::{
    CORRECT_BANNER, INCORRECT_BANNER, OptionVm, PageBodyVm, PageVm, QuestionVm, SUBMIT_LABEL,
    SectionVm, WalkthroughIntent, apply_intent, continue_label, map_current_page,
};
