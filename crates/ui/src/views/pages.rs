use dioxus::prelude::*;

use crate::vm::SectionVm;

#[component]
pub fn TextBody(html: String) -> Element {
    rsx! {
        div { class: "page-text", dangerous_inner_html: "{html}" }
    }
}

#[component]
pub fn LessonBody(sections: Vec<SectionVm>) -> Element {
    rsx! {
        div { class: "lesson",
            for section in sections {
                section { key: "{section.heading}", class: "lesson-section",
                    h2 { class: "lesson-section__heading", "{section.heading}" }
                    div { class: "lesson-section__body", dangerous_inner_html: "{section.body_html}" }
                }
            }
        }
    }
}

#[component]
pub fn CompletionBody(html: String, references: Vec<String>) -> Element {
    rsx! {
        div { class: "completion",
            div { class: "page-text", dangerous_inner_html: "{html}" }
            if !references.is_empty() {
                h2 { class: "completion__references-title", "References" }
                ol { class: "completion__references",
                    for reference in references {
                        li { key: "{reference}", "{reference}" }
                    }
                }
            }
        }
    }
}
