use dioxus::prelude::*;
use walkthrough_core::model::QuestionIndex;

use crate::vm::{OptionVm, QuestionVm, WalkthroughIntent};

#[component]
pub fn QuizBody(questions: Vec<QuestionVm>, on_intent: EventHandler<WalkthroughIntent>) -> Element {
    rsx! {
        div { class: "quiz",
            for question in questions {
                QuestionCard { key: "{question.index}", question: question.clone(), on_intent }
            }
        }
    }
}

#[component]
fn QuestionCard(question: QuestionVm, on_intent: EventHandler<WalkthroughIntent>) -> Element {
    let index = question.index;
    let input_kind = question.input_kind();
    let banner_class = match question.verdict {
        Some(true) => "quiz-banner quiz-banner--correct",
        _ => "quiz-banner quiz-banner--incorrect",
    };

    rsx! {
        fieldset { class: "quiz-question",
            legend { class: "quiz-question__heading", "{question.heading}" }
            for detail in question.details.iter() {
                p { class: "quiz-question__details", "{detail}" }
            }
            if question.multiple {
                p { class: "quiz-question__hint", "Select all that apply." }
            }
            ul { class: "quiz-options",
                for option in question.options.iter() {
                    OptionRow {
                        key: "{option.id}",
                        question: index,
                        option: option.clone(),
                        input_kind,
                        on_intent,
                    }
                }
            }
            if let Some(banner) = question.banner() {
                p { class: "{banner_class}", "{banner}" }
            }
        }
    }
}

#[component]
fn OptionRow(
    question: QuestionIndex,
    option: OptionVm,
    input_kind: &'static str,
    on_intent: EventHandler<WalkthroughIntent>,
) -> Element {
    let id = option.id.clone();
    // The whole row takes the click so re-clicking a checked radio still
    // reaches the walkthrough and hides revealed results.
    rsx! {
        li {
            class: "{option.class()}",
            onclick: move |_| {
                on_intent.call(WalkthroughIntent::Select {
                    question,
                    option: id.clone(),
                });
            },
            input {
                r#type: input_kind,
                name: "question-{question}",
                value: "{option.id}",
                checked: option.selected,
                tabindex: "-1",
            }
            span { class: "quiz-option__id", "{option.id}." }
            span { class: "quiz-option__text", "{option.text}" }
        }
    }
}
