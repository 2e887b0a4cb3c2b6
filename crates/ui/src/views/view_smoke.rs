use walkthrough_core::ContentCatalog;
use walkthrough_core::builtin::home_network_security;
use walkthrough_core::model::{AnswerOption, OptionId, PageDescriptor, Question, QuestionIndex};

use super::test_harness::ViewHarness;
use crate::vm::{CORRECT_BANNER, INCORRECT_BANNER, SUBMIT_LABEL, WalkthroughIntent};

fn select(question: usize, option: &str) -> WalkthroughIntent {
    WalkthroughIntent::Select {
        question: QuestionIndex::new(question),
        option: OptionId::new(option),
    }
}

fn builtin_harness() -> ViewHarness {
    ViewHarness::new(home_network_security().expect("built-in catalog"))
}

#[test]
fn welcome_page_renders_title_and_start() {
    let harness = builtin_harness();
    let html = harness.render();
    assert!(html.contains("Welcome to Secure Your SmartHome"), "missing title in {html}");
    assert!(html.contains("Start"), "missing start button in {html}");
    assert!(html.contains("Page 1 of 15"), "missing progress in {html}");
}

#[test]
fn lesson_page_renders_sections_and_quiz_button() {
    let mut harness = builtin_harness();
    harness.dispatch(WalkthroughIntent::Continue);
    harness.dispatch(WalkthroughIntent::Continue);
    let html = harness.render();
    assert!(html.contains("lesson-section"), "missing sections in {html}");
    assert!(html.contains("Continue to Quiz"), "missing continue in {html}");
}

#[test]
fn quiz_page_gates_on_correct_answers() {
    let mut harness = builtin_harness();
    for _ in 0..3 {
        harness.dispatch(WalkthroughIntent::Continue);
    }
    assert_eq!(harness.current_index(), 3);
    let html = harness.render();
    assert!(html.contains(SUBMIT_LABEL), "missing submit in {html}");
    assert!(html.contains("radio"), "missing radio inputs in {html}");

    harness.dispatch(WalkthroughIntent::Continue);
    assert_eq!(harness.current_index(), 3);
    assert!(harness.render().contains("not available"));

    harness.dispatch(select(0, "A"));
    harness.dispatch(select(1, "C"));
    harness.dispatch(WalkthroughIntent::Submit);
    let html = harness.render();
    assert!(html.contains(INCORRECT_BANNER), "missing failure banner in {html}");
    assert!(html.contains(CORRECT_BANNER), "missing success banner in {html}");
    assert!(html.contains("quiz-option--missed"), "missing missed mark in {html}");

    harness.dispatch(select(0, "C"));
    assert!(!harness.render().contains(INCORRECT_BANNER));
    harness.dispatch(WalkthroughIntent::Submit);
    let html = harness.render();
    assert!(!html.contains(SUBMIT_LABEL), "submit still shown in {html}");
    assert!(html.contains("walkthrough-continue"), "missing continue in {html}");

    harness.dispatch(WalkthroughIntent::Continue);
    assert_eq!(harness.current_index(), 4);
    assert_eq!(harness.listener.0.lock().unwrap().len(), 4);
}

#[test]
fn completion_page_lists_references_without_continue() {
    let pages = vec![
        PageDescriptor::Quiz {
            title: "Quick check".into(),
            questions: vec![
                Question::multiple(
                    "Pick both",
                    vec![
                        AnswerOption::new("A", "first", true),
                        AnswerOption::new("B", "second", true),
                        AnswerOption::new("C", "third", false),
                    ],
                )
                .unwrap(),
            ],
        },
        PageDescriptor::Completion {
            title: "All done".into(),
            body: "You finished.".into(),
            references: vec!["[1] Some reference".into()],
        },
    ];
    let mut harness = ViewHarness::new(ContentCatalog::new("Short", pages).unwrap());
    assert!(harness.render().contains("checkbox"));
    assert!(harness.render().contains("Select all that apply."));

    harness.dispatch(select(0, "A"));
    harness.dispatch(select(0, "B"));
    harness.dispatch(WalkthroughIntent::Submit);
    harness.dispatch(WalkthroughIntent::Continue);

    let html = harness.render();
    assert!(html.contains("All done"), "missing completion title in {html}");
    assert!(html.contains("[1] Some reference"), "missing reference in {html}");
    assert!(!html.contains("walkthrough-continue"), "unexpected continue in {html}");

    harness.dispatch(WalkthroughIntent::Continue);
    assert_eq!(harness.current_index(), 1);
}

#[test]
fn reselecting_checked_radio_hides_revealed_results() {
    let mut harness = builtin_harness();
    for _ in 0..3 {
        harness.dispatch(WalkthroughIntent::Continue);
    }
    harness.dispatch(select(0, "A"));
    harness.dispatch(select(1, "C"));
    harness.dispatch(WalkthroughIntent::Submit);
    assert!(harness.render().contains(INCORRECT_BANNER));

    harness.dispatch(select(0, "A"));
    let html = harness.render();
    assert!(!html.contains(INCORRECT_BANNER), "results still shown in {html}");
    assert!(!html.contains(CORRECT_BANNER), "results still shown in {html}");
    assert!(html.contains("quiz-option--selected"), "selection lost in {html}");
}
