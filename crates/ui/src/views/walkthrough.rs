use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{CompletionBody, LessonBody, QuizBody, TextBody, ViewError};
use crate::vm::{PageBodyVm, PageVm, SUBMIT_LABEL, WalkthroughIntent, apply_intent, map_current_page};

#[cfg(test)]
use services::WalkthroughService;
#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn WalkthroughView() -> Element {
    let ctx = use_context::<AppContext>();
    let walkthrough = use_signal(|| ctx.start_walkthrough());
    let error = use_signal(|| None::<ViewError>);

    let dispatch_intent = use_callback(move |intent: WalkthroughIntent| {
        let mut walkthrough = walkthrough;
        let mut error = error;
        let result = apply_intent(&mut walkthrough.write(), intent);
        error.set(result.err());
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<WalkthroughTestHandles>() {
                handles.register(dispatch_intent, walkthrough);
            }
        }
    }

    let Some(page) = map_current_page(&walkthrough.read()) else {
        return rsx! {
            div { class: "page",
                p { "{ViewError::Unknown.message()}" }
            }
        };
    };

    rsx! {
        div { class: "page walkthrough-page",
            header { class: "page__header",
                if let Some(title) = page.title.as_ref() {
                    h1 { class: "page__title", "{title}" }
                }
                span { class: "page__progress", "{page.progress_label}" }
            }
            div { class: "page__body",
                match page.body.clone() {
                    PageBodyVm::Text { html } => rsx! {
                        TextBody { html }
                    },
                    PageBodyVm::Lesson { sections } => rsx! {
                        LessonBody { sections }
                    },
                    PageBodyVm::Quiz { questions } => rsx! {
                        QuizBody { questions, on_intent: dispatch_intent }
                    },
                    PageBodyVm::Completion { html, references } => rsx! {
                        CompletionBody { html, references }
                    },
                }
            }
            if let Some(err) = *error.read() {
                p { class: "page__error", "{err.message()}" }
            }
            PageFooter { page: page.clone(), on_intent: dispatch_intent }
        }
    }
}

#[component]
fn PageFooter(page: PageVm, on_intent: EventHandler<WalkthroughIntent>) -> Element {
    rsx! {
        footer { class: "page__footer",
            if page.shows_submit() {
                button {
                    class: "btn btn-primary",
                    id: "walkthrough-submit",
                    r#type: "button",
                    disabled: !page.actions.can_submit,
                    onclick: move |_| on_intent.call(WalkthroughIntent::Submit),
                    "{SUBMIT_LABEL}"
                }
            } else if let Some(label) = page.continue_label {
                button {
                    class: "btn btn-primary",
                    id: "walkthrough-continue",
                    r#type: "button",
                    disabled: !page.actions.can_continue,
                    onclick: move |_| on_intent.call(WalkthroughIntent::Continue),
                    "{label}"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct WalkthroughTestHandles {
    dispatch: Rc<RefCell<Option<Callback<WalkthroughIntent>>>>,
    walkthrough: Rc<RefCell<Option<Signal<WalkthroughService>>>>,
}

#[cfg(test)]
impl WalkthroughTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<WalkthroughIntent>,
        walkthrough: Signal<WalkthroughService>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.walkthrough.borrow_mut() = Some(walkthrough);
    }

    pub(crate) fn dispatch(&self) -> Callback<WalkthroughIntent> {
        (*self.dispatch.borrow()).expect("walkthrough dispatch registered")
    }

    pub(crate) fn walkthrough(&self) -> Signal<WalkthroughService> {
        (*self.walkthrough.borrow()).expect("walkthrough signal registered")
    }
}
