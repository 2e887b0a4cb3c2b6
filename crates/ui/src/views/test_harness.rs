use std::sync::{Arc, Mutex};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{PageChanged, PageListener};
use walkthrough_core::ContentCatalog;

use crate::context::{UiApp, build_app_context};
use crate::views::{WalkthroughTestHandles, WalkthroughView};
use crate::vm::WalkthroughIntent;

#[derive(Default)]
pub struct RecordingListener(pub Mutex<Vec<PageChanged>>);

impl PageListener for RecordingListener {
    fn page_changed(&self, event: &PageChanged) {
        self.0.lock().expect("listener lock").push(*event);
    }
}

struct TestApp {
    catalog: Arc<ContentCatalog>,
    listener: Arc<RecordingListener>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<ContentCatalog> {
        Arc::clone(&self.catalog)
    }

    fn page_listener(&self) -> Option<Arc<dyn PageListener>> {
        Some(self.listener.clone())
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    handles: WalkthroughTestHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn WalkthroughHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { WalkthroughView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: WalkthroughTestHandles,
    pub listener: Arc<RecordingListener>,
}

impl ViewHarness {
    pub fn new(catalog: ContentCatalog) -> Self {
        let listener = Arc::new(RecordingListener::default());
        let handles = WalkthroughTestHandles::default();
        let app = Arc::new(TestApp {
            catalog: Arc::new(catalog),
            listener: Arc::clone(&listener),
        });
        let mut dom = VirtualDom::new_with_props(
            WalkthroughHarness,
            HarnessProps {
                app,
                handles: handles.clone(),
            },
        );
        dom.rebuild_in_place();
        drive_dom(&mut dom);

        Self {
            dom,
            handles,
            listener,
        }
    }

    pub fn dispatch(&mut self, intent: WalkthroughIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn current_index(&self) -> usize {
        let walkthrough = self.handles.walkthrough();
        self.dom
            .in_runtime(|| walkthrough.read().current_index().value())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}
