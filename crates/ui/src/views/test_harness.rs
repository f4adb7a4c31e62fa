use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use serde_json::Value;
use services::{QuizEngine, StaticQuestionRepository};
use storage::QuizStore;
use storage::repository::InMemoryKeyValueStore;

use crate::context::{UiApp, build_app_context};
use crate::views::{QuestionCard, QuizView, SummaryCard};
use crate::vm::{QuestionVm, SummaryVm};

struct TestApp {
    engine: Arc<QuizEngine>,
}

impl UiApp for TestApp {
    fn engine(&self) -> Arc<QuizEngine> {
        Arc::clone(&self.engine)
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub kv: InMemoryKeyValueStore,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive pending work until the rendered HTML contains `needle`.
    pub async fn drive_until(&mut self, needle: &str) -> String {
        let mut html = self.render();
        for _ in 0..20 {
            if html.contains(needle) {
                break;
            }
            self.drive_async().await;
            html = self.render();
        }
        html
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

pub fn setup_quiz_harness(document: Value, kv: InMemoryKeyValueStore) -> ViewHarness {
    let store = QuizStore::new(Arc::new(kv.clone()));
    let engine = Arc::new(QuizEngine::new(
        store,
        Box::new(StaticQuestionRepository::new(document)),
    ));
    let dom = VirtualDom::new_with_props(
        QuizHarness,
        QuizHarnessProps {
            app: Arc::new(TestApp { engine }),
        },
    );
    ViewHarness { dom, kv }
}

#[component]
fn QuestionHarness(vm: QuestionVm) -> Element {
    rsx! { QuestionCard { vm, on_intent: move |_| {} } }
}

#[component]
fn SummaryHarness(vm: SummaryVm) -> Element {
    rsx! { SummaryCard { vm, on_intent: move |_| {} } }
}

/// Render a question card in isolation.
pub fn render_question(vm: QuestionVm) -> String {
    let mut dom = VirtualDom::new_with_props(QuestionHarness, QuestionHarnessProps { vm });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render a summary card in isolation.
pub fn render_summary(vm: SummaryVm) -> String {
    let mut dom = VirtualDom::new_with_props(SummaryHarness, SummaryHarnessProps { vm });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
