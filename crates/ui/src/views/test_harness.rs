use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use lesson_core::model::{
    ConceptOfI, ConceptTerm, ExamplePhrase, LanguageNotes, Lesson, LessonNumber, LessonsFile,
    VocabularyEntry,
};
use services::{
    AppServices, CatalogService, LessonsError, LessonsSource, ProgressStore, StatusCode,
};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::routes::Route;
use crate::views::{LessonListView, LessonView};

#[derive(Clone)]
struct TestApp {
    services: Arc<AppServices>,
}

impl UiApp for TestApp {
    fn progress(&self) -> Arc<ProgressStore> {
        self.services.progress()
    }

    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }
}

struct StaticSource {
    file: LessonsFile,
}

#[async_trait]
impl LessonsSource for StaticSource {
    async fn fetch(&self) -> Result<LessonsFile, LessonsError> {
        Ok(self.file.clone())
    }

    fn describe(&self) -> String {
        "static test dataset".to_string()
    }
}

/// A dataset origin that always answers with `status`.
pub struct StatusSource {
    pub status: StatusCode,
}

#[async_trait]
impl LessonsSource for StatusSource {
    async fn fetch(&self) -> Result<LessonsFile, LessonsError> {
        Err(LessonsError::HttpStatus(self.status))
    }

    fn describe(&self) -> String {
        format!("status {}", self.status)
    }
}

pub fn sample_lesson(number: u32, title: &str) -> Lesson {
    Lesson {
        lesson_number: LessonNumber::new(number),
        title: title.to_string(),
        objective: format!("Objective {number}"),
        vocabulary: vec![VocabularyEntry {
            shum: format!("word{number}"),
            pronunciation: format!("pron{number}"),
            english: format!("meaning{number}"),
            literal_meaning: None,
            audio: None,
        }],
        syntax_notes: vec![format!("Note for lesson {number}.")],
        example_phrases: vec![ExamplePhrase {
            shum: format!("phrase{number}"),
            english: format!("english{number}"),
            explanation: None,
            audio: None,
        }],
        practice: vec![format!("Practice {number}")],
        tip: format!("Tip {number}"),
    }
}

/// Three lessons, authored out of order.
pub fn sample_file() -> LessonsFile {
    LessonsFile {
        lessons: vec![
            sample_lesson(3, "Counting"),
            sample_lesson(1, "Greetings"),
            sample_lesson(2, "Family"),
        ],
        learning_tips: vec!["Say it out loud.".to_string()],
        language_notes: LanguageNotes {
            summary: "A small language.".to_string(),
            deeper_study: "Keep a notebook.".to_string(),
            concept_of_i: ConceptOfI {
                introduction: "Shum has many words for I.".to_string(),
                terms: vec![ConceptTerm {
                    term: "na".to_string(),
                    definition: "the speaking self".to_string(),
                }],
            },
        },
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Lesson(String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { LessonListView {} },
        ViewKind::Lesson(lesson_number) => rsx! { LessonView { lesson_number } },
    }
}

#[derive(Props, Clone)]
struct AppHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for AppHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn AppRouterHarness(props: AppHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { Router::<Route> {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub progress: Arc<ProgressStore>,
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

    /// Drive pending tasks until `needle` shows up or the attempts run out.
    pub async fn render_when(&mut self, needle: &str) -> String {
        for _ in 0..10 {
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
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

/// Builds a harness whose catalog is already loaded, as the root layout would
/// leave it.
pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_file(view, sample_file()).await
}

pub async fn setup_view_harness_with_file(view: ViewKind, file: LessonsFile) -> ViewHarness {
    let storage = Storage::in_memory();
    let services = Arc::new(AppServices::new(&storage, Arc::new(StaticSource { file })));
    services.progress().initialize().await;
    services
        .catalog()
        .load()
        .await
        .expect("load static dataset");

    let progress = services.progress();
    let app = Arc::new(TestApp { services });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, progress }
}

/// Mounts the real routes under the root layout; nothing is preloaded.
pub async fn setup_app_harness(source: Arc<dyn LessonsSource>) -> ViewHarness {
    let storage = Storage::in_memory();
    let services = Arc::new(AppServices::new(&storage, source));
    services.progress().initialize().await;

    let progress = services.progress();
    let app = Arc::new(TestApp { services });
    let dom = VirtualDom::new_with_props(AppRouterHarness, AppHarnessProps { app });

    ViewHarness { dom, progress }
}

pub fn static_source(file: LessonsFile) -> Arc<dyn LessonsSource> {
    Arc::new(StaticSource { file })
}
