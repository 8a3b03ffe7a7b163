use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use lesson_core::NavigationError;
use lesson_core::model::{LessonNumber, LessonsFile};
use services::{
    AppServices, CatalogService, FileLessonsSource, LessonsError, LessonsLocation, LessonsSource,
};
use storage::repository::Storage;

const DATASET: &str = r#"{
    "lessons": [
        { "lessonNumber": 3, "title": "Three", "objective": "o3", "vocabulary": [],
          "syntaxNotes": [], "examplePhrases": [], "practice": [], "tip": "t3" },
        { "lessonNumber": 1, "title": "One", "objective": "o1", "vocabulary": [],
          "syntaxNotes": [], "examplePhrases": [], "practice": [], "tip": "t1" },
        { "lessonNumber": 2, "title": "Two", "objective": "o2", "vocabulary": [],
          "syntaxNotes": [], "examplePhrases": [], "practice": [], "tip": "t2" }
    ],
    "learningTips": ["Say it out loud."],
    "languageNotes": {
        "summary": "s",
        "deeperStudy": "d",
        "conceptOfI": { "introduction": "i", "terms": [] }
    }
}"#;

struct CountingSource {
    fetches: AtomicUsize,
    fail_first: bool,
}

impl CountingSource {
    fn new(fail_first: bool) -> Self {
        Self {
            fetches: AtomicUsize::new(0),
            fail_first,
        }
    }
}

#[async_trait]
impl LessonsSource for CountingSource {
    async fn fetch(&self) -> Result<LessonsFile, LessonsError> {
        let call = self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_first && call == 0 {
            return Err(LessonsError::HttpStatus(reqwest::StatusCode::BAD_GATEWAY));
        }
        Ok(serde_json::from_str(DATASET)?)
    }

    fn describe(&self) -> String {
        "counting".to_string()
    }
}

#[tokio::test]
async fn catalog_is_fetched_once_and_sorted() {
    let source = Arc::new(CountingSource::new(false));
    let service = CatalogService::new(source.clone());
    assert!(service.cached().is_none());

    let first = service.load().await.unwrap();
    let second = service.load().await.unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(source.fetches.load(Ordering::SeqCst), 1);

    let numbers: Vec<u32> = first.lesson_numbers().map(LessonNumber::value).collect();
    assert_eq!(numbers, vec![1, 2, 3]);

    let nav = first.resolve("2").unwrap();
    assert_eq!(nav.previous_number(), Some(LessonNumber::new(1)));
    assert_eq!(nav.next_number(), Some(LessonNumber::new(3)));
    assert_eq!(nav.position.index, 1);
    assert_eq!(nav.position.total, 3);
}

#[tokio::test]
async fn failed_fetch_surfaces_status_and_is_not_cached() {
    let source = Arc::new(CountingSource::new(true));
    let service = CatalogService::new(source.clone());

    let err = service.load().await.unwrap_err();
    assert_eq!(err.status_code(), 502);
    assert!(service.cached().is_none());

    service.load().await.unwrap();
    assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
    assert!(service.cached().is_some());
}

#[tokio::test]
async fn resolving_bad_requests_maps_to_client_errors() {
    let service = CatalogService::new(Arc::new(CountingSource::new(false)));
    let catalog = service.load().await.unwrap();

    let err = catalog.resolve("abc").unwrap_err();
    assert!(matches!(err, NavigationError::InvalidLessonNumber { .. }));
    assert_eq!(err.status_code(), 400);

    let err = catalog.resolve("99").unwrap_err();
    assert_eq!(err, NavigationError::LessonNotFound(LessonNumber::new(99)));
    assert_eq!(err.status_code(), 404);
}

fn temp_dataset(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("shum-lessons-{}-{name}.json", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[tokio::test]
async fn file_source_reads_dataset() {
    let path = temp_dataset("ok", DATASET);
    let file = FileLessonsSource::new(&path).fetch().await.unwrap();
    assert_eq!(file.lessons.len(), 3);
    assert_eq!(file.learning_tips, vec!["Say it out loud.".to_string()]);
    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn file_source_reports_missing_and_malformed_files() {
    let missing = std::env::temp_dir().join("shum-lessons-does-not-exist.json");
    let err = FileLessonsSource::new(missing).fetch().await.unwrap_err();
    assert!(matches!(err, LessonsError::Io(_)));
    assert_eq!(err.status_code(), 500);

    let path = temp_dataset("bad", r#"{ "lessons": "nope" }"#);
    let err = FileLessonsSource::new(&path).fetch().await.unwrap_err();
    assert!(matches!(err, LessonsError::Parse(_)));
    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn app_services_wire_progress_and_catalog() {
    let path = temp_dataset("services", DATASET);
    let source = LessonsLocation::File(path.clone()).into_source().unwrap();
    let services = AppServices::new(&Storage::in_memory(), source);

    let catalog = services.catalog().load().await.unwrap();
    assert_eq!(catalog.len(), 3);

    let progress = services.progress();
    progress.initialize().await;
    let state = progress.toggle_lesson(LessonNumber::new(1)).await.unwrap();
    assert_eq!(state.completion(catalog.lesson_numbers()).completed, 1);
    std::fs::remove_file(path).ok();
}
