use std::sync::Arc;

use dioxus::prelude::*;
use lesson_core::model::LessonNumber;
use services::StatusCode;

use super::test_harness::{
    StatusSource, ViewKind, sample_file, sample_lesson, setup_app_harness, setup_view_harness,
    setup_view_harness_with_file, static_source,
};
use crate::views::LessonBody;
use crate::vm::map_lesson_page;

#[tokio::test(flavor = "current_thread")]
async fn lesson_list_smoke_renders_sorted_titles_and_start_button() {
    let mut harness = setup_view_harness(ViewKind::Home).await;
    harness.rebuild();
    let html = harness.render();

    let greetings = html.find("Greetings").expect("lesson 1 title");
    let family = html.find("Family").expect("lesson 2 title");
    let counting = html.find("Counting").expect("lesson 3 title");
    assert!(greetings < family && family < counting, "unsorted list in {html}");

    assert!(html.contains("Start the course"), "missing start button in {html}");
    assert!(!html.contains("Reset progress"), "unexpected reset in {html}");
    assert!(html.contains("Say it out loud."), "missing tips in {html}");
    assert!(html.contains("the speaking self"), "missing notes in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_list_smoke_renders_progress_once_started() {
    let mut harness = setup_view_harness(ViewKind::Home).await;
    harness.progress.start().await.expect("start");
    harness
        .progress
        .toggle_lesson(LessonNumber::new(2))
        .await
        .expect("toggle");

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("1 of 3 lessons completed"), "missing progress in {html}");
    assert!(html.contains("Reset progress"), "missing reset in {html}");
    assert!(html.contains("lesson-item completed"), "missing completed row in {html}");
    assert!(!html.contains("Start the course"), "unexpected start in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_list_smoke_handles_empty_dataset() {
    let mut file = sample_file();
    file.lessons.clear();
    let mut harness = setup_view_harness_with_file(ViewKind::Home, file).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("No lessons available yet."), "missing empty state in {html}");
    assert!(!html.contains("Go to the first lesson"), "unexpected first link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_position_and_neighbours() {
    let mut harness = setup_view_harness(ViewKind::Lesson("2".to_string())).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Lesson 2 of 3"), "missing position in {html}");
    assert!(html.contains("2. Family"), "missing heading in {html}");
    assert!(html.contains("1. Greetings"), "missing previous link in {html}");
    assert!(html.contains("3. Counting"), "missing next link in {html}");
    assert!(html.contains("Mark lesson complete"), "missing toggle in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_reflects_completed_lesson() {
    let mut harness = setup_view_harness(ViewKind::Lesson("1".to_string())).await;
    harness
        .progress
        .toggle_lesson(LessonNumber::new(1))
        .await
        .expect("toggle");

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Completed ✓ (undo)"), "missing undo in {html}");
    assert!(!html.contains("pager-prev"), "first lesson has no previous in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_rejects_malformed_number() {
    let mut harness = setup_view_harness(ViewKind::Lesson("abc".to_string())).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("400"), "missing status in {html}");
    assert!(html.contains("Invalid lesson number."), "missing message in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_reports_missing_lesson() {
    let mut harness = setup_view_harness(ViewKind::Lesson("99".to_string())).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("404"), "missing status in {html}");
    assert!(html.contains("Lesson not found."), "missing message in {html}");
    assert!(html.contains("Back to lessons"), "missing home link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn root_layout_renders_error_page_when_dataset_request_fails() {
    let source = Arc::new(StatusSource {
        status: StatusCode::SERVICE_UNAVAILABLE,
    });
    let mut harness = setup_app_harness(source).await;
    harness.rebuild();
    let html = harness.render_when("Unable to load lessons data").await;

    assert!(html.contains("Unable to load lessons data"), "missing message in {html}");
    assert!(html.contains("503"), "missing status in {html}");
    assert!(!html.contains("Start the course"), "list rendered despite failure: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn root_layout_shows_lessons_once_dataset_loads() {
    let mut harness = setup_app_harness(static_source(sample_file())).await;
    harness.rebuild();
    let html = harness.render_when("Greetings").await;

    assert!(html.contains("Shum Lessons"), "missing header in {html}");
    assert!(html.contains("Greetings"), "missing lesson list in {html}");
    assert!(!html.contains("Loading lessons..."), "still loading: {html}");
}

#[test]
fn lesson_body_renders_standalone() {
    let lessons = vec![sample_lesson(1, "Greetings")];
    let nav = lesson_core::navigation::resolve(&lessons, "1").expect("resolve");
    let page = map_lesson_page(&nav);

    let html = dioxus_ssr::render_element(rsx! {
        LessonBody { page }
    });
    assert!(html.contains("word1"), "missing vocabulary in {html}");
    assert!(html.contains("Note for lesson 1."), "missing syntax note in {html}");
    assert!(html.contains("Practice 1"), "missing practice in {html}");
    assert!(!html.contains("Mark lesson complete"), "body has no controls: {html}");
}

