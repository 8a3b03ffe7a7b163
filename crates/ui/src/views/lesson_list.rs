use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::progress::{ProgressAction, spawn_progress_action, use_progress};
use crate::vm::{
    LessonListItemVm, NotesVm, ProgressBarVm, map_lesson_list, map_notes, map_progress_bar,
};

#[component]
pub fn LessonListView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress = use_progress();

    let Some(catalog) = ctx.loaded_catalog() else {
        return rsx! {
            p { class: "loading", "Loading lessons..." }
        };
    };

    let state = progress.read().clone();
    let items = map_lesson_list(&catalog.summaries(), &state);
    let bar = map_progress_bar(state.completion(catalog.lesson_numbers()));
    let notes = map_notes(catalog.language_notes());
    let tips = catalog.learning_tips().to_vec();
    let started = state.started();
    let first_lesson = catalog.lessons().first().map(|lesson| lesson.number());

    let store = ctx.progress();
    let on_start = {
        let store = store.clone();
        move |_: MouseEvent| spawn_progress_action(store.clone(), ProgressAction::Start)
    };
    let on_reset =
        move |_: MouseEvent| spawn_progress_action(store.clone(), ProgressAction::Reset);

    rsx! {
        div { class: "page lesson-list",
            h2 { "Lessons" }

            section { class: "progress-panel",
                if started {
                    ProgressBar { bar }
                    button { class: "btn btn-secondary", onclick: on_reset, "Reset progress" }
                } else {
                    p { "Work through the lessons in order and mark each one complete as you go." }
                    button { class: "btn btn-primary", onclick: on_start, "Start the course" }
                    if let Some(number) = first_lesson {
                        Link { class: "btn-link", to: Route::lesson(number), "Go to the first lesson" }
                    }
                }
            }

            if items.is_empty() {
                p { "No lessons available yet." }
            } else {
                ol { class: "lesson-items",
                    for item in items {
                        LessonListItem { key: "{item.number}", item }
                    }
                }
            }

            if !tips.is_empty() {
                section { class: "learning-tips",
                    h3 { "Learning tips" }
                    ul {
                        for tip in tips {
                            li { "{tip}" }
                        }
                    }
                }
            }

            LanguageNotesSection { notes }
        }
    }
}

#[component]
fn LessonListItem(item: LessonListItemVm) -> Element {
    let class = if item.completed {
        "lesson-item completed"
    } else {
        "lesson-item"
    };

    rsx! {
        li { class,
            Link { class: "lesson-link", to: Route::lesson(item.number),
                span { class: "lesson-number", "{item.number}" }
                span { class: "lesson-title", "{item.title}" }
                if item.completed {
                    span { class: "lesson-done", "✓" }
                }
            }
            p { class: "lesson-objective", "{item.objective}" }
        }
    }
}

#[component]
pub fn ProgressBar(bar: ProgressBarVm) -> Element {
    rsx! {
        div { class: "progress",
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {bar.percent}%" }
            }
            p { class: "progress-label", "{bar.label}" }
        }
    }
}

#[component]
pub fn LanguageNotesSection(notes: NotesVm) -> Element {
    rsx! {
        section { class: "language-notes",
            h3 { "About the language" }
            div { class: "markdown", dangerous_inner_html: "{notes.summary_html}" }

            h4 { "The concept of I" }
            div { class: "markdown", dangerous_inner_html: "{notes.introduction_html}" }
            if !notes.terms.is_empty() {
                dl { class: "terms",
                    for term in notes.terms.iter() {
                        div { key: "{term.term}", class: "term",
                            dt { "{term.term}" }
                            dd { "{term.definition}" }
                        }
                    }
                }
            }

            h4 { "Deeper study" }
            div { class: "markdown", dangerous_inner_html: "{notes.deeper_study_html}" }
        }
    }
}
