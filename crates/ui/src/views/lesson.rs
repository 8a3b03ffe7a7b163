use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ErrorPage, ViewError};
use crate::views::progress::{ProgressAction, spawn_progress_action, use_progress};
use crate::vm::{LessonNavLinkVm, LessonPageVm, map_lesson_page};

#[component]
pub fn LessonView(lesson_number: String) -> Element {
    let ctx = use_context::<AppContext>();
    let progress = use_progress();

    let Some(catalog) = ctx.loaded_catalog() else {
        return rsx! {
            p { class: "loading", "Loading lessons..." }
        };
    };

    let page = match catalog.resolve(&lesson_number) {
        Ok(nav) => map_lesson_page(&nav),
        Err(err) => {
            let err = ViewError::from(&err);
            return rsx! {
                ErrorPage { status: err.status, message: err.message }
            };
        }
    };

    let number = page.number;
    let completed = progress.read().is_completed(number);
    let toggle_class = if completed {
        "btn btn-secondary"
    } else {
        "btn btn-primary"
    };
    let store = ctx.progress();
    let on_toggle = move |_: MouseEvent| {
        spawn_progress_action(store.clone(), ProgressAction::Toggle(number));
    };

    rsx! {
        div { class: "page lesson",
            header { class: "lesson-header",
                p { class: "lesson-position", "{page.position_label}" }
                h2 { "{page.number}. {page.title}" }
                p { class: "lesson-objective", "{page.objective}" }
            }

            LessonBody { page: page.clone() }

            section { class: "lesson-actions",
                button {
                    class: toggle_class,
                    onclick: on_toggle,
                    if completed { "Completed ✓ (undo)" } else { "Mark lesson complete" }
                }
            }

            LessonPager { previous: page.previous.clone(), next: page.next.clone() }
        }
    }
}

/// Lesson content without navigation or progress controls.
#[component]
pub fn LessonBody(page: LessonPageVm) -> Element {
    rsx! {
        if !page.vocabulary.is_empty() {
            section { class: "vocabulary",
                h3 { "Vocabulary" }
                table {
                    thead {
                        tr {
                            th { "Shum" }
                            th { "Pronunciation" }
                            th { "English" }
                            th { "Literally" }
                        }
                    }
                    tbody {
                        for row in page.vocabulary.iter() {
                            tr { key: "{row.shum}",
                                td { class: "shum", "{row.shum}" }
                                td { "{row.pronunciation}" }
                                td { "{row.english}" }
                                td { {row.literal_meaning.clone().unwrap_or_default()} }
                            }
                        }
                    }
                }
            }
        }

        if !page.syntax_notes_html.is_empty() {
            section { class: "syntax-notes",
                h3 { "Syntax notes" }
                for note in page.syntax_notes_html.iter() {
                    div { class: "markdown", dangerous_inner_html: "{note}" }
                }
            }
        }

        if !page.phrases.is_empty() {
            section { class: "phrases",
                h3 { "Example phrases" }
                ul {
                    for phrase in page.phrases.iter() {
                        li { key: "{phrase.shum}",
                            p { class: "shum", "{phrase.shum}" }
                            p { class: "english", "{phrase.english}" }
                            if let Some(explanation) = phrase.explanation.as_ref() {
                                p { class: "explanation", "{explanation}" }
                            }
                        }
                    }
                }
            }
        }

        if !page.practice.is_empty() {
            section { class: "practice",
                h3 { "Practice" }
                ol {
                    for item in page.practice.iter() {
                        li { "{item}" }
                    }
                }
            }
        }

        section { class: "tip",
            h3 { "Tip" }
            div { class: "markdown", dangerous_inner_html: "{page.tip_html}" }
        }
    }
}

#[component]
fn LessonPager(previous: Option<LessonNavLinkVm>, next: Option<LessonNavLinkVm>) -> Element {
    rsx! {
        nav { class: "lesson-pager",
            if let Some(prev) = previous {
                Link { class: "pager-prev", to: Route::lesson(prev.number), "← {prev.label}" }
            }
            Link { class: "pager-home", to: Route::Home {}, "All lessons" }
            if let Some(next) = next {
                Link { class: "pager-next", to: Route::lesson(next.number), "{next.label} →" }
            }
        }
    }
}
