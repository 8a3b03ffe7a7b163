use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::views::{LessonListView, LessonView, RootLayout};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(RootLayout)]
        #[route("/", LessonListView)] Home {},
        #[route("/lessons/:lesson_number", LessonView)] Lesson { lesson_number: String },
}

impl Route {
    /// Route to a lesson page by number.
    #[must_use]
    pub fn lesson(number: impl std::fmt::Display) -> Self {
        Self::Lesson {
            lesson_number: number.to_string(),
        }
    }
}
