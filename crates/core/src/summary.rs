use serde::{Deserialize, Serialize};

use crate::model::{Lesson, LessonNumber};

/// Lightweight listing view of a lesson, without the lesson body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonSummary {
    pub lesson_number: LessonNumber,
    pub title: String,
    pub objective: String,
}

impl From<&Lesson> for LessonSummary {
    fn from(lesson: &Lesson) -> Self {
        Self {
            lesson_number: lesson.lesson_number,
            title: lesson.title.clone(),
            objective: lesson.objective.clone(),
        }
    }
}

/// Project lessons into summaries, one per lesson, in input order.
#[must_use]
pub fn summarize(lessons: &[Lesson]) -> Vec<LessonSummary> {
    lessons.iter().map(LessonSummary::from).collect()
}
