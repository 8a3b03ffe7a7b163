use serde::{Deserialize, Serialize};

use crate::model::lesson::Lesson;
use crate::model::notes::LanguageNotes;

/// Root document of the lessons dataset.
///
/// Lessons are kept in the order they were authored; `LessonCatalog` owns the
/// canonical ascending ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonsFile {
    pub lessons: Vec<Lesson>,
    pub learning_tips: Vec<String>,
    pub language_notes: LanguageNotes,
}
