use serde::{Deserialize, Serialize};

use crate::model::ids::LessonNumber;

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// A single lesson of the course, as authored in the lessons dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub lesson_number: LessonNumber,
    pub title: String,
    pub objective: String,
    pub vocabulary: Vec<VocabularyEntry>,
    pub syntax_notes: Vec<String>,
    pub example_phrases: Vec<ExamplePhrase>,
    pub practice: Vec<String>,
    pub tip: String,
}

impl Lesson {
    #[must_use]
    pub fn number(&self) -> LessonNumber {
        self.lesson_number
    }
}

//
// ─── LESSON PARTS ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    pub shum: String,
    pub pronunciation: String,
    pub english: String,
    #[serde(default)]
    pub literal_meaning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamplePhrase {
    pub shum: String,
    pub english: String,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}
