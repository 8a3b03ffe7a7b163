use lesson_core::LessonNavigation;
use lesson_core::model::{ExamplePhrase, Lesson, LessonNumber, VocabularyEntry};

use crate::vm::markdown_vm::markdown_to_html;

/// UI-ready representation of a resolved lesson page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonPageVm {
    pub number: LessonNumber,
    pub title: String,
    pub objective: String,
    pub position_label: String,
    pub vocabulary: Vec<VocabularyRowVm>,
    pub syntax_notes_html: Vec<String>,
    pub phrases: Vec<PhraseVm>,
    pub practice: Vec<String>,
    pub tip_html: String,
    pub previous: Option<LessonNavLinkVm>,
    pub next: Option<LessonNavLinkVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VocabularyRowVm {
    pub shum: String,
    pub pronunciation: String,
    pub english: String,
    pub literal_meaning: Option<String>,
    pub audio: Option<String>,
}

impl From<&VocabularyEntry> for VocabularyRowVm {
    fn from(entry: &VocabularyEntry) -> Self {
        Self {
            shum: entry.shum.clone(),
            pronunciation: entry.pronunciation.clone(),
            english: entry.english.clone(),
            literal_meaning: non_blank(entry.literal_meaning.as_deref()),
            audio: non_blank(entry.audio.as_deref()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhraseVm {
    pub shum: String,
    pub english: String,
    pub explanation: Option<String>,
    pub audio: Option<String>,
}

impl From<&ExamplePhrase> for PhraseVm {
    fn from(phrase: &ExamplePhrase) -> Self {
        Self {
            shum: phrase.shum.clone(),
            english: phrase.english.clone(),
            explanation: non_blank(phrase.explanation.as_deref()),
            audio: non_blank(phrase.audio.as_deref()),
        }
    }
}

/// Previous/next link target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonNavLinkVm {
    pub number: LessonNumber,
    pub label: String,
}

impl From<&Lesson> for LessonNavLinkVm {
    fn from(lesson: &Lesson) -> Self {
        Self {
            number: lesson.number(),
            label: format!("{}. {}", lesson.number(), lesson.title),
        }
    }
}

#[must_use]
pub fn map_lesson_page(nav: &LessonNavigation<'_>) -> LessonPageVm {
    let lesson = nav.lesson;
    LessonPageVm {
        number: lesson.number(),
        title: lesson.title.clone(),
        objective: lesson.objective.clone(),
        position_label: format!(
            "Lesson {} of {}",
            nav.position.ordinal(),
            nav.position.total
        ),
        vocabulary: lesson.vocabulary.iter().map(VocabularyRowVm::from).collect(),
        syntax_notes_html: lesson
            .syntax_notes
            .iter()
            .map(|note| markdown_to_html(note))
            .collect(),
        phrases: lesson.example_phrases.iter().map(PhraseVm::from).collect(),
        practice: lesson.practice.clone(),
        tip_html: markdown_to_html(&lesson.tip),
        previous: nav.previous.map(LessonNavLinkVm::from),
        next: nav.next.map(LessonNavLinkVm::from),
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|val| !val.is_empty())
        .map(str::to_owned)
}
