use crate::model::{LanguageNotes, Lesson, LessonNumber, LessonsFile};
use crate::navigation::{self, LessonNavigation, NavigationError};
use crate::summary::{LessonSummary, summarize};

/// The loaded dataset with lessons in canonical ascending order.
///
/// Built once per session from a `LessonsFile`; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonCatalog {
    lessons: Vec<Lesson>,
    learning_tips: Vec<String>,
    language_notes: LanguageNotes,
}

impl LessonCatalog {
    /// Sort lessons ascending by number, whatever order they arrived in.
    ///
    /// The sort is stable, so among duplicate numbers the first authored wins.
    #[must_use]
    pub fn from_file(file: LessonsFile) -> Self {
        let LessonsFile {
            mut lessons,
            learning_tips,
            language_notes,
        } = file;
        lessons.sort_by_key(Lesson::number);
        Self {
            lessons,
            learning_tips,
            language_notes,
        }
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    #[must_use]
    pub fn learning_tips(&self) -> &[String] {
        &self.learning_tips
    }

    #[must_use]
    pub fn language_notes(&self) -> &LanguageNotes {
        &self.language_notes
    }

    #[must_use]
    pub fn summaries(&self) -> Vec<LessonSummary> {
        summarize(&self.lessons)
    }

    pub fn lesson_numbers(&self) -> impl Iterator<Item = &LessonNumber> {
        self.lessons.iter().map(|lesson| &lesson.lesson_number)
    }

    /// Resolve a raw lesson number against the sorted lessons.
    ///
    /// # Errors
    ///
    /// See [`navigation::resolve`].
    pub fn resolve(&self, raw: &str) -> Result<LessonNavigation<'_>, NavigationError> {
        navigation::resolve(&self.lessons, raw)
    }

    /// Lesson numbers that appear more than once, ascending, each listed once.
    #[must_use]
    pub fn duplicate_lesson_numbers(&self) -> Vec<LessonNumber> {
        let mut duplicates: Vec<LessonNumber> = self
            .lessons
            .windows(2)
            .filter(|pair| pair[0].number() == pair[1].number())
            .map(|pair| pair[0].number())
            .collect();
        duplicates.dedup();
        duplicates
    }
}
