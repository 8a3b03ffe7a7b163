mod ids;
mod lesson;
mod lessons_file;
mod notes;
mod progress;

pub use ids::{LessonNumber, ParseLessonNumberError};
pub use lesson::{ExamplePhrase, Lesson, VocabularyEntry};
pub use lessons_file::LessonsFile;
pub use notes::{ConceptOfI, ConceptTerm, LanguageNotes};
pub use progress::{CompletionSummary, ProgressState};
