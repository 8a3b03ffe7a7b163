mod lesson_vm;
mod list_vm;
mod markdown_vm;

pub use lesson_vm::{LessonNavLinkVm, LessonPageVm, PhraseVm, VocabularyRowVm, map_lesson_page};
pub use list_vm::{
    LessonListItemVm, NotesVm, ProgressBarVm, TermVm, map_lesson_list, map_notes, map_progress_bar,
};
pub use markdown_vm::{markdown_to_html, sanitize_html};
