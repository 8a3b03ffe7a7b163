use lesson_core::LessonSummary;
use lesson_core::model::{CompletionSummary, LanguageNotes, LessonNumber, ProgressState};

use crate::vm::markdown_vm::markdown_to_html;

/// One row of the lesson list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonListItemVm {
    pub number: LessonNumber,
    pub title: String,
    pub objective: String,
    pub completed: bool,
}

#[must_use]
pub fn map_lesson_list(
    summaries: &[LessonSummary],
    progress: &ProgressState,
) -> Vec<LessonListItemVm> {
    summaries
        .iter()
        .map(|summary| LessonListItemVm {
            number: summary.lesson_number,
            title: summary.title.clone(),
            objective: summary.objective.clone(),
            completed: progress.is_completed(summary.lesson_number),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressBarVm {
    pub label: String,
    pub percent: u8,
}

#[must_use]
pub fn map_progress_bar(summary: CompletionSummary) -> ProgressBarVm {
    ProgressBarVm {
        label: format!(
            "{} of {} lessons completed",
            summary.completed, summary.total
        ),
        percent: summary.percent(),
    }
}

/// Language notes with markdown already rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotesVm {
    pub summary_html: String,
    pub introduction_html: String,
    pub terms: Vec<TermVm>,
    pub deeper_study_html: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermVm {
    pub term: String,
    pub definition: String,
}

#[must_use]
pub fn map_notes(notes: &LanguageNotes) -> NotesVm {
    NotesVm {
        summary_html: markdown_to_html(&notes.summary),
        introduction_html: markdown_to_html(&notes.concept_of_i.introduction),
        terms: notes
            .concept_of_i
            .terms
            .iter()
            .map(|term| TermVm {
                term: term.term.clone(),
                definition: term.definition.clone(),
            })
            .collect(),
        deeper_study_html: markdown_to_html(&notes.deeper_study),
    }
}
