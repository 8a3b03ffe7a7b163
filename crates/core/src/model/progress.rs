use serde::{Deserialize, Deserializer, Serialize};

use crate::model::ids::LessonNumber;

/// Learner progress: whether the course was started and which lessons are done.
///
/// `completed_lessons` is always ascending and free of duplicates. Completing a
/// lesson implies the course was started; the reverse does not hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressState {
    started: bool,
    #[serde(deserialize_with = "deserialize_sorted_unique")]
    completed_lessons: Vec<LessonNumber>,
}

impl ProgressState {
    /// Build a state from arbitrary input, normalizing the completed list.
    #[must_use]
    pub fn new(started: bool, completed: impl IntoIterator<Item = LessonNumber>) -> Self {
        Self {
            started,
            completed_lessons: sorted_unique(completed.into_iter().collect()),
        }
    }

    #[must_use]
    pub fn started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn completed_lessons(&self) -> &[LessonNumber] {
        &self.completed_lessons
    }

    #[must_use]
    pub fn is_completed(&self, number: LessonNumber) -> bool {
        self.completed_lessons.binary_search(&number).is_ok()
    }

    /// Returns the state with `started` set, leaving completions untouched.
    #[must_use]
    pub fn started_state(&self) -> Self {
        Self {
            started: true,
            completed_lessons: self.completed_lessons.clone(),
        }
    }

    /// Returns the state with `number` flipped in the completed set.
    ///
    /// Either direction marks the course as started.
    #[must_use]
    pub fn toggled(&self, number: LessonNumber) -> Self {
        let mut completed_lessons = self.completed_lessons.clone();
        match completed_lessons.binary_search(&number) {
            Ok(pos) => {
                completed_lessons.remove(pos);
            }
            Err(pos) => completed_lessons.insert(pos, number),
        }
        Self {
            started: true,
            completed_lessons,
        }
    }

    /// Count completions against the lessons that actually exist.
    #[must_use]
    pub fn completion<'a>(
        &self,
        lessons: impl IntoIterator<Item = &'a LessonNumber>,
    ) -> CompletionSummary {
        let mut total = 0_usize;
        let mut completed = 0_usize;
        for number in lessons {
            total += 1;
            if self.is_completed(*number) {
                completed += 1;
            }
        }
        CompletionSummary { completed, total }
    }
}

/// Completed-versus-total counts for a progress bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionSummary {
    pub completed: usize,
    pub total: usize,
}

impl CompletionSummary {
    /// Whole-number percentage, 0 when there are no lessons.
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let pct = self.completed.saturating_mul(100) / self.total;
        u8::try_from(pct.min(100)).unwrap_or(100)
    }
}

fn sorted_unique(mut values: Vec<LessonNumber>) -> Vec<LessonNumber> {
    values.sort_unstable();
    values.dedup();
    values
}

fn deserialize_sorted_unique<'de, D>(deserializer: D) -> Result<Vec<LessonNumber>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<LessonNumber>::deserialize(deserializer).map(sorted_unique)
}
