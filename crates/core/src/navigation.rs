//! Lesson lookup and previous/next navigation over an ordered lesson list.

use thiserror::Error;

use crate::model::{Lesson, LessonNumber};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NavigationError {
    #[error("invalid lesson number: {raw:?}")]
    InvalidLessonNumber { raw: String },

    #[error("lesson {0} not found")]
    LessonNotFound(LessonNumber),
}

impl NavigationError {
    /// HTTP-style status for the page boundary: 400 or 404.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidLessonNumber { .. } => 400,
            Self::LessonNotFound(_) => 404,
        }
    }
}

/// Zero-based position of a lesson within the full list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonPosition {
    pub index: usize,
    pub total: usize,
}

impl LessonPosition {
    /// One-based ordinal for display ("Lesson 2 of 10").
    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.index + 1
    }
}

/// A resolved lesson together with its neighbours in list order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonNavigation<'a> {
    pub lesson: &'a Lesson,
    pub previous: Option<&'a Lesson>,
    pub next: Option<&'a Lesson>,
    pub position: LessonPosition,
}

impl LessonNavigation<'_> {
    #[must_use]
    pub fn previous_number(&self) -> Option<LessonNumber> {
        self.previous.map(Lesson::number)
    }

    #[must_use]
    pub fn next_number(&self) -> Option<LessonNumber> {
        self.next.map(Lesson::number)
    }
}

/// Resolve a raw lesson number (e.g. a path segment) against `lessons`.
///
/// `lessons` must already be in canonical ascending order.
///
/// # Errors
///
/// Returns `NavigationError::InvalidLessonNumber` when `raw` is not an integer,
/// and `NavigationError::LessonNotFound` when no lesson carries that number.
pub fn resolve<'a>(lessons: &'a [Lesson], raw: &str) -> Result<LessonNavigation<'a>, NavigationError> {
    let number: LessonNumber = raw
        .parse()
        .map_err(|_| NavigationError::InvalidLessonNumber {
            raw: raw.to_string(),
        })?;
    resolve_number(lessons, number)
}

/// Resolve an already-parsed lesson number. First match wins on duplicates.
///
/// # Errors
///
/// Returns `NavigationError::LessonNotFound` when no lesson carries `number`.
pub fn resolve_number(
    lessons: &[Lesson],
    number: LessonNumber,
) -> Result<LessonNavigation<'_>, NavigationError> {
    let index = lessons
        .iter()
        .position(|lesson| lesson.number() == number)
        .ok_or(NavigationError::LessonNotFound(number))?;

    Ok(LessonNavigation {
        lesson: &lessons[index],
        previous: index.checked_sub(1).and_then(|prev| lessons.get(prev)),
        next: lessons.get(index + 1),
        position: LessonPosition {
            index,
            total: lessons.len(),
        },
    })
}
