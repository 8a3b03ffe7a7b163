use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of a lesson; also defines the canonical lesson order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonNumber(u32);

impl LessonNumber {
    /// Creates a new `LessonNumber`
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for LessonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LessonNumber({})", self.0)
    }
}

impl fmt::Display for LessonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for LessonNumber {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Error type for parsing a lesson number from a path segment or user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLessonNumberError {
    raw: String,
}

impl ParseLessonNumberError {
    /// The rejected input, verbatim.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ParseLessonNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid lesson number: {:?}", self.raw)
    }
}

impl std::error::Error for ParseLessonNumberError {}

impl FromStr for LessonNumber {
    type Err = ParseLessonNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(LessonNumber::new)
            .map_err(|_| ParseLessonNumberError { raw: s.to_string() })
    }
}
