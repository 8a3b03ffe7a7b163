#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;
pub mod navigation;
pub mod summary;

pub use catalog::LessonCatalog;
pub use navigation::{LessonNavigation, LessonPosition, NavigationError};
pub use summary::{LessonSummary, summarize};
