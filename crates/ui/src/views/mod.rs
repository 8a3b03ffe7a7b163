mod error_page;
mod layout;
mod lesson;
mod lesson_list;
mod progress;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use error_page::ErrorPage;
pub use layout::RootLayout;
pub use lesson::{LessonBody, LessonView};
pub use lesson_list::LessonListView;
pub use progress::use_progress;
pub use state::{ViewError, ViewState, view_state_from_resource};
