use dioxus::prelude::*;
use lesson_core::NavigationError;
use services::LessonsError;

/// Error surfaced at the page boundary, with an HTTP-style status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewError {
    pub status: u16,
    pub message: String,
}

impl ViewError {
    #[must_use]
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<&LessonsError> for ViewError {
    fn from(err: &LessonsError) -> Self {
        Self::new(err.status_code(), "Unable to load lessons data")
    }
}

impl From<&NavigationError> for ViewError {
    fn from(err: &NavigationError) -> Self {
        let message = match err {
            NavigationError::InvalidLessonNumber { .. } => "Invalid lesson number.",
            _ => "Lesson not found.",
        };
        Self::new(err.status_code(), message)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(err.clone()),
            None => ViewState::Error(ViewError::new(500, "Something went wrong.")),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
