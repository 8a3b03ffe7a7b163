use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use lesson_core::model::{LessonNumber, ProgressState};
use services::{ProgressError, ProgressStore, Subscription};
use tracing::warn;

use crate::context::AppContext;

/// Track the progress store in a signal for the lifetime of the component.
///
/// The subscription is registered after the first render and dropped with the
/// component.
pub fn use_progress() -> SyncSignal<ProgressState> {
    let store = use_context::<AppContext>().progress();
    let state = use_signal_sync({
        let store = Arc::clone(&store);
        move || store.snapshot()
    });
    let subscription = use_hook(|| Rc::new(RefCell::new(None::<Subscription>)));

    use_effect(move || {
        let handle = store.subscribe(move |next| {
            let mut state = state;
            state.set(next.clone());
        });
        subscription.borrow_mut().replace(handle);
    });

    state
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ProgressAction {
    Start,
    Toggle(LessonNumber),
    Reset,
}

/// Run a progress mutation in the background; failures are logged.
pub(crate) fn spawn_progress_action(store: Arc<ProgressStore>, action: ProgressAction) {
    spawn(async move {
        let result: Result<ProgressState, ProgressError> = match action {
            ProgressAction::Start => store.start().await,
            ProgressAction::Toggle(number) => store.toggle_lesson(number).await,
            ProgressAction::Reset => store.reset().await,
        };
        if let Err(err) = result {
            warn!(error = %err, ?action, "failed to save progress");
        }
    });
}
