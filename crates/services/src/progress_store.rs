use std::sync::{Arc, Mutex, PoisonError, Weak};

use lesson_core::model::{LessonNumber, ProgressState};
use storage::repository::KeyValueRepository;
use tracing::{debug, warn};

use crate::error::ProgressError;

/// Key of the single slot holding the serialized `ProgressState`.
pub const PROGRESS_STORAGE_KEY: &str = "shum-learning-progress";

type Callback = Box<dyn Fn(&ProgressState) + Send + Sync>;

/// A registered callback plus the newest state version it has been handed.
struct Listener {
    callback: Callback,
    delivered: Mutex<Option<u64>>,
}

impl Listener {
    fn new(callback: Callback) -> Self {
        Self {
            callback,
            delivered: Mutex::new(None),
        }
    }

    /// Invoke the callback unless a newer version was already delivered.
    fn deliver(&self, version: u64, state: &ProgressState) {
        let mut delivered = self.delivered.lock().unwrap_or_else(PoisonError::into_inner);
        if delivered.is_some_and(|seen| seen >= version) {
            return;
        }
        *delivered = Some(version);
        (self.callback)(state);
    }
}

/// Current state and listeners share one lock, so registering a listener and
/// reading the state it starts from cannot straddle a commit.
#[derive(Default)]
struct Shared {
    version: u64,
    state: ProgressState,
    next_id: u64,
    listeners: Vec<(u64, Arc<Listener>)>,
}

/// Observable learner progress backed by a durable key-value slot.
///
/// Every mutation runs read-modify-persist-notify under a single async gate, so
/// mutations never interleave. The new state is committed only after it has
/// been written.
pub struct ProgressStore {
    slots: Option<Arc<dyn KeyValueRepository>>,
    gate: tokio::sync::Mutex<()>,
    shared: Arc<Mutex<Shared>>,
}

impl ProgressStore {
    #[must_use]
    pub fn new(slots: Arc<dyn KeyValueRepository>) -> Self {
        Self::with_slots(Some(slots))
    }

    /// A store without durable storage: `initialize` is a no-op and mutations
    /// only live in memory.
    #[must_use]
    pub fn detached() -> Self {
        Self::with_slots(None)
    }

    fn with_slots(slots: Option<Arc<dyn KeyValueRepository>>) -> Self {
        Self {
            slots,
            gate: tokio::sync::Mutex::new(()),
            shared: Arc::new(Mutex::new(Shared::default())),
        }
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.slots.is_some()
    }

    #[must_use]
    pub fn snapshot(&self) -> ProgressState {
        self.shared
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .state
            .clone()
    }

    /// Load previously persisted progress, falling back to defaults.
    ///
    /// Safe to call repeatedly. Stored data that cannot be read or parsed is
    /// logged and replaced by the default state; nothing is written back.
    pub async fn initialize(&self) {
        let Some(slots) = self.slots.as_ref() else {
            debug!("progress store is detached; skipping initialize");
            return;
        };

        let _gate = self.gate.lock().await;
        let state = match slots.get_value(PROGRESS_STORAGE_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<ProgressState>(&raw) {
                Ok(state) => state,
                Err(err) => {
                    warn!(error = %err, "failed to parse stored progress; using defaults");
                    ProgressState::default()
                }
            },
            Ok(None) => ProgressState::default(),
            Err(err) => {
                warn!(error = %err, "failed to read stored progress; using defaults");
                ProgressState::default()
            }
        };

        debug!(
            started = state.started(),
            completed = state.completed_lessons().len(),
            "progress initialized"
        );
        self.commit(state);
    }

    /// Mark the course as started.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the new state cannot be persisted.
    pub async fn start(&self) -> Result<ProgressState, ProgressError> {
        self.apply(ProgressState::started_state).await
    }

    /// Flip `lesson` in the completed set; either way the course counts as started.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the new state cannot be persisted.
    pub async fn toggle_lesson(&self, lesson: LessonNumber) -> Result<ProgressState, ProgressError> {
        self.apply(|state| state.toggled(lesson)).await
    }

    /// Restore and persist the default state.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the default state cannot be persisted.
    pub async fn reset(&self) -> Result<ProgressState, ProgressError> {
        self.apply(|_| ProgressState::default()).await
    }

    /// Register `callback`; it runs now with the current state and after every change.
    ///
    /// The returned handle unregisters the callback when dropped.
    #[must_use = "dropping the subscription unregisters the callback"]
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&ProgressState) + Send + Sync + 'static,
    {
        let listener = Arc::new(Listener::new(Box::new(callback)));
        let (id, version, state) = {
            let mut guard = self.shared.lock().unwrap_or_else(PoisonError::into_inner);
            let id = guard.next_id;
            guard.next_id += 1;
            guard.listeners.push((id, Arc::clone(&listener)));
            (id, guard.version, guard.state.clone())
        };

        // A commit racing this call may deliver first; the stale state is then skipped.
        listener.deliver(version, &state);

        Subscription {
            id,
            shared: Arc::downgrade(&self.shared),
        }
    }

    async fn apply<F>(&self, next: F) -> Result<ProgressState, ProgressError>
    where
        F: FnOnce(&ProgressState) -> ProgressState,
    {
        let _gate = self.gate.lock().await;
        let state = next(&self.snapshot());
        self.persist(&state).await?;
        self.commit(state.clone());
        Ok(state)
    }

    async fn persist(&self, state: &ProgressState) -> Result<(), ProgressError> {
        let Some(slots) = self.slots.as_ref() else {
            return Ok(());
        };
        let raw = serde_json::to_string(state)?;
        slots.set_value(PROGRESS_STORAGE_KEY, &raw).await?;
        Ok(())
    }

    fn commit(&self, state: ProgressState) {
        // Listeners are copied out so callbacks may subscribe or unsubscribe.
        let (version, listeners) = {
            let mut guard = self.shared.lock().unwrap_or_else(PoisonError::into_inner);
            guard.version += 1;
            guard.state.clone_from(&state);
            let listeners: Vec<Arc<Listener>> = guard
                .listeners
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect();
            (guard.version, listeners)
        };
        for listener in listeners {
            listener.deliver(version, &state);
        }
    }
}

/// Handle returned by [`ProgressStore::subscribe`].
pub struct Subscription {
    id: u64,
    shared: Weak<Mutex<Shared>>,
}

impl Subscription {
    /// Unregister the callback now.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            let mut guard = shared.lock().unwrap_or_else(PoisonError::into_inner);
            guard.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
