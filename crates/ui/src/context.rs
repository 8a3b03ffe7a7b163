use std::sync::Arc;

use lesson_core::LessonCatalog;
use services::{CatalogService, ProgressStore};

pub trait UiApp: Send + Sync {
    fn progress(&self) -> Arc<ProgressStore>;
    fn catalog(&self) -> Arc<CatalogService>;
}

#[derive(Clone)]
pub struct AppContext {
    progress: Arc<ProgressStore>,
    catalog: Arc<CatalogService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            progress: app.progress(),
            catalog: app.catalog(),
        }
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressStore> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    /// The dataset once the root layout has loaded it.
    #[must_use]
    pub fn loaded_catalog(&self) -> Option<Arc<LessonCatalog>> {
        self.catalog.cached()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
