use std::sync::Arc;

use storage::repository::Storage;

use crate::catalog_service::CatalogService;
use crate::error::AppServicesError;
use crate::lessons_source::{LessonsLocation, LessonsSource};
use crate::progress_store::ProgressStore;

/// Assembles app-facing services.
#[derive(Clone)]
pub struct AppServices {
    progress: Arc<ProgressStore>,
    catalog: Arc<CatalogService>,
}

impl AppServices {
    /// Build services from an existing storage and dataset source.
    #[must_use]
    pub fn new(storage: &Storage, source: Arc<dyn LessonsSource>) -> Self {
        Self {
            progress: Arc::new(ProgressStore::new(Arc::clone(&storage.slots))),
            catalog: Arc::new(CatalogService::new(source)),
        }
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the
    /// dataset location is unusable.
    pub async fn new_sqlite(
        db_url: &str,
        lessons: LessonsLocation,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let source = lessons.into_source()?;
        Ok(Self::new(&storage, source))
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressStore> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }
}
