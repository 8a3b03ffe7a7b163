use std::sync::Arc;

use lesson_core::LessonCatalog;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::error::LessonsError;
use crate::lessons_source::LessonsSource;

/// Loads the lessons dataset once per session and shares the sorted catalog.
///
/// A failed load is not cached; the next call fetches again.
pub struct CatalogService {
    source: Arc<dyn LessonsSource>,
    catalog: OnceCell<Arc<LessonCatalog>>,
}

impl CatalogService {
    #[must_use]
    pub fn new(source: Arc<dyn LessonsSource>) -> Self {
        Self {
            source,
            catalog: OnceCell::new(),
        }
    }

    /// Return the catalog, fetching it on first use.
    ///
    /// # Errors
    ///
    /// Returns `LessonsError` if the dataset cannot be fetched or parsed.
    pub async fn load(&self) -> Result<Arc<LessonCatalog>, LessonsError> {
        let catalog = self
            .catalog
            .get_or_try_init(|| async {
                let file = self.source.fetch().await?;
                let catalog = LessonCatalog::from_file(file);

                let duplicates = catalog.duplicate_lesson_numbers();
                if !duplicates.is_empty() {
                    warn!(?duplicates, "duplicate lesson numbers; first match wins");
                }
                info!(
                    source = %self.source.describe(),
                    lessons = catalog.len(),
                    "lessons loaded"
                );
                Ok::<_, LessonsError>(Arc::new(catalog))
            })
            .await?;
        Ok(Arc::clone(catalog))
    }

    /// The catalog if it has already been loaded.
    #[must_use]
    pub fn cached(&self) -> Option<Arc<LessonCatalog>> {
        self.catalog.get().map(Arc::clone)
    }
}
