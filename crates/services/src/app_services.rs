use std::path::PathBuf;
use std::sync::Arc;

use course_core::model::{CourseCatalog, DiscussionError, DiscussionSettings};
use storage::repository::{KeyValueRepository, Storage, UnavailableRepository};
use storage::FsLessonContentRepository;
use tracing::warn;

use crate::completion_service::CompletionService;
use crate::content_service::LessonContentService;
use crate::error::AppServicesError;

/// Discussion configuration as resolved at startup.
pub type DiscussionConfig = Result<DiscussionSettings, DiscussionError>;

/// Assembles app-facing services around a course catalog.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<CourseCatalog>,
    completion: Arc<CompletionService>,
    content: Arc<LessonContentService>,
    discussion: DiscussionConfig,
    storage_available: bool,
}

impl AppServices {
    #[must_use]
    pub fn from_storage(
        storage: &Storage,
        catalog: CourseCatalog,
        discussion: DiscussionConfig,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            completion: Arc::new(CompletionService::new(Arc::clone(&storage.values))),
            content: Arc::new(LessonContentService::new(Arc::clone(&storage.lessons))),
            discussion,
            storage_available: true,
        }
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        content_root: impl Into<PathBuf>,
        catalog: CourseCatalog,
        discussion: DiscussionConfig,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url, content_root).await?;
        Ok(Self::from_storage(&storage, catalog, discussion))
    }

    /// Like `new_sqlite`, but falls back to storage that reports itself as
    /// unavailable when the database cannot be opened. Completion then
    /// behaves as "nothing completed" and writes are dropped with a log line.
    pub async fn open_or_degrade(
        db_url: &str,
        content_root: impl Into<PathBuf>,
        catalog: CourseCatalog,
        discussion: DiscussionConfig,
    ) -> Self {
        let content_root = content_root.into();
        match Self::new_sqlite(db_url, content_root.clone(), catalog.clone(), discussion.clone())
            .await
        {
            Ok(services) => services,
            Err(err) => {
                warn!(db_url, error = %err, "durable storage unavailable; progress will not be saved");
                let values: Arc<dyn KeyValueRepository> =
                    Arc::new(UnavailableRepository::new(err.to_string()));
                let storage = Storage::new(
                    values,
                    Arc::new(FsLessonContentRepository::new(content_root)),
                );
                let mut services = Self::from_storage(&storage, catalog, discussion);
                services.storage_available = false;
                services
            }
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CourseCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn completion(&self) -> Arc<CompletionService> {
        Arc::clone(&self.completion)
    }

    #[must_use]
    pub fn content(&self) -> Arc<LessonContentService> {
        Arc::clone(&self.content)
    }

    #[must_use]
    pub fn discussion(&self) -> DiscussionConfig {
        self.discussion.clone()
    }

    #[must_use]
    pub fn storage_available(&self) -> bool {
        self.storage_available
    }
}
