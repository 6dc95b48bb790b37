use std::sync::Arc;

use course_core::model::CourseCatalog;
use services::{CompletionService, DiscussionConfig, LessonContentService};

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<CourseCatalog>;
    fn completion(&self) -> Arc<CompletionService>;
    fn content(&self) -> Arc<LessonContentService>;
    fn discussion(&self) -> DiscussionConfig;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<CourseCatalog>,
    completion: Arc<CompletionService>,
    content: Arc<LessonContentService>,
    discussion: DiscussionConfig,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            completion: app.completion(),
            content: app.content(),
            discussion: app.discussion(),
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
    pub fn discussion(&self) -> &DiscussionConfig {
        &self.discussion
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
