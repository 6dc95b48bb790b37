use std::sync::Arc;

use course_core::model::LessonId;
use storage::repository::LessonContentRepository;
use tracing::error;

use crate::error::ContentServiceError;

/// Markdown shown in place of a lesson whose source cannot be read.
pub const MISSING_LESSON_MARKDOWN: &str =
    "# Lesson Content Not Found\n\nAn error occurred while trying to load the lesson content.";

/// Outcome of resolving a lesson to renderable markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonContent {
    Found { markdown: String },
    Missing { message: String, fallback: String },
}

impl LessonContent {
    #[must_use]
    pub fn markdown(&self) -> &str {
        match self {
            LessonContent::Found { markdown } => markdown,
            LessonContent::Missing { fallback, .. } => fallback,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            LessonContent::Found { .. } => None,
            LessonContent::Missing { message, .. } => Some(message),
        }
    }
}

/// Resolves module/lesson pairs to markdown.
#[derive(Clone)]
pub struct LessonContentService {
    lessons: Arc<dyn LessonContentRepository>,
}

impl LessonContentService {
    #[must_use]
    pub fn new(lessons: Arc<dyn LessonContentRepository>) -> Self {
        Self { lessons }
    }

    /// Read the raw markdown for a lesson.
    ///
    /// # Errors
    ///
    /// Returns `ContentServiceError::Storage` if the source is missing or unreadable.
    pub async fn read(&self, lesson: &LessonId) -> Result<String, ContentServiceError> {
        Ok(self.lessons.read_lesson(lesson).await?)
    }

    /// Resolve a lesson, substituting a placeholder document on failure.
    pub async fn resolve(&self, lesson: &LessonId) -> LessonContent {
        match self.read(lesson).await {
            Ok(markdown) => LessonContent::Found { markdown },
            Err(err) => {
                let location = self.lessons.describe_location(lesson);
                error!(%lesson, %location, error = %err, "error reading lesson markdown");
                LessonContent::Missing {
                    message: format!(
                        "Could not load lesson content for {lesson}. Please check the file path \
                         and ensure it exists. Expected at: {location}"
                    ),
                    fallback: MISSING_LESSON_MARKDOWN.to_string(),
                }
            }
        }
    }
}
