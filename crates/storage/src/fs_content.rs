use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use course_core::model::LessonId;

use crate::repository::{LessonContentRepository, StorageError};

/// Reads lesson markdown from `<root>/<module>/<lesson>.md`.
#[derive(Clone, Debug)]
pub struct FsLessonContentRepository {
    root: PathBuf,
}

impl FsLessonContentRepository {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Slugs are validated to `[A-Za-z0-9_-]`, so the joined path cannot
    /// escape `root`.
    #[must_use]
    pub fn lesson_path(&self, lesson: &LessonId) -> PathBuf {
        self.root
            .join(lesson.module().as_str())
            .join(format!("{}.md", lesson.lesson()))
    }
}

#[async_trait]
impl LessonContentRepository for FsLessonContentRepository {
    async fn read_lesson(&self, lesson: &LessonId) -> Result<String, StorageError> {
        let path = self.lesson_path(lesson);
        match tokio::fs::read_to_string(&path).await {
            Ok(markdown) => Ok(markdown),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(StorageError::NotFound),
            Err(err) => Err(StorageError::Io(format!("{}: {err}", path.display()))),
        }
    }

    fn describe_location(&self, lesson: &LessonId) -> String {
        self.lesson_path(lesson).display().to_string()
    }
}
