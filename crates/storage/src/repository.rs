use async_trait::async_trait;
use course_core::model::LessonId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("io error: {0}")]
    Io(String),
}

/// Durable string key/value slots, the client-local persistence contract.
#[async_trait]
pub trait KeyValueRepository: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or overwrite the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn put_value(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn remove_value(&self, key: &str) -> Result<(), StorageError>;
}

/// Resolves a lesson to its markdown source.
#[async_trait]
pub trait LessonContentRepository: Send + Sync {
    /// Fetch the markdown for a lesson.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if no content exists for the lesson.
    async fn read_lesson(&self, lesson: &LessonId) -> Result<String, StorageError>;

    /// Human-readable location of a lesson's source, used in error messages.
    fn describe_location(&self, lesson: &LessonId) -> String;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    values: Arc<Mutex<HashMap<String, String>>>,
    lessons: Arc<Mutex<HashMap<LessonId, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: Arc::new(Mutex::new(HashMap::new())),
            lessons: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Register markdown for a lesson.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn insert_lesson(
        &self,
        lesson: LessonId,
        markdown: impl Into<String>,
    ) -> Result<(), StorageError> {
        let mut guard = self
            .lessons
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(lesson, markdown.into());
        Ok(())
    }
}

#[async_trait]
impl KeyValueRepository for InMemoryRepository {
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn put_value(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_value(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

#[async_trait]
impl LessonContentRepository for InMemoryRepository {
    async fn read_lesson(&self, lesson: &LessonId) -> Result<String, StorageError> {
        let guard = self
            .lessons
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.get(lesson).cloned().ok_or(StorageError::NotFound)
    }

    fn describe_location(&self, lesson: &LessonId) -> String {
        format!("memory:{lesson}")
    }
}

/// Key/value backend used when durable storage could not be opened.
///
/// Every call fails with `StorageError::Unavailable`, which callers treat
/// as "nothing stored yet".
#[derive(Clone, Debug)]
pub struct UnavailableRepository {
    reason: String,
}

impl UnavailableRepository {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl KeyValueRepository for UnavailableRepository {
    async fn get_value(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable(self.reason.clone()))
    }

    async fn put_value(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable(self.reason.clone()))
    }

    async fn remove_value(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable(self.reason.clone()))
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub values: Arc<dyn KeyValueRepository>,
    pub lessons: Arc<dyn LessonContentRepository>,
}

impl Storage {
    #[must_use]
    pub fn new(
        values: Arc<dyn KeyValueRepository>,
        lessons: Arc<dyn LessonContentRepository>,
    ) -> Self {
        Self { values, lessons }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let values: Arc<dyn KeyValueRepository> = Arc::new(repo.clone());
        let lessons: Arc<dyn LessonContentRepository> = Arc::new(repo);
        Self { values, lessons }
    }
}
