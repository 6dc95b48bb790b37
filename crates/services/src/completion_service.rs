use std::sync::Arc;

use course_core::COMPLETION_STORAGE_KEY;
use course_core::model::CompletionSet;
use storage::repository::{KeyValueRepository, StorageError};
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use crate::error::CompletionError;

/// How a `load` arrived at its result.
///
/// The returned set is the same (empty) for every non-`Restored` outcome;
/// this only exists for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Restored { count: usize },
    Missing,
    Unavailable,
    Malformed,
}

/// Reads and writes the completion set under a single durable key.
#[derive(Clone)]
pub struct CompletionService {
    values: Arc<dyn KeyValueRepository>,
    key: String,
    // tokio's mutex hands out the lock in FIFO order, so writes land in the
    // order they were issued.
    write_lock: Arc<Mutex<()>>,
}

impl CompletionService {
    #[must_use]
    pub fn new(values: Arc<dyn KeyValueRepository>) -> Self {
        Self::with_key(values, COMPLETION_STORAGE_KEY)
    }

    #[must_use]
    pub fn with_key(values: Arc<dyn KeyValueRepository>, key: impl Into<String>) -> Self {
        Self {
            values,
            key: key.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the persisted completion set.
    ///
    /// Never fails: unavailable storage and malformed values both yield an
    /// empty set.
    pub async fn load(&self) -> CompletionSet {
        self.load_with_outcome().await.0
    }

    /// Load the persisted completion set along with how it was obtained.
    pub async fn load_with_outcome(&self) -> (CompletionSet, LoadOutcome) {
        let raw = match self.values.get_value(&self.key).await {
            Ok(Some(raw)) if !raw.trim().is_empty() => raw,
            Ok(_) => {
                debug!(key = %self.key, "no stored completion");
                return (CompletionSet::new(), LoadOutcome::Missing);
            }
            Err(StorageError::Unavailable(reason)) => {
                warn!(key = %self.key, %reason, "completion storage unavailable");
                return (CompletionSet::new(), LoadOutcome::Unavailable);
            }
            Err(err) => {
                error!(key = %self.key, error = %err, "error reading completion status");
                return (CompletionSet::new(), LoadOutcome::Unavailable);
            }
        };

        match CompletionSet::from_json(&raw) {
            Ok(set) => {
                let count = set.len();
                debug!(key = %self.key, count, "restored completion");
                (set, LoadOutcome::Restored { count })
            }
            Err(err) => {
                error!(key = %self.key, error = %err, "error decoding completion status");
                (CompletionSet::new(), LoadOutcome::Malformed)
            }
        }
    }

    /// Pure membership test.
    #[must_use]
    pub fn is_complete(set: &CompletionSet, lesson_id: &str) -> bool {
        set.contains(lesson_id)
    }

    /// Flip one lesson and persist the result.
    ///
    /// A failed write is logged; the returned set reflects the toggle either way.
    pub async fn toggle(&self, set: &CompletionSet, lesson_id: &str) -> CompletionSet {
        let next = set.toggled(lesson_id);
        if let Err(err) = self.persist(&next).await {
            error!(key = %self.key, lesson_id, error = %err, "error saving completion status");
        }
        next
    }

    /// Write `set` to durable storage as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns `CompletionError::Storage` if the write fails.
    pub async fn persist(&self, set: &CompletionSet) -> Result<(), CompletionError> {
        let _guard = self.write_lock.lock().await;
        self.values.put_value(&self.key, &set.to_json()).await?;
        Ok(())
    }

    /// Drop the persisted set entirely.
    ///
    /// # Errors
    ///
    /// Returns `CompletionError::Storage` if the key cannot be removed.
    pub async fn clear(&self) -> Result<(), CompletionError> {
        let _guard = self.write_lock.lock().await;
        self.values.remove_value(&self.key).await?;
        Ok(())
    }
}
