use std::collections::BTreeSet;

use serde_json::Value;
use thiserror::Error;

use crate::model::ids::LessonId;

/// Set of completed lesson identifiers (`<module>/<lesson>`).
///
/// Members are kept as plain strings so that values written by older
/// catalogs survive a load/save cycle even if they no longer parse as a
/// `LessonId`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionSet {
    lessons: BTreeSet<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompletionDecodeError {
    #[error("stored completion is not valid JSON: {0}")]
    InvalidJson(String),
    #[error("stored completion is not a JSON array")]
    NotAnArray,
}

impl CompletionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, lesson_id: &str) -> bool {
        self.lessons.contains(lesson_id)
    }

    #[must_use]
    pub fn contains_lesson(&self, lesson: &LessonId) -> bool {
        self.contains(&lesson.key())
    }

    /// Returns a new set with `lesson_id` removed if present, inserted otherwise.
    #[must_use]
    pub fn toggled(&self, lesson_id: &str) -> Self {
        let mut next = self.clone();
        if !next.lessons.remove(lesson_id) {
            next.lessons.insert(lesson_id.to_string());
        }
        next
    }

    pub fn insert(&mut self, lesson_id: impl Into<String>) -> bool {
        self.lessons.insert(lesson_id.into())
    }

    pub fn remove(&mut self, lesson_id: &str) -> bool {
        self.lessons.remove(lesson_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lessons.iter().map(String::as_str)
    }

    /// Decode the persisted representation: a JSON array of strings.
    ///
    /// Non-string array elements are skipped, so they are pruned from
    /// storage on the next write.
    ///
    /// # Errors
    ///
    /// Returns `CompletionDecodeError` if the text is not JSON or not an array.
    pub fn from_json(raw: &str) -> Result<Self, CompletionDecodeError> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|err| CompletionDecodeError::InvalidJson(err.to_string()))?;
        let Value::Array(items) = value else {
            return Err(CompletionDecodeError::NotAnArray);
        };
        Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(id) => Some(id),
                _ => None,
            })
            .collect())
    }

    /// Encode as a JSON array of strings.
    #[must_use]
    pub fn to_json(&self) -> String {
        let items: Vec<Value> = self
            .lessons
            .iter()
            .cloned()
            .map(Value::String)
            .collect();
        Value::Array(items).to_string()
    }
}

impl FromIterator<String> for CompletionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            lessons: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for CompletionSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

/// Completion state as observed by presentation code.
///
/// `Uninitialized` means the durable store has not been read yet; it is not
/// the same as a loaded set that happens to be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CompletionState {
    #[default]
    Uninitialized,
    Ready(CompletionSet),
}

impl CompletionState {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, CompletionState::Ready(_))
    }

    /// Unloaded state reports every lesson as incomplete.
    #[must_use]
    pub fn is_complete(&self, lesson_id: &str) -> bool {
        match self {
            CompletionState::Uninitialized => false,
            CompletionState::Ready(set) => set.contains(lesson_id),
        }
    }

    #[must_use]
    pub fn set(&self) -> Option<&CompletionSet> {
        match self {
            CompletionState::Uninitialized => None,
            CompletionState::Ready(set) => Some(set),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_toggle_restores_original() {
        let set: CompletionSet = ["a/b", "c/d"].into_iter().collect();
        assert_eq!(set.toggled("x/y").toggled("x/y"), set);
        assert_eq!(set.toggled("a/b").toggled("a/b"), set);
    }

    #[test]
    fn toggle_flips_membership() {
        let set = CompletionSet::new();
        let added = set.toggled("a/b");
        assert!(added.contains("a/b"));
        let removed = added.toggled("a/b");
        assert!(!removed.contains("a/b"));
    }

    #[test]
    fn toggle_leaves_original_untouched() {
        let set: CompletionSet = ["a/b"].into_iter().collect();
        let _ = set.toggled("a/b");
        assert!(set.contains("a/b"));
    }

    #[test]
    fn toggle_is_isolated_per_identifier() {
        let set: CompletionSet = ["a/c"].into_iter().collect();
        let next = set.toggled("a/b");
        assert!(next.contains("a/c"));
        let next = next.toggled("a/b");
        assert!(next.contains("a/c"));
    }

    #[test]
    fn from_json_accepts_string_array() {
        let set = CompletionSet::from_json(r#"["a/b","c/d","a/b"]"#).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("a/b"));
        assert!(set.contains("c/d"));
    }

    #[test]
    fn from_json_skips_non_strings() {
        let set = CompletionSet::from_json(r#"["a/b", 4, null, {"x": 1}]"#).unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["a/b"]);
    }

    #[test]
    fn non_strings_are_pruned_on_next_write() {
        let set = CompletionSet::from_json(r#"["c/d", 7, "a/b", false]"#).unwrap();
        assert_eq!(set.toggled("x/y").toggled("x/y").to_json(), r#"["a/b","c/d"]"#);
    }

    #[test]
    fn from_json_rejects_non_array_and_garbage() {
        assert_eq!(
            CompletionSet::from_json("{}"),
            Err(CompletionDecodeError::NotAnArray)
        );
        assert!(matches!(
            CompletionSet::from_json("not json"),
            Err(CompletionDecodeError::InvalidJson(_))
        ));
    }

    #[test]
    fn to_json_round_trips() {
        let set: CompletionSet = ["c/d", "a/b"].into_iter().collect();
        let decoded = CompletionSet::from_json(&set.to_json()).unwrap();
        assert_eq!(decoded, set);
    }

    #[test]
    fn uninitialized_reports_incomplete() {
        let state = CompletionState::Uninitialized;
        assert!(!state.is_ready());
        assert!(!state.is_complete("a/b"));
        assert!(state.set().is_none());

        let ready = CompletionState::Ready(["a/b"].into_iter().collect());
        assert!(ready.is_complete("a/b"));
        assert!(!ready.is_complete("a/c"));
    }
}
