#![forbid(unsafe_code)]

pub mod model;

/// Durable-storage key holding the completion set.
pub const COMPLETION_STORAGE_KEY: &str = "pythonVibeCourseCompletion";
