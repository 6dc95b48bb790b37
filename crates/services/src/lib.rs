#![forbid(unsafe_code)]

pub mod app_services;
pub mod completion_service;
pub mod content_service;
pub mod error;

pub use app_services::{AppServices, DiscussionConfig};
pub use completion_service::{CompletionService, LoadOutcome};
pub use content_service::{LessonContent, LessonContentService, MISSING_LESSON_MARKDOWN};
pub use error::{AppServicesError, CompletionError, ContentServiceError};
