mod catalog;
mod completion;
mod discussion;
mod ids;

pub use catalog::{CatalogError, CatalogTable, CourseCatalog, CourseModule, Lesson, ModuleProgress};
pub use completion::{CompletionDecodeError, CompletionSet, CompletionState};
pub use discussion::{
    DEFAULT_CLIENT_URL, DiscussionError, DiscussionSettings, DiscussionSettingsDraft,
    REQUIRED_ENV_VARS,
};
pub use ids::{LESSON_ID_SEPARATOR, LessonId, LessonIdError, LessonSlug, ModuleSlug, SlugKind};
