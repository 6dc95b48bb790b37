#![forbid(unsafe_code)]

pub mod fs_content;
pub mod repository;
pub mod sqlite;

pub use fs_content::FsLessonContentRepository;
pub use repository::{
    InMemoryRepository, KeyValueRepository, LessonContentRepository, Storage, StorageError,
    UnavailableRepository,
};
