use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Separator between the module and lesson parts of a `LessonId`.
pub const LESSON_ID_SEPARATOR: char = '/';

/// Slug naming a course module (e.g. `01_introduction`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleSlug(String);

impl ModuleSlug {
    /// Creates a validated `ModuleSlug`.
    ///
    /// # Errors
    ///
    /// Returns `LessonIdError` if the slug is empty or contains characters
    /// outside `[A-Za-z0-9_-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, LessonIdError> {
        validate_slug(value.into(), SlugKind::Module).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Slug naming a lesson inside a module (e.g. `01_python_overview`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LessonSlug(String);

impl LessonSlug {
    /// Creates a validated `LessonSlug`.
    ///
    /// # Errors
    ///
    /// Returns `LessonIdError` if the slug is empty or contains characters
    /// outside `[A-Za-z0-9_-]`.
    pub fn new(value: impl Into<String>) -> Result<Self, LessonIdError> {
        validate_slug(value.into(), SlugKind::Lesson).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of a lesson within the course: `<module>/<lesson>`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LessonId {
    module: ModuleSlug,
    lesson: LessonSlug,
}

impl LessonId {
    #[must_use]
    pub fn new(module: ModuleSlug, lesson: LessonSlug) -> Self {
        Self { module, lesson }
    }

    /// Builds a `LessonId` from raw route parameters.
    ///
    /// # Errors
    ///
    /// Returns `LessonIdError` if either slug is invalid.
    pub fn from_parts(
        module: impl Into<String>,
        lesson: impl Into<String>,
    ) -> Result<Self, LessonIdError> {
        Ok(Self {
            module: ModuleSlug::new(module)?,
            lesson: LessonSlug::new(lesson)?,
        })
    }

    #[must_use]
    pub fn module(&self) -> &ModuleSlug {
        &self.module
    }

    #[must_use]
    pub fn lesson(&self) -> &LessonSlug {
        &self.lesson
    }

    /// Key used in the completion set.
    #[must_use]
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Route path of the lesson page.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/course/{}/{}", self.module, self.lesson)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonIdError {
    #[error("{kind} slug cannot be empty")]
    EmptySlug { kind: SlugKind },
    #[error("{kind} slug contains invalid character {ch:?}")]
    InvalidCharacter { kind: SlugKind, ch: char },
    #[error("lesson id must look like <module>/<lesson>: {raw:?}")]
    MissingSeparator { raw: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugKind {
    Module,
    Lesson,
}

impl fmt::Display for SlugKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlugKind::Module => f.write_str("module"),
            SlugKind::Lesson => f.write_str("lesson"),
        }
    }
}

fn validate_slug(raw: String, kind: SlugKind) -> Result<String, LessonIdError> {
    if raw.is_empty() {
        return Err(LessonIdError::EmptySlug { kind });
    }
    if let Some(ch) = raw
        .chars()
        .find(|ch| !(ch.is_ascii_alphanumeric() || *ch == '_' || *ch == '-'))
    {
        return Err(LessonIdError::InvalidCharacter { kind, ch });
    }
    Ok(raw)
}

impl fmt::Debug for ModuleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModuleSlug({})", self.0)
    }
}

impl fmt::Debug for LessonSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LessonSlug({})", self.0)
    }
}

impl fmt::Debug for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LessonId({self})")
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for ModuleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for LessonSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.module, LESSON_ID_SEPARATOR, self.lesson)
    }
}

// ─── Conversions ───────────────────────────────────────────────────────────────

impl FromStr for LessonId {
    type Err = LessonIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (module, lesson) =
            s.split_once(LESSON_ID_SEPARATOR)
                .ok_or_else(|| LessonIdError::MissingSeparator { raw: s.to_string() })?;
        Self::from_parts(module, lesson)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
