use std::collections::HashSet;

use thiserror::Error;

use crate::model::completion::CompletionSet;
use crate::model::ids::{LessonId, LessonIdError, LessonSlug, ModuleSlug};

/// Static table rows: `(module slug, module title, [(lesson slug, lesson title)])`.
pub type CatalogTable<'a> = &'a [(&'a str, &'a str, &'a [(&'a str, &'a str)])];

const PYTHON_VIBE: CatalogTable<'static> = &[
    (
        "01_introduction",
        "1. Introduction to Python & Vibe Coding",
        &[
            ("01_python_overview", "1.1 Python Overview"),
            ("02_vibe_coding_definition", "1.2 What is Vibe Coding?"),
            ("03_ai_benefits_limits", "1.3 AI: Benefits & Limitations"),
        ],
    ),
    (
        "02_environment_setup",
        "2. Environment Setup",
        &[
            ("01_installing_python", "2.1 Installing Python"),
            ("02_setting_up_vscode", "2.2 Setting Up VSCode"),
            ("03_installing_ai_assistant", "2.3 Installing AI Assistant"),
        ],
    ),
    (
        "03_python_basics",
        "3. Python Basics",
        &[
            ("01_variables_datatypes", "3.1 Variables & Data Types"),
            ("02_operators", "3.2 Operators"),
            ("03_control_structures", "3.3 Control Structures"),
            ("04_functions_modules", "3.4 Functions & Modules"),
        ],
    ),
    (
        "04_intermediate_python",
        "4. Intermediate Python",
        &[
            ("01_oop_classes_objects", "4.1 OOP: Classes & Objects"),
            (
                "02_oop_inheritance_encapsulation",
                "4.2 OOP: Inheritance & Encapsulation",
            ),
            ("03_data_structures", "4.3 Data Structures"),
            ("04_file_handling", "4.4 File Handling"),
        ],
    ),
    (
        "05_advanced_python",
        "5. Advanced Python",
        &[
            ("01_decorators_generators", "5.1 Decorators & Generators"),
            ("02_async_programming", "5.2 Async Programming"),
            ("03_api_calls", "5.3 Working with APIs"),
            ("04_frameworks_libs", "5.4 Intro to Frameworks/Libs"),
        ],
    ),
    (
        "06_vibe_coding_ai",
        "6. Vibe Coding with AI",
        &[
            ("01_ai_autocompletion", "6.1 AI for Autocompletion"),
            ("02_generating_snippets", "6.2 Generating Snippets"),
            ("03_debugging_assistance", "6.3 AI for Debugging"),
            ("04_algorithm_design", "6.4 AI for Algorithm Design"),
        ],
    ),
    (
        "07_main_project_weather_app",
        "7. Project: Weather App",
        &[
            ("01_project_intro_api", "7.1 Project Intro & API"),
            ("02_manual_walkthrough", "7.2 Manual Walkthrough"),
            ("03_ai_assisted_walkthrough", "7.3 AI-Assisted Walkthrough"),
            ("04_optional_visualization", "7.4 Optional: Visualization"),
        ],
    ),
    (
        "08_mini_projects",
        "8. Optional Mini-Projects",
        &[
            ("01_flask_weather_app", "8.1 Flask Weather App UI"),
            ("02_pandas_analysis", "8.2 Weather Data Analysis"),
        ],
    ),
    (
        "09_best_practices_ethics",
        "9. Best Practices & Ethics",
        &[
            ("01_balancing_ai_manual", "9.1 Balancing AI & Manual"),
            ("02_understanding_ethics", "9.2 Understanding & Ethics"),
        ],
    ),
    (
        "10_assessments_quizzes",
        "10. Assessments & Quizzes",
        &[("01_quizzes_overview", "10.1 Quizzes Overview")],
    ),
    (
        "11_resources",
        "11. Further Learning",
        &[("01_further_learning", "11.1 Resources & Next Steps")],
    ),
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error(transparent)]
    InvalidId(#[from] LessonIdError),
    #[error("module title cannot be empty: {0}")]
    EmptyTitle(String),
    #[error("duplicate module slug: {0}")]
    DuplicateModule(String),
    #[error("duplicate lesson: {0}")]
    DuplicateLesson(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: LessonId,
    title: String,
}

impl Lesson {
    #[must_use]
    pub fn id(&self) -> &LessonId {
        &self.id
    }

    #[must_use]
    pub fn slug(&self) -> &LessonSlug {
        self.id.lesson()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseModule {
    slug: ModuleSlug,
    title: String,
    lessons: Vec<Lesson>,
}

impl CourseModule {
    #[must_use]
    pub fn slug(&self) -> &ModuleSlug {
        &self.slug
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }
}

/// Completed/total lesson counts for one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleProgress {
    pub module: ModuleSlug,
    pub completed: usize,
    pub total: usize,
}

impl ModuleProgress {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Ordered list of modules and their lessons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCatalog {
    modules: Vec<CourseModule>,
}

impl CourseCatalog {
    /// Build a catalog from a static table.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for invalid slugs, empty module titles, or
    /// duplicate modules/lessons.
    pub fn from_table(table: CatalogTable<'_>) -> Result<Self, CatalogError> {
        let mut seen_modules = HashSet::new();
        let mut modules = Vec::with_capacity(table.len());

        for (module_slug, module_title, lessons) in table {
            let slug = ModuleSlug::new(*module_slug)?;
            if module_title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle((*module_slug).to_string()));
            }
            if !seen_modules.insert(slug.clone()) {
                return Err(CatalogError::DuplicateModule(slug.to_string()));
            }

            let mut seen_lessons = HashSet::new();
            let mut built = Vec::with_capacity(lessons.len());
            for (lesson_slug, lesson_title) in *lessons {
                let id = LessonId::new(slug.clone(), LessonSlug::new(*lesson_slug)?);
                if !seen_lessons.insert(id.clone()) {
                    return Err(CatalogError::DuplicateLesson(id.to_string()));
                }
                built.push(Lesson {
                    id,
                    title: (*lesson_title).to_string(),
                });
            }

            modules.push(CourseModule {
                slug,
                title: (*module_title).to_string(),
                lessons: built,
            });
        }

        Ok(Self { modules })
    }

    /// The built-in "Python Vibe Coding" course.
    ///
    /// # Panics
    ///
    /// Panics if the built-in table is invalid; covered by tests.
    #[must_use]
    pub fn python_vibe() -> Self {
        Self::from_table(PYTHON_VIBE).expect("built-in catalog should be valid")
    }

    #[must_use]
    pub fn modules(&self) -> &[CourseModule] {
        &self.modules
    }

    #[must_use]
    pub fn module(&self, slug: &str) -> Option<&CourseModule> {
        self.modules.iter().find(|m| m.slug.as_str() == slug)
    }

    #[must_use]
    pub fn lesson(&self, id: &LessonId) -> Option<&Lesson> {
        self.module(id.module().as_str())?
            .lessons
            .iter()
            .find(|lesson| &lesson.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &LessonId) -> bool {
        self.lesson(id).is_some()
    }

    /// Every lesson in catalog order; one static page per entry.
    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> {
        self.modules.iter().flat_map(|m| m.lessons.iter())
    }

    #[must_use]
    pub fn first_lesson(&self) -> Option<&Lesson> {
        self.lessons().next()
    }

    /// Previous and next lessons in catalog order, crossing module boundaries.
    #[must_use]
    pub fn neighbors(&self, id: &LessonId) -> (Option<&Lesson>, Option<&Lesson>) {
        let all: Vec<&Lesson> = self.lessons().collect();
        let Some(index) = all.iter().position(|lesson| &lesson.id == id) else {
            return (None, None);
        };
        let prev = index.checked_sub(1).and_then(|i| all.get(i).copied());
        let next = all.get(index + 1).copied();
        (prev, next)
    }

    #[must_use]
    pub fn module_progress(&self, completed: &CompletionSet) -> Vec<ModuleProgress> {
        self.modules
            .iter()
            .map(|module| ModuleProgress {
                module: module.slug.clone(),
                completed: module
                    .lessons
                    .iter()
                    .filter(|lesson| completed.contains_lesson(&lesson.id))
                    .count(),
                total: module.lessons.len(),
            })
            .collect()
    }

    #[must_use]
    pub fn total_lessons(&self) -> usize {
        self.modules.iter().map(|m| m.lessons.len()).sum()
    }
}
