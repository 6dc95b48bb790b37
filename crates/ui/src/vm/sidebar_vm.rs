use std::collections::HashMap;

use course_core::model::{CompletionState, CourseCatalog, LessonId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarLessonVm {
    pub module_slug: String,
    pub lesson_slug: String,
    pub title: String,
    pub active: bool,
    /// Always `false` until completion has loaded.
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarModuleVm {
    pub slug: String,
    pub title: String,
    pub open: bool,
    /// `"n/m"`, present once completion has loaded.
    pub progress: Option<String>,
    pub lessons: Vec<SidebarLessonVm>,
}

/// Explicit open/closed choices the user made by clicking a module header.
///
/// Modules without a choice fall back to "open if it holds the current lesson".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModuleOpenState {
    overrides: HashMap<String, bool>,
}

impl ModuleOpenState {
    #[must_use]
    pub fn is_open(&self, module_slug: &str, current: Option<&LessonId>) -> bool {
        self.overrides
            .get(module_slug)
            .copied()
            .unwrap_or_else(|| is_current_module(module_slug, current))
    }

    pub fn toggle(&mut self, module_slug: &str, current: Option<&LessonId>) {
        let open = self.is_open(module_slug, current);
        self.overrides.insert(module_slug.to_string(), !open);
    }

    /// Navigating into a module opens it again, even if it was collapsed.
    pub fn reveal(&mut self, current: Option<&LessonId>) {
        if let Some(current) = current {
            self.overrides.remove(current.module().as_str());
        }
    }
}

fn is_current_module(module_slug: &str, current: Option<&LessonId>) -> bool {
    current.is_some_and(|id| id.module().as_str() == module_slug)
}

#[must_use]
pub fn build_sidebar(
    catalog: &CourseCatalog,
    completion: &CompletionState,
    current: Option<&LessonId>,
    open_state: &ModuleOpenState,
) -> Vec<SidebarModuleVm> {
    let progress: HashMap<String, String> = completion
        .set()
        .map(|set| {
            catalog
                .module_progress(set)
                .into_iter()
                .map(|p| (p.module.to_string(), format!("{}/{}", p.completed, p.total)))
                .collect()
        })
        .unwrap_or_default();

    catalog
        .modules()
        .iter()
        .map(|module| {
            let slug = module.slug().as_str();
            let lessons = module
                .lessons()
                .iter()
                .map(|lesson| SidebarLessonVm {
                    module_slug: slug.to_string(),
                    lesson_slug: lesson.slug().to_string(),
                    title: lesson.title().to_string(),
                    active: current == Some(lesson.id()),
                    completed: completion.is_complete(&lesson.id().key()),
                })
                .collect();

            SidebarModuleVm {
                slug: slug.to_string(),
                title: module.title().to_string(),
                open: open_state.is_open(slug, current),
                progress: progress.get(slug).cloned(),
                lessons,
            }
        })
        .collect()
}
