use course_core::model::{CourseCatalog, Lesson, LessonId};
use services::LessonContent;

use crate::vm::markdown_vm::markdown_to_html;

pub const MARK_COMPLETE: &str = "Mark as Complete";
pub const MARK_INCOMPLETE: &str = "Mark as Incomplete";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonLinkVm {
    pub module_slug: String,
    pub lesson_slug: String,
    pub title: String,
}

impl From<&Lesson> for LessonLinkVm {
    fn from(lesson: &Lesson) -> Self {
        Self {
            module_slug: lesson.id().module().to_string(),
            lesson_slug: lesson.slug().to_string(),
            title: lesson.title().to_string(),
        }
    }
}

/// Catalog-derived parts of a lesson page; content is loaded separately.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonPageVm {
    pub id: LessonId,
    pub title: String,
    pub module_title: String,
    pub prev: Option<LessonLinkVm>,
    pub next: Option<LessonLinkVm>,
}

#[must_use]
pub fn lesson_page_vm(catalog: &CourseCatalog, id: &LessonId) -> Option<LessonPageVm> {
    let lesson = catalog.lesson(id)?;
    let module = catalog.module(id.module().as_str())?;
    let (prev, next) = catalog.neighbors(id);

    Some(LessonPageVm {
        id: id.clone(),
        title: lesson.title().to_string(),
        module_title: module.title().to_string(),
        prev: prev.map(LessonLinkVm::from),
        next: next.map(LessonLinkVm::from),
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LessonBodyVm {
    Article { html: String },
    Error { message: String },
}

impl From<&LessonContent> for LessonBodyVm {
    fn from(content: &LessonContent) -> Self {
        match content.error_message() {
            Some(message) => LessonBodyVm::Error {
                message: message.to_string(),
            },
            None => LessonBodyVm::Article {
                html: markdown_to_html(content.markdown()),
            },
        }
    }
}

#[must_use]
pub fn completion_button_label(complete: bool) -> &'static str {
    if complete { MARK_INCOMPLETE } else { MARK_COMPLETE }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_vm_links_across_module_boundaries() {
        let catalog = CourseCatalog::python_vibe();
        let id: LessonId = "01_introduction/03_ai_benefits_limits".parse().unwrap();
        let vm = lesson_page_vm(&catalog, &id).unwrap();

        assert_eq!(vm.title, "1.3 AI: Benefits & Limitations");
        assert_eq!(vm.module_title, "1. Introduction to Python & Vibe Coding");
        assert_eq!(
            vm.prev.as_ref().map(|l| l.lesson_slug.as_str()),
            Some("02_vibe_coding_definition")
        );
        let next = vm.next.unwrap();
        assert_eq!(next.module_slug, "02_environment_setup");
        assert_eq!(next.lesson_slug, "01_installing_python");
    }

    #[test]
    fn page_vm_is_none_for_unknown_lesson() {
        let catalog = CourseCatalog::python_vibe();
        let id: LessonId = "01_introduction/99_missing".parse().unwrap();
        assert!(lesson_page_vm(&catalog, &id).is_none());
    }

    #[test]
    fn first_and_last_lessons_have_one_neighbor() {
        let catalog = CourseCatalog::python_vibe();
        let first: LessonId = "01_introduction/01_python_overview".parse().unwrap();
        let last: LessonId = "11_resources/01_further_learning".parse().unwrap();

        assert!(lesson_page_vm(&catalog, &first).unwrap().prev.is_none());
        assert!(lesson_page_vm(&catalog, &last).unwrap().next.is_none());
    }

    #[test]
    fn body_vm_renders_found_markdown() {
        let content = LessonContent::Found {
            markdown: "# Hi\n\nText".to_string(),
        };
        let LessonBodyVm::Article { html } = LessonBodyVm::from(&content) else {
            panic!("expected article");
        };
        assert!(html.contains("<h1>Hi</h1>"), "{html}");
    }

    #[test]
    fn body_vm_surfaces_missing_message() {
        let content = LessonContent::Missing {
            message: "Could not load".to_string(),
            fallback: "# Lesson Content Not Found".to_string(),
        };
        assert_eq!(
            LessonBodyVm::from(&content),
            LessonBodyVm::Error {
                message: "Could not load".to_string()
            }
        );
    }

    #[test]
    fn button_label_follows_completion() {
        assert_eq!(completion_button_label(false), "Mark as Complete");
        assert_eq!(completion_button_label(true), "Mark as Incomplete");
    }
}
