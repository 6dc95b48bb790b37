use course_core::model::LessonId;
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{
    CompletionButton, Discussion, NotFoundPage, ViewError, ViewState, view_state_from_resource,
};
use crate::vm::{LessonBodyVm, LessonLinkVm, LessonPageVm, lesson_page_vm};

#[component]
pub fn LessonView(module_slug: String, lesson_slug: String) -> Element {
    let ctx = use_context::<AppContext>();
    let page = LessonId::from_parts(module_slug, lesson_slug)
        .ok()
        .and_then(|id| lesson_page_vm(&ctx.catalog(), &id));

    match page {
        // Keyed so that moving to another lesson remounts the page and its
        // discussion widget.
        Some(page) => rsx! {
            LessonPage { key: "{page.id}", page }
        },
        None => rsx! { NotFoundPage {} },
    }
}

#[component]
fn LessonPage(page: LessonPageVm) -> Element {
    let ctx = use_context::<AppContext>();
    let content = ctx.content();
    let lesson = page.id.clone();

    let resource = use_resource(move || {
        let content = content.clone();
        let lesson = lesson.clone();
        async move { Ok::<_, ViewError>(LessonBodyVm::from(&content.resolve(&lesson).await)) }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        article { class: "lesson",
            p { class: "lesson-module", "{page.module_title}" }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "muted", "Loading lesson..." }
                },
                ViewState::Ready(LessonBodyVm::Article { html }) => rsx! {
                    div { class: "markdown", dangerous_inner_html: "{html}" }
                    CompletionButton { lesson_id: page.id.key() }
                    LessonNav { prev: page.prev.clone(), next: page.next.clone() }
                    Discussion { lesson: page.id.clone() }
                },
                ViewState::Ready(LessonBodyVm::Error { message }) => rsx! {
                    h1 { class: "error-title", "Error Loading Lesson" }
                    p { class: "error", "{message}" }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn LessonNav(prev: Option<LessonLinkVm>, next: Option<LessonLinkVm>) -> Element {
    rsx! {
        nav { class: "lesson-nav",
            if let Some(prev) = prev {
                Link {
                    class: "lesson-nav-prev",
                    to: Route::Lesson {
                        module_slug: prev.module_slug.clone(),
                        lesson_slug: prev.lesson_slug.clone(),
                    },
                    "← {prev.title}"
                }
            } else {
                span {}
            }
            if let Some(next) = next {
                Link {
                    class: "lesson-nav-next",
                    to: Route::Lesson {
                        module_slug: next.module_slug.clone(),
                        lesson_slug: next.lesson_slug.clone(),
                    },
                    "{next.title} →"
                }
            }
        }
    }
}
