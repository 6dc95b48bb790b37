use course_core::model::LessonId;
use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable, use_route};

use crate::completion::use_completion_provider;
use crate::context::AppContext;
use crate::views::{Header, HomeView, LessonView, NotFoundView, Sidebar};
use crate::vm::header_title;

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/course/:module_slug/:lesson_slug", LessonView)]
        Lesson { module_slug: String, lesson_slug: String },
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

impl Route {
    #[must_use]
    pub fn lesson(id: &LessonId) -> Self {
        Route::Lesson {
            module_slug: id.module().to_string(),
            lesson_slug: id.lesson().to_string(),
        }
    }

    /// The lesson this route points at, if its slugs are well formed.
    #[must_use]
    pub fn lesson_id(&self) -> Option<LessonId> {
        match self {
            Route::Lesson {
                module_slug,
                lesson_slug,
            } => LessonId::from_parts(module_slug.as_str(), lesson_slug.as_str()).ok(),
            _ => None,
        }
    }
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    use_completion_provider(ctx.completion());

    let mut mobile_sidebar_open = use_signal(|| false);
    let route = use_route::<Route>();
    let title = header_title(&route.to_string());

    rsx! {
        div { class: "app",
            Sidebar { current: route.lesson_id(), mobile_open: mobile_sidebar_open }
            div { class: "main",
                Header {
                    title,
                    on_menu: move |_| mobile_sidebar_open.toggle(),
                }
                main { class: "content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
