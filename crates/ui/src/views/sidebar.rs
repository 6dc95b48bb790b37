use course_core::model::LessonId;
use dioxus::prelude::*;
use dioxus_router::Link;

use crate::completion::use_completion;
use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{ModuleOpenState, SidebarModuleVm, build_sidebar};

#[component]
pub fn Sidebar(current: Option<LessonId>, mobile_open: Signal<bool>) -> Element {
    let ctx = use_context::<AppContext>();
    let completion = use_completion();
    let mut open_state = use_signal(ModuleOpenState::default);
    let mut mobile_open = mobile_open;

    use_effect(use_reactive((&current,), move |(current,)| {
        open_state.write().reveal(current.as_ref());
    }));

    let modules = build_sidebar(
        &ctx.catalog(),
        &completion.state(),
        current.as_ref(),
        &open_state.read(),
    );
    let nav_class = if mobile_open() { "sidebar open" } else { "sidebar" };

    rsx! {
        if mobile_open() {
            div {
                class: "sidebar-overlay",
                aria_hidden: "true",
                onclick: move |_| mobile_open.set(false),
            }
        }
        nav { class: nav_class,
            div { class: "sidebar-brand",
                Link { to: Route::Home {}, onclick: move |_| mobile_open.set(false), "Python Vibe" }
                button {
                    class: "sidebar-close",
                    aria_label: "Close menu",
                    onclick: move |_| mobile_open.set(false),
                    "×"
                }
            }
            ul { class: "module-list",
                for module in modules {
                    SidebarModule {
                        key: "{module.slug}",
                        module,
                        current: current.clone(),
                        open_state,
                        mobile_open,
                    }
                }
            }
        }
    }
}

#[component]
fn SidebarModule(
    module: SidebarModuleVm,
    current: Option<LessonId>,
    open_state: Signal<ModuleOpenState>,
    mobile_open: Signal<bool>,
) -> Element {
    let mut open_state = open_state;
    let mut mobile_open = mobile_open;
    let SidebarModuleVm {
        slug,
        title,
        open,
        progress,
        lessons,
    } = module;
    let chevron = if open { "▾" } else { "▸" };

    rsx! {
        li { class: "module",
            button {
                class: "module-toggle",
                onclick: move |_| open_state.write().toggle(&slug, current.as_ref()),
                span { class: "module-title", "{title}" }
                if let Some(progress) = progress {
                    span { class: "module-progress", "{progress}" }
                }
                span { class: "chevron", "{chevron}" }
            }
            if open {
                ul { class: "lesson-list",
                    for lesson in lessons {
                        li { key: "{lesson.lesson_slug}",
                            Link {
                                class: if lesson.active { "lesson-link active" } else { "lesson-link" },
                                to: Route::Lesson {
                                    module_slug: lesson.module_slug.clone(),
                                    lesson_slug: lesson.lesson_slug.clone(),
                                },
                                onclick: move |_| mobile_open.set(false),
                                if lesson.completed {
                                    span { class: "mark done", "✓" }
                                } else {
                                    span { class: "mark" }
                                }
                                span { class: "lesson-title", "{lesson.title}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
