use dioxus::prelude::*;
use dioxus_router::Link;

use crate::completion::use_completion;
use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let completion = use_completion();
    let catalog = ctx.catalog();
    let start = catalog.first_lesson().map(|lesson| Route::lesson(lesson.id()));
    let total = catalog.total_lessons();
    let completed = completion
        .state()
        .set()
        .map(|set| catalog.lessons().filter(|l| set.contains_lesson(l.id())).count());

    rsx! {
        div { class: "page home",
            h1 { "Welcome to Python Vibe Coding!" }
            p { class: "lead",
                "Your journey from beginner to advanced Python programmer, enhanced with AI assistance. "
                "Navigate through the modules using the sidebar to start learning."
            }
            if let Some(completed) = completed {
                p { class: "muted", "{completed} of {total} lessons completed" }
            }
            if let Some(start) = start {
                Link { class: "button primary", to: start, "Start Learning" }
            }
        }
    }
}
