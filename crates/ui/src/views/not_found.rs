use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "no route");
    rsx! { NotFoundPage {} }
}

#[component]
pub fn NotFoundPage() -> Element {
    rsx! {
        div { class: "page not-found",
            h1 { "Page not found" }
            p { "There is no lesson at this address." }
            Link { to: Route::Home {}, "Back to the course" }
        }
    }
}
