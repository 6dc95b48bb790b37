use dioxus::prelude::*;

use crate::completion::use_completion;
use crate::vm::completion_button_label;

#[component]
pub fn CompletionButton(lesson_id: String) -> Element {
    let completion = use_completion();
    let ready = completion.is_ready();
    let complete = completion.is_complete(&lesson_id);
    let label = completion_button_label(complete);

    rsx! {
        button {
            class: if complete { "completion-button complete" } else { "completion-button" },
            disabled: !ready,
            onclick: move |_| completion.toggle(&lesson_id),
            span { class: "icon", if complete { "✓" } else { "○" } }
            "{label}"
        }
    }
}
