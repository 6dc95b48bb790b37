use course_core::model::LessonId;
use dioxus::document::eval;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{DISCUSSION_CONTAINER_ID, DiscussionVm, discussion_vm};

/// Giscus thread for one lesson, keyed by the lesson path.
#[component]
pub fn Discussion(lesson: LessonId) -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_hook(|| discussion_vm(ctx.discussion(), &lesson));

    let on_mount = vm.clone();
    use_effect(move || {
        if let DiscussionVm::Embed { mount_script, .. } = &on_mount {
            let _ = eval(mount_script);
        }
    });

    let on_drop = vm.clone();
    use_drop(move || {
        if let DiscussionVm::Embed { unmount_script, .. } = &on_drop {
            let _ = eval(unmount_script);
        }
    });

    rsx! {
        section { class: "discussion",
            h2 { "Discussion" }
            match vm {
                DiscussionVm::Embed { .. } => rsx! {
                    div { id: DISCUSSION_CONTAINER_ID, class: "giscus" }
                },
                DiscussionVm::NotConfigured { message } => rsx! {
                    p { class: "muted", "{message}" }
                },
            }
        }
    }
}
