mod discussion_vm;
mod header_vm;
mod lesson_vm;
mod markdown_vm;
mod sidebar_vm;

pub use discussion_vm::{
    DISCUSSION_CONTAINER_ID, DiscussionVm, discussion_vm, mount_script, not_configured_message,
    unmount_script,
};
pub use header_vm::{FALLBACK_TITLE, HOME_TITLE, header_title};
pub use lesson_vm::{
    LessonBodyVm, LessonLinkVm, LessonPageVm, MARK_COMPLETE, MARK_INCOMPLETE,
    completion_button_label, lesson_page_vm,
};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use sidebar_vm::{ModuleOpenState, SidebarLessonVm, SidebarModuleVm, build_sidebar};
