mod completion_button;
mod discussion;
mod header;
mod home;
mod lesson;
mod not_found;
mod sidebar;
mod state;

pub use completion_button::CompletionButton;
pub use discussion::Discussion;
pub use header::Header;
pub use home::HomeView;
pub use lesson::LessonView;
pub use not_found::{NotFoundPage, NotFoundView};
pub use sidebar::Sidebar;
pub use state::{ViewError, ViewState, view_state_from_resource};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
