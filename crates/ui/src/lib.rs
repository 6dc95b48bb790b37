pub mod app;
pub mod completion;
pub mod context;
pub mod routes;
pub mod vm;
pub mod views;

pub use app::App;
pub use completion::{CompletionHandle, use_completion, use_completion_provider};
pub use context::{AppContext, UiApp, build_app_context};
