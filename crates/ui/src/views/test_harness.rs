use std::sync::Arc;
use std::time::Duration;

use course_core::model::{CourseCatalog, DiscussionSettingsDraft, LessonId};
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{AppServices, CompletionService, DiscussionConfig, LessonContentService};
use storage::repository::{InMemoryRepository, KeyValueRepository, Storage, StorageError};

use crate::completion::{use_completion, use_completion_provider};
use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::{CompletionButton, HomeView, LessonView, Sidebar};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<CourseCatalog> {
        self.services.catalog()
    }

    fn completion(&self) -> Arc<CompletionService> {
        self.services.completion()
    }

    fn content(&self) -> Arc<LessonContentService> {
        self.services.content()
    }

    fn discussion(&self) -> DiscussionConfig {
        self.services.discussion()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Lesson {
        module_slug: String,
        lesson_slug: String,
    },
    Sidebar(Option<LessonId>),
    /// Toggles the lesson as soon as completion is ready.
    ToggleOnReady(String),
    /// Toggles each lesson once ready, then unmounts the toggling component.
    ToggleThenLeave(Vec<String>),
}

impl ViewKind {
    pub fn lesson(module_slug: &str, lesson_slug: &str) -> Self {
        ViewKind::Lesson {
            module_slug: module_slug.to_string(),
            lesson_slug: lesson_slug.to_string(),
        }
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let ctx = use_context::<AppContext>();
    use_completion_provider(ctx.completion());

    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Lesson {
            module_slug,
            lesson_slug,
        } => rsx! { LessonView { module_slug, lesson_slug } },
        ViewKind::Sidebar(current) => rsx! { SidebarHarness { current } },
        ViewKind::ToggleOnReady(lesson_id) => rsx! { ToggleOnReady { lesson_id } },
        ViewKind::ToggleThenLeave(lesson_ids) => rsx! { ToggleThenLeave { lesson_ids } },
    }
}

#[component]
fn SidebarHarness(current: Option<LessonId>) -> Element {
    let mobile_open = use_signal(|| false);
    rsx! { Sidebar { current, mobile_open } }
}

#[component]
fn ToggleOnReady(lesson_id: String) -> Element {
    let completion = use_completion();
    let mut toggled = use_signal(|| false);

    let handle = completion.clone();
    let target = lesson_id.clone();
    use_effect(move || {
        if handle.is_ready() && !*toggled.peek() {
            toggled.set(true);
            handle.toggle(&target);
        }
    });

    rsx! { CompletionButton { lesson_id } }
}

#[component]
fn ToggleThenLeave(lesson_ids: Vec<String>) -> Element {
    let show = use_signal(|| true);
    if show() {
        rsx! { LeavingToggler { lesson_ids, show } }
    } else {
        rsx! { p { "navigated" } }
    }
}

#[component]
fn LeavingToggler(lesson_ids: Vec<String>, show: Signal<bool>) -> Element {
    let completion = use_completion();
    let mut show = show;
    let mut toggled = use_signal(|| false);

    use_effect(move || {
        if completion.is_ready() && !*toggled.peek() {
            toggled.set(true);
            for lesson_id in &lesson_ids {
                completion.toggle(lesson_id);
            }
            show.set(false);
        }
    });

    rsx! { p { "toggling" } }
}

/// Delays every write so it is still in flight when the view moves on.
struct SlowWrites {
    inner: InMemoryRepository,
    delay: Duration,
}

#[async_trait::async_trait]
impl KeyValueRepository for SlowWrites {
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_value(key).await
    }

    async fn put_value(&self, key: &str, value: &str) -> Result<(), StorageError> {
        tokio::time::sleep(self.delay).await;
        self.inner.put_value(key, value).await
    }

    async fn remove_value(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_value(key).await
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub repo: InMemoryRepository,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Let pending loads, effects and background writes finish.
    pub async fn settle(&mut self) {
        for _ in 0..6 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub async fn stored_completion(&self) -> Option<String> {
        self.repo
            .get_value(course_core::COMPLETION_STORAGE_KEY)
            .await
            .expect("read completion")
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_repo(view, InMemoryRepository::new(), unconfigured_discussion())
}

pub fn setup_view_harness_with_repo(
    view: ViewKind,
    repo: InMemoryRepository,
    discussion: DiscussionConfig,
) -> ViewHarness {
    let values: Arc<dyn KeyValueRepository> = Arc::new(repo.clone());
    build_harness(view, values, repo, discussion)
}

pub fn setup_view_harness_with_slow_writes(view: ViewKind, delay: Duration) -> ViewHarness {
    let repo = InMemoryRepository::new();
    let values: Arc<dyn KeyValueRepository> = Arc::new(SlowWrites {
        inner: repo.clone(),
        delay,
    });
    build_harness(view, values, repo, unconfigured_discussion())
}

fn build_harness(
    view: ViewKind,
    values: Arc<dyn KeyValueRepository>,
    repo: InMemoryRepository,
    discussion: DiscussionConfig,
) -> ViewHarness {
    let storage = Storage::new(values, Arc::new(repo.clone()));
    let services = AppServices::from_storage(&storage, CourseCatalog::python_vibe(), discussion);
    let app = Arc::new(TestApp { services });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, repo }
}

pub fn unconfigured_discussion() -> DiscussionConfig {
    DiscussionSettingsDraft::new().validate()
}
