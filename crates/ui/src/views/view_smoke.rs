use course_core::COMPLETION_STORAGE_KEY;
use course_core::model::LessonId;
use storage::repository::{InMemoryRepository, KeyValueRepository};

use std::time::Duration;

use super::test_harness::{
    ViewKind, setup_view_harness, setup_view_harness_with_repo,
    setup_view_harness_with_slow_writes, unconfigured_discussion,
};

const OVERVIEW: &str = "01_introduction/01_python_overview";

fn overview() -> LessonId {
    OVERVIEW.parse().unwrap()
}

async fn repo_with_completion(raw: &str) -> InMemoryRepository {
    let repo = InMemoryRepository::new();
    repo.put_value(COMPLETION_STORAGE_KEY, raw)
        .await
        .expect("seed completion");
    repo
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_welcome_and_progress() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Welcome to Python Vibe Coding!"), "{html}");
    assert!(html.contains("Start Learning"), "{html}");
    assert!(!html.contains("lessons completed"), "{html}");

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("0 of 32 lessons completed"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_markdown_and_button() {
    let repo = repo_with_completion(&format!("[\"{OVERVIEW}\"]")).await;
    repo.insert_lesson(overview(), "# Python Overview\n\n```python\nprint('hi')\n```\n")
        .unwrap();

    let mut harness = setup_view_harness_with_repo(
        ViewKind::lesson("01_introduction", "01_python_overview"),
        repo,
        unconfigured_discussion(),
    );
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("<h1>Python Overview</h1>"), "{html}");
    assert!(html.contains("language-python"), "{html}");
    assert!(html.contains("Mark as Incomplete"), "{html}");
    assert!(html.contains("1.2 What is Vibe Coding?"), "missing next link in {html}");
    assert!(html.contains("Giscus discussion is not configured"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_reports_missing_content() {
    let mut harness = setup_view_harness(ViewKind::lesson("01_introduction", "01_python_overview"));
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Error Loading Lesson"), "{html}");
    assert!(html.contains("Expected at: memory:01_introduction/01_python_overview"), "{html}");
    assert!(!html.contains("Mark as Complete"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_unknown_lesson_is_not_found() {
    let mut harness = setup_view_harness(ViewKind::lesson("01_introduction", "99_nope"));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Page not found"), "{html}");

    let mut harness = setup_view_harness(ViewKind::lesson("bad slug", "x"));
    harness.rebuild();
    assert!(harness.render().contains("Page not found"));
}

#[tokio::test(flavor = "current_thread")]
async fn sidebar_smoke_shows_marks_only_once_loaded() {
    let repo = repo_with_completion(&format!("[\"{OVERVIEW}\"]")).await;
    let mut harness = setup_view_harness_with_repo(
        ViewKind::Sidebar(Some(overview())),
        repo,
        unconfigured_discussion(),
    );
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("1.1 Python Overview"), "current module should be open: {html}");
    assert!(!html.contains("✓"), "marks before load: {html}");
    assert!(!html.contains("1/3"), "progress before load: {html}");

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("✓"), "{html}");
    assert!(html.contains("1/3"), "{html}");
    assert!(html.contains("lesson-link active"), "{html}");
    assert!(!html.contains("2.1 Installing Python"), "other modules stay closed: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sidebar_smoke_recovers_from_malformed_value() {
    let repo = repo_with_completion("not json").await;
    let mut harness = setup_view_harness_with_repo(
        ViewKind::Sidebar(Some(overview())),
        repo,
        unconfigured_discussion(),
    );
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("0/3"), "{html}");
    assert!(!html.contains("✓"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn completion_button_disabled_until_loaded_then_toggle_persists() {
    let mut harness = setup_view_harness(ViewKind::ToggleOnReady(OVERVIEW.to_string()));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("disabled"), "{html}");
    assert!(html.contains("Mark as Complete"), "{html}");

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Mark as Incomplete"), "{html}");
    assert_eq!(
        harness.stored_completion().await.as_deref(),
        Some("[\"01_introduction/01_python_overview\"]")
    );
}

#[tokio::test(flavor = "current_thread")]
async fn toggle_persists_after_toggling_view_unmounts() {
    let mut harness = setup_view_harness_with_slow_writes(
        ViewKind::ToggleThenLeave(vec![OVERVIEW.to_string()]),
        Duration::from_millis(5),
    );
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("navigated"), "{html}");
    assert_eq!(
        harness.stored_completion().await.as_deref(),
        Some("[\"01_introduction/01_python_overview\"]")
    );
}

#[tokio::test(flavor = "current_thread")]
async fn queued_toggles_land_in_issue_order() {
    let ids = [OVERVIEW, "01_introduction/02_vibe_coding_definition", OVERVIEW];
    let mut harness = setup_view_harness_with_slow_writes(
        ViewKind::ToggleThenLeave(ids.iter().map(|id| id.to_string()).collect()),
        Duration::from_millis(5),
    );
    harness.rebuild();
    harness.settle().await;

    assert_eq!(
        harness.stored_completion().await.as_deref(),
        Some("[\"01_introduction/02_vibe_coding_definition\"]")
    );
}
