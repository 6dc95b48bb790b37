use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use course_core::model::{CourseCatalog, DiscussionSettingsDraft};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, CompletionService, DiscussionConfig, LessonContentService, LoadOutcome};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

/// Python Vibe Coding course reader.
#[derive(Debug, Parser)]
#[command(name = "course", version, about, long_about = None)]
struct Cli {
    /// SQLite database holding lesson progress.
    #[arg(
        long = "db",
        env = "COURSE_DB_URL",
        default_value = "sqlite://course.sqlite3",
        global = true
    )]
    db_url: String,

    /// Directory with `<module>/<lesson>.md` files.
    #[arg(
        long,
        env = "COURSE_CONTENT_DIR",
        default_value = "course_content",
        global = true
    )]
    content_dir: PathBuf,

    #[command(flatten)]
    giscus: GiscusArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Open the desktop reader (default).
    Ui,
    /// Print every lesson path in course order.
    Lessons,
    /// Print completed/total lessons per module.
    Progress,
    /// Forget all completed lessons.
    Reset,
}

#[derive(Debug, Args)]
struct GiscusArgs {
    #[arg(long = "giscus-repo", env = "COURSE_GISCUS_REPO", global = true)]
    repo: Option<String>,
    #[arg(long = "giscus-repo-id", env = "COURSE_GISCUS_REPO_ID", global = true)]
    repo_id: Option<String>,
    #[arg(long = "giscus-category", env = "COURSE_GISCUS_CATEGORY", global = true)]
    category: Option<String>,
    #[arg(
        long = "giscus-category-id",
        env = "COURSE_GISCUS_CATEGORY_ID",
        global = true
    )]
    category_id: Option<String>,
    #[arg(long = "giscus-theme", env = "COURSE_GISCUS_THEME", global = true)]
    theme: Option<String>,
    #[arg(long = "giscus-lang", env = "COURSE_GISCUS_LANG", global = true)]
    lang: Option<String>,
}

impl From<GiscusArgs> for DiscussionSettingsDraft {
    fn from(args: GiscusArgs) -> Self {
        DiscussionSettingsDraft {
            repo: args.repo,
            repo_id: args.repo_id,
            category: args.category,
            category_id: args.category_id,
            theme: args.theme,
            lang: args.lang,
            client_url: None,
        }
    }
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
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

fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == "sqlite::memory:" || trimmed.starts_with("sqlite://") {
        return trimmed.to_string();
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn sqlite_file_path(db_url: &str) -> Option<&str> {
    if db_url == "sqlite::memory:" || db_url.contains("mode=memory") {
        return None;
    }
    let path = db_url.strip_prefix("sqlite://")?;
    let path = path.split('?').next().unwrap_or(path);
    (!path.is_empty()).then_some(path)
}

fn prepare_sqlite_file(db_url: &str) -> anyhow::Result<()> {
    let Some(path) = sqlite_file_path(db_url) else {
        return Ok(());
    };

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating database directory {}", parent.display()))?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)
            .with_context(|| format!("creating database file {}", path.display()))?;
    }

    Ok(())
}

fn launch_ui(services: AppServices) {
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Python Vibe Coding Course")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

fn lesson_listing(catalog: &CourseCatalog) -> String {
    catalog
        .lessons()
        .map(|lesson| format!("{}\t{}\n", lesson.id().path(), lesson.title()))
        .collect()
}

async fn progress_report(services: &AppServices) -> String {
    let catalog = services.catalog();
    let (set, outcome) = services.completion().load_with_outcome().await;
    if outcome == LoadOutcome::Malformed {
        warn!("stored progress was unreadable; showing nothing completed");
    }

    let mut report = String::new();
    let mut completed = 0;
    for (module, counts) in catalog.modules().iter().zip(catalog.module_progress(&set)) {
        completed += counts.completed;
        let mark = if counts.is_finished() { "✓" } else { " " };
        let ratio = format!("{}/{}", counts.completed, counts.total);
        report.push_str(&format!("{mark} {ratio:>5}  {}\n", module.title()));
    }
    report.push_str(&format!(
        "{completed}/{} lessons completed\n",
        catalog.total_lessons()
    ));
    report
}

async fn reset_progress(services: &AppServices) -> anyhow::Result<()> {
    services
        .completion()
        .clear()
        .await
        .context("clearing progress")
}

async fn open_services(
    db_url: &str,
    content_dir: PathBuf,
    catalog: CourseCatalog,
    discussion: DiscussionConfig,
) -> anyhow::Result<AppServices> {
    prepare_sqlite_file(db_url)?;
    AppServices::new_sqlite(db_url, content_dir, catalog, discussion)
        .await
        .with_context(|| format!("opening {db_url}"))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let catalog = CourseCatalog::python_vibe();
    let db_url = normalize_sqlite_url(&cli.db_url);
    let discussion: DiscussionConfig = DiscussionSettingsDraft::from(cli.giscus).validate();

    match cli.command.unwrap_or(Command::Ui) {
        Command::Ui => {
            if let Err(err) = &discussion {
                info!(%err, "discussion panel disabled");
            }
            if let Err(err) = prepare_sqlite_file(&db_url) {
                warn!(error = %err, "could not prepare database file");
            }
            let services =
                AppServices::open_or_degrade(&db_url, cli.content_dir, catalog, discussion).await;
            info!(%db_url, storage_available = services.storage_available(), "launching reader");
            launch_ui(services);
        }
        Command::Lessons => print!("{}", lesson_listing(&catalog)),
        Command::Progress => {
            let services = open_services(&db_url, cli.content_dir, catalog, discussion).await?;
            print!("{}", progress_report(&services).await);
        }
        Command::Reset => {
            let services = open_services(&db_url, cli.content_dir, catalog, discussion).await?;
            reset_progress(&services).await?;
            println!("progress cleared");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    run(cli).await
}
