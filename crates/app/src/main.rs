use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, QuizEngine};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

mod config;

use config::{AppConfig, Invocation, prepare_sqlite_file, print_usage};

struct DesktopApp {
    engine: Arc<QuizEngine>,
}

impl UiApp for DesktopApp {
    fn engine(&self) -> Arc<QuizEngine> {
        Arc::clone(&self.engine)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let invocation = AppConfig::parse(std::env::args().skip(1), |key| std::env::var(key).ok(), &cwd)
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;
    let config = match invocation {
        Invocation::Run(config) => config,
        Invocation::Help => {
            print_usage();
            return Ok(());
        }
    };

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&config.db_url)?;
    tracing::info!(db = %config.db_url, questions = %config.questions, "starting quiz");
    let services = AppServices::new_sqlite(&config.db_url, config.questions).await?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        engine: services.engine(),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        tracing::error!(error = %err, "startup failed");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
