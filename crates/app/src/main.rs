mod config;

use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use maestro_core::model::ProgressState;
use services::{MediaService, RankingService};
use storage::repository::Storage;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

use crate::config::{DashboardConfig, Invocation, print_usage};

struct DesktopApp {
    progress: ProgressState,
    start_in_admin: bool,
    slider_max: u32,
    ranking: Arc<RankingService>,
    media: Arc<MediaService>,
}

impl UiApp for DesktopApp {
    fn initial_progress(&self) -> ProgressState {
        self.progress.clone()
    }

    fn start_in_admin(&self) -> bool {
        self.start_in_admin
    }

    fn slider_max(&self) -> u32 {
        self.slider_max
    }

    fn ranking(&self) -> Arc<RankingService> {
        Arc::clone(&self.ranking)
    }

    fn media(&self) -> Arc<MediaService> {
        Arc::clone(&self.media)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let invocation = DashboardConfig::resolve(
        |key| std::env::var(key).ok(),
        std::env::args().skip(1),
    )
    .inspect_err(|_| print_usage())?;

    let config = match invocation {
        Invocation::Run(config) => config,
        Invocation::Help => {
            print_usage();
            return Ok(());
        }
    };

    let progress = config.initial_progress()?;
    let storage = Storage::mock();
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        progress,
        start_in_admin: config.start_in_admin,
        slider_max: config.slider_max,
        ranking: Arc::new(RankingService::new(Arc::clone(&storage.ranking))),
        media: Arc::new(MediaService::new(Arc::clone(&storage.media))),
    });
    let context = build_app_context(&app);

    info!(
        target_ap = config.target_ap,
        days = config.history.len(),
        admin = config.start_in_admin,
        "MAESTRO | 7th Business Unit Platform Initialized"
    );

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(config.window_title.as_str())
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
