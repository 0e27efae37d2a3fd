mod cli;

use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use learnflow_core::presentation::{CursorFollower, Variant};
use services::{AppConfig, AppServices, Clock};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

use crate::cli::Args;

struct DesktopApp {
    variant: Variant,
    cursor_effect: bool,
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn variant(&self) -> Variant {
        self.variant
    }

    fn cursor_effect(&self) -> bool {
        self.cursor_effect
    }

    fn clock(&self) -> Clock {
        Clock::System
    }

    fn services(&self) -> AppServices {
        self.services.clone()
    }
}

fn init_logging(directive: Option<&str>) {
    let filter = match directive {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env is the common case.
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    init_logging(args.log.as_deref());

    let config = AppConfig::resolve(args.overrides())?;
    info!(
        backend = %config.api_base_url,
        variant = %config.variant,
        download_dir = %config.download_dir.display(),
        "starting LearnFlow"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        variant: config.variant,
        cursor_effect: CursorFollower::enabled_for_width(f64::from(config.window_width)),
        services: AppServices::from_config(&config),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("LearnFlow")
            .with_inner_size(LogicalSize::new(config.window_width, config.window_height))
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
