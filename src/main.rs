// Nobara Log Uploader - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation
// 3. Source list and uploader construction
// 4. eframe GUI launch

mod gui;

pub use nobara_log_uploader::app;
pub use nobara_log_uploader::core;
pub use nobara_log_uploader::platform;
pub use nobara_log_uploader::ui;
pub use nobara_log_uploader::util;

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

/// Nobara Log Uploader - collect local logs and share them as a paste.
///
/// Select the system journal and/or the nobara-sync log, click Upload, and
/// copy the resulting paste URL.
#[derive(Parser, Debug)]
#[command(name = "nobara-log-uploader", version, about)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Minutes of system journal to include (overrides config).
    #[arg(
        short = 'm',
        long = "minutes",
        value_parser = clap::value_parser!(u32).range(
            util::constants::MIN_SYSTEM_LOG_MINUTES as i64..=util::constants::MAX_SYSTEM_LOG_MINUTES as i64
        )
    )]
    minutes: Option<u32>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so its [logging] level can apply.
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_file());
    let (mut config, config_warnings) = platform::config::load_config(&config_path);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %config_path.display(),
        "Nobara Log Uploader starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    if let Some(minutes) = cli.minutes {
        config.system_log_minutes = minutes;
    }

    let sources = app::sources::builtin_sources(&config);
    let uploader = platform::paste::PbcliUploader::new(
        config.feeder.clone(),
        config.paste_command.clone(),
        config.paste_args.clone(),
    );

    let mut state = app::state::AppState::new(sources, config.source_headers);
    state.startup_warnings = config_warnings;
    let upload_manager = app::upload::UploadManager::new(Arc::new(uploader));

    tracing::info!(
        sources = state.sources().len(),
        window_minutes = config.system_log_minutes,
        "Ready to launch GUI"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(util::constants::APP_NAME)
            .with_inner_size([ui::theme::WINDOW_WIDTH, ui::theme::WINDOW_HEIGHT])
            .with_min_inner_size([ui::theme::WINDOW_WIDTH, 0.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::LogUploaderApp::new(state, upload_manager)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch Nobara Log Uploader GUI: {e}");
        std::process::exit(1);
    }
}
