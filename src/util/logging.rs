// Nobara Log Uploader - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug
//   - Config file: [logging] level = "debug"
//
// Output: stderr. Never logs the uploaded payload itself, only its size.

use tracing_subscriber::EnvFilter;

/// Pick the filter directive when RUST_LOG is not set.
///
/// Priority: CLI --debug flag > config level > default "info".
fn fallback_directive(debug_flag: bool, config_level: Option<&str>) -> String {
    if debug_flag {
        "debug".to_string()
    } else if let Some(level) = config_level {
        level.to_string()
    } else {
        super::constants::DEFAULT_LOG_LEVEL.to_string()
    }
}

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the validated level from config.toml (if present).
/// RUST_LOG, when set, wins over both.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(fallback_directive(debug_flag, config_level))
    };

    // try_init: a second call (e.g. from tests) must not panic.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .try_init();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        "Logging initialised"
    );
}
