// Nobara Log Uploader - util/constants.rs
//
// Single source of truth for named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Window title and display name.
pub const APP_NAME: &str = "Nobara Log Uploader";

/// Application identifier used for config directories.
pub const APP_ID: &str = "nobara-log-uploader";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Sources
// =============================================================================

/// Display name of the journal source.
pub const SYSTEM_LOG_NAME: &str = "System Log";

/// Display name of the nobara-sync log file source.
pub const SYNC_LOG_NAME: &str = "nobara-sync log";

/// How far back the journal is read, in minutes.
pub const DEFAULT_SYSTEM_LOG_MINUTES: u32 = 15;

/// Lower bound for the journal window (a zero window reads nothing).
pub const MIN_SYSTEM_LOG_MINUTES: u32 = 1;

/// Upper bound for the journal window (one week).
pub const MAX_SYSTEM_LOG_MINUTES: u32 = 7 * 24 * 60;

/// Home-relative location of the nobara-sync log.
pub const DEFAULT_SYNC_LOG_PATH: &str = "~/.local/share/nobara-updater/nobara-sync.log";

/// Program used to read the systemd journal.
pub const JOURNALCTL_PROGRAM: &str = "journalctl";

// =============================================================================
// Uploader
// =============================================================================

/// Echo-like process that copies the payload to the paste tool's stdin.
pub const DEFAULT_FEEDER_PROGRAM: &str = "/bin/cat";

/// Paste upload client.
pub const DEFAULT_PASTE_PROGRAM: &str = "/usr/bin/pbcli";

/// Arguments that make the paste client emit JSON.
pub const DEFAULT_PASTE_ARGS: &[&str] = &["--json"];

/// Maximum bytes of a malformed response quoted back in an error message.
pub const MAX_RESPONSE_EXCERPT: usize = 200;

// =============================================================================
// Logging
// =============================================================================

/// Default tracing filter when neither RUST_LOG, --debug nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
