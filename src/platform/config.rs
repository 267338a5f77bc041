// Nobara Log Uploader - platform/config.rs
//
// Config directory resolution and config.toml loading with startup
// validation. Uses the `directories` crate for XDG compliance
// (~/.config/nobara-log-uploader/config.toml).

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for the uploader's configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/nobara-log-uploader/).
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Full path of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml shape
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored so older binaries accept newer files.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub sources: SourcesSection,
    pub uploader: UploaderSection,
    pub payload: PayloadSection,
    pub logging: LoggingSection,
}

/// `[sources]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct SourcesSection {
    /// Journal window in minutes.
    pub system_log_minutes: Option<u32>,
    /// Initial checkbox state of the journal row.
    pub system_log_enabled: Option<bool>,
    /// Path of the nobara-sync log; `~/` is expanded.
    pub sync_log_path: Option<String>,
    /// Initial checkbox state of the sync log row.
    pub sync_log_enabled: Option<bool>,
}

/// `[uploader]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UploaderSection {
    /// Echo-like process feeding the paste tool.
    pub feeder: Option<String>,
    /// Paste tool executable.
    pub command: Option<String>,
    /// Arguments to the paste tool.
    pub args: Option<Vec<String>>,
}

/// `[payload]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct PayloadSection {
    /// Prefix each source's text with a header line.
    pub source_headers: Option<bool>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    // -- Sources --
    pub system_log_minutes: u32,
    pub system_log_enabled: bool,
    pub sync_log_path: String,
    pub sync_log_enabled: bool,

    // -- Uploader --
    pub feeder: String,
    pub paste_command: String,
    pub paste_args: Vec<String>,

    // -- Payload --
    pub source_headers: bool,

    // -- Logging --
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            system_log_minutes: constants::DEFAULT_SYSTEM_LOG_MINUTES,
            system_log_enabled: true,
            sync_log_path: constants::DEFAULT_SYNC_LOG_PATH.to_string(),
            sync_log_enabled: true,
            feeder: constants::DEFAULT_FEEDER_PROGRAM.to_string(),
            paste_command: constants::DEFAULT_PASTE_PROGRAM.to_string(),
            paste_args: constants::DEFAULT_PASTE_ARGS
                .iter()
                .map(|a| (*a).to_string())
                .collect(),
            source_headers: false,
            log_level: None,
        }
    }
}

/// Take a non-empty string setting, or record why it was rejected.
fn non_empty(field: &str, value: Option<String>, warnings: &mut Vec<String>) -> Option<String> {
    match value {
        Some(v) if v.trim().is_empty() => {
            warnings.push(
                ConfigError::ValueOutOfRange {
                    field: field.to_string(),
                    value: v,
                    expected: "a non-empty string; using default".to_string(),
                }
                .to_string(),
            );
            None
        }
        other => other,
    }
}

/// Validate a parsed config against named limits.
///
/// Invalid values produce a warning and keep the default.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let mut config = AppConfig::default();

    // -- Sources --
    if let Some(minutes) = raw.sources.system_log_minutes {
        if (constants::MIN_SYSTEM_LOG_MINUTES..=constants::MAX_SYSTEM_LOG_MINUTES)
            .contains(&minutes)
        {
            config.system_log_minutes = minutes;
        } else {
            warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "sources.system_log_minutes".to_string(),
                    value: minutes.to_string(),
                    expected: format!(
                        "{}-{}; using default ({})",
                        constants::MIN_SYSTEM_LOG_MINUTES,
                        constants::MAX_SYSTEM_LOG_MINUTES,
                        constants::DEFAULT_SYSTEM_LOG_MINUTES,
                    ),
                }
                .to_string(),
            );
        }
    }
    if let Some(enabled) = raw.sources.system_log_enabled {
        config.system_log_enabled = enabled;
    }
    if let Some(path) = non_empty("sources.sync_log_path", raw.sources.sync_log_path, &mut warnings)
    {
        config.sync_log_path = path;
    }
    if let Some(enabled) = raw.sources.sync_log_enabled {
        config.sync_log_enabled = enabled;
    }

    // -- Uploader --
    if let Some(feeder) = non_empty("uploader.feeder", raw.uploader.feeder, &mut warnings) {
        config.feeder = feeder;
    }
    if let Some(command) = non_empty("uploader.command", raw.uploader.command, &mut warnings) {
        config.paste_command = command;
    }
    if let Some(args) = raw.uploader.args {
        config.paste_args = args;
    }

    // -- Payload --
    if let Some(headers) = raw.payload.source_headers {
        config.source_headers = headers;
    }

    // -- Logging --
    if let Some(level) = raw.logging.level {
        let lower = level.to_lowercase();
        if constants::VALID_LOG_LEVELS.contains(&lower.as_str()) {
            config.log_level = Some(lower);
        } else {
            warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "logging.level".to_string(),
                    value: level,
                    expected: "error, warn, info, debug or trace; using default (info)"
                        .to_string(),
                }
                .to_string(),
            );
        }
    }

    (config, warnings)
}

/// Load and validate the config file at `config_path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// A missing file yields defaults with no warnings (first run). An unreadable
/// or unparseable file yields defaults and a warning, so the window still
/// opens and tells the user what went wrong.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(source) => {
            let err = ConfigError::Io {
                path: config_path.to_path_buf(),
                source,
            };
            tracing::warn!(error = %err, "Using default configuration");
            return (AppConfig::default(), vec![format!("{err}. Using defaults.")]);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(source) => {
            let err = ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source,
            };
            tracing::warn!(error = %err, "Using default configuration");
            return (AppConfig::default(), vec![format!("{err}. Using defaults.")]);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let (config, warnings) = validate(raw);
    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }
    (config, warnings)
}
