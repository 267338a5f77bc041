// Nobara Log Uploader - util/error.rs
//
// Typed errors, one enum per subsystem. Each keeps its underlying cause
// reachable through `Error::source` for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

// ---------------------------------------------------------------------------
// Source errors
// ---------------------------------------------------------------------------

/// Errors raised while retrieving lines from a log source.
#[derive(Debug)]
pub enum SourceError {
    /// The journal reader could not be started.
    LogAccess {
        program: String,
        source: io::Error,
    },

    /// The journal reader exited unsuccessfully.
    JournalExit { status: ExitStatus, stderr: String },

    /// A journal record was not valid JSON.
    JournalParse {
        line_number: usize,
        source: serde_json::Error,
    },

    /// A zero-minute window was requested.
    InvalidWindow,

    /// I/O error reading a log file (other than it being absent).
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LogAccess { program, source } => {
                write!(f, "Cannot open the system log via '{program}': {source}")
            }
            Self::JournalExit { status, stderr } => {
                write!(f, "System log reader exited with {status}")?;
                if !stderr.trim().is_empty() {
                    write!(f, ": {}", stderr.trim())?;
                }
                Ok(())
            }
            Self::JournalParse {
                line_number,
                source,
            } => write!(f, "Malformed journal record on line {line_number}: {source}"),
            Self::InvalidWindow => write!(f, "System log window must be at least one minute"),
            Self::Io { path, source } => {
                write!(f, "Cannot read '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LogAccess { source, .. } => Some(source),
            Self::JournalParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Upload errors
// ---------------------------------------------------------------------------

/// Errors raised by the paste upload pipeline.
#[derive(Debug)]
pub enum UploadError {
    /// A child process of the pipeline could not be spawned.
    ProcessLaunch { program: String, source: io::Error },

    /// Moving the payload through the pipeline failed.
    Pipe { source: io::Error },

    /// The paste tool ran but reported failure.
    ProcessFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    /// The paste tool's output is not JSON or lacks `pasteurl`.
    Format { reason: String, body: String },
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProcessLaunch { program, source } => {
                write!(f, "Could not execute '{program}': {source}")
            }
            Self::Pipe { source } => {
                write!(f, "Failed to pass the log payload to the uploader: {source}")
            }
            Self::ProcessFailed {
                program,
                status,
                stderr,
            } => {
                write!(f, "'{program}' exited with {status}")?;
                if !stderr.trim().is_empty() {
                    write!(f, ": {}", stderr.trim())?;
                }
                Ok(())
            }
            Self::Format { reason, body } => {
                write!(f, "Unexpected response from the paste tool ({reason})")?;
                if !body.is_empty() {
                    write!(f, ": {body}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for UploadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ProcessLaunch { source, .. } => Some(source),
            Self::Pipe { source } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
