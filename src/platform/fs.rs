// Nobara Log Uploader - platform/fs.rs
//
// Filesystem helpers: home-relative path expansion and the nobara-sync
// log file reader.

use crate::core::model::Contribution;
use crate::util::error::SourceError;
use directories::BaseDirs;
use std::io;
use std::path::{Path, PathBuf};

/// Read the full content of a file as a string.
///
/// For files with invalid UTF-8, uses lossy conversion.
pub fn read_file_lossy(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Expand a leading `~` against the given home directory.
///
/// Paths without a leading `~` (or when no home is known) are returned as-is.
pub fn expand_home_with(path: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(path);
    };
    if path == "~" {
        return home.to_path_buf();
    }
    match path.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(path),
    }
}

/// Expand a leading `~` against the current user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    let base = BaseDirs::new();
    if base.is_none() {
        tracing::warn!(path, "Could not determine home directory; path left unexpanded");
    }
    expand_home_with(path, base.as_ref().map(BaseDirs::home_dir))
}

/// Read the nobara-sync log line by line.
///
/// A missing file is not an error: it yields `Contribution::Absent` with a
/// single diagnostic. Line terminators (`\n` or `\r\n`) are stripped.
pub fn read_sync_log_file(path: &Path) -> Result<Contribution, SourceError> {
    let content = match read_file_lossy(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            let diagnostic = format!("Could not find nobara-sync logfile: {}", path.display());
            tracing::warn!(path = %path.display(), "Sync log file not found; skipping");
            return Ok(Contribution::Absent { diagnostic });
        }
        Err(source) => {
            return Err(SourceError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    tracing::info!(path = %path.display(), lines = lines.len(), "Sync log read");
    Ok(Contribution::Lines(lines))
}
