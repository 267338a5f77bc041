// Nobara Log Uploader - platform/journal.rs
//
// Live systemd journal access through `journalctl --output=json`.

use crate::core::journal::{parse_journal_record, JournalRecord, JournalStream};
use crate::util::constants::JOURNALCTL_PROGRAM;
use crate::util::error::SourceError;
use chrono::{DateTime, Utc};
use std::process::{Command, Stdio};

/// Reads the journal by running `journalctl` to completion.
#[derive(Debug, Clone)]
pub struct JournalctlStream {
    program: String,
}

impl JournalctlStream {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments selecting every entry from `cutoff` to the current end.
    fn args(cutoff: DateTime<Utc>) -> Vec<String> {
        vec![
            format!("--since=@{}", cutoff.timestamp()),
            "--output=json".to_string(),
            "--output-fields=MESSAGE".to_string(),
            "--no-pager".to_string(),
            "--quiet".to_string(),
        ]
    }
}

impl Default for JournalctlStream {
    fn default() -> Self {
        Self::new(JOURNALCTL_PROGRAM)
    }
}

impl JournalStream for JournalctlStream {
    fn open_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<JournalRecord>, SourceError> {
        let args = Self::args(cutoff);
        tracing::debug!(program = %self.program, ?args, "Reading journal");

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| SourceError::LogAccess {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SourceError::JournalExit {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        parse_journal_output(&output.stdout)
    }
}

/// Parse newline-delimited journal JSON, skipping blank lines.
pub fn parse_journal_output(stdout: &[u8]) -> Result<Vec<JournalRecord>, SourceError> {
    String::from_utf8_lossy(stdout)
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            parse_journal_record(line).map_err(|source| SourceError::JournalParse {
                line_number: idx + 1,
                source,
            })
        })
        .collect()
}
