// Nobara Log Uploader - core/journal.rs
//
// System log retrieval over an abstract journal stream.
// The live implementation (journalctl child process) lives in
// platform/journal.rs; tests substitute an in-memory stream.

use crate::util::error::SourceError;
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

/// One journal entry, reduced to the fields the uploader needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JournalRecord {
    /// The `MESSAGE` field, if the entry carries one.
    pub message: Option<String>,
}

impl JournalRecord {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

/// Access to the structured system log.
pub trait JournalStream {
    /// Return every entry from `cutoff` to the current end of the journal,
    /// in chronological order.
    fn open_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<JournalRecord>, SourceError>;
}

/// Start of the window ending at `now`.
pub fn cutoff_for(now: DateTime<Utc>, window_minutes: u32) -> DateTime<Utc> {
    now - Duration::minutes(i64::from(window_minutes))
}

/// Read the `MESSAGE` of every journal entry newer than `window_minutes` ago.
pub fn read_system_log<J>(journal: &J, window_minutes: u32) -> Result<Vec<String>, SourceError>
where
    J: JournalStream + ?Sized,
{
    if window_minutes == 0 {
        return Err(SourceError::InvalidWindow);
    }

    let cutoff = cutoff_for(Utc::now(), window_minutes);
    let records = journal.open_since(cutoff)?;
    let total = records.len();

    let lines: Vec<String> = records.into_iter().filter_map(|r| r.message).collect();

    if lines.len() < total {
        tracing::debug!(
            skipped = total - lines.len(),
            "Journal entries without MESSAGE skipped"
        );
    }
    tracing::info!(
        window_minutes,
        lines = lines.len(),
        %cutoff,
        "System log read"
    );
    Ok(lines)
}

/// Parse one line of `journalctl --output=json`.
///
/// `MESSAGE` is normally a string; journald encodes non-UTF-8 payloads as an
/// array of byte values, which is decoded lossily here.
pub fn parse_journal_record(line: &str) -> Result<JournalRecord, serde_json::Error> {
    let value: Value = serde_json::from_str(line)?;

    let message = match value.get("MESSAGE") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Array(items)) => {
            let bytes: Vec<u8> = items
                .iter()
                .filter_map(Value::as_u64)
                .filter_map(|b| u8::try_from(b).ok())
                .collect();
            Some(String::from_utf8_lossy(&bytes).into_owned())
        }
        _ => None,
    };

    Ok(JournalRecord { message })
}
