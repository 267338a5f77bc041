// Nobara Log Uploader - app/sources.rs
//
// The fixed list of log sources offered in the checklist.

use crate::core::journal::read_system_log;
use crate::core::model::{Contribution, SourceDescriptor};
use crate::platform::config::AppConfig;
use crate::platform::fs::{expand_home, read_sync_log_file};
use crate::platform::journal::JournalctlStream;
use crate::util::constants::{SYNC_LOG_NAME, SYSTEM_LOG_NAME};

/// Build the source rows, in display order, from the validated config.
pub fn builtin_sources(config: &AppConfig) -> Vec<SourceDescriptor> {
    let minutes = config.system_log_minutes;
    let system_log = SourceDescriptor::new(SYSTEM_LOG_NAME, config.system_log_enabled, move || {
        read_system_log(&JournalctlStream::default(), minutes).map(Contribution::Lines)
    });

    let sync_path = expand_home(&config.sync_log_path);
    tracing::debug!(path = %sync_path.display(), "Sync log location");
    let sync_log = SourceDescriptor::new(SYNC_LOG_NAME, config.sync_log_enabled, move || {
        read_sync_log_file(&sync_path)
    });

    vec![system_log, sync_log]
}
