// Nobara Log Uploader - tests/e2e_upload.rs
//
// End-to-end tests for the collect → merge → upload pipeline.
//
// These tests use real files on disk (tempfile), the real sync log reader,
// the real upload pipeline with `cat` standing in for pbcli, and the real
// state machine that drives the dialogs. Only the journal is faked.

use chrono::{DateTime, Utc};
use nobara_log_uploader::app::state::AppState;
use nobara_log_uploader::app::upload::{run_upload, NO_CONTENT_MESSAGE};
use nobara_log_uploader::core::journal::{read_system_log, JournalRecord, JournalStream};
use nobara_log_uploader::core::model::{
    Contribution, PasteUploader, ShellPhase, SourceDescriptor, UploadProgress, UploadResult,
};
use nobara_log_uploader::platform::fs::read_sync_log_file;
use nobara_log_uploader::platform::paste::PbcliUploader;
use nobara_log_uploader::util::error::{SourceError, UploadError};
use std::path::PathBuf;
use std::sync::{mpsc, Mutex};

// =============================================================================
// Helpers
// =============================================================================

struct FixedJournal(Vec<&'static str>);

impl JournalStream for FixedJournal {
    fn open_since(&self, _cutoff: DateTime<Utc>) -> Result<Vec<JournalRecord>, SourceError> {
        Ok(self.0.iter().map(|m| JournalRecord::with_message(*m)).collect())
    }
}

#[derive(Default)]
struct RecordingUploader {
    sent: Mutex<Vec<String>>,
}

impl PasteUploader for RecordingUploader {
    fn upload(&self, text: &str) -> Result<UploadResult, UploadError> {
        self.sent.lock().unwrap().push(text.to_string());
        Ok(UploadResult {
            pasteurl: "https://example.test/e2e".to_string(),
            deleteurl: None,
        })
    }
}

fn system_log_source(messages: Vec<&'static str>) -> SourceDescriptor {
    SourceDescriptor::new("System Log", true, move || {
        read_system_log(&FixedJournal(messages.clone()), 15).map(Contribution::Lines)
    })
}

fn sync_log_source(path: PathBuf) -> SourceDescriptor {
    SourceDescriptor::new("nobara-sync log", true, move || read_sync_log_file(&path))
}

/// Run one upload action through the state machine, as the GUI does.
fn drive(state: &mut AppState, uploader: &dyn PasteUploader) {
    let sources = state.begin_upload().expect("upload should start");
    let (tx, rx) = mpsc::channel();
    run_upload(&sources, uploader, state.source_headers, &tx);
    drop(tx);
    for msg in rx.iter() {
        state.apply_progress(msg);
    }
}

// =============================================================================
// Tests
// =============================================================================

/// Both sources enabled: the uploader receives "L1\nL2".
#[test]
fn e2e_both_sources_merged_in_row_order() {
    let dir = tempfile::tempdir().unwrap();
    let sync = dir.path().join("nobara-sync.log");
    std::fs::write(&sync, "L2\n").unwrap();

    let mut state = AppState::new(
        vec![system_log_source(vec!["L1"]), sync_log_source(sync)],
        false,
    );
    let uploader = RecordingUploader::default();
    drive(&mut state, &uploader);

    assert_eq!(*uploader.sent.lock().unwrap(), vec!["L1\nL2".to_string()]);
    assert!(matches!(
        state.phase,
        ShellPhase::ShowingResult(ref r) if r.pasteurl == "https://example.test/e2e"
    ));
}

/// A missing sync log is reported once and the journal is still uploaded.
#[test]
fn e2e_missing_sync_log_degrades_to_journal_only() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope").join("nobara-sync.log");

    let mut state = AppState::new(
        vec![system_log_source(vec!["x", "y", "z"]), sync_log_source(missing)],
        false,
    );
    let uploader = RecordingUploader::default();
    drive(&mut state, &uploader);

    assert_eq!(*uploader.sent.lock().unwrap(), vec!["x\ny\nz".to_string()]);
    assert_eq!(state.diagnostics.len(), 1);
    assert!(state.diagnostics[0].contains("Could not find nobara-sync logfile"));
    assert!(matches!(state.phase, ShellPhase::ShowingResult(_)));
}

/// Unchecked rows are left out of the payload.
#[test]
fn e2e_unchecked_source_not_uploaded() {
    let dir = tempfile::tempdir().unwrap();
    let sync = dir.path().join("nobara-sync.log");
    std::fs::write(&sync, "sync only\n").unwrap();

    let mut state = AppState::new(
        vec![system_log_source(vec!["journal"]), sync_log_source(sync)],
        false,
    );
    state.set_checked(0, false);
    let uploader = RecordingUploader::default();
    drive(&mut state, &uploader);

    assert_eq!(*uploader.sent.lock().unwrap(), vec!["sync only".to_string()]);
}

/// When every checked source is missing, nothing is uploaded and the user
/// sees an error instead of an empty paste.
#[test]
fn e2e_nothing_to_upload_shows_error_dialog() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nobara-sync.log");

    let mut state = AppState::new(vec![sync_log_source(missing)], false);
    let uploader = RecordingUploader::default();
    drive(&mut state, &uploader);

    assert!(uploader.sent.lock().unwrap().is_empty());
    assert_eq!(state.diagnostics.len(), 1);
    match state.phase {
        ShellPhase::ShowingError(ref e) => assert_eq!(e, NO_CONTENT_MESSAGE),
        ref other => panic!("expected ShowingError, got {other:?}"),
    }
}

/// Real two-process pipeline: the sync log holds a pbcli-style response,
/// and `cat | cat` hands it back as if the paste tool had produced it.
#[cfg(unix)]
#[test]
fn e2e_real_pipeline_returns_pasteurl() {
    let dir = tempfile::tempdir().unwrap();
    let sync = dir.path().join("nobara-sync.log");
    std::fs::write(&sync, "{\"pasteurl\": \"https://example.test/abc\"}\n").unwrap();

    let mut state = AppState::new(vec![sync_log_source(sync)], false);
    let uploader = PbcliUploader::new("cat", "cat", Vec::new());
    drive(&mut state, &uploader);

    match state.phase {
        ShellPhase::ShowingResult(ref r) => assert_eq!(r.pasteurl, "https://example.test/abc"),
        ref other => panic!("expected ShowingResult, got {other:?}"),
    }
}

/// A non-JSON response ends in the error dialog, not a crash.
#[cfg(unix)]
#[test]
fn e2e_non_json_response_shows_error_dialog() {
    let mut state = AppState::new(vec![system_log_source(vec!["plain text"])], false);
    let uploader = PbcliUploader::new("cat", "cat", Vec::new());
    drive(&mut state, &uploader);

    match state.phase {
        ShellPhase::ShowingError(ref e) => assert!(e.contains("not valid JSON"), "{e}"),
        ref other => panic!("expected ShowingError, got {other:?}"),
    }

    state.dismiss_dialog();
    assert_eq!(state.phase, ShellPhase::Idle);
}

/// An uploader that cannot be launched is shown to the user as an error.
#[test]
fn e2e_missing_paste_tool_shows_error_dialog() {
    let mut state = AppState::new(vec![system_log_source(vec!["L1"])], false);
    let uploader = PbcliUploader::new("cat", "/nonexistent/pbcli-for-e2e", Vec::new());
    drive(&mut state, &uploader);

    match state.phase {
        ShellPhase::ShowingError(ref e) => {
            assert!(e.contains("Could not execute"), "{e}");
        }
        ref other => panic!("expected ShowingError, got {other:?}"),
    }
}

/// Progress messages arrive in lifecycle order.
#[test]
fn e2e_progress_order() {
    let sources = vec![system_log_source(vec!["L1"])];
    let uploader = RecordingUploader::default();
    let (tx, rx) = mpsc::channel();
    run_upload(&sources, &uploader, false, &tx);
    drop(tx);

    let kinds: Vec<&'static str> = rx
        .iter()
        .map(|m| match m {
            UploadProgress::Collecting { .. } => "collecting",
            UploadProgress::SourceSkipped { .. } => "skipped",
            UploadProgress::Uploading { .. } => "uploading",
            UploadProgress::Completed { .. } => "completed",
            UploadProgress::Failed { .. } => "failed",
        })
        .collect();
    assert_eq!(kinds, vec!["collecting", "uploading", "completed"]);
}
