// Nobara Log Uploader - app/upload.rs
//
// Upload lifecycle management. Collects the checked sources, merges them,
// and runs the paste upload on a background thread, sending progress to
// the UI thread via an mpsc channel.
//
// Architecture:
//   - `UploadManager` lives on the UI thread; `run_upload` runs on a worker.
//   - All cross-thread communication is via `UploadProgress` messages.
//   - A failing source is skipped with a diagnostic; only upload failures
//     abort the action.

use crate::core::merge::{build_payload, merge_lines, SourceBlob};
use crate::core::model::{Contribution, PasteUploader, SourceDescriptor, UploadProgress};
use std::sync::{mpsc, Arc};

/// Shown when every checked source was absent or failed.
pub const NO_CONTENT_MESSAGE: &str = "No log content to upload";

// =============================================================================
// UploadManager
// =============================================================================

/// Runs upload actions on a background thread.
pub struct UploadManager {
    /// Channel receiver for the UI to poll progress messages.
    progress_rx: Option<mpsc::Receiver<UploadProgress>>,

    uploader: Arc<dyn PasteUploader>,
}

impl UploadManager {
    pub fn new(uploader: Arc<dyn PasteUploader>) -> Self {
        Self {
            progress_rx: None,
            uploader,
        }
    }

    /// Start an upload of the given (already selected) sources.
    ///
    /// Spawns a worker immediately; progress is sent over the channel.
    pub fn start_upload(&mut self, sources: Vec<SourceDescriptor>, source_headers: bool) {
        let (tx, rx) = mpsc::channel();
        self.progress_rx = Some(rx);

        let uploader = Arc::clone(&self.uploader);
        let count = sources.len();
        std::thread::spawn(move || {
            run_upload(&sources, uploader.as_ref(), source_headers, &tx);
        });

        tracing::info!(sources = count, "Upload started");
    }

    /// Poll for progress messages without blocking. Returns all pending messages.
    pub fn poll_progress(&self) -> Vec<UploadProgress> {
        let mut messages = Vec::new();
        if let Some(ref rx) = self.progress_rx {
            while let Ok(msg) = rx.try_recv() {
                messages.push(msg);
            }
        }
        messages
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Retrieve every source in order and merge the results into the payload.
///
/// Returns the payload and how many sources contributed to it. Sources that
/// are absent or fail are reported through `notify` and left out.
pub fn collect_payload<F>(
    sources: &[SourceDescriptor],
    source_headers: bool,
    mut notify: F,
) -> (String, usize)
where
    F: FnMut(UploadProgress),
{
    let mut blobs: Vec<SourceBlob> = Vec::with_capacity(sources.len());

    for source in sources {
        notify(UploadProgress::Collecting {
            source: source.name.clone(),
        });
        tracing::debug!(source = %source.name, "Collecting source");

        match source.retrieve() {
            Ok(Contribution::Lines(lines)) => {
                tracing::debug!(source = %source.name, lines = lines.len(), "Source collected");
                blobs.push(SourceBlob {
                    name: source.name.clone(),
                    text: merge_lines(&lines),
                });
            }
            Ok(Contribution::Absent { diagnostic }) => {
                notify(UploadProgress::SourceSkipped {
                    source: source.name.clone(),
                    message: diagnostic,
                });
            }
            Err(e) => {
                tracing::warn!(source = %source.name, error = %e, "Source failed; skipping");
                notify(UploadProgress::SourceSkipped {
                    source: source.name.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    (build_payload(&blobs, source_headers), blobs.len())
}

/// Full upload action: collect → merge → upload → report.
///
/// If no source contributed any text, the uploader is not called and the action
/// fails with `NO_CONTENT_MESSAGE`. Runs on the worker thread; the receiver
/// being dropped (window closed) ends the action quietly.
pub fn run_upload(
    sources: &[SourceDescriptor],
    uploader: &dyn PasteUploader,
    source_headers: bool,
    tx: &mpsc::Sender<UploadProgress>,
) {
    macro_rules! send {
        ($msg:expr) => {
            if tx.send($msg).is_err() {
                return;
            }
        };
    }

    let (payload, used) = collect_payload(sources, source_headers, |msg| {
        let _ = tx.send(msg);
    });

    // Never publish an empty paste.
    if used == 0 || payload.is_empty() {
        tracing::warn!("No source contributed any content; upload skipped");
        send!(UploadProgress::Failed {
            error: NO_CONTENT_MESSAGE.to_string(),
        });
        return;
    }

    send!(UploadProgress::Uploading {
        bytes: payload.len(),
        sources: used,
    });

    match uploader.upload(&payload) {
        Ok(result) => {
            send!(UploadProgress::Completed { result });
        }
        Err(e) => {
            tracing::error!(error = %e, "Upload failed");
            send!(UploadProgress::Failed {
                error: e.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::AppState;
    use crate::core::model::UploadResult;
    use crate::util::error::{SourceError, UploadError};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    /// Records what it was asked to upload.
    #[derive(Default)]
    struct RecordingUploader {
        sent: Mutex<Vec<String>>,
    }

    impl PasteUploader for RecordingUploader {
        fn upload(&self, text: &str) -> Result<UploadResult, UploadError> {
            self.sent.lock().unwrap().push(text.to_string());
            Ok(UploadResult {
                pasteurl: "https://example.test/abc".to_string(),
                deleteurl: None,
            })
        }
    }

    struct GarbageUploader;

    impl PasteUploader for GarbageUploader {
        fn upload(&self, _text: &str) -> Result<UploadResult, UploadError> {
            crate::core::response::parse_response(b"<html>502 Bad Gateway</html>")
        }
    }

    fn lines_source(name: &str, lines: &[&str]) -> SourceDescriptor {
        let lines: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        SourceDescriptor::new(name, true, move || Ok(Contribution::Lines(lines.clone())))
    }

    fn drain(rx: &mpsc::Receiver<UploadProgress>) -> Vec<UploadProgress> {
        rx.try_iter().collect()
    }

    #[test]
    fn test_sources_merged_in_order() {
        let sources = vec![lines_source("System Log", &["L1"]), lines_source("sync", &["L2"])];
        let uploader = RecordingUploader::default();
        let (tx, rx) = mpsc::channel();

        run_upload(&sources, &uploader, false, &tx);

        assert_eq!(*uploader.sent.lock().unwrap(), vec!["L1\nL2".to_string()]);
        let messages = drain(&rx);
        assert!(messages.contains(&UploadProgress::Uploading {
            bytes: 5,
            sources: 2
        }));
        assert!(matches!(
            messages.last(),
            Some(UploadProgress::Completed { result }) if result.pasteurl == "https://example.test/abc"
        ));
    }

    #[test]
    fn test_absent_source_is_skipped_with_diagnostic() {
        let sources = vec![
            lines_source("System Log", &["a", "b"]),
            SourceDescriptor::new("sync", true, || {
                Ok(Contribution::Absent {
                    diagnostic: "Could not find nobara-sync logfile: /x".to_string(),
                })
            }),
        ];
        let uploader = RecordingUploader::default();
        let (tx, rx) = mpsc::channel();

        run_upload(&sources, &uploader, false, &tx);

        assert_eq!(*uploader.sent.lock().unwrap(), vec!["a\nb".to_string()]);
        let skipped: Vec<_> = drain(&rx)
            .into_iter()
            .filter(|m| matches!(m, UploadProgress::SourceSkipped { .. }))
            .collect();
        assert_eq!(skipped.len(), 1);
    }

    #[test]
    fn test_failing_source_does_not_abort_batch() {
        let sources = vec![
            SourceDescriptor::new("System Log", true, || {
                Err(SourceError::LogAccess {
                    program: "journalctl".to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
                })
            }),
            lines_source("sync", &["still here"]),
        ];
        let uploader = RecordingUploader::default();
        let (tx, rx) = mpsc::channel();

        run_upload(&sources, &uploader, false, &tx);

        assert_eq!(*uploader.sent.lock().unwrap(), vec!["still here".to_string()]);
        assert!(drain(&rx).iter().any(|m| matches!(
            m,
            UploadProgress::SourceSkipped { source, .. } if source == "System Log"
        )));
    }

    #[test]
    fn test_upload_format_error_reported_as_failed() {
        let sources = vec![lines_source("System Log", &["x"])];
        let (tx, rx) = mpsc::channel();

        run_upload(&sources, &GarbageUploader, false, &tx);

        match drain(&rx).last() {
            Some(UploadProgress::Failed { error }) => {
                assert!(error.contains("Unexpected response"), "{error}");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn test_unchecked_source_is_never_invoked() {
        let called = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&called);
        let unchecked = SourceDescriptor::new("unchecked", true, move || {
            flag.store(true, Ordering::SeqCst);
            Ok(Contribution::Lines(vec!["leaked".to_string()]))
        });

        let mut state = AppState::new(vec![lines_source("a", &["1"]), unchecked], false);
        state.set_checked(1, false);
        let sources = state.begin_upload().unwrap();
        let uploader = RecordingUploader::default();
        let (tx, _rx) = mpsc::channel();

        run_upload(&sources, &uploader, false, &tx);

        assert_eq!(*uploader.sent.lock().unwrap(), vec!["1".to_string()]);
        assert!(!called.load(Ordering::SeqCst));
    }

    #[test]
    fn test_nothing_collected_is_not_uploaded() {
        let sources = vec![SourceDescriptor::new("sync", true, || {
            Ok(Contribution::Absent {
                diagnostic: "Could not find nobara-sync logfile: /x".to_string(),
            })
        })];
        let uploader = RecordingUploader::default();
        let (tx, rx) = mpsc::channel();

        run_upload(&sources, &uploader, false, &tx);

        assert!(uploader.sent.lock().unwrap().is_empty());
        let messages = drain(&rx);
        assert!(!messages
            .iter()
            .any(|m| matches!(m, UploadProgress::Uploading { .. })));
        assert!(matches!(
            messages.last(),
            Some(UploadProgress::Failed { error }) if error == NO_CONTENT_MESSAGE
        ));
    }

    #[test]
    fn test_empty_journal_window_is_not_uploaded() {
        let sources = vec![lines_source("System Log", &[])];
        let uploader = RecordingUploader::default();
        let (tx, rx) = mpsc::channel();

        run_upload(&sources, &uploader, false, &tx);

        assert!(uploader.sent.lock().unwrap().is_empty());
        assert!(matches!(drain(&rx).last(), Some(UploadProgress::Failed { .. })));
    }

    #[test]
    fn test_headers_applied_when_enabled() {
        let sources = vec![lines_source("System Log", &["L1"]), lines_source("sync", &["L2"])];
        let (payload, _) = collect_payload(&sources, true, |_| {});
        assert_eq!(payload, "==== System Log ====\nL1\n==== sync ====\nL2");
    }

    #[test]
    fn test_manager_delivers_completion() {
        let uploader: Arc<dyn PasteUploader> = Arc::new(RecordingUploader::default());
        let mut manager = UploadManager::new(uploader);
        manager.start_upload(vec![lines_source("System Log", &["L1"])], false);

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        let mut seen = Vec::new();
        while std::time::Instant::now() < deadline {
            seen.extend(manager.poll_progress());
            if matches!(seen.last(), Some(UploadProgress::Completed { .. })) {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        assert!(matches!(seen.last(), Some(UploadProgress::Completed { .. })));
    }
}
