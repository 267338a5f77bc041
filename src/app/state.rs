// Nobara Log Uploader - app/state.rs
//
// Application state: the source rows, their checkbox values, and the
// upload lifecycle phase. Owned by the eframe::App implementation.

use crate::core::model::{ShellPhase, SourceDescriptor, UploadProgress};

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Source rows in display order. Fixed for the whole run.
    sources: Vec<SourceDescriptor>,

    /// Checkbox value per row; `selection[i]` belongs to `sources[i]`.
    selection: Vec<bool>,

    /// Where the upload action currently is.
    pub phase: ShellPhase,

    /// Status line under the Upload button.
    pub status_message: String,

    /// Diagnostics from the most recent upload (skipped sources).
    pub diagnostics: Vec<String>,

    /// Non-fatal problems found at startup (config validation).
    pub startup_warnings: Vec<String>,

    /// Put a header line above each source in the payload.
    pub source_headers: bool,
}

impl AppState {
    /// Create initial state; every row starts at its descriptor's default.
    pub fn new(sources: Vec<SourceDescriptor>, source_headers: bool) -> Self {
        let selection = sources.iter().map(|s| s.enabled_by_default).collect();
        Self {
            sources,
            selection,
            phase: ShellPhase::Idle,
            status_message: "Ready.".to_string(),
            diagnostics: Vec::new(),
            startup_warnings: Vec::new(),
            source_headers,
        }
    }

    pub fn sources(&self) -> &[SourceDescriptor] {
        &self.sources
    }

    pub fn is_checked(&self, row: usize) -> bool {
        self.selection.get(row).copied().unwrap_or(false)
    }

    /// Mutable checkbox binding for a row, for the checklist widget.
    pub fn checkbox_mut(&mut self, row: usize) -> Option<&mut bool> {
        self.selection.get_mut(row)
    }

    pub fn set_checked(&mut self, row: usize, checked: bool) {
        if let Some(slot) = self.selection.get_mut(row) {
            *slot = checked;
        }
    }

    /// The checked rows' descriptors, in display order.
    pub fn checked_sources(&self) -> Vec<SourceDescriptor> {
        self.sources
            .iter()
            .zip(&self.selection)
            .filter(|(_, checked)| **checked)
            .map(|(source, _)| source.clone())
            .collect()
    }

    /// Upload is possible when idle and at least one row is checked.
    pub fn can_upload(&self) -> bool {
        self.phase == ShellPhase::Idle && self.selection.iter().any(|c| *c)
    }

    /// Enter `Collecting` and hand out the sources to upload.
    ///
    /// Returns `None` (and changes nothing) if an upload cannot start now.
    pub fn begin_upload(&mut self) -> Option<Vec<SourceDescriptor>> {
        if !self.can_upload() {
            return None;
        }
        self.diagnostics.clear();
        self.phase = ShellPhase::Collecting;
        self.status_message = "Collecting logs...".to_string();
        Some(self.checked_sources())
    }

    /// Apply one worker message to the lifecycle.
    pub fn apply_progress(&mut self, msg: UploadProgress) {
        match msg {
            UploadProgress::Collecting { source } => {
                self.phase = ShellPhase::Collecting;
                self.status_message = format!("Reading {source}...");
            }
            UploadProgress::SourceSkipped { source, message } => {
                self.diagnostics.push(format!("{source}: {message}"));
            }
            UploadProgress::Uploading { bytes, sources } => {
                self.phase = ShellPhase::Uploading;
                self.status_message = format!("Uploading {bytes} bytes from {sources} source(s)...");
            }
            UploadProgress::Completed { result } => {
                self.status_message = "Upload complete.".to_string();
                self.phase = ShellPhase::ShowingResult(result);
            }
            UploadProgress::Failed { error } => {
                self.status_message = "Upload failed.".to_string();
                self.phase = ShellPhase::ShowingError(error);
            }
        }
    }

    /// Close the result or error dialog.
    pub fn dismiss_dialog(&mut self) {
        if matches!(
            self.phase,
            ShellPhase::ShowingResult(_) | ShellPhase::ShowingError(_)
        ) {
            self.phase = ShellPhase::Idle;
            self.status_message = "Ready.".to_string();
        }
    }
}
