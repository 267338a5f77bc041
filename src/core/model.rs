// Nobara Log Uploader - core/model.rs
//
// Core data model types shared by all layers. No I/O and no UI here.

use crate::util::error::{SourceError, UploadError};
use std::fmt;
use std::sync::Arc;

// =============================================================================
// Sources
// =============================================================================

/// What a single retrieval produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contribution {
    /// Lines in source order (chronological for the journal, file order otherwise).
    Lines(Vec<String>),

    /// The source had nothing to read (e.g. the log file does not exist).
    /// Carries the one diagnostic shown to the user.
    Absent { diagnostic: String },
}

/// Shared retrieval capability bound to a source row.
pub type RetrieveFn = Arc<dyn Fn() -> Result<Contribution, SourceError> + Send + Sync>;

/// A named producer of log lines, fixed at startup.
#[derive(Clone)]
pub struct SourceDescriptor {
    /// Label shown in the checklist.
    pub name: String,

    /// Initial checkbox value.
    pub enabled_by_default: bool,

    retrieve: RetrieveFn,
}

impl SourceDescriptor {
    pub fn new<F>(name: impl Into<String>, enabled_by_default: bool, retrieve: F) -> Self
    where
        F: Fn() -> Result<Contribution, SourceError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            enabled_by_default,
            retrieve: Arc::new(retrieve),
        }
    }

    /// Run the bound retrieval function.
    pub fn retrieve(&self) -> Result<Contribution, SourceError> {
        (self.retrieve)()
    }
}

impl fmt::Debug for SourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceDescriptor")
            .field("name", &self.name)
            .field("enabled_by_default", &self.enabled_by_default)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Upload
// =============================================================================

/// Parsed response of the paste tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    /// Public link to the paste.
    pub pasteurl: String,

    /// Link that deletes the paste, when the tool reports one.
    pub deleteurl: Option<String>,
}

/// Anything that can publish a text payload and hand back its URL.
///
/// Implementations run on the upload worker thread.
pub trait PasteUploader: Send + Sync {
    fn upload(&self, text: &str) -> Result<UploadResult, UploadError>;
}

// =============================================================================
// Worker -> UI messages
// =============================================================================

/// Progress messages sent from the upload worker to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadProgress {
    /// A checked source is being read.
    Collecting { source: String },

    /// A checked source contributed nothing; the batch continues.
    SourceSkipped { source: String, message: String },

    /// The payload has been assembled and handed to the uploader.
    Uploading { bytes: usize, sources: usize },

    /// The paste tool returned a URL.
    Completed { result: UploadResult },

    /// The upload step failed; the action is aborted.
    Failed { error: String },
}

/// Lifecycle of the single upload action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ShellPhase {
    /// Checklist shown, waiting for the user.
    #[default]
    Idle,

    /// Reading the checked sources.
    Collecting,

    /// Payload sent to the paste tool.
    Uploading,

    /// Result dialog open.
    ShowingResult(UploadResult),

    /// Error dialog open.
    ShowingError(String),
}

impl ShellPhase {
    /// True while the worker thread is running.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Collecting | Self::Uploading)
    }
}
