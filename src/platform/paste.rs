// Nobara Log Uploader - platform/paste.rs
//
// Paste upload through external processes:
//
//   payload --(writer thread)--> feeder stdin
//   feeder stdout -------------> paste tool stdin
//   paste tool stdout ---------> JSON response
//
// Each spawn returns a Result; a failed launch aborts the upload before any
// later stage touches a child handle.

use crate::core::model::{PasteUploader, UploadResult};
use crate::core::response::parse_response;
use crate::util::constants;
use crate::util::error::UploadError;
use std::io::{self, Write};
use std::process::{Child, ChildStdout, Command, Stdio};

/// Uploads through `<feeder> | <command> <args...>` (pbcli by default).
#[derive(Debug, Clone)]
pub struct PbcliUploader {
    pub feeder: String,
    pub command: String,
    pub args: Vec<String>,
}

impl Default for PbcliUploader {
    fn default() -> Self {
        Self {
            feeder: constants::DEFAULT_FEEDER_PROGRAM.to_string(),
            command: constants::DEFAULT_PASTE_PROGRAM.to_string(),
            args: constants::DEFAULT_PASTE_ARGS
                .iter()
                .map(|a| (*a).to_string())
                .collect(),
        }
    }
}

impl PbcliUploader {
    pub fn new(feeder: impl Into<String>, command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            feeder: feeder.into(),
            command: command.into(),
            args,
        }
    }

    fn spawn_feeder(&self) -> Result<Child, UploadError> {
        Command::new(&self.feeder)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| UploadError::ProcessLaunch {
                program: self.feeder.clone(),
                source,
            })
    }

    fn spawn_paste_tool(&self, input: ChildStdout) -> Result<Child, UploadError> {
        Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::from(input))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| UploadError::ProcessLaunch {
                program: self.command.clone(),
                source,
            })
    }
}

/// Reap a child we are abandoning.
fn discard(mut child: Child) {
    let _ = child.kill();
    let _ = child.wait();
}

fn missing_pipe(which: &str) -> UploadError {
    UploadError::Pipe {
        source: io::Error::new(io::ErrorKind::BrokenPipe, format!("{which} not captured")),
    }
}

impl PasteUploader for PbcliUploader {
    fn upload(&self, text: &str) -> Result<UploadResult, UploadError> {
        tracing::info!(
            feeder = %self.feeder,
            command = %self.command,
            bytes = text.len(),
            "Uploading payload"
        );

        let mut feeder = self.spawn_feeder()?;

        let Some(feeder_out) = feeder.stdout.take() else {
            discard(feeder);
            return Err(missing_pipe("feeder stdout"));
        };

        let paste = match self.spawn_paste_tool(feeder_out) {
            Ok(child) => child,
            Err(e) => {
                tracing::error!(error = %e, "Paste tool could not be launched");
                discard(feeder);
                return Err(e);
            }
        };

        let Some(mut feeder_in) = feeder.stdin.take() else {
            discard(feeder);
            discard(paste);
            return Err(missing_pipe("feeder stdin"));
        };

        // Written from a separate thread so a large payload cannot deadlock
        // against the paste tool's stdout filling up. Dropping `feeder_in`
        // closes the pipe and lets the feeder reach EOF.
        let payload = text.as_bytes().to_vec();
        let writer = std::thread::spawn(move || feeder_in.write_all(&payload));

        let output = paste
            .wait_with_output()
            .map_err(|source| UploadError::Pipe { source })?;

        let write_result = writer.join().unwrap_or_else(|_| {
            Err(io::Error::new(io::ErrorKind::Other, "payload writer panicked"))
        });

        if let Err(e) = feeder.wait() {
            tracing::debug!(error = %e, "Could not reap feeder process");
        }

        if !output.status.success() {
            return Err(UploadError::ProcessFailed {
                program: self.command.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        write_result.map_err(|source| UploadError::Pipe { source })?;

        let result = parse_response(&output.stdout)?;
        tracing::info!(url = %result.pasteurl, "Upload complete");
        Ok(result)
    }
}
