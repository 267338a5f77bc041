// Nobara Log Uploader - core/response.rs
//
// Interpretation of the paste tool's JSON output.

use crate::core::model::UploadResult;
use crate::util::constants::MAX_RESPONSE_EXCERPT;
use crate::util::error::UploadError;
use serde_json::Value;

/// First few hundred characters of a response, for error messages.
fn excerpt(text: &str) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(MAX_RESPONSE_EXCERPT) {
        Some((idx, _)) => format!("{}\u{2026}", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

/// Parse the paste tool's stdout into an `UploadResult`.
///
/// Fails with `UploadError::Format` when the bytes are not a JSON object
/// or the object has no string `pasteurl`. Other fields are never a reason
/// to reject the response.
pub fn parse_response(stdout: &[u8]) -> Result<UploadResult, UploadError> {
    let text = String::from_utf8_lossy(stdout);

    if text.trim().is_empty() {
        return Err(UploadError::Format {
            reason: "empty output".to_string(),
            body: String::new(),
        });
    }

    let value: Value = serde_json::from_str(text.trim()).map_err(|e| UploadError::Format {
        reason: format!("not valid JSON: {e}"),
        body: excerpt(&text),
    })?;

    let pasteurl = match value.get("pasteurl") {
        Some(Value::String(url)) => url.clone(),
        Some(_) => {
            return Err(UploadError::Format {
                reason: "'pasteurl' is not a string".to_string(),
                body: excerpt(&text),
            })
        }
        None => {
            return Err(UploadError::Format {
                reason: "missing 'pasteurl'".to_string(),
                body: excerpt(&text),
            })
        }
    };

    // `deleteurl` is informational; a malformed one is dropped.
    let deleteurl = value
        .get("deleteurl")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(UploadResult {
        pasteurl,
        deleteurl,
    })
}
