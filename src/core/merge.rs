// Nobara Log Uploader - core/merge.rs
//
// Text merging: flattens a source's lines into one blob, then all blobs
// into the final payload.

/// Join lines with a newline separator. An empty slice yields "".
pub fn merge_lines<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join("\n")
}

/// One source's flattened contribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBlob {
    pub name: String,
    pub text: String,
}

/// Header line placed above a blob when `source_headers` is enabled.
pub fn source_header(name: &str) -> String {
    format!("==== {name} ====")
}

/// Merge per-source blobs, in row order, into the upload payload.
///
/// Without headers the blobs are only newline-joined, so sources cannot be
/// told apart except by content.
pub fn build_payload(blobs: &[SourceBlob], source_headers: bool) -> String {
    if !source_headers {
        let texts: Vec<&str> = blobs.iter().map(|b| b.text.as_str()).collect();
        return merge_lines(&texts);
    }

    let mut sections = Vec::with_capacity(blobs.len() * 2);
    for blob in blobs {
        sections.push(source_header(&blob.name));
        sections.push(blob.text.clone());
    }
    merge_lines(&sections)
}
