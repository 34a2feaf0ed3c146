//! Source loading for the Quill CLI.
//!
//! The lexer assumes its input uses a single line-terminator convention, so
//! everything read from disk passes through [`normalize_line_endings`] before
//! reaching it.

use std::fs;
use std::path::Path;

use crate::cli::{CliError, CliResult};

/// Maximum source file size (16 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions.
const MAX_SOURCE_SIZE: u64 = 16 * 1024 * 1024;

/// Read a source file, enforce the size cap, and normalize line endings.
pub fn load(path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(path)
        .map_err(|e| CliError::failure(format!("cannot access '{}': {}", path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "source file '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    let raw = fs::read_to_string(path)
        .map_err(|e| CliError::failure(format!("error reading '{}': {}", path.display(), e)))?;

    Ok(normalize_line_endings(&raw))
}

/// Collapse `\r\n` and lone `\r` to `\n`.
pub fn normalize_line_endings(source: &str) -> String {
    if !source.contains('\r') {
        return source.to_string();
    }
    source.replace("\r\n", "\n").replace('\r', "\n")
}
