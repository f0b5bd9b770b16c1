//! Source document parsing.

pub mod cklb;

pub use cklb::RawDocument;

use crate::error::{ReportError, Result};
use std::fs;
use std::path::Path;

/// Read and parse one checklist document.
///
/// An unreadable or malformed top-level document is a file-level error; the
/// caller drops the file from the batch with a warning. Field-level anomalies
/// inside a well-formed document are absorbed during deserialization.
pub fn parse_checklist_file(path: &Path) -> Result<RawDocument> {
    let content = fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|e| ReportError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
