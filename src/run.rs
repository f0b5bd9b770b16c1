//! Batch orchestration: load inputs, summarize, render, write.

use crate::aggregator::{build_checklist, Summary};
use crate::cli::OutputFormat;
use crate::discovery;
use crate::error::{ReportError, Result};
use crate::model::Checklist;
use crate::parser;
use crate::reporter::{html::HtmlReporter, json::JsonReporter, Report, Reporter};
use crate::workbook::{build_workbook, load_csv, SheetData};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// One skipped input file and the reason it was dropped.
#[derive(Debug)]
pub struct BatchWarning {
    pub path: PathBuf,
    pub message: String,
}

/// Result of a dashboard run, for the caller's terminal summary.
#[derive(Debug)]
pub struct DashboardOutcome {
    pub loaded: usize,
    pub skipped: usize,
    pub summary: Summary,
}

/// Result of a workbook run.
#[derive(Debug)]
pub struct WorkbookOutcome {
    pub sheets: usize,
    pub skipped: usize,
}

/// Parse every discovered file into a checklist.
///
/// A file that fails to parse is dropped with a warning and the batch
/// continues; a file contributes either all of its findings or none.
pub fn load_batch(paths: &[PathBuf]) -> (Vec<Checklist>, Vec<BatchWarning>) {
    let mut checklists = Vec::new();
    let mut warnings = Vec::new();

    for path in paths {
        match parser::parse_checklist_file(path) {
            Ok(doc) => {
                let file_name = file_name_of(path);
                let checklist = build_checklist(&file_name, &doc);
                debug!(
                    file = %path.display(),
                    findings = checklist.findings.len(),
                    "parsed checklist"
                );
                checklists.push(checklist);
            }
            Err(e) => {
                warn!(file = %path.display(), error = %e, "skipping unparseable checklist");
                warnings.push(BatchWarning {
                    path: path.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    (checklists, warnings)
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Run the full dashboard pipeline for the given input paths.
///
/// Warnings for skipped files go to stderr; an empty batch (nothing found or
/// nothing parseable) is a terminal condition and no report is written.
pub fn run_dashboard(
    paths: &[PathBuf],
    output: &Path,
    format: OutputFormat,
    title: &str,
) -> Result<DashboardOutcome> {
    let files = discovery::find_checklists(paths);
    if files.is_empty() {
        return Err(ReportError::EmptyBatch);
    }

    let (checklists, warnings) = load_batch(&files);
    for warning in &warnings {
        eprintln!(
            "Warning: skipping {}: {}",
            warning.path.display(),
            warning.message
        );
    }
    if checklists.is_empty() {
        return Err(ReportError::EmptyBatch);
    }

    let summary = Summary::from_checklists(&checklists);
    info!(
        checklists = checklists.len(),
        findings = summary.total_findings(),
        open = summary.status.open,
        "batch summarized"
    );

    let report = Report {
        title,
        generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        summary: &summary,
        checklists: &checklists,
    };
    let content = match format {
        OutputFormat::Html => HtmlReporter::new().report(&report),
        OutputFormat::Json => JsonReporter::new().report(&report),
    };
    write_atomic(output, content.as_bytes())?;

    Ok(DashboardOutcome {
        loaded: checklists.len(),
        skipped: warnings.len(),
        summary,
    })
}

/// Run the CSV-to-workbook pipeline for the given input paths.
pub fn run_workbook(paths: &[PathBuf], output: &Path) -> Result<WorkbookOutcome> {
    let files = discovery::find_csv_files(paths);
    if files.is_empty() {
        return Err(ReportError::EmptyBatch);
    }

    let mut sheets: Vec<SheetData> = Vec::new();
    let mut skipped = 0;
    for path in &files {
        match load_csv(path) {
            Ok(sheet) => {
                debug!(file = %path.display(), rows = sheet.rows.len(), "loaded CSV");
                sheets.push(sheet);
            }
            Err(e) => {
                warn!(file = %path.display(), error = %e, "skipping unreadable CSV");
                eprintln!("Warning: skipping {}: {}", path.display(), e);
                skipped += 1;
            }
        }
    }
    if sheets.is_empty() {
        return Err(ReportError::EmptyBatch);
    }

    let bytes = build_workbook(&sheets)?;
    write_atomic(output, &bytes)?;

    Ok(WorkbookOutcome {
        sheets: sheets.len(),
        skipped,
    })
}

/// Write output so no partial file is ever left behind: stage the content in
/// a temp file next to the destination, then rename it into place.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let write_error = |source: std::io::Error| ReportError::Write {
        path: path.display().to_string(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = tempfile::NamedTempFile::new_in(dir).map_err(write_error)?;
    staged.write_all(content).map_err(write_error)?;
    staged.flush().map_err(write_error)?;
    staged.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}
