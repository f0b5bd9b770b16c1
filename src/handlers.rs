//! Command handlers mapping pipeline results onto process exit codes.

use crate::cli::OutputFormat;
use crate::error::ReportError;
use crate::run::{run_dashboard, run_workbook};
use colored::Colorize;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Handle the `dashboard` subcommand.
pub fn handle_dashboard(
    paths: &[PathBuf],
    output: &Path,
    format: OutputFormat,
    title: &str,
) -> ExitCode {
    match run_dashboard(paths, output, format, title) {
        Ok(outcome) => {
            let open = outcome.summary.status.open;
            let open_label = if open > 0 {
                open.to_string().red().bold()
            } else {
                open.to_string().green().bold()
            };
            println!(
                "{} {} ({} checklist(s), {} finding(s), {} open{})",
                "Report written:".green().bold(),
                output.display(),
                outcome.loaded,
                outcome.summary.total_findings(),
                open_label,
                if outcome.skipped > 0 {
                    format!(", {} file(s) skipped", outcome.skipped)
                } else {
                    String::new()
                },
            );
            ExitCode::SUCCESS
        }
        Err(e) => fail(e),
    }
}

/// Handle the `workbook` subcommand.
pub fn handle_workbook(paths: &[PathBuf], output: &Path) -> ExitCode {
    match run_workbook(paths, output) {
        Ok(outcome) => {
            println!(
                "{} {} ({} sheet(s){})",
                "Workbook written:".green().bold(),
                output.display(),
                outcome.sheets,
                if outcome.skipped > 0 {
                    format!(", {} file(s) skipped", outcome.skipped)
                } else {
                    String::new()
                },
            );
            ExitCode::SUCCESS
        }
        Err(e) => fail(e),
    }
}

fn fail(error: ReportError) -> ExitCode {
    match error {
        ReportError::EmptyBatch => {
            eprintln!("{}", error);
            ExitCode::from(1)
        }
        other => {
            eprintln!("Error: {}", other);
            if let Some(source) = other.source() {
                eprintln!("  caused by: {}", source);
            }
            ExitCode::from(2)
        }
    }
}
