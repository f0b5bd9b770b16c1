use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "stig-report",
    version,
    about = "STIG checklist dashboard and CSV workbook generator",
    long_about = "stig-report aggregates STIG checklist results into an interactive HTML \
                  dashboard (or JSON summary), and converts CSV exports into a multi-sheet \
                  spreadsheet workbook."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a dashboard from STIG checklist files
    Dashboard {
        /// Checklist files, or directories to scan for .cklb/.json documents
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output file
        #[arg(short, long, default_value = "stig-dashboard.html")]
        output: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,

        /// Report title
        #[arg(long, default_value = "STIG Compliance Dashboard")]
        title: String,
    },

    /// Convert CSV files into a multi-sheet spreadsheet workbook
    Workbook {
        /// CSV files, or directories to scan for .csv inputs
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output workbook
        #[arg(short, long, default_value = "report.xlsx")]
        output: PathBuf,
    },
}
