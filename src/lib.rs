pub mod aggregator;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod handlers;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod reporter;
pub mod run;
pub mod workbook;

#[cfg(test)]
pub mod test_utils;

pub use aggregator::{build_checklist, Summary};
pub use cli::{Cli, Command, OutputFormat};
pub use error::{ReportError, Result};
pub use model::{Checklist, Finding, Severity, SeverityOverride, Status};
pub use reporter::{html::HtmlReporter, json::JsonReporter, Reporter};
