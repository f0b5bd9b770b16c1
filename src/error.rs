use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to read file: {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse checklist: {path} - {message}")]
    Parse { path: String, message: String },

    #[error("No input files could be loaded; nothing to report")]
    EmptyBatch,

    #[error("Failed to read CSV file: {path}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to build workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write output: {path}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;
