//! CSV to multi-sheet spreadsheet workbook conversion.
//!
//! This is a separate surface from the checklist pipeline: each input CSV
//! becomes one worksheet, named after the file stem.

use crate::error::{ReportError, Result};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

/// Excel refuses worksheet names longer than this.
const MAX_SHEET_NAME: usize = 31;

/// One CSV file's content, ready to become a worksheet.
#[derive(Debug, Clone)]
pub struct SheetData {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Load one CSV file into sheet data. Any read or parse error fails the
/// whole file; the caller decides whether to skip it.
pub fn load_csv(path: &Path) -> Result<SheetData> {
    let display = path.display().to_string();
    let mut reader = csv::Reader::from_path(path).map_err(|source| ReportError::Csv {
        path: display.clone(),
        source,
    })?;

    let headers = reader
        .headers()
        .map_err(|source| ReportError::Csv {
            path: display.clone(),
            source,
        })?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| ReportError::Csv {
            path: display.clone(),
            source,
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(SheetData {
        name: sheet_name_for(path),
        headers,
        rows,
    })
}

/// Candidate worksheet name for a CSV path: the file stem with
/// Excel-forbidden characters replaced, truncated to the 31-char limit.
pub fn sheet_name_for(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Sheet".to_string());
    let cleaned: String = stem
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            other => other,
        })
        .take(MAX_SHEET_NAME)
        .collect();
    if cleaned.is_empty() {
        "Sheet".to_string()
    } else {
        cleaned
    }
}

fn unique_sheet_name(candidate: &str, used: &[String]) -> String {
    if !used.iter().any(|n| n == candidate) {
        return candidate.to_string();
    }
    for n in 2.. {
        let suffix = format!(" ({n})");
        let mut name: String = candidate
            .chars()
            .take(MAX_SHEET_NAME - suffix.len())
            .collect();
        name.push_str(&suffix);
        if !used.iter().any(|existing| *existing == name) {
            return name;
        }
    }
    unreachable!()
}

/// Build the workbook in memory and return its serialized bytes, one
/// worksheet per sheet with a bold header row.
pub fn build_workbook(sheets: &[SheetData]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let mut used_names: Vec<String> = Vec::new();

    for sheet in sheets {
        let name = unique_sheet_name(&sheet.name, &used_names);
        used_names.push(name.clone());

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&name)?;

        for (col, header) in sheet.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, header, &header_format)?;
        }
        for (row, cells) in sheet.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                worksheet.write_string((row + 1) as u32, col as u16, cell)?;
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_load_csv() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("inventory.csv");
        fs::write(&path, "host,ip,role\nweb01,10.0.0.5,Web Server\ndb01,10.0.0.9,Database\n")
            .unwrap();

        let sheet = load_csv(&path).unwrap();
        assert_eq!(sheet.name, "inventory");
        assert_eq!(sheet.headers, vec!["host", "ip", "role"]);
        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(sheet.rows[0][0], "web01");
    }

    #[test]
    fn test_load_csv_missing_file() {
        let err = load_csv(Path::new("/nonexistent/data.csv")).unwrap_err();
        assert!(matches!(err, ReportError::Csv { .. }));
    }

    #[test]
    fn test_load_csv_ragged_record_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.csv");
        fs::write(&path, "a,b\n1,2,3\n").unwrap();

        assert!(load_csv(&path).is_err());
    }

    #[test]
    fn test_sheet_name_sanitized_and_truncated() {
        assert_eq!(
            sheet_name_for(&PathBuf::from("scan[1]:ports.csv")),
            "scan_1__ports"
        );
        let long = sheet_name_for(&PathBuf::from(
            "a_very_long_export_name_that_exceeds_the_limit.csv",
        ));
        assert_eq!(long.chars().count(), 31);
    }

    #[test]
    fn test_unique_sheet_name_suffixes() {
        let used = vec!["ports".to_string(), "ports (2)".to_string()];
        assert_eq!(unique_sheet_name("ports", &used), "ports (3)");
        assert_eq!(unique_sheet_name("hosts", &used), "hosts");
    }

    #[test]
    fn test_build_workbook_produces_xlsx_bytes() {
        let sheets = vec![
            SheetData {
                name: "inventory".to_string(),
                headers: vec!["host".to_string(), "ip".to_string()],
                rows: vec![vec!["web01".to_string(), "10.0.0.5".to_string()]],
            },
            SheetData {
                name: "inventory".to_string(),
                headers: vec!["port".to_string()],
                rows: vec![],
            },
        ];
        let bytes = build_workbook(&sheets).unwrap();
        // XLSX is a ZIP container.
        assert_eq!(&bytes[..2], b"PK");
    }
}
