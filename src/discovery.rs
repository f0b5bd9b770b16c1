//! Input file discovery.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect checklist documents from the given paths.
///
/// Files are taken as-is; directories are walked recursively for `.cklb` and
/// `.json` entries. Results are sorted and deduplicated so the batch order is
/// reproducible regardless of filesystem iteration order.
pub fn find_checklists(paths: &[PathBuf]) -> Vec<PathBuf> {
    collect(paths, &["cklb", "json"])
}

/// Collect CSV inputs for the workbook subcommand.
pub fn find_csv_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    collect(paths, &["csv"])
}

fn collect(paths: &[PathBuf], extensions: &[&str]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            for entry in WalkDir::new(path)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
            {
                if has_extension(entry.path(), extensions) {
                    files.push(entry.path().to_path_buf());
                }
            }
        }
    }
    files.sort();
    files.dedup();
    files
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .is_some_and(|e| extensions.contains(&e.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_checklists_in_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.cklb"), "{}").unwrap();
        fs::write(temp_dir.path().join("a.CKLB"), "{}").unwrap();
        fs::write(temp_dir.path().join("c.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();

        let found = find_checklists(&[temp_dir.path().to_path_buf()]);
        let names: Vec<String> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.CKLB", "b.cklb", "c.json"]);
    }

    #[test]
    fn test_find_checklists_recurses() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("scans").join("2026-08");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("host.cklb"), "{}").unwrap();

        let found = find_checklists(&[temp_dir.path().to_path_buf()]);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_explicit_file_taken_as_is() {
        let temp_dir = TempDir::new().unwrap();
        let odd = temp_dir.path().join("export.dat");
        fs::write(&odd, "{}").unwrap();

        // A file named directly is not extension-filtered.
        let found = find_checklists(&[odd.clone()]);
        assert_eq!(found, vec![odd]);
    }

    #[test]
    fn test_duplicate_paths_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("host.cklb");
        fs::write(&file, "{}").unwrap();

        let found = find_checklists(&[file.clone(), file.clone()]);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_find_csv_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("inventory.csv"), "a,b\n1,2\n").unwrap();
        fs::write(temp_dir.path().join("report.html"), "x").unwrap();

        let found = find_csv_files(&[temp_dir.path().to_path_buf()]);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_nonexistent_path_yields_nothing() {
        let found = find_checklists(&[PathBuf::from("/nonexistent/dir/12345")]);
        assert!(found.is_empty());
    }
}
