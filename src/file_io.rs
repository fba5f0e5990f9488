//! File I/O utilities with atomic writes
//!
//! Reads the JSON input files and writes downloaded files so a failed save
//! never leaves a half-written file behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::ExportError;

/// Read JSON from a file, returning an error if file doesn't exist
pub fn read_json_required<T, P>(path: P) -> Result<T, ExportError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExportError::Io(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| ExportError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| ExportError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write bytes to a file atomically (write to temp, then rename)
pub fn write_bytes_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<(), ExportError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ExportError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays atomic
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".part");
    let temp_path = path.with_file_name(temp_name);

    let file = File::create(&temp_path)
        .map_err(|e| ExportError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(bytes)
        .map_err(|e| ExportError::Io(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| ExportError::Io(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| ExportError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ExportError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let result: Result<Vec<Record>, _> = read_json_required(&path);
        assert!(matches!(result, Err(ExportError::Io(_))));
    }

    #[test]
    fn test_read_records() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.json");
        fs::write(&path, r#"[{"date":"2024-01-01","amount":5}]"#).unwrap();

        let records: Vec<Record> = read_json_required(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text("amount").as_deref(), Some("5"));
    }

    #[test]
    fn test_read_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "[{").unwrap();

        let result: Result<Vec<Record>, _> = read_json_required(&path);
        assert!(matches!(result, Err(ExportError::Json(_))));
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        write_bytes_atomic(&path, b"a,b").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"a,b");
        assert!(!temp_dir.path().join("out.csv.part").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("out.csv");

        write_bytes_atomic(&path, b"x").unwrap();
        assert!(path.exists());
    }
}
