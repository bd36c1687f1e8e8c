//! Atomic file writes and JSONL run-log I/O

use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Write data atomically using temp file + rename, so consumers never
/// observe a partially written artifact
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data)?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}

/// Append a JSON record to a JSONL file
pub fn append_jsonl<T: Serialize>(path: &Path, record: &T) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    let json = serde_json::to_string(record)?;
    writeln!(file, "{}", json)?;
    Ok(())
}

/// Read all records from a JSONL file, skipping blank and malformed lines
pub fn read_jsonl<T: for<'de> Deserialize<'de>>(path: &Path) -> std::io::Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Ok(record) = serde_json::from_str(&line) {
            records.push(record);
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RunRecord, TagRunStat};
    use chrono::Utc;

    #[test]
    fn test_atomic_write_creates_parents() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("nested").join("out.csv");

        atomic_write(&path, b"a,b\n1,2\n").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"a,b\n1,2\n");
        // No temp file left behind
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_atomic_write_replaces_existing() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("out.csv");

        atomic_write(&path, b"old").unwrap();
        atomic_write(&path, b"new").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn test_run_log_roundtrip() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("runs.jsonl");

        for processed in [1usize, 2] {
            let record = RunRecord {
                timestamp: Utc::now(),
                summary_rows: None,
                tags_processed: processed,
                tags_skipped: 0,
                tags: vec![TagRunStat {
                    tag: "My Account".to_string(),
                    questions: 3,
                    keywords: 2,
                }],
            };
            append_jsonl(&path, &record).unwrap();
        }

        let records: Vec<RunRecord> = read_jsonl(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].tags_processed, 2);
    }

    #[test]
    fn test_read_jsonl_skips_malformed() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("runs.jsonl");
        std::fs::write(&path, "{\"bad\n\n{\"tag\":\"x\",\"questions\":1,\"keywords\":0}\n").unwrap();

        let records: Vec<TagRunStat> = read_jsonl(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tag, "x");
    }

    #[test]
    fn test_read_jsonl_missing_file_is_empty() {
        let records: Vec<TagRunStat> =
            read_jsonl(Path::new("/nonexistent/runs.jsonl")).unwrap();
        assert!(records.is_empty());
    }
}
