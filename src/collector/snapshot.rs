//! Snapshot persistence for fetched posts
//!
//! Two JSON files mirror the two views the pipeline consumes: a plain list
//! of post texts, and the full records with ids and timestamps.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::Result;
use crate::models::PostRecord;

/// Save post texts as a JSON array
pub fn save_texts(texts: &[String], path: impl AsRef<Path>) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, texts)?;
    Ok(())
}

/// Load post texts from a JSON array
pub fn load_texts(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Save full post records as JSON
pub fn save_records(records: &[PostRecord], path: impl AsRef<Path>) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}

/// Load full post records from JSON
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<PostRecord>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    #[test]
    fn test_texts_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("texts.json");

        let texts = vec!["first post".to_string(), "second post".to_string()];
        save_texts(&texts, &path).unwrap();

        assert_eq!(load_texts(&path).unwrap(), texts);
    }

    #[test]
    fn test_records_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("records.json");

        let records = vec![PostRecord {
            id: 7,
            text: "hello".to_string(),
            created_at: Utc.with_ymd_and_hms(2018, 10, 10, 20, 19, 24).unwrap(),
            author: "someone".to_string(),
        }];
        save_records(&records, &path).unwrap();

        let loaded = load_records(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, 7);
        assert_eq!(loaded[0].created_at, records[0].created_at);
    }

    #[test]
    fn test_missing_snapshot_is_io_error() {
        let result = load_texts("/nonexistent/snapshot.json");
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }
}
