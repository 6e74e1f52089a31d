use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Read a JSON object table from `path`.
///
/// An absent or unreadable file is not fatal: the service starts with an
/// empty table and logs the condition. A file that exists but does not parse
/// is treated the same way; whatever was in memory before the call is gone.
pub fn load_table<V: DeserializeOwned>(path: &Path) -> HashMap<String, V> {
    let raw = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!("File {:?} not found. Starting with empty table.", path);
            return HashMap::new();
        }
        Err(e) => {
            tracing::error!("Failed to read {:?}: {}. Starting with empty table.", path, e);
            return HashMap::new();
        }
    };

    match serde_json::from_slice(&raw) {
        Ok(table) => table,
        Err(e) => {
            tracing::error!(
                "Failed to decode JSON in {:?}: {}. Starting with empty table.",
                path,
                e
            );
            HashMap::new()
        }
    }
}

/// Serialize `table` as pretty JSON and replace `path` wholesale.
///
/// Writes to a sibling temp file and renames over the target, so a crash
/// mid-write leaves the previous version intact. The caller decides whether
/// a failure is surfaced; in-memory state is never rolled back.
pub fn save_table<V: Serialize>(path: &Path, table: &HashMap<String, V>) -> io::Result<()> {
    let json = serde_json::to_vec_pretty(table)?;

    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, &json)?;
    fs::rename(&tmp_path, path)?;

    tracing::debug!("Saved {} entries to {:?}", table.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemRecord;
    use tempfile::tempdir;

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let mut table = HashMap::new();
        table.insert(
            "7".to_string(),
            ItemRecord {
                name: "pen".to_string(),
                price: 1.5,
            },
        );

        save_table(&path, &table).unwrap();
        assert!(path.exists());

        let loaded: HashMap<String, ItemRecord> = load_table(&path);
        assert_eq!(loaded, table);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.json");

        let loaded: HashMap<String, ItemRecord> = load_table(&path);
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, b"{ not json").unwrap();

        let loaded: HashMap<String, ItemRecord> = load_table(&path);
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.json");

        let mut first = HashMap::new();
        first.insert(
            "1".to_string(),
            ItemRecord {
                name: "book".to_string(),
                price: 9.99,
            },
        );
        save_table(&path, &first).unwrap();

        // Second save does not merge with what was on disk
        let mut second = HashMap::new();
        second.insert(
            "2".to_string(),
            ItemRecord {
                name: "lamp".to_string(),
                price: 20.0,
            },
        );
        save_table(&path, &second).unwrap();

        let loaded: HashMap<String, ItemRecord> = load_table(&path);
        assert_eq!(loaded, second);
        assert!(!loaded.contains_key("1"));
    }
}
