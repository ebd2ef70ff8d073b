//! Key-value store backends

use crate::storage::{write_atomic, KeyValueStore, StorageError};
use dashmap::DashMap;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Stores every key as `<root>/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at the platform data directory
    pub fn in_data_dir() -> Result<Self, StorageError> {
        Ok(Self::new(super::get_data_dir()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", encode_key(key)))
    }
}

/// Map a key onto a file stem, one-to-one.
///
/// ASCII alphanumerics, `-` and `_` pass through; every other byte becomes `%XX`.
fn encode_key(key: &str) -> String {
    let mut encoded = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }
    encoded
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path)?;
        let value: Value = serde_json::from_str(&json)?;
        tracing::debug!("Read key '{}' from {}", key, path.display());

        if value.is_null() {
            return Ok(None);
        }
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let json = serde_json::to_string_pretty(&value)?;
        write_atomic(&path, &json)?;

        tracing::debug!("Wrote key '{}' to {}", key, path.display());
        Ok(())
    }
}

/// Process-local store, used when no data directory is available.
///
/// A stored `null` reads back as an empty slot, as in `JsonFileStore`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: DashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self
            .slots
            .get(key)
            .map(|v| v.value().clone())
            .filter(|v| !v.is_null()))
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        self.slots.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Same set/get sequence, whatever the backend
    fn exercise_store(store: &dyn KeyValueStore) {
        store.set("user.name", json!("dotted")).unwrap();
        store.set("user_name", json!("underscored")).unwrap();
        store.set("user/name", json!("slashed")).unwrap();
        store.set(" user_name", json!("padded")).unwrap();
        store.set("nulled", Value::Null).unwrap();

        assert_eq!(store.get("user.name").unwrap(), Some(json!("dotted")));
        assert_eq!(store.get("user_name").unwrap(), Some(json!("underscored")));
        assert_eq!(store.get("user/name").unwrap(), Some(json!("slashed")));
        assert_eq!(store.get(" user_name").unwrap(), Some(json!("padded")));
        assert_eq!(store.get("nulled").unwrap(), None);
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn test_encode_key() {
        assert_eq!(encode_key("persona_config"), "persona_config");
        assert_eq!(encode_key("user.name"), "user%2Ename");
        assert_eq!(encode_key("../etc"), "%2E%2E%2Fetc");
        assert_eq!(encode_key("50%"), "50%25");
        assert_eq!(encode_key("é"), "%C3%A9");
    }

    #[test]
    fn test_distinct_keys_get_distinct_files() {
        assert_ne!(encode_key("user.name"), encode_key("user_name"));
        assert_ne!(encode_key("a%2E"), encode_key("a."));
        assert_ne!(encode_key(" a"), encode_key("a"));
    }

    #[test]
    fn test_backends_agree() {
        let dir = tempfile::tempdir().unwrap();
        exercise_store(&JsonFileStore::new(dir.path()));
        exercise_store(&MemoryStore::new());
    }

    #[test]
    fn test_file_store_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        store.set("slot", json!({"a": 1})).unwrap();
        store.set("slot", json!({"a": 2})).unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["slot.json".to_string()]);
    }

    #[test]
    fn test_file_store_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(store.get("nothing").unwrap().is_none());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested"));

        store.set("slot", json!({"a": 1})).unwrap();
        assert_eq!(store.get("slot").unwrap(), Some(json!({"a": 1})));
        assert!(dir.path().join("nested").join("slot.json").exists());
    }

    #[test]
    fn test_file_store_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        store.set("slot", json!("first")).unwrap();
        store.set("slot", json!("second")).unwrap();
        assert_eq!(store.get("slot").unwrap(), Some(json!("second")));
    }

    #[test]
    fn test_file_store_null_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        store.set("slot", Value::Null).unwrap();
        assert!(store.get("slot").unwrap().is_none());
    }

    #[test]
    fn test_file_store_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("slot.json"), "{not json").unwrap();
        let store = JsonFileStore::new(dir.path());

        assert!(matches!(store.get("slot"), Err(StorageError::Json(_))));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert!(store.get("slot").unwrap().is_none());
        store.set("slot", json!([1, 2])).unwrap();
        assert_eq!(store.get("slot").unwrap(), Some(json!([1, 2])));

        store.set("slot", Value::Null).unwrap();
        assert!(store.get("slot").unwrap().is_none());
    }
}
