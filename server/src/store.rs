use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;
use tokio::fs;

/// A stored record. Tasks carry whatever fields the caller sent, and
/// user updates may introduce new keys, so records are plain JSON maps.
pub type Record = Map<String, Value>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("collection i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("collection holds invalid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Storage seam for the collection services. The file-backed store is
/// the real implementation; tests inject an in-memory one.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    async fn load(&self, collection: &str) -> Result<Vec<Record>, StoreError>;
    async fn save(&self, collection: &str, records: &[Record]) -> Result<(), StoreError>;
}

/// One JSON-array file per collection under a fixed directory.
/// Every load reads the whole file; every save rewrites it in one shot.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Remembers `dir` and creates it if absent.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(FileStore { dir })
    }

    fn file_path(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("{collection}.json"))
    }
}

#[async_trait]
impl CollectionStore for FileStore {
    async fn load(&self, collection: &str) -> Result<Vec<Record>, StoreError> {
        let path = self.file_path(collection);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            // A collection that was never written to is empty, not broken.
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::warn!("{} not found, treating collection as empty", path.display());
                return Ok(Vec::new());
            }
            Err(err) => {
                log::error!("failed to read {}: {err}", path.display());
                return Err(err.into());
            }
        };
        serde_json::from_slice(&bytes).map_err(|err| {
            log::error!("failed to parse {}: {err}", path.display());
            err.into()
        })
    }

    async fn save(&self, collection: &str, records: &[Record]) -> Result<(), StoreError> {
        let path = self.file_path(collection);
        let json = serde_json::to_vec_pretty(records)?;
        fs::write(&path, json).await.map_err(|err| {
            log::error!("failed to write {}: {err}", path.display());
            err.into()
        })
    }
}

/// Shallow merge: every key in `fields` lands in `record`, new keys are
/// added, existing ones overwritten, keys absent from `fields` untouched.
pub fn merge(record: &mut Record, fields: Record) {
    for (key, value) in fields {
        record.insert(key, value);
    }
}

/// String-typed field access, used by the id/email scans.
pub fn str_field<'a>(record: &'a Record, key: &str) -> Option<&'a str> {
    record.get(key).and_then(Value::as_str)
}

#[cfg(test)]
pub use tests::MemoryStore;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory stand-in for `FileStore` used by the service tests.
    pub struct MemoryStore {
        collections: Mutex<HashMap<String, Vec<Record>>>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            MemoryStore {
                collections: Mutex::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl CollectionStore for MemoryStore {
        async fn load(&self, collection: &str) -> Result<Vec<Record>, StoreError> {
            let collections = self.collections.lock().unwrap();
            Ok(collections.get(collection).cloned().unwrap_or_default())
        }

        async fn save(&self, collection: &str, records: &[Record]) -> Result<(), StoreError> {
            let mut collections = self.collections.lock().unwrap();
            collections.insert(collection.to_string(), records.to_vec());
            Ok(())
        }
    }

    fn record(value: serde_json::Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[tokio::test]
    async fn load_returns_empty_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        let records = store.load("tasks").await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        let records = vec![record(json!({"id": "1", "title": "write docs"}))];
        store.save("tasks", &records).await.unwrap();

        let loaded = store.load("tasks").await.unwrap();
        assert_eq!(loaded, records);
    }

    #[tokio::test]
    async fn save_writes_pretty_printed_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store
            .save("tasks", &[record(json!({"id": "1"}))])
            .await
            .unwrap();

        let text = std::fs::read_to_string(dir.path().join("tasks.json")).unwrap();
        assert!(text.contains('\n'), "expected pretty-printed output");
        assert!(text.trim_start().starts_with('['));
    }

    #[tokio::test]
    async fn load_reports_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        std::fs::write(dir.path().join("tasks.json"), "not json").unwrap();

        let err = store.load("tasks").await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }

    #[test]
    fn merge_overwrites_and_adds_without_touching_the_rest() {
        let mut stored = record(json!({"id": "1", "title": "old", "done": false}));
        merge(&mut stored, record(json!({"title": "new", "owner": "ana"})));

        assert_eq!(stored, record(json!({
            "id": "1",
            "title": "new",
            "done": false,
            "owner": "ana"
        })));
    }
}
