use crate::document::{self, Document};
use async_trait::async_trait;
use domain::{DocumentStore, DomainError, FieldMap};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Store backed by a single JSON file.
///
/// Every operation reads the whole file; every mutation rewrites it. Writers
/// are serialized so two mutations cannot interleave their read and write
/// halves, but the last one to run still wins for the whole document.
///
/// The lock covers a single store call only. Checks that span several calls,
/// such as a uniqueness scan followed by a save, need their own locking.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Opens the store, creating an empty data file if there is none.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        document::initialize(&path)?;
        info!(path = %path.display(), "using JSON data file");

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Document, DomainError> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || document::load(&path))
            .await
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?
    }

    async fn write(&self, document: Document) -> Result<(), DomainError> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || document::store(&path, &document))
            .await
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?
    }

    /// Read-modify-write under the writer lock. `change` reports whether it
    /// touched the document; the file is only rewritten when it did.
    async fn modify<F>(&self, change: F) -> Result<(), DomainError>
    where
        F: FnOnce(&mut Document) -> bool,
    {
        let _guard = self.write_lock.lock().await;
        let mut document = self.read().await?;
        if change(&mut document) {
            self.write(document).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn save(&self, kind: &str, id: &str, fields: FieldMap) -> Result<(), DomainError> {
        debug!(kind, id, "writing record");
        self.modify(|document| {
            document
                .entry(kind.to_string())
                .or_default()
                .insert(id.to_string(), fields);
            true
        })
        .await
    }

    async fn get(&self, kind: &str, id: &str) -> Result<Option<FieldMap>, DomainError> {
        let mut document = self.read().await?;
        Ok(document
            .get_mut(kind)
            .and_then(|collection| collection.remove(id)))
    }

    async fn get_all(&self, kind: &str) -> Result<Vec<FieldMap>, DomainError> {
        let mut document = self.read().await?;
        Ok(document
            .remove(kind)
            .map(|collection| collection.into_values().collect())
            .unwrap_or_default())
    }

    async fn delete(&self, kind: &str, id: &str) -> Result<(), DomainError> {
        debug!(kind, id, "removing record");
        self.modify(|document| {
            document
                .get_mut(kind)
                .and_then(|collection| collection.remove(id))
                .is_some()
        })
        .await
    }

    async fn clear(&self, kind: &str) -> Result<(), DomainError> {
        debug!(kind, "clearing collection");
        self.modify(|document| match document.get_mut(kind) {
            Some(collection) => {
                collection.clear();
                true
            }
            None => false,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn fields(name: &str) -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert("name".into(), json!(name));
        fields
    }

    #[tokio::test]
    async fn save_get_round_trip() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data.json")).unwrap();

        store.save("Amenity", "a1", fields("Wifi")).await.unwrap();
        assert_eq!(store.get("Amenity", "a1").await.unwrap(), Some(fields("Wifi")));
        assert_eq!(store.get("Amenity", "a2").await.unwrap(), None);
        assert_eq!(store.get("Country", "a1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_overwrites_whole_record() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data.json")).unwrap();

        let mut first = fields("Wifi");
        first.insert("extra".into(), json!(1));
        store.save("Amenity", "a1", first).await.unwrap();
        store.update("Amenity", "a1", fields("Pool")).await.unwrap();

        let stored = store.get("Amenity", "a1").await.unwrap().unwrap();
        assert_eq!(stored, fields("Pool"));
        assert!(!stored.contains_key("extra"));
    }

    #[tokio::test]
    async fn data_survives_reopening() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        {
            let store = JsonFileStore::new(&path).unwrap();
            store.save("Country", "c1", fields("France")).await.unwrap();
        }

        let store = JsonFileStore::new(&path).unwrap();
        assert_eq!(store.get_all("Country").await.unwrap(), vec![fields("France")]);

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["Country"]["c1"]["name"], "France");
    }

    #[tokio::test]
    async fn delete_missing_is_not_an_error() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data.json")).unwrap();

        store.save("Review", "r1", fields("ok")).await.unwrap();
        store.delete("Review", "r1").await.unwrap();
        store.delete("Review", "r1").await.unwrap();
        store.delete("Nothing", "x").await.unwrap();

        assert!(store.get_all("Review").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn clear_only_touches_one_kind() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("data.json")).unwrap();

        store.save("City", "c1", fields("Paris")).await.unwrap();
        store.save("City", "c2", fields("Lyon")).await.unwrap();
        store.save("Country", "k1", fields("France")).await.unwrap();

        store.clear("City").await.unwrap();
        assert!(store.get_all("City").await.unwrap().is_empty());
        assert_eq!(store.get_all("Country").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn corrupt_file_is_replaced_on_next_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "garbage").unwrap();

        let store = JsonFileStore::new(&path).unwrap();
        assert!(store.get_all("User").await.unwrap().is_empty());

        store.save("User", "u1", fields("Ada")).await.unwrap();
        assert_eq!(store.get_all("User").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn io_failures_reach_the_caller() {
        let dir = tempdir().unwrap();
        // a directory where the data file should be
        let store = JsonFileStore::new(dir.path()).unwrap();

        assert!(matches!(
            store.get_all("Amenity").await,
            Err(DomainError::IoError(_))
        ));
        assert!(matches!(
            store.get("Amenity", "a1").await,
            Err(DomainError::IoError(_))
        ));
        assert!(matches!(
            store.save("Amenity", "a1", fields("Wifi")).await,
            Err(DomainError::IoError(_))
        ));
        assert!(matches!(
            store.delete("Amenity", "a1").await,
            Err(DomainError::IoError(_))
        ));
    }

    #[tokio::test]
    async fn valid_collections_survive_a_save_next_to_unknown_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(
            &path,
            r#"{"Amenity":{"a1":{"id":"a1","name":"Wifi"}},"version":1}"#,
        )
        .unwrap();

        let store = JsonFileStore::new(&path).unwrap();
        assert_eq!(store.get_all("Amenity").await.unwrap().len(), 1);

        store.save("Amenity", "a2", fields("Pool")).await.unwrap();
        let kept = store.get("Amenity", "a1").await.unwrap().unwrap();
        assert_eq!(kept["name"], "Wifi");
        assert_eq!(store.get_all("Amenity").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn concurrent_saves_are_all_kept() {
        let dir = tempdir().unwrap();
        let store = std::sync::Arc::new(JsonFileStore::new(dir.path().join("data.json")).unwrap());

        let mut tasks = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                store
                    .save("Amenity", &format!("a{i}"), fields("x"))
                    .await
                    .unwrap();
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(store.get_all("Amenity").await.unwrap().len(), 16);
    }
}
