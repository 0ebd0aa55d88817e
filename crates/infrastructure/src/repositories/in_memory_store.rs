use crate::document::Document;
use async_trait::async_trait;
use domain::{DocumentStore, DomainError, FieldMap};
use tokio::sync::RwLock;

/// Non-persistent store with the same contract as
/// [`JsonFileStore`](super::JsonFileStore). Contents vanish with the process.
#[derive(Default)]
pub struct InMemoryStore {
    document: RwLock<Document>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn save(&self, kind: &str, id: &str, fields: FieldMap) -> Result<(), DomainError> {
        self.document
            .write()
            .await
            .entry(kind.to_string())
            .or_default()
            .insert(id.to_string(), fields);
        Ok(())
    }

    async fn get(&self, kind: &str, id: &str) -> Result<Option<FieldMap>, DomainError> {
        Ok(self
            .document
            .read()
            .await
            .get(kind)
            .and_then(|collection| collection.get(id).cloned()))
    }

    async fn get_all(&self, kind: &str) -> Result<Vec<FieldMap>, DomainError> {
        Ok(self
            .document
            .read()
            .await
            .get(kind)
            .map(|collection| collection.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn delete(&self, kind: &str, id: &str) -> Result<(), DomainError> {
        if let Some(collection) = self.document.write().await.get_mut(kind) {
            collection.remove(id);
        }
        Ok(())
    }

    async fn clear(&self, kind: &str) -> Result<(), DomainError> {
        if let Some(collection) = self.document.write().await.get_mut(kind) {
            collection.clear();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn behaves_like_a_document_store() {
        let store = InMemoryStore::new();
        let mut fields = FieldMap::new();
        fields.insert("name".into(), json!("Pool"));

        store.save("Amenity", "a1", fields.clone()).await.unwrap();
        assert_eq!(store.get("Amenity", "a1").await.unwrap(), Some(fields));

        store.delete("Amenity", "a1").await.unwrap();
        store.delete("Amenity", "a1").await.unwrap();
        assert!(store.get_all("Amenity").await.unwrap().is_empty());
    }
}
