use crate::errors::DomainError;
use async_trait::async_trait;

/// One record as it sits in the store: string keys to scalar JSON values.
pub type FieldMap = serde_json::Map<String, serde_json::Value>;

/// Persistence port shared by every entity kind.
///
/// Records are addressed by `(kind, id)`. Implementations give
/// last-writer-wins semantics for the whole record: `save` replaces the
/// previous field-map, it never merges.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn save(&self, kind: &str, id: &str, fields: FieldMap) -> Result<(), DomainError>;

    async fn get(&self, kind: &str, id: &str) -> Result<Option<FieldMap>, DomainError>;

    /// Every record stored under `kind`, in no particular order.
    async fn get_all(&self, kind: &str) -> Result<Vec<FieldMap>, DomainError>;

    async fn update(&self, kind: &str, id: &str, fields: FieldMap) -> Result<(), DomainError> {
        self.save(kind, id, fields).await
    }

    /// Removing an id that is not stored is not an error.
    async fn delete(&self, kind: &str, id: &str) -> Result<(), DomainError>;

    async fn clear(&self, kind: &str) -> Result<(), DomainError>;
}
