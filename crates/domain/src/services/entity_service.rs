use crate::entities::Entity;
use crate::errors::DomainError;
use crate::repositories::DocumentStore;
use std::marker::PhantomData;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Typed access to the records of one entity kind.
///
/// Nothing is cached: every lookup goes back to the store and hands out a
/// freshly decoded record.
pub struct EntityService<E> {
    store: Arc<dyn DocumentStore>,
    save_lock: Mutex<()>,
    _kind: PhantomData<fn() -> E>,
}

impl<E: Entity> EntityService<E> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            save_lock: Mutex::new(()),
            _kind: PhantomData,
        }
    }

    /// Persist the whole record under its id, refreshing `updated_at`.
    ///
    /// Kinds with unique fields are checked against every other stored
    /// record first; on a conflict nothing is written. The check and the
    /// write hold this service's save lock, so saves through one service
    /// cannot both pass the check with the same value.
    pub async fn save(&self, entity: &mut E) -> Result<(), DomainError> {
        let _guard = if E::HAS_UNIQUE_FIELDS {
            let guard = self.save_lock.lock().await;
            self.ensure_unique(entity).await?;
            Some(guard)
        } else {
            None
        };

        entity.meta_mut().touch();
        let fields = entity.to_fields()?;
        self.store.save(E::KIND, entity.id(), fields).await?;

        debug!(kind = E::KIND, id = entity.id(), "saved record");
        Ok(())
    }

    pub async fn delete(&self, entity: &E) -> Result<(), DomainError> {
        self.delete_by_id(entity.id()).await
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<(), DomainError> {
        self.store.delete(E::KIND, id).await?;
        debug!(kind = E::KIND, id, "deleted record");
        Ok(())
    }

    pub async fn get(&self, id: &str) -> Result<Option<E>, DomainError> {
        match self.store.get(E::KIND, id).await? {
            Some(fields) => Ok(Some(E::from_fields(fields)?)),
            None => Ok(None),
        }
    }

    /// Like [`get`](Self::get), but absence is a [`DomainError::NotFound`].
    pub async fn require(&self, id: &str) -> Result<E, DomainError> {
        self.get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(E::KIND, id))
    }

    pub async fn get_all(&self) -> Result<Vec<E>, DomainError> {
        self.store
            .get_all(E::KIND)
            .await?
            .into_iter()
            .map(E::from_fields)
            .collect()
    }

    /// Drop every stored record of this kind.
    pub async fn clear(&self) -> Result<(), DomainError> {
        self.store.clear(E::KIND).await
    }

    async fn ensure_unique(&self, entity: &E) -> Result<(), DomainError> {
        for stored in self.get_all().await? {
            if stored.id() == entity.id() {
                continue;
            }
            if let Some(conflict) = entity.unique_conflict(&stored) {
                return Err(conflict);
            }
        }
        Ok(())
    }
}
