use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::value::input::CreateValueInput;
use crate::value::repository::ValueRepository;
use models::value;

/// In-memory repository keyed by id.
///
/// Backs the HTTP integration tests and lightweight deployments where a
/// database is overkill. Ids come from a monotonic counter and are never
/// reused after a delete.
pub struct MemoryValueRepository {
    inner: Arc<RwLock<HashMap<i64, value::Model>>>,
    next_id: AtomicI64,
}

impl MemoryValueRepository {
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(HashMap::new())), next_id: AtomicI64::new(1) }
    }
}

impl Default for MemoryValueRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ValueRepository for MemoryValueRepository {
    async fn insert(&self, input: &CreateValueInput) -> Result<value::Model, ServiceError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now().into();
        let record = value::Model {
            id,
            name: input.name.clone(),
            description: input.description.clone(),
            created_at: now,
            updated_at: now,
        };
        let mut map = self.inner.write().await;
        map.insert(id, record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<value::Model>, ServiceError> {
        let map = self.inner.read().await;
        Ok(map.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<value::Model>, ServiceError> {
        let map = self.inner.read().await;
        Ok(map.get(&id).cloned())
    }

    async fn save(&self, mut value: value::Model) -> Result<value::Model, ServiceError> {
        value.updated_at = Utc::now().into();
        let mut map = self.inner.write().await;
        map.insert(value.id, value.clone());
        Ok(value)
    }

    async fn remove(&self, value: value::Model) -> Result<(), ServiceError> {
        let mut map = self.inner.write().await;
        map.remove(&value.id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str) -> CreateValueInput {
        CreateValueInput { name: name.into(), description: None }
    }

    #[tokio::test]
    async fn ids_are_sequential_and_never_reused() {
        let repo = MemoryValueRepository::new();
        let a = repo.insert(&input("a")).await.expect("insert a");
        let b = repo.insert(&input("b")).await.expect("insert b");
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);

        repo.remove(b).await.expect("remove b");
        let c = repo.insert(&input("c")).await.expect("insert c");
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn save_refreshes_updated_at_only() {
        let repo = MemoryValueRepository::new();
        let created = repo.insert(&input("a")).await.expect("insert");
        let mut changed = created.clone();
        changed.description = Some("d".into());

        let saved = repo.save(changed).await.expect("save");
        assert_eq!(saved.created_at, created.created_at);
        assert!(saved.updated_at >= created.updated_at);

        let stored = repo.get_by_id(created.id).await.expect("get").expect("present");
        assert_eq!(stored, saved);
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let repo = MemoryValueRepository::new();
        let created = repo.insert(&input("a")).await.expect("insert");
        repo.remove(created.clone()).await.expect("first remove");
        repo.remove(created.clone()).await.expect("second remove");
        assert!(repo.get_by_id(created.id).await.expect("get").is_none());
    }
}
