use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::errors::ServiceError;
use crate::value::input::{CreateValueInput, UpdateValueInput};
use crate::value::repository::ValueRepository;
use models::value;

/// Application service implementing the existence-guarded CRUD protocol.
///
/// Every operation other than `create` and `find_all` resolves its id to an
/// existing record or fails with `ServiceError::NotFound`; there is no
/// creation-on-update and no silent no-op on a missing id.
pub struct ValueService {
    repo: Arc<dyn ValueRepository>,
}

impl ValueService {
    pub fn new(repo: Arc<dyn ValueRepository>) -> Self {
        Self { repo }
    }

    /// Create a new value. Input is re-validated here so a caller bypassing
    /// the transport boundary still cannot persist an invalid record.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: CreateValueInput) -> Result<value::Model, ServiceError> {
        input.validate()?;
        info!("creating value");
        let created = self.repo.insert(&input).await?;
        info!(id = created.id, "created value");
        Ok(created)
    }

    pub async fn find_all(&self) -> Result<Vec<value::Model>, ServiceError> {
        let values = self.repo.list().await?;
        info!(count = values.len(), "fetched all values");
        Ok(values)
    }

    pub async fn find_one(&self, id: i64) -> Result<value::Model, ServiceError> {
        match self.repo.get_by_id(id).await? {
            Some(value) => Ok(value),
            None => {
                warn!(id, "value not found");
                Err(ServiceError::value_not_found(id))
            }
        }
    }

    /// Field-level merge: fields present in the input overwrite the resolved
    /// record, absent fields are left untouched.
    pub async fn update(&self, id: i64, input: UpdateValueInput) -> Result<value::Model, ServiceError> {
        input.validate()?;
        let mut value = self.find_one(id).await?;
        if let Some(name) = input.name {
            value.name = name;
        }
        if let Some(description) = input.description {
            value.description = Some(description);
        }
        let updated = self.repo.save(value).await?;
        info!(id, "updated value");
        Ok(updated)
    }

    /// Delete only a record that was resolved to exist within this call.
    pub async fn remove(&self, id: i64) -> Result<(), ServiceError> {
        let value = self.find_one(id).await?;
        self.repo.remove(value).await?;
        info!(id, "removed value");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryValueRepository;

    fn service() -> ValueService {
        ValueService::new(Arc::new(MemoryValueRepository::new()))
    }

    fn create_input(name: &str, description: Option<&str>) -> CreateValueInput {
        CreateValueInput { name: name.into(), description: description.map(Into::into) }
    }

    #[tokio::test]
    async fn create_assigns_id_and_equal_timestamps() {
        let svc = service();
        let created = svc
            .create(create_input("Test Value", Some("Test Description")))
            .await
            .expect("create");

        assert_eq!(created.id, 1);
        assert_eq!(created.name, "Test Value");
        assert_eq!(created.description.as_deref(), Some("Test Description"));
        assert_eq!(created.created_at, created.updated_at);
    }

    #[tokio::test]
    async fn create_without_description() {
        let svc = service();
        let created = svc.create(create_input("Test Value", None)).await.expect("create");
        assert_eq!(created.description, None);
    }

    #[tokio::test]
    async fn create_rejects_empty_name() {
        let svc = service();
        let err = svc.create(create_input("", None)).await.expect_err("must fail");
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(svc.find_all().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn find_one_returns_created_value() {
        let svc = service();
        let created = svc.create(create_input("Test Value", None)).await.expect("create");
        let found = svc.find_one(created.id).await.expect("find_one");
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn find_one_missing_fails_not_found_with_id_in_message() {
        let svc = service();
        let err = svc.find_one(999).await.expect_err("must fail");
        let ServiceError::NotFound(msg) = err else { panic!("expected NotFound") };
        assert_eq!(msg, "Value with ID 999 not found");
    }

    #[tokio::test]
    async fn update_merges_only_provided_fields() {
        let svc = service();
        let created = svc
            .create(create_input("Test Value", Some("Test Description")))
            .await
            .expect("create");

        let updated = svc
            .update(created.id, UpdateValueInput { name: None, description: Some("Updated Description".into()) })
            .await
            .expect("update");
        assert_eq!(updated.name, "Test Value");
        assert_eq!(updated.description.as_deref(), Some("Updated Description"));

        let updated = svc
            .update(created.id, UpdateValueInput { name: Some("Updated Value".into()), description: None })
            .await
            .expect("update");
        assert_eq!(updated.name, "Updated Value");
        assert_eq!(updated.description.as_deref(), Some("Updated Description"));
    }

    #[tokio::test]
    async fn update_keeps_timestamps_ordered() {
        let svc = service();
        let created = svc.create(create_input("Test Value", None)).await.expect("create");
        let updated = svc
            .update(created.id, UpdateValueInput { name: None, description: Some("d".into()) })
            .await
            .expect("update");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.created_at <= updated.updated_at);
    }

    #[tokio::test]
    async fn update_missing_fails_not_found() {
        let svc = service();
        let err = svc
            .update(999, UpdateValueInput { name: Some("Updated".into()), description: None })
            .await
            .expect_err("must fail");
        let ServiceError::NotFound(msg) = err else { panic!("expected NotFound") };
        assert!(msg.contains("999"));
    }

    #[tokio::test]
    async fn update_rejects_present_empty_name() {
        let svc = service();
        let created = svc.create(create_input("Test Value", None)).await.expect("create");
        let err = svc
            .update(created.id, UpdateValueInput { name: Some(String::new()), description: None })
            .await
            .expect_err("must fail");
        assert!(matches!(err, ServiceError::Validation(_)));

        // the target is untouched
        let found = svc.find_one(created.id).await.expect("find_one");
        assert_eq!(found.name, "Test Value");
    }

    #[tokio::test]
    async fn remove_missing_fails_not_found() {
        let svc = service();
        let err = svc.remove(999).await.expect_err("must fail");
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn find_all_is_idempotent_without_mutation() {
        let svc = service();
        svc.create(create_input("a", None)).await.expect("create");
        svc.create(create_input("b", None)).await.expect("create");

        let mut first = svc.find_all().await.expect("list");
        let mut second = svc.find_all().await.expect("list");
        first.sort_by_key(|v| v.id);
        second.sort_by_key(|v| v.id);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    // Full lifecycle: create -> partial update -> remove -> lookup fails.
    #[tokio::test]
    async fn lifecycle_create_update_remove() {
        let svc = service();
        let created = svc.create(create_input("A", None)).await.expect("create");
        assert_eq!(created.id, 1);
        assert_eq!(created.description, None);

        let updated = svc
            .update(1, UpdateValueInput { name: None, description: Some("d".into()) })
            .await
            .expect("update");
        assert_eq!(updated.name, "A");
        assert_eq!(updated.description.as_deref(), Some("d"));

        svc.remove(1).await.expect("remove");

        let ServiceError::NotFound(msg) = svc.find_one(1).await.expect_err("must fail") else {
            panic!("expected NotFound")
        };
        assert_eq!(msg, "Value with ID 1 not found");
    }
}
