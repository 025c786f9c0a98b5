use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::value::input::CreateValueInput;

/// Persistence contract for Value records.
///
/// An absent lookup is a normal outcome, not an error. Implementations assign
/// `id` and both timestamps on `insert` and refresh `updated_at` on `save`;
/// `remove` is idempotent at the store level (the existence guard lives in
/// the service).
#[async_trait]
pub trait ValueRepository: Send + Sync {
    async fn insert(&self, input: &CreateValueInput) -> Result<models::value::Model, ServiceError>;
    async fn list(&self) -> Result<Vec<models::value::Model>, ServiceError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<models::value::Model>, ServiceError>;
    async fn save(&self, value: models::value::Model) -> Result<models::value::Model, ServiceError>;
    async fn remove(&self, value: models::value::Model) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmValueRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ValueRepository for SeaOrmValueRepository {
    async fn insert(&self, input: &CreateValueInput) -> Result<models::value::Model, ServiceError> {
        crate::db::value_store::insert_value(&self.db, input).await
    }

    async fn list(&self) -> Result<Vec<models::value::Model>, ServiceError> {
        crate::db::value_store::list_values(&self.db).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<models::value::Model>, ServiceError> {
        crate::db::value_store::get_value(&self.db, id).await
    }

    async fn save(&self, value: models::value::Model) -> Result<models::value::Model, ServiceError> {
        crate::db::value_store::save_value(&self.db, value).await
    }

    async fn remove(&self, value: models::value::Model) -> Result<(), ServiceError> {
        crate::db::value_store::delete_value(&self.db, value).await
    }
}
