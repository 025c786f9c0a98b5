use chrono::Utc;
use models::value::{self, Entity as ValueEntity};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{Set, Unchanged},
    DatabaseConnection, EntityTrait,
};

use crate::errors::ServiceError;
use crate::value::input::CreateValueInput;

/// Insert a new value after validation.
pub async fn insert_value(
    db: &DatabaseConnection,
    input: &CreateValueInput,
) -> Result<value::Model, ServiceError> {
    // field validation lives in models::value
    let created = value::create(db, &input.name, input.description.as_deref()).await?;
    Ok(created)
}

/// List all values; no ordering guarantee.
pub async fn list_values(db: &DatabaseConnection) -> Result<Vec<value::Model>, ServiceError> {
    let rows = ValueEntity::find().all(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Get a value by id; absent is a normal outcome.
pub async fn get_value(db: &DatabaseConnection, id: i64) -> Result<Option<value::Model>, ServiceError> {
    let found = ValueEntity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found)
}

/// Persist an in-memory mutation of an existing record, refreshing `updated_at`.
pub async fn save_value(db: &DatabaseConnection, value: value::Model) -> Result<value::Model, ServiceError> {
    let am = value::ActiveModel {
        id: Unchanged(value.id),
        name: Set(value.name),
        description: Set(value.description),
        created_at: Unchanged(value.created_at),
        updated_at: Set(Utc::now().into()),
    };
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Delete the given record.
pub async fn delete_value(db: &DatabaseConnection, value: value::Model) -> Result<(), ServiceError> {
    ValueEntity::delete_by_id(value.id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::MigratorTrait;

    async fn try_db() -> Option<DatabaseConnection> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return None;
        }
        if std::env::var("DATABASE_URL").is_err() {
            eprintln!("skip: DATABASE_URL missing");
            return None;
        }
        let db = match models::db::connect().await {
            Ok(db) => db,
            Err(e) => {
                eprintln!("skip: cannot connect to db: {e}");
                return None;
            }
        };
        if let Err(e) = migration::Migrator::up(&db, None).await {
            eprintln!("skip: migrate up failed: {e}");
            return None;
        }
        Some(db)
    }

    #[tokio::test]
    async fn value_crud_round_trip() -> Result<(), anyhow::Error> {
        let Some(db) = try_db().await else { return Ok(()) };

        let input = CreateValueInput { name: "db round trip".into(), description: Some("seed".into()) };
        let created = insert_value(&db, &input).await?;
        assert!(created.id > 0);
        assert_eq!(created.created_at, created.updated_at);

        let found = get_value(&db, created.id).await?.expect("present after insert");
        assert_eq!(found, created);

        let mut changed = found;
        changed.description = Some("changed".into());
        let saved = save_value(&db, changed).await?;
        assert_eq!(saved.name, "db round trip");
        assert_eq!(saved.description.as_deref(), Some("changed"));
        assert!(saved.updated_at >= saved.created_at);

        let all = list_values(&db).await?;
        assert!(all.iter().any(|v| v.id == created.id));

        delete_value(&db, saved).await?;
        assert!(get_value(&db, created.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn insert_rejects_empty_name() -> Result<(), anyhow::Error> {
        let Some(db) = try_db().await else { return Ok(()) };

        let input = CreateValueInput { name: String::new(), description: None };
        let err = insert_value(&db, &input).await.expect_err("must fail");
        assert!(matches!(err, ServiceError::Model(models::errors::ModelError::Validation(_))));
        Ok(())
    }
}
