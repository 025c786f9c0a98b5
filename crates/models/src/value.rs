use chrono::Utc;
use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

/// The sole domain entity: a named record with an optional description and
/// audit timestamps. Wire form is camelCase to match the public API.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "values")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.is_empty() {
        return Err(errors::ModelError::Validation("name must be a non-empty string".into()));
    }
    Ok(())
}

/// Insert a new record; the store assigns `id` and both timestamps.
pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    description: Option<&str>,
) -> Result<Model, errors::ModelError> {
    validate_name(name)?;

    let now = Utc::now().into();
    let am = ActiveModel {
        name: Set(name.to_string()),
        description: Set(description.map(|d| d.to_string())),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_name_rejects_empty() {
        assert!(validate_name("").is_err());
        assert!(validate_name("a").is_ok());
    }

    #[test]
    fn wire_form_is_camel_case() {
        let m = Model {
            id: 1,
            name: "A".into(),
            description: None,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        };
        let json = serde_json::to_value(&m).expect("serialize");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
