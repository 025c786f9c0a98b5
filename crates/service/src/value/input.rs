use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Input for creating a value; `id` and timestamps are assigned by the store.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CreateValueInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateValueInput {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.name.is_empty() {
            return Err(ServiceError::Validation("name must be a non-empty string".into()));
        }
        Ok(())
    }
}

/// Partial update: a field left out keeps the stored value, a field present
/// overwrites it (an empty-string description overwrites too).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct UpdateValueInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UpdateValueInput {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if let Some(name) = &self.name {
            if name.is_empty() {
                return Err(ServiceError::Validation("name must be a non-empty string".into()));
            }
        }
        Ok(())
    }
}
