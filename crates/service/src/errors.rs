use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    /// Standard message for a missing id; the id stays directly observable
    /// by callers and tests.
    pub fn value_not_found(id: i64) -> Self {
        Self::NotFound(format!("Value with ID {id} not found"))
    }
}
