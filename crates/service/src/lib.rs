//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod db;
pub mod errors;
pub mod storage;
pub mod value;
