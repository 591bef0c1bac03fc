//! Repository implementations for database access
//!
//! Each repository borrows the pool and issues one statement per call.
//! Constraint violations are mapped to typed `DbError` variants.

pub mod products;
pub mod seed;
pub mod tasks;
pub mod users;

pub use products::ProductRepo;
pub use seed::{SeedData, SeedRepo, SeedTask, Seeded};
pub use tasks::TaskRepo;
pub use users::UserRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("{resource} with {field} '{value}' already exists")]
    Conflict {
        resource: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("{field} {id} does not reference an existing record")]
    MissingReference { field: &'static str, id: i64 },
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}
