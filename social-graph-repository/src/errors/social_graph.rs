use social_graph_shared::PlanError;
use thiserror::Error;

/// Represents errors that can occur within the social graph repository.
///
/// Lookups that match nothing are not errors; they produce empty results.
#[derive(Debug, Error)]
pub enum SocialGraphRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid records: {0}")]
    InvalidRecords(#[from] PlanError),
}
