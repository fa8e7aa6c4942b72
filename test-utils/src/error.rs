use sea_orm::DbErr;
use thiserror::Error;

/// Errors that can occur during test environment setup.
#[derive(Debug, Error)]
pub enum TestError {
    /// Database connection or schema setup failed.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}
