use thiserror::Error;

/// Errors that can occur while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the database or creating a table failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
    /// Creating the session table failed.
    #[error("Failed to migrate session store: {0}")]
    SessionStore(String),
    /// Creating the temporary directory for a file database failed.
    #[error("Failed to create temporary database directory: {0}")]
    TempDir(#[from] std::io::Error),
}
