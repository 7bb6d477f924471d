/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// A row that does not match the `users` table layout
    #[error("Malformed row: {0}")]
    MalformedRow(String),
}

impl From<StorageError> for kiosk_core::KioskError {
    /// Database failures keep SQLite's own message, e.g. `database is locked`
    fn from(err: StorageError) -> Self {
        match &err {
            StorageError::Database(sqlx_err) => match sqlx_err.as_database_error() {
                Some(db_err) => kiosk_core::KioskError::storage(db_err.message()),
                None => kiosk_core::KioskError::storage(sqlx_err.to_string()),
            },
            StorageError::MalformedRow(_) => kiosk_core::KioskError::storage(err.to_string()),
        }
    }
}
