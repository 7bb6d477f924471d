/// Core error types for the kiosk backend
use thiserror::Error;

/// Result type alias using `KioskError`
pub type Result<T> = std::result::Result<T, KioskError>;

/// Core error type for the kiosk backend
#[derive(Error, Debug)]
pub enum KioskError {
    /// Storage-related errors (insert/read failures, unavailable database)
    ///
    /// Displays the raw message so it can be handed back to HTTP callers as-is.
    #[error("{0}")]
    Storage(String),

    /// Real-time frame (de)serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl KioskError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
