/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Record store failure; displays the store's own message
    #[error("{0}")]
    Storage(#[from] kiosk_core::KioskError),

    #[error("Export error: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<kiosk_storage::StorageError> for ServerError {
    fn from(err: kiosk_storage::StorageError) -> Self {
        ServerError::Storage(err.into())
    }
}

/// Failures go back as plain text carrying the raw message
impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match self {
            ServerError::BadRequest(ref msg) => {
                tracing::warn!("Bad request: {}", msg);
                StatusCode::BAD_REQUEST
            }
            ServerError::Storage(ref e) => {
                tracing::error!("Storage error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ServerError::Export(ref e) => {
                tracing::error!("Export error: {:?}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ServerError::Io(ref e) => {
                tracing::error!("IO error: {:?}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
