//! Kiosk Server Library
//!
//! Collects user sign-ups, exports them as a spreadsheet, and relays video
//! control signals between connected screens.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod router;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::{cors_layer, create_router};
pub use services::{BroadcastHub, SpreadsheetExporter};
pub use state::AppState;
