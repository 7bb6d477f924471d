//! Kiosk Core
//!
//! Shared types, traits, and error handling for the kiosk backend.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `UserRecord`, `NewUser`, `VideoSignal`
//! - **Core Traits**: `UserStore`, the contract every record store implements
//! - **Error Handling**: Unified `KioskError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use kiosk_core::types::{NewUser, VideoSignal};
//!
//! let user = NewUser::new("Ann", "ann@x.com");
//! assert_eq!(user.name.as_deref(), Some("Ann"));
//!
//! let signal = VideoSignal::play(7);
//! assert_eq!(signal.to_frame().unwrap(), r#"{"event":"play-video","data":7}"#);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{KioskError, Result};
pub use storage::UserStore;
pub use types::{NewUser, UserRecord, VideoSignal};
