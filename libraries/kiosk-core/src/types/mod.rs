//! Domain types

mod signal;
mod user;

pub use signal::VideoSignal;
pub use user::{NewUser, UserRecord, TIMESTAMP_FORMAT};
