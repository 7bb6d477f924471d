//! Kiosk Storage
//!
//! `SQLite` record store for the kiosk backend.
//!
//! The whole schema is one `users` table, created on startup if it is missing.
//! There is no migration history: the table definition is the schema.
//!
//! # Example
//!
//! ```rust,no_run
//! use kiosk_core::{NewUser, UserStore};
//! use kiosk_storage::SqliteUserStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteUserStore::open("sqlite://users.db").await?;
//!
//! let id = store.create_user(NewUser::new("Ann", "ann@x.com")).await?;
//! let users = store.list_users().await?;
//! assert_eq!(users.last().map(|u| u.id), Some(id));
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod users;

pub use context::SqliteUserStore;
pub use error::StorageError;

/// Shorter name used by the server and CLI
pub type Database = SqliteUserStore;

use sqlx::sqlite::SqlitePool;

/// Create the schema if it does not exist yet
///
/// Safe to call on every startup.
pub async fn initialize_schema(pool: &SqlitePool) -> Result<(), StorageError> {
    sqlx::query(users::CREATE_TABLE).execute(pool).await?;
    tracing::debug!("users table created or already exists");
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://users.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("Creating pool with URL: {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    // Every connection to `:memory:` opens its own empty database
    let max_connections = if database_url.contains(":memory:") {
        1
    } else {
        5
    };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::debug!("Pool created");

    Ok(pool)
}
