//! User record queries

use crate::{error::Result, StorageError};
use kiosk_core::types::{NewUser, UserRecord};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// Schema of the only table
pub const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    email TEXT,
    timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
)";

/// Insert a user and return the assigned id
///
/// `id` and `timestamp` come from the table defaults. Absent fields are
/// stored as NULL.
pub async fn create(pool: &SqlitePool, user: &NewUser) -> Result<i64> {
    let result = sqlx::query("INSERT INTO users (name, email) VALUES (?, ?)")
        .bind(user.name.as_deref())
        .bind(user.email.as_deref())
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Get all users in insertion order
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<UserRecord>> {
    let rows = sqlx::query("SELECT id, name, email, timestamp FROM users ORDER BY id")
        .fetch_all(pool)
        .await?;

    rows.iter().map(from_row).collect()
}

/// Count stored users
pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

fn from_row(row: &SqliteRow) -> Result<UserRecord> {
    let id: i64 = row.try_get("id")?;
    let timestamp: Option<String> = row.try_get("timestamp")?;

    Ok(UserRecord {
        id,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        timestamp: timestamp
            .ok_or_else(|| StorageError::MalformedRow(format!("user {} has no timestamp", id)))?,
    })
}
