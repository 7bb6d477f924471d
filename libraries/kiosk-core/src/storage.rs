//! Storage trait for user records

use crate::error::Result;
use crate::types::{NewUser, UserRecord};
use async_trait::async_trait;

/// Record store holding submitted users
///
/// Records are create-only: nothing in this contract updates or deletes a row.
/// Implementations assign `id` and `timestamp` themselves.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new record and return its assigned id
    ///
    /// On error no record is persisted.
    async fn create_user(&self, user: NewUser) -> Result<i64>;

    /// All records in insertion order
    async fn list_users(&self) -> Result<Vec<UserRecord>>;

    /// Number of stored records
    async fn count_users(&self) -> Result<i64> {
        let users = self.list_users().await?;
        Ok(users.len() as i64)
    }
}
