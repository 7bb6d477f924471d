/// User record domain types
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format of the store-assigned `timestamp` column (SQLite `CURRENT_TIMESTAMP`, UTC)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A stored user entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Store-assigned identifier, never reused
    pub id: i64,

    /// Free-form name; `None` when the submission omitted it
    pub name: Option<String>,

    /// Free-form email; `None` when the submission omitted it
    pub email: Option<String>,

    /// Creation time as written by the store
    pub timestamp: String,
}

impl UserRecord {
    /// Parse `timestamp` into a date-time
    ///
    /// Returns `None` if the store wrote something other than [`TIMESTAMP_FORMAT`].
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT).ok()
    }
}

/// Submission for a new record
///
/// Both fields are optional: presence is the only check made anywhere, and an
/// absent field is stored as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Submitted name
    #[serde(default)]
    pub name: Option<String>,

    /// Submitted email
    #[serde(default)]
    pub email: Option<String>,
}

impl NewUser {
    /// Create a submission with both fields present
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}
