use crate::users;
use async_trait::async_trait;
use kiosk_core::{
    error::Result,
    storage::UserStore,
    types::{NewUser, UserRecord},
};
use sqlx::SqlitePool;

/// Record store backed by a `SQLite` file
#[derive(Debug, Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` and make sure the schema exists
    pub async fn open(database_url: &str) -> std::result::Result<Self, crate::StorageError> {
        let pool = crate::create_pool(database_url).await?;
        crate::initialize_schema(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection
    ///
    /// Calls made after this fail with a storage error.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn create_user(&self, user: NewUser) -> Result<i64> {
        Ok(users::create(&self.pool, &user).await?)
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        Ok(users::get_all(&self.pool).await?)
    }

    async fn count_users(&self) -> Result<i64> {
        Ok(users::count(&self.pool).await?)
    }
}
