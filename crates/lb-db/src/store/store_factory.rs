use crate::{DbError, Result as DbErrorResult, SCHEMA_VERSION, SchemaManager, StoreHandle};

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;

const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens handles to the credential store, upgrading its schema on the way
/// when the installed version is behind.
///
/// Concurrent `open()` calls are independent. SQLite's write lock
/// serializes upgrade passes; the version is re-read once the lock is held
/// so a store upgraded by another caller in the meantime is left alone.
#[derive(Debug, Clone)]
pub struct StoreFactory {
    path: PathBuf,
    target_version: i64,
    busy_timeout: Duration,
}

impl StoreFactory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            target_version: SCHEMA_VERSION,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    pub fn with_target_version(mut self, version: i64) -> Self {
        self.target_version = version;
        self
    }

    /// How long to wait on a lock held by another connection
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn target_version(&self) -> i64 {
        self.target_version
    }

    /// Open the store, creating and upgrading it as needed.
    ///
    /// Every failure comes back as an error: `StoreUnavailable` when the
    /// file cannot be opened or is newer than this code, `Migration` when an
    /// upgrade step fails.
    pub async fn open(&self) -> DbErrorResult<StoreHandle> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                DbError::unavailable(format!(
                    "failed to create store directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true)
            .busy_timeout(self.busy_timeout);

        let mut conn = SqliteConnection::connect_with(&options)
            .await
            .map_err(|e| {
                DbError::unavailable(format!("failed to open {}: {}", self.path.display(), e))
            })?;

        let installed = SchemaManager::installed_version(&mut conn)
            .await
            .map_err(|e| DbError::unavailable(format!("unreadable store header: {}", e)))?;

        let version = if installed > self.target_version {
            warn!(
                "Credential store is at v{} but this build expects v{}",
                installed, self.target_version
            );
            return Err(DbError::unavailable(format!(
                "version conflict: store is v{}, requested v{}",
                installed, self.target_version
            )));
        } else if installed < self.target_version {
            self.upgrade(&mut conn).await?
        } else {
            installed
        };

        debug!(
            "Opened credential store {} at v{}",
            self.path.display(),
            version
        );

        Ok(StoreHandle::new(conn, version))
    }

    async fn upgrade(&self, conn: &mut SqliteConnection) -> DbErrorResult<i64> {
        sqlx::query("BEGIN IMMEDIATE")
            .execute(&mut *conn)
            .await
            .map_err(|e| DbError::unavailable(format!("failed to lock store for upgrade: {}", e)))?;

        let outcome = self.upgrade_locked(conn).await;

        match outcome {
            Ok(version) => {
                sqlx::query("COMMIT").execute(&mut *conn).await?;
                Ok(version)
            }
            Err(e) => {
                if let Err(rollback) = sqlx::query("ROLLBACK").execute(&mut *conn).await {
                    warn!("Rollback after failed upgrade also failed: {}", rollback);
                }
                Err(e)
            }
        }
    }

    async fn upgrade_locked(&self, conn: &mut SqliteConnection) -> DbErrorResult<i64> {
        let installed = SchemaManager::installed_version(conn).await?;

        if installed >= self.target_version {
            debug!(
                "Credential store already upgraded to v{} by another connection",
                installed
            );
            return Ok(installed);
        }

        SchemaManager::upgrade(conn, installed, self.target_version).await?;

        Ok(self.target_version)
    }
}
