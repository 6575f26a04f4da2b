//! Durable structure of the credential store and its in-place upgrades.
//!
//! The installed version is kept in SQLite's `user_version` header field.
//! A brand-new file reports version 0. Each upgrade step only creates
//! objects that are missing, so replaying a step against a store that
//! already has them leaves every record in place.
//!
//! Steps are applied by the caller inside its write transaction: if any
//! statement fails, the transaction rolls back and the version stays put.

use crate::{DbError, Result as DbErrorResult};

use log::{debug, info};
use sqlx::SqliteConnection;

/// Table holding identity records
pub const STORE_NAME: &str = "user_store";

/// Version the code expects the store to be at
pub const SCHEMA_VERSION: i64 = 1;

struct SchemaStep {
    version: i64,
    statements: &'static [&'static str],
}

const STEPS: &[SchemaStep] = &[SchemaStep {
    version: 1,
    statements: &[
        r#"
            CREATE TABLE IF NOT EXISTS user_store (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL,
                access_token TEXT NOT NULL,
                refresh_token TEXT NOT NULL
            )
        "#,
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_user_store_username ON user_store (username)",
        "CREATE INDEX IF NOT EXISTS idx_user_store_access_token ON user_store (access_token)",
        "CREATE INDEX IF NOT EXISTS idx_user_store_refresh_token ON user_store (refresh_token)",
    ],
}];

pub struct SchemaManager;

impl SchemaManager {
    /// Highest version any upgrade step can reach.
    pub fn latest_version() -> i64 {
        STEPS.last().map(|step| step.version).unwrap_or(0)
    }

    /// Reads the version recorded in the store header (0 for a new store).
    pub async fn installed_version(conn: &mut SqliteConnection) -> DbErrorResult<i64> {
        let version = sqlx::query_scalar::<_, i64>("PRAGMA user_version")
            .fetch_one(&mut *conn)
            .await?;

        Ok(version)
    }

    /// Brings the structure from `installed` up to `target`.
    ///
    /// Must run inside a write transaction owned by the caller.
    pub async fn upgrade(
        conn: &mut SqliteConnection,
        installed: i64,
        target: i64,
    ) -> DbErrorResult<()> {
        if target > Self::latest_version() {
            return Err(DbError::migration(format!(
                "no upgrade path to v{} (latest known is v{})",
                target,
                Self::latest_version()
            )));
        }

        info!("Upgrading credential store from v{installed} to v{target}");

        for step in STEPS
            .iter()
            .filter(|step| step.version > installed && step.version <= target)
        {
            debug!("Applying credential store schema step v{}", step.version);

            for statement in step.statements {
                sqlx::query(statement)
                    .execute(&mut *conn)
                    .await
                    .map_err(|e| {
                        DbError::migration(format!("step v{} failed: {}", step.version, e))
                    })?;
            }
        }

        // PRAGMA does not accept bound parameters; target is an integer we own.
        let pragma = format!("PRAGMA user_version = {target}");
        sqlx::query(&pragma)
            .execute(&mut *conn)
            .await
            .map_err(|e| DbError::migration(format!("failed to record v{}: {}", target, e)))?;

        info!("Credential store upgrade to v{target} complete");

        Ok(())
    }
}
