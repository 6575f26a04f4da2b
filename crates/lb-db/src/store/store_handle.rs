use crate::Result as DbErrorResult;

use sqlx::{Connection, Sqlite, SqliteConnection, Transaction};

/// An open connection to the credential store at a known schema version.
///
/// Each repository operation opens its own handle and drops it when done;
/// handles are never shared between operations.
pub struct StoreHandle {
    conn: SqliteConnection,
    version: i64,
}

impl StoreHandle {
    pub(crate) fn new(conn: SqliteConnection, version: i64) -> Self {
        Self { conn, version }
    }

    /// Schema version the store was at once this handle opened
    pub fn version(&self) -> i64 {
        self.version
    }

    pub fn connection(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }

    /// Start a transaction; it rolls back unless committed.
    pub async fn begin(&mut self) -> DbErrorResult<Transaction<'_, Sqlite>> {
        Ok(self.conn.begin().await?)
    }

    pub async fn close(self) -> DbErrorResult<()> {
        self.conn.close().await?;
        Ok(())
    }
}
