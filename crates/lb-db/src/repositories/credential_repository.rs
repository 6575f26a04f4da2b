//! Credential repository for the signed-in player's identity.
//!
//! ## Lookup semantics
//!
//! `lookup(field)` returns the value from the *first* record in that field's
//! index order (ties broken by `id`), not a record matched against anything.
//! The store is meant to hold a single identity, in which case this is
//! simply "the current user". With several records present the answer is
//! whichever one sorts first, e.g. `"alice"` before `"bob"`.
//!
//! Ordering uses SQLite's default BINARY collation, i.e. UTF-8 byte order.
//! This matches code point order, so it differs from UTF-16 code unit order
//! only when one value holds a character above U+FFFF and another holds
//! one in U+E000..=U+FFFF at the same position.
//!
//! Every operation opens its own handle through the [`StoreFactory`] and
//! runs in its own transaction. Nothing orders one call against another.

use crate::{DbError, Result as DbErrorResult, StoreFactory};

use lb_core::{ErrorLocation, IdentityField, IdentityRecord, NewIdentity};

use std::panic::Location;

use log::{error, info};
use sqlx::Row;

pub struct CredentialRepository {
    factory: StoreFactory,
}

impl CredentialRepository {
    pub fn new(factory: StoreFactory) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &StoreFactory {
        &self.factory
    }

    /// Insert a new identity and return its id.
    ///
    /// Never updates an existing record. A username that is already stored
    /// is rejected with `ConstraintViolation`. Failures are logged here and
    /// returned to the caller.
    pub async fn store(&self, identity: &NewIdentity) -> DbErrorResult<i64> {
        match self.insert(identity).await {
            Ok(id) => {
                info!("Identity for {} stored with id {}", identity.username, id);
                Ok(id)
            }
            Err(e) => {
                error!("Unable to store identity for {}: {}", identity.username, e);
                Err(e)
            }
        }
    }

    async fn insert(&self, identity: &NewIdentity) -> DbErrorResult<i64> {
        identity.validate()?;

        let mut handle = self.factory.open().await?;
        let mut tx = handle.begin().await?;

        let result = sqlx::query(
            r#"
                INSERT INTO user_store (username, access_token, refresh_token)
                VALUES (?, ?, ?)
            "#,
        )
        .bind(&identity.username)
        .bind(&identity.access_token)
        .bind(&identity.refresh_token)
        .execute(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                DbError::ConstraintViolation {
                    field: IdentityField::Username.as_str(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            _ => DbError::from(e),
        })?;

        tx.commit().await?;

        Ok(result.last_insert_rowid())
    }

    /// Remove every identity record. Returns how many were removed.
    pub async fn clear(&self) -> DbErrorResult<u64> {
        let result = self.delete_all().await;

        match &result {
            Ok(removed) => info!("Credential store cleared ({} records removed)", removed),
            Err(e) => error!("Error clearing credential store: {}", e),
        }

        result
    }

    async fn delete_all(&self) -> DbErrorResult<u64> {
        let mut handle = self.factory.open().await?;
        let mut tx = handle.begin().await?;

        let result = sqlx::query("DELETE FROM user_store")
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected())
    }

    /// Value of `field` from the first record in that field's index order,
    /// or `None` when the store is empty.
    pub async fn lookup(&self, field: IdentityField) -> DbErrorResult<Option<String>> {
        let mut handle = self.factory.open().await?;

        let sql = first_entry_query(field);
        let value = sqlx::query_scalar::<_, String>(&sql)
            .fetch_optional(handle.connection())
            .await?;

        Ok(value)
    }

    pub async fn username(&self) -> DbErrorResult<Option<String>> {
        self.lookup(IdentityField::Username).await
    }

    pub async fn access_token(&self) -> DbErrorResult<Option<String>> {
        self.lookup(IdentityField::AccessToken).await
    }

    pub async fn refresh_token(&self) -> DbErrorResult<Option<String>> {
        self.lookup(IdentityField::RefreshToken).await
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let mut handle = self.factory.open().await?;

        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM user_store")
            .fetch_one(handle.connection())
            .await?;

        Ok(count)
    }

    /// All records in id order
    pub async fn find_all(&self) -> DbErrorResult<Vec<IdentityRecord>> {
        let mut handle = self.factory.open().await?;

        let rows = sqlx::query(
            r#"
                SELECT id, username, access_token, refresh_token
                FROM user_store
                ORDER BY id
            "#,
        )
        .fetch_all(handle.connection())
        .await?;

        rows.into_iter()
            .map(|r| -> DbErrorResult<IdentityRecord> {
                Ok(IdentityRecord {
                    id: r.try_get("id")?,
                    username: r.try_get("username")?,
                    access_token: r.try_get("access_token")?,
                    refresh_token: r.try_get("refresh_token")?,
                })
            })
            .collect::<DbErrorResult<Vec<_>>>()
    }
}

// Column names come from the closed `IdentityField` set, never from input.
fn first_entry_query(field: IdentityField) -> String {
    let column = field.column();
    format!("SELECT {column} FROM user_store ORDER BY {column} ASC, id ASC LIMIT 1")
}
