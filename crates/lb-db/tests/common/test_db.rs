use lb_db::{CredentialRepository, StoreFactory};

use std::path::PathBuf;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;
use tempfile::TempDir;

/// Store path inside a fresh temp directory. Keep the `TempDir` alive for
/// as long as the store is used.
pub fn create_test_store_path() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("credentials.db");
    (temp_dir, path)
}

pub fn create_test_factory() -> (TempDir, StoreFactory) {
    let (temp_dir, path) = create_test_store_path();
    (temp_dir, StoreFactory::new(path))
}

pub fn create_test_repository() -> (TempDir, CredentialRepository) {
    let (temp_dir, factory) = create_test_factory();
    (temp_dir, CredentialRepository::new(factory))
}

/// Raw connection that bypasses the factory (no upgrade hook)
pub async fn open_raw(path: &PathBuf) -> SqliteConnection {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    SqliteConnection::connect_with(&options)
        .await
        .expect("Failed to open raw connection")
}

/// Names of all indices defined on the credential table
pub async fn index_names(conn: &mut SqliteConnection) -> Vec<String> {
    // Use sqlx::query_scalar (not the macro) to avoid offline mode issues in tests
    sqlx::query_scalar::<_, String>(
        "SELECT name FROM sqlite_master WHERE type = 'index' AND tbl_name = 'user_store' AND name LIKE 'idx_%' ORDER BY name",
    )
    .fetch_all(conn)
    .await
    .expect("Failed to list indices")
}

pub async fn user_version(conn: &mut SqliteConnection) -> i64 {
    sqlx::query_scalar::<_, i64>("PRAGMA user_version")
        .fetch_one(conn)
        .await
        .expect("Failed to read user_version")
}
