//! Database Module
//!
//! Owns the SQLite handle and the embedded migrations. The handle is opened
//! once by the process entry point, injected into [`crate::ServerState`],
//! and closed after the HTTP server has shut down.

pub mod repository;

use shared::AppError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Database service: owns the shared SQLite handle
///
/// Cloning is cheap: every clone shares the same pool, so repeated
/// [`DbService::pool`] calls always hand out the same connection.
#[derive(Clone, Debug)]
pub struct DbService {
    pool: SqlitePool,
    path: PathBuf,
}

impl DbService {
    /// Open (creating if missing) the database file and apply migrations
    pub async fn open(db_path: impl AsRef<Path>, max_connections: u32) -> Result<Self, AppError> {
        let path = db_path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::database(format!(
                    "Failed to create database directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        // WAL, foreign keys, normal sync
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true)
            // 写冲突时等待 5s 而非立即失败
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(
            path = %path.display(),
            max_connections,
            "Database connection established (SQLite WAL, busy_timeout=5000ms)"
        );

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply migrations: {e}")))?;
        tracing::info!("Database migrations applied");

        Ok(Self { pool, path })
    }

    /// The shared handle
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    /// Round-trip a trivial query, returning the latency
    pub async fn ping(&self) -> Result<Duration, sqlx::Error> {
        let start = std::time::Instant::now();
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(start.elapsed())
    }

    /// Release the handle
    ///
    /// Waits for checked-out connections to be returned. Clones observe the
    /// closed pool; a later [`DbService::open`] yields a fresh connection.
    pub async fn close(&self) {
        if !self.pool.is_closed() {
            self.pool.close().await;
            tracing::info!(path = %self.path.display(), "Database connection closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_creates_file_and_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("pizza.db");

        let db = DbService::open(&path, 1).await.unwrap();
        assert!(path.exists());
        assert!(db.ping().await.is_ok());
        db.close().await;
    }

    #[tokio::test]
    async fn test_clones_share_the_same_connection() {
        let dir = tempfile::tempdir().unwrap();
        let db = DbService::open(dir.path().join("pizza.db"), 1).await.unwrap();

        // TEMP tables are private to one connection
        sqlx::query("CREATE TEMP TABLE scratch (x INTEGER)")
            .execute(db.pool())
            .await
            .unwrap();

        let other = db.clone();
        let visible: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM temp.scratch")
            .fetch_one(other.pool())
            .await
            .unwrap();
        assert_eq!(visible, 0);

        db.close().await;
        assert!(other.is_closed());
    }

    #[tokio::test]
    async fn test_close_then_reopen_yields_fresh_connection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pizza.db");

        let db = DbService::open(&path, 1).await.unwrap();
        sqlx::query("CREATE TEMP TABLE scratch (x INTEGER)")
            .execute(db.pool())
            .await
            .unwrap();
        sqlx::query("INSERT INTO menu_item (name, price, category) VALUES ('Test', 1.0, 'pizza')")
            .execute(db.pool())
            .await
            .unwrap();
        db.close().await;
        assert!(db.ping().await.is_err());

        let reopened = DbService::open(&path, 1).await.unwrap();
        assert!(!reopened.is_closed());

        // Connection-scoped state is gone, committed rows remain
        let temp = sqlx::query("SELECT COUNT(*) FROM temp.scratch")
            .execute(reopened.pool())
            .await;
        assert!(temp.is_err());

        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM menu_item WHERE name = 'Test'")
                .fetch_one(reopened.pool())
                .await
                .unwrap();
        assert_eq!(count, 1);
        reopened.close().await;
    }

    #[tokio::test]
    async fn test_open_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let err = DbService::open(blocker.join("pizza.db"), 1)
            .await
            .unwrap_err();
        assert_eq!(err.code, shared::ErrorCode::DatabaseError);
    }
}
