//! Database pool with split reader/writer connections in WAL mode.
//!
//! SQLite allows only one writer at a time. This module provides a `DatabasePool`
//! with a multi-connection reader pool for concurrent reads and a single-connection
//! writer pool for serialized writes.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Idempotent DDL for the single `barber` table.
const CREATE_BARBER_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS barber (id INTEGER PRIMARY KEY, name TEXT, address TEXT, phone TEXT)";

/// Split read/write pool for SQLite with WAL mode.
///
/// Every handler shares one of these. Writes queue on the single writer
/// connection instead of failing with SQLITE_BUSY, while reads run beside them.
///
/// - `reader`: Multi-connection pool (up to 8) for concurrent SELECT queries.
/// - `writer`: Single-connection pool for serialized INSERT/UPDATE/DELETE.
#[derive(Clone)]
pub struct DatabasePool {
    pub reader: SqlitePool,
    pub writer: SqlitePool,
}

impl DatabasePool {
    /// Create a new DatabasePool with split reader/writer connections.
    ///
    /// Ensures the `barber` table exists (on the writer) before the reader pool
    /// opens. Both pools use WAL journal mode and a 5-second busy timeout.
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let base_opts = SqliteConnectOptions::from_str(database_url)?
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(5))
            .create_if_missing(true);

        let read_opts = base_opts.clone().read_only(true);
        let write_opts = base_opts;

        let writer = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(write_opts)
            .await?;

        init_schema(&writer).await?;

        let reader = SqlitePoolOptions::new()
            .max_connections(8)
            .connect_with(read_opts)
            .await?;

        Ok(Self { reader, writer })
    }
}

/// Create the `barber` table if it does not exist yet.
///
/// Existing tables are left untouched, whatever their shape.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_BARBER_TABLE).execute(pool).await?;
    tracing::debug!("barber table ready");
    Ok(())
}

/// Build a connection URL for a database file, creating it if missing.
pub fn database_url(path: &str) -> String {
    format!("sqlite://{path}?mode=rwc")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pool_creates_barber_table() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = database_url(&db_path.display().to_string());

        let pool = DatabasePool::new(&url).await.unwrap();

        let columns: Vec<(String, String)> =
            sqlx::query_as("SELECT name, type FROM pragma_table_info('barber') ORDER BY cid")
                .fetch_all(&pool.reader)
                .await
                .unwrap();

        assert_eq!(
            columns,
            vec![
                ("id".to_string(), "INTEGER".to_string()),
                ("name".to_string(), "TEXT".to_string()),
                ("address".to_string(), "TEXT".to_string()),
                ("phone".to_string(), "TEXT".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_schema_init_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("again.db");
        let url = database_url(&db_path.display().to_string());

        let pool = DatabasePool::new(&url).await.unwrap();
        sqlx::query("INSERT INTO barber (name, address, phone) VALUES ('Joe', 'x', 'y')")
            .execute(&pool.writer)
            .await
            .unwrap();
        pool.reader.close().await;
        pool.writer.close().await;

        // Reopening must keep existing rows.
        let pool = DatabasePool::new(&url).await.unwrap();
        init_schema(&pool.writer).await.unwrap();

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM barber")
            .fetch_one(&pool.reader)
            .await
            .unwrap();
        assert_eq!(count.0, 1);
    }

    #[tokio::test]
    async fn test_pool_wal_mode() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test_wal.db");
        let url = database_url(&db_path.display().to_string());

        let pool = DatabasePool::new(&url).await.unwrap();

        let result: (String,) = sqlx::query_as("PRAGMA journal_mode")
            .fetch_one(&pool.writer)
            .await
            .unwrap();

        assert_eq!(result.0.to_lowercase(), "wal");
    }

    #[test]
    fn test_database_url() {
        assert_eq!(
            database_url("./barbershops.db"),
            "sqlite://./barbershops.db?mode=rwc"
        );
    }
}
