use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use jiff::Timestamp;
use microurl_core::repository::{MicroRecord, ReadRepository, Repository, Result};
use microurl_core::{Micro, StorageError};
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteRow,
    SqliteSynchronous,
};
use sqlx::Row;
use tracing::debug;

const SCHEMA: &str = include_str!("../ddl/sqlite/micro_records.sql");

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite implementation of the repository contract.
///
/// Every record is a single row in `micro_records`, keyed by `micro`.
/// Inserts are a single `INSERT .. ON CONFLICT DO NOTHING` statement, so
/// the uniqueness check and the write happen inside one SQLite write
/// transaction and a failed insert leaves nothing behind.
#[derive(Debug, Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    /// Creates a repository from an existing SQLite connection pool.
    ///
    /// The caller is responsible for the schema; see [`Self::migrate`].
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens (creating it if missing) the database at `database_url` and
    /// ensures the schema exists.
    ///
    /// Commits are fsync'd before they return (`synchronous = FULL`).
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(map_sqlx_error)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Full)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(map_sqlx_error)?;

        let repository = Self::new(pool);
        repository.migrate().await?;
        debug!(database_url, "sqlite repository ready");
        Ok(repository)
    }

    /// Opens a private in-memory database.
    ///
    /// The pool is pinned to one connection that never expires, since every
    /// SQLite connection to `:memory:` sees its own empty database.
    pub async fn in_memory() -> Result<Self> {
        let options =
            SqliteConnectOptions::from_str("sqlite::memory:").map_err(map_sqlx_error)?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await
            .map_err(map_sqlx_error)?;

        let repository = Self::new(pool);
        repository.migrate().await?;
        Ok(repository)
    }

    /// Creates the `micro_records` table if it does not exist yet.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    /// Closes every pooled connection, waiting for in-flight queries.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn parse_created_at(micros: i64) -> Result<Timestamp> {
    Timestamp::from_microsecond(micros).map_err(|e| {
        StorageError::InvalidData(format!("invalid created_at timestamp '{}': {e}", micros))
    })
}

fn row_to_record(row: &SqliteRow) -> Result<MicroRecord> {
    let micro: String = row.try_get("micro").map_err(map_sqlx_error)?;
    let url: String = row.try_get("url").map_err(map_sqlx_error)?;
    let created_at: i64 = row.try_get("created_at").map_err(map_sqlx_error)?;

    Ok(MicroRecord {
        micro: Micro::new_unchecked(micro),
        url,
        created_at: parse_created_at(created_at)?,
    })
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Configuration(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl ReadRepository for SqliteRepository {
    async fn get(&self, micro: &Micro) -> Result<Option<MicroRecord>> {
        let row = sqlx::query(
            r#"
            SELECT micro, url, created_at
            FROM micro_records
            WHERE micro = ?
            LIMIT 1
            "#,
        )
        .bind(micro.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(row_to_record).transpose()
    }

    async fn list(&self) -> Result<Vec<MicroRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT micro, url, created_at
            FROM micro_records
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_record).collect()
    }
}

#[async_trait]
impl Repository for SqliteRepository {
    async fn insert(&self, record: MicroRecord) -> Result<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO micro_records (micro, url, created_at)
            VALUES (?, ?, ?)
            ON CONFLICT (micro) DO NOTHING
            "#,
        )
        .bind(record.micro.as_str())
        .bind(record.url.as_str())
        .bind(record.created_at.as_microsecond())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(StorageError::DuplicateKey(record.micro.to_string()));
        }

        Ok(())
    }
}
