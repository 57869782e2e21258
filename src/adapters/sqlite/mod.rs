//! SQLite database adapters for the Rotaguard system.

pub mod connection;
pub mod migrations;
pub mod officer_repository;
pub mod rotation_repository;

pub use connection::{create_pool, create_test_pool, verify_connection, ConnectionError, PoolConfig};
pub use migrations::{all_embedded_migrations, Migration, MigrationError, Migrator};
pub use officer_repository::SqliteOfficerRepository;
pub use rotation_repository::SqliteRotationRepository;

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::domain::errors::{RotaError, RotaResult};

/// Parse a UUID string from a SQLite row field.
pub fn parse_uuid(s: &str) -> RotaResult<Uuid> {
    Uuid::parse_str(s).map_err(|e| RotaError::SerializationError(e.to_string()))
}

/// Parse a YYYY-MM-DD date string from a SQLite row field.
pub fn parse_date(s: &str) -> RotaResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| RotaError::SerializationError(format!("date '{}': {}", s, e)))
}

/// Parse an RFC3339 datetime string from a SQLite row field.
pub fn parse_datetime(s: &str) -> RotaResult<DateTime<Utc>> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|e| RotaError::SerializationError(e.to_string()))
        .map(|dt| dt.with_timezone(&Utc))
}

/// Date column format. Plain dates sort lexicographically in this form,
/// which the range queries rely on.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// True when the error is the store rejecting a duplicate key.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Connection error: {0}")]
    Connection(#[from] ConnectionError),
    #[error("Migration error: {0}")]
    Migration(#[from] MigrationError),
    #[error("Query error: {0}")]
    Query(#[from] sqlx::Error),
}

pub async fn initialize_database(database_url: &str) -> Result<SqlitePool, DatabaseError> {
    let pool = create_pool(database_url, None).await?;
    let migrator = Migrator::new(pool.clone());
    migrator.run_embedded_migrations(all_embedded_migrations()).await?;
    Ok(pool)
}

/// Create an in-memory test pool with all migrations applied.
pub async fn create_migrated_test_pool() -> Result<SqlitePool, DatabaseError> {
    let pool = create_test_pool().await?;
    let migrator = Migrator::new(pool.clone());
    migrator.run_embedded_migrations(all_embedded_migrations()).await?;
    Ok(pool)
}
