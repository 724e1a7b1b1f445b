//! Storage Gateway
//!
//! Scoped access to the SQLite store and schema bootstrap.
//!
//! Connections are checked out per unit of work and go back to the pool
//! when the handle is dropped. Writes run in a transaction that must be
//! committed explicitly; a transaction dropped without commit is rolled back.

use std::str::FromStr;

use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};

use super::config::DatabaseConfig;
use crate::shared::errors::RepositoryError;

/// Versioned schema, embedded at compile time
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Entry point to the relational store
#[derive(Debug, Clone)]
pub struct StorageGateway {
    pool: SqlitePool,
}

impl StorageGateway {
    /// Open the store described by `config`, creating the file if needed
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, RepositoryError> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            // An in-memory database lives only as long as its connection
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Apply pending schema migrations.
    ///
    /// Applied versions are recorded in `_sqlx_migrations`, so calling this
    /// on an up-to-date store is a no-op.
    pub async fn initialize(&self) -> Result<(), RepositoryError> {
        MIGRATOR.run(&self.pool).await?;
        tracing::info!("Database schema is up to date");
        Ok(())
    }

    /// Check out a connection for reads
    pub async fn acquire(&self) -> Result<PoolConnection<Sqlite>, RepositoryError> {
        Ok(self.pool.acquire().await?)
    }

    /// Start a write transaction
    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>, RepositoryError> {
        Ok(self.pool.begin().await?)
    }

    /// Underlying pool, for diagnostics and tests
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_config() -> DatabaseConfig {
        DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        }
    }

    async fn table_names(gateway: &StorageGateway) -> Vec<String> {
        let mut conn = gateway.acquire().await.unwrap();
        sqlx::query_scalar::<_, String>(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' AND name NOT LIKE '_sqlx%' ORDER BY name",
        )
        .fetch_all(&mut *conn)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_initialize_creates_tables() {
        let gateway = StorageGateway::connect(&memory_config()).await.unwrap();
        gateway.initialize().await.unwrap();

        assert_eq!(
            table_names(&gateway).await,
            vec!["Appointments", "Doctors", "Patients"]
        );
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let gateway = StorageGateway::connect(&memory_config()).await.unwrap();
        gateway.initialize().await.unwrap();
        gateway.initialize().await.unwrap();

        assert_eq!(table_names(&gateway).await.len(), 3);
    }

    #[tokio::test]
    async fn test_dropped_transaction_rolls_back() {
        let gateway = StorageGateway::connect(&memory_config()).await.unwrap();
        gateway.initialize().await.unwrap();

        {
            let mut tx = gateway.begin().await.unwrap();
            sqlx::query(
                "INSERT INTO Doctors (Name, Specialty, ContactInfo, Email) VALUES ('a', 'b', 'c', 'd')",
            )
            .execute(&mut *tx)
            .await
            .unwrap();
        }

        let mut conn = gateway.acquire().await.unwrap();
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Doctors")
            .fetch_one(&mut *conn)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_foreign_keys_are_enforced() {
        let gateway = StorageGateway::connect(&memory_config()).await.unwrap();
        gateway.initialize().await.unwrap();

        let mut conn = gateway.acquire().await.unwrap();
        let err = sqlx::query(
            "INSERT INTO Appointments (PatientID, DoctorID, AppointmentDate, Notes, Status) VALUES (1, 1, '2024-06-01', '', 'scheduled')",
        )
        .execute(&mut *conn)
        .await
        .unwrap_err();

        assert!(matches!(
            RepositoryError::from_statement(err),
            RepositoryError::Constraint(_)
        ));
    }
}
