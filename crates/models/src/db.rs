use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::time::Duration;
use tracing::info;

use crate::errors::ModelError;

pub const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Pool settings handed to SeaORM.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    pub sqlx_logging: bool,
}

/// Pool defaults from `configs`, with no URL.
impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::from(&configs::DatabaseConfig::default())
    }
}

impl From<&configs::DatabaseConfig> for DatabaseConfig {
    fn from(c: &configs::DatabaseConfig) -> Self {
        Self {
            url: c.url.clone(),
            max_connections: c.max_connections,
            min_connections: c.min_connections,
            connect_timeout: Duration::from_secs(c.connect_timeout_secs),
            acquire_timeout: Duration::from_secs(c.acquire_timeout_secs),
            idle_timeout: Duration::from_secs(c.idle_timeout_secs),
            max_lifetime: Duration::from_secs(c.max_lifetime_secs),
            sqlx_logging: c.sqlx_logging,
        }
    }
}

impl DatabaseConfig {
    /// Throwaway SQLite database for tests and local runs.
    /// The shared in-memory database lives only while a connection holds it open, so one
    /// connection is kept pinned for the pool's lifetime.
    pub fn in_memory() -> Self {
        Self {
            url: IN_MEMORY_URL.to_string(),
            max_connections: 1,
            min_connections: 1,
            ..Self::default()
        }
    }

    pub fn connect_options(&self) -> ConnectOptions {
        let mut opts = ConnectOptions::new(self.url.clone());
        opts.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(self.connect_timeout)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .sqlx_logging(self.sqlx_logging);
        opts
    }
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> Result<DatabaseConnection, ModelError> {
    let db = Database::connect(cfg.connect_options())
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    info!(
        backend = ?db.get_database_backend(),
        max_connections = cfg.max_connections,
        min_connections = cfg.min_connections,
        "database connected"
    );
    Ok(db)
}

/// Round-trips `SELECT 1` on the given connection.
pub async fn test_connection(db: &DatabaseConnection) -> Result<(), ModelError> {
    let stmt = Statement::from_string(db.get_database_backend(), "SELECT 1 AS ok".to_string());
    db.query_one(stmt)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?
        .ok_or_else(|| ModelError::Db("SELECT 1 returned no row".into()))?;
    Ok(())
}
