use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// Recycle interval used for in-memory databases. Long enough that the
/// single connection outlives the process.
const PINNED_CONNECTION_LIFETIME: Duration = Duration::from_secs(10 * 365 * 24 * 60 * 60);

/// Pool settings resolved from `configs::DatabaseConfig`.
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

impl DatabaseConfig {
    /// A private in-memory SQLite database, alive for as long as the pool.
    pub fn in_memory() -> Self {
        let mut cfg = configs::DatabaseConfig::default();
        cfg.url = configs::MEMORY_DATABASE_URL.to_string();
        Self::from(&cfg)
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
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

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.url.clone());
    // An in-memory database is freed when its last connection closes, so the
    // pool holds exactly one connection and never recycles it.
    let (max, min, idle, lifetime) = if cfg.is_in_memory() {
        (1, 1, PINNED_CONNECTION_LIFETIME, PINNED_CONNECTION_LIFETIME)
    } else {
        (cfg.max_connections, cfg.min_connections, cfg.idle_timeout, cfg.max_lifetime)
    };
    opts.max_connections(max)
        .min_connections(min)
        .connect_timeout(cfg.connect_timeout)
        .acquire_timeout(cfg.acquire_timeout)
        .idle_timeout(idle)
        .max_lifetime(lifetime)
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opts).await?;
    info!(url = %cfg.url, max_connections = max, "database connected");
    Ok(db)
}
