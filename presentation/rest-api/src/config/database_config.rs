use anyhow::Context;
use persistence::db::{DatabaseConfig, create_mysql_pool, run_migrations};
use sqlx::MySqlPool;

use super::env::{non_empty_var, var_or};

pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub migrations_path: String,
}

impl DatabaseSettings {
    /// Environment variables:
    /// - DATABASE_URL: MySQL connection string (required)
    /// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
    /// - MIGRATIONS_PATH: SQL migrations directory (default: "./migrations")
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            url: non_empty_var("DATABASE_URL").context("DATABASE_URL must be set")?,
            max_connections: var_or("DATABASE_MAX_CONNECTIONS", 5),
            migrations_path: var_or("MIGRATIONS_PATH", "./migrations".to_string()),
        })
    }
}

/// Opens the pool and brings the schema up to date.
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<MySqlPool> {
    let config =
        DatabaseConfig::new(settings.url.clone()).with_max_connections(settings.max_connections);
    let pool = create_mysql_pool(&config).await?;
    run_migrations(&pool, &settings.migrations_path).await?;
    Ok(pool)
}
