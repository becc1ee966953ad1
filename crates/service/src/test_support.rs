#![cfg(test)]
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};

/// Fresh migrated database for one test: a private in-memory SQLite database,
/// or the server named by `TEST_DATABASE_URL`.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => {
            let mut cfg = DatabaseConfig { url, ..Default::default() };
            cfg.max_connections = cfg.max_connections.max(10);
            cfg.min_connections = cfg.min_connections.min(1);
            cfg.acquire_timeout = std::time::Duration::from_secs(10);
            cfg
        }
        Err(_) => DatabaseConfig::sqlite_memory(),
    };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
