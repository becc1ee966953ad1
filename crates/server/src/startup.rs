use std::{env, net::SocketAddr, path::Path};

use axum::Router;
use common::utils::logging::{init_logging, LogFormat};
use dotenvy::dotenv;
use migration::MigratorTrait;
use models::db::{connect_with_config, test_connection, DatabaseConfig};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

/// Bind address and database settings resolved at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub addr: SocketAddr,
    pub database: DatabaseConfig,
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load settings from the config file when present, else from env vars.
/// A config file that exists but does not validate is an error.
pub fn load_settings() -> Result<Settings, StartupError> {
    let path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if Path::new(&path).exists() {
        let mut cfg = configs::load_from_file(&path)
            .map_err(|e| StartupError::InvalidConfig(format!("{path}: {e}")))?;
        cfg.normalize_and_validate()
            .map_err(|e| StartupError::InvalidConfig(format!("{path}: {e}")))?;
        let addr = format!("{}:{}", cfg.server.host, cfg.server.port)
            .parse()
            .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))?;
        return Ok(Settings { addr, database: DatabaseConfig::from(&cfg.database) });
    }

    warn!(%path, "config file not found; falling back to environment");
    let addr = env_bind_addr(env::var("SERVER_HOST").ok(), env::var("SERVER_PORT").ok())?;
    Ok(Settings { addr, database: DatabaseConfig::from_env() })
}

/// `SERVER_HOST`/`SERVER_PORT` with the same defaults as the `[server]` section.
fn env_bind_addr(host: Option<String>, port: Option<String>) -> Result<SocketAddr, StartupError> {
    let defaults = configs::ServerConfig::default();
    let host = host.unwrap_or(defaults.host);
    let port = port.and_then(|p| p.parse::<u16>().ok()).unwrap_or(defaults.port);
    format!("{}:{}", host, port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("SERVER_HOST/SERVER_PORT: {e}")))
}

/// Connect the pool, check it and bring the schema up to date.
pub async fn connect_and_migrate(cfg: &DatabaseConfig) -> Result<DatabaseConnection, StartupError> {
    let db = connect_with_config(cfg)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    test_connection(&db)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Database(format!("migrate up: {e}")))?;
    info!("migrations applied");
    Ok(db)
}

/// The complete application for a database connection.
pub fn app(db: DatabaseConnection) -> Router {
    routes::build_router(AppState::from_db(db), build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging(LogFormat::from_env());

    let settings = load_settings()?;
    let db = connect_and_migrate(&settings.database).await?;
    let app = app(db);

    info!(addr = %settings.addr, "starting movie server");
    let listener = tokio::net::TcpListener::bind(settings.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
